use std::fmt;

/// Closed catalog of effect selectors.
///
/// Numeric ids (see [`EffectKind::from_id`]) match the catalog order below;
/// the mapping is part of the wire contract with display harnesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    NoFilter,
    EdgeLeft,
    EdgeRight,
    EdgeDown,
    EdgeUp,
    EdgeFourDir,
    EdgeFourDirEqualized,
    Emboss,
    GradientGray,
    GradientGraySobel,
    GradientColor,
    Comic,
    Glass,
}

impl EffectKind {
    pub const ALL: [EffectKind; 13] = [
        EffectKind::NoFilter,
        EffectKind::EdgeLeft,
        EffectKind::EdgeRight,
        EffectKind::EdgeDown,
        EffectKind::EdgeUp,
        EffectKind::EdgeFourDir,
        EffectKind::EdgeFourDirEqualized,
        EffectKind::Emboss,
        EffectKind::GradientGray,
        EffectKind::GradientGraySobel,
        EffectKind::GradientColor,
        EffectKind::Comic,
        EffectKind::Glass,
    ];

    /// Maps a numeric selector to an effect.
    ///
    /// Unknown ids fall back to [`EffectKind::NoFilter`] rather than failing;
    /// the caller always needs some output frame.
    pub fn from_id(id: u32) -> Self {
        match Self::ALL.get(id as usize) {
            Some(&kind) => kind,
            None => {
                log::warn!("unknown effect id {id}, falling back to NoFilter");
                EffectKind::NoFilter
            }
        }
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Stable lowercase name, used for CLI selection and display.
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::NoFilter => "none",
            EffectKind::EdgeLeft => "edge-left",
            EffectKind::EdgeRight => "edge-right",
            EffectKind::EdgeDown => "edge-down",
            EffectKind::EdgeUp => "edge-up",
            EffectKind::EdgeFourDir => "edge-four",
            EffectKind::EdgeFourDirEqualized => "edge-four-eq",
            EffectKind::Emboss => "emboss",
            EffectKind::GradientGray => "gradient",
            EffectKind::GradientGraySobel => "gradient-sobel",
            EffectKind::GradientColor => "gradient-color",
            EffectKind::Comic => "comic",
            EffectKind::Glass => "glass",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|k| k.name() == name).copied()
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

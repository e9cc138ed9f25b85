use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;

use framefx_core::effects::dispatcher;
use framefx_core::effects::effect_kind::EffectKind;
use framefx_core::shared::frame::Frame;

/// Apply a pixel-transform effect to a still image.
#[derive(Parser)]
#[command(name = "framefx")]
struct Cli {
    /// Input image file.
    input: Option<PathBuf>,

    /// Output image file.
    output: Option<PathBuf>,

    /// Effect name (see --list).
    #[arg(long, default_value = "none")]
    effect: String,

    /// Numeric effect selector; unknown ids fall back to the identity copy.
    #[arg(long, conflicts_with = "effect")]
    effect_id: Option<u32>,

    /// List available effects and exit.
    #[arg(long)]
    list: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.list {
        for kind in EffectKind::ALL {
            println!("{:2}  {}", kind.id(), kind.name());
        }
        return Ok(());
    }

    let input = cli.input.ok_or("missing input image (see --help)")?;
    let output = cli.output.ok_or("missing output image (see --help)")?;

    let kind = match cli.effect_id {
        Some(id) => EffectKind::from_id(id),
        None => EffectKind::from_name(&cli.effect)
            .ok_or_else(|| format!("unknown effect '{}' (try --list)", cli.effect))?,
    };

    let img = image::open(&input)?.to_rgb8();
    let (width, height) = img.dimensions();
    let frame = Frame::new(img.into_raw(), width, height, 3);

    let started = Instant::now();
    let result = dispatcher::apply(&frame, kind)?;
    log::info!(
        "{kind} on {width}x{height} took {:.1}ms",
        started.elapsed().as_secs_f64() * 1000.0
    );

    save_frame(&result, &output)?;
    Ok(())
}

fn save_frame(frame: &Frame, path: &Path) -> Result<(), Box<dyn Error>> {
    let data = frame.data().to_vec();
    match frame.channels() {
        1 => image::GrayImage::from_raw(frame.width(), frame.height(), data)
            .ok_or("frame buffer does not match its dimensions")?
            .save(path)?,
        _ => image::RgbImage::from_raw(frame.width(), frame.height(), data)
            .ok_or("frame buffer does not match its dimensions")?
            .save(path)?,
    }
    Ok(())
}

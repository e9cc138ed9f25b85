pub mod comic;
mod convolution;
pub mod dispatcher;
pub mod edge;
pub mod effect_kind;
pub mod emboss;
pub mod glass;
pub mod gradient;
mod histogram;

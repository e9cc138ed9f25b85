//! Pixel-transform effect engine.
//!
//! The engine is synchronous, single-threaded, and stateless between calls:
//! every transform takes a read-only [`shared::frame::Frame`] and produces a
//! freshly allocated output of the same width and height. Image decoding,
//! video pumping, and display are the caller's responsibility; the only entry
//! point a harness needs is [`effects::dispatcher::apply`].

pub mod effects;
pub mod shared;

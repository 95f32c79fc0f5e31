//! Procedural text-art animation: parametric fields quantized into density
//! glyphs, a progressively revealed message, and a pointer-driven ripple.

pub mod engine;
pub mod menubar;
pub mod player;
pub mod renderer;
pub mod types;

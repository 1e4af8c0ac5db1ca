//! Framebuffer rendering for the three screens.
//!
//! Everything is drawn into a row-major `0xRRGGBB` buffer that the frame
//! loop hands to `minifb` once per frame; the game never reads pixels
//! back. Text comes from an embedded 5×7 glyph table drawn at an integer
//! scale (no font assets, matching the all-procedural aesthetic).

pub mod render;

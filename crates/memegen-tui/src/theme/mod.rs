//! Centralized theme system.
//!
//! - `palette` - Light and dark color sets
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::Palette;

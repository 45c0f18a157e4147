//! memegen Library
//!
//! A terminal client that turns any webpage into a handful of memes.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use memegen_tui::run;

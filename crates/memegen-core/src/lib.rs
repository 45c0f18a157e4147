//! # memegen-core - Core Domain Types
//!
//! Foundation crate for memegen. Provides domain types, error handling,
//! logging setup, and the input validation rules shared by every frontend.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AppPhase`] - Application lifecycle phase (Running, Quitting)
//! - [`GenerationStatus`] - Derived status of the current generation attempt
//! - [`FormFocus`] - Which form region receives keystrokes
//!
//! ### Validation (`validation`)
//! - [`validate_url()`] - Non-empty trimmed URL check
//! - [`validate_count()`] - Inclusive `[MIN_MEMES, MAX_MEMES]` bound check
//! - [`clamp_count()`], [`parse_count()`] - Count input normalisation
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use memegen_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;
pub mod validation;

pub use error::{Error, Result, ResultExt};
pub use types::{AppPhase, FormFocus, GenerationStatus};
pub use validation::{
    clamp_count, count_error_message, parse_count, validate_count, validate_url, MAX_MEMES,
    MIN_MEMES,
};

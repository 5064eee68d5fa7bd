//! # Twine Advisory
//!
//! Temperature advisory classification for
//! [Twine](https://github.com/isentropic-dev/twine), plus a few small
//! supporting utilities.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models and binaries.
//!
//! ## Quick start
//!
//! ```
//! use twine_advisory::models::thermal::advisory::{Advisory, Measurement, classify};
//!
//! // 10°C is 50°F, which is below a 60°F threshold.
//! let advisory = classify(Measurement::celsius(10.0), 60.0);
//! assert_eq!(advisory, Advisory::ColdAdvisory);
//! ```
//!
//! Note: Only utilities in [`support`] and the model modules are part of the
//! public API. Model-specific `core` modules remain private.

pub mod models;
pub mod support;

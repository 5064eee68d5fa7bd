//! Heat and cold advisories from a single temperature reading.
//!
//! This module provides [`twine_core::Model`] implementations that classify a
//! measurement as an [`Advisory`]. The computational core is in the internal
//! `core` module; its public types and functions are re-exported here.
//!
//! Two adapters share that core:
//!
//! - [`TemperatureAdvisory`] takes a typed [`Measurement`] and cannot fail.
//! - [`TaggedTemperatureAdvisory`] takes a [`TaggedMeasurement`] whose unit is
//!   a textual tag, and fails with [`AdvisoryError`] on unknown tags.
//!
//! ```
//! use twine_core::Model;
//! use twine_advisory::models::thermal::advisory::{
//!     Advisory, AdvisoryConfig, Measurement, TemperatureAdvisory,
//! };
//!
//! let model = TemperatureAdvisory::new(AdvisoryConfig::with_threshold(212.0));
//! let advisory = model.call(&Measurement::celsius(100.0)).unwrap();
//! assert_eq!(advisory, Advisory::HeatAlert);
//! ```

mod core;

pub use self::core::{
    Advisory, AdvisoryConfig, AdvisoryError, DEFAULT_THRESHOLD, Measurement, classify,
    classify_default, classify_with, temperature_advisory,
};

use std::convert::Infallible;

use twine_core::Model;

/// Classifies typed measurements against a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureAdvisory {
    config: AdvisoryConfig,
}

impl TemperatureAdvisory {
    #[must_use]
    pub fn new(config: AdvisoryConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AdvisoryConfig {
        &self.config
    }
}

impl Model for TemperatureAdvisory {
    type Input = Measurement;
    type Output = Advisory;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(classify_with(*input, &self.config))
    }
}

/// A temperature value with an unvalidated unit tag, such as `"C"` or `"F"`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedMeasurement {
    pub value: f64,
    pub unit: String,
}

impl TaggedMeasurement {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Classifies measurements whose unit arrives as text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaggedTemperatureAdvisory {
    config: AdvisoryConfig,
}

impl TaggedTemperatureAdvisory {
    #[must_use]
    pub fn new(config: AdvisoryConfig) -> Self {
        Self { config }
    }
}

impl Model for TaggedTemperatureAdvisory {
    type Input = TaggedMeasurement;
    type Output = Advisory;
    type Error = AdvisoryError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        temperature_advisory(input.value, &input.unit, self.config.threshold)
    }
}

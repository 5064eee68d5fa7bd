/// Threshold used when none is given.
pub const DEFAULT_THRESHOLD: f64 = 30.0;

/// Classification settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryConfig {
    /// Cutoff compared against the converted value.
    ///
    /// It is expressed in the scale opposite to the measurement's, so a
    /// Celsius reading is checked against a Fahrenheit threshold and vice
    /// versa. No unit inference is done on this value.
    pub threshold: f64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AdvisoryConfig {
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }
}

//! Threshold classification of a converted temperature.
//!
//! A measurement is first expressed in the opposite scale (Celsius becomes
//! Fahrenheit and vice versa), then compared against a threshold given in
//! that opposite scale. Values strictly below the threshold produce a cold
//! advisory; anything else, including a value exactly at the threshold,
//! produces a heat alert.

mod config;
mod error;
mod measurement;

pub use config::{AdvisoryConfig, DEFAULT_THRESHOLD};
pub use error::AdvisoryError;
pub use measurement::Measurement;

use std::fmt;

use crate::support::units::TemperatureUnit;

/// Outcome of classifying a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// The converted value is below the threshold.
    ColdAdvisory,
    /// The converted value is at or above the threshold.
    HeatAlert,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ColdAdvisory => "Cold advisory",
            Self::HeatAlert => "Heat alert",
        })
    }
}

/// Classifies `measurement` against `threshold`.
///
/// The threshold must already be in the scale opposite to the measurement's.
/// A `NaN` value or threshold never compares below, so it yields
/// [`Advisory::HeatAlert`].
#[must_use]
pub fn classify(measurement: Measurement, threshold: f64) -> Advisory {
    if measurement.converted() < threshold {
        Advisory::ColdAdvisory
    } else {
        Advisory::HeatAlert
    }
}

/// Classifies `measurement` using the threshold from `config`.
#[must_use]
pub fn classify_with(measurement: Measurement, config: &AdvisoryConfig) -> Advisory {
    classify(measurement, config.threshold)
}

/// Classifies a Celsius value against the [default threshold](DEFAULT_THRESHOLD).
#[must_use]
pub fn classify_default(temp: f64) -> Advisory {
    classify_with(
        Measurement::new(temp, TemperatureUnit::default()),
        &AdvisoryConfig::default(),
    )
}

/// Classifies a value whose unit is given as a textual tag.
///
/// # Errors
///
/// Returns [`AdvisoryError::InvalidUnit`] if `unit` is not a recognized
/// [`TemperatureUnit`] tag.
pub fn temperature_advisory(
    temp: f64,
    unit: &str,
    threshold: f64,
) -> Result<Advisory, AdvisoryError> {
    let unit = unit.parse::<TemperatureUnit>()?;
    Ok(classify(Measurement::new(temp, unit), threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::Advisory::{ColdAdvisory, HeatAlert};

    fn check(temp: f64, unit: &str, threshold: f64) -> Advisory {
        temperature_advisory(temp, unit, threshold).expect("unit tag should be valid")
    }

    #[test]
    fn celsius_to_fahrenheit_conversion_accuracy() {
        assert_eq!(check(0.0, "C", 32.0), HeatAlert);
        assert_eq!(check(100.0, "C", 212.0), HeatAlert);
        assert_eq!(check(-40.0, "C", -40.0), HeatAlert);
    }

    #[test]
    fn fahrenheit_to_celsius_conversion_accuracy() {
        assert_eq!(check(32.0, "F", 0.0), HeatAlert);
        assert_eq!(check(212.0, "F", 100.0), HeatAlert);
        assert_eq!(check(-40.0, "F", -40.0), HeatAlert);
    }

    #[test]
    fn celsius_input() {
        // 10°C = 50°F and -10°C = 14°F.
        assert_eq!(check(10.0, "C", 60.0), ColdAdvisory);
        assert_eq!(check(-10.0, "C", 32.0), ColdAdvisory);

        // 30°C = 86°F and 40°C = 104°F.
        assert_eq!(check(30.0, "C", 80.0), HeatAlert);
        assert_eq!(check(40.0, "C", 100.0), HeatAlert);
    }

    #[test]
    fn fahrenheit_input() {
        // 50°F = 10°C and 32°F = 0°C.
        assert_eq!(check(50.0, "F", 15.0), ColdAdvisory);
        assert_eq!(check(32.0, "F", 5.0), ColdAdvisory);

        // 86°F = 30°C and 104°F = 40°C.
        assert_eq!(check(86.0, "F", 25.0), HeatAlert);
        assert_eq!(check(104.0, "F", 35.0), HeatAlert);
    }

    #[test]
    fn exactly_at_threshold_is_a_heat_alert() {
        assert_eq!(classify(Measurement::celsius(0.0), 32.0), HeatAlert);
        assert_eq!(classify(Measurement::fahrenheit(68.0), 20.0), HeatAlert);

        for m in [
            Measurement::celsius(-40.0),
            Measurement::celsius(37.5),
            Measurement::fahrenheit(451.0),
        ] {
            assert_eq!(classify(m, m.converted()), HeatAlert);
        }
    }

    #[test]
    fn defaults() {
        // 25°C = 77°F.
        let default_unit = Measurement::new(25.0, TemperatureUnit::default());
        assert_eq!(classify(default_unit, 80.0), ColdAdvisory);

        // Against 30°F: 10°C = 50°F, -1°C = 30.2°F, -2°C = 28.4°F.
        assert_eq!(classify_default(10.0), HeatAlert);
        assert_eq!(classify_default(-1.0), HeatAlert);
        assert_eq!(classify_default(-2.0), ColdAdvisory);

        for temp in [-100.0, -2.0, -1.1, -1.0, 0.0, 25.0] {
            assert_eq!(
                classify_default(temp),
                classify(Measurement::celsius(temp), 30.0)
            );
        }
    }

    #[test]
    fn config_threshold() {
        let config = AdvisoryConfig::with_threshold(78.0);
        assert_eq!(
            classify_with(Measurement::celsius(25.5), &config),
            ColdAdvisory
        );
        assert_eq!(
            classify_with(Measurement::celsius(26.0), &config),
            HeatAlert
        );
        assert_eq!(AdvisoryConfig::default().threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn invalid_units() {
        for tag in ["K", "X", "", "c", "kelvin"] {
            let err = temperature_advisory(25.0, tag, 80.0).unwrap_err();
            let AdvisoryError::InvalidUnit(inner) = err;
            assert_eq!(inner.unit, tag);
        }
    }

    #[test]
    fn decimal_temperatures() {
        // 25.5°C = 77.9°F.
        assert_eq!(check(25.5, "C", 78.0), ColdAdvisory);
        // 98.6°F = 37°C.
        assert_eq!(check(98.6, "F", 37.0), HeatAlert);
    }

    #[test]
    fn negative_temperatures() {
        // -20°C = -4°F.
        assert_eq!(check(-20.0, "C", 0.0), ColdAdvisory);
        // -4°F = -20°C.
        assert_eq!(check(-4.0, "F", -15.0), ColdAdvisory);
    }

    #[test]
    fn units_agree_away_from_the_threshold() {
        let cases = [(10.0, 0.0), (-50.0, 0.0), (100.0, 50.0), (-60.0, -45.0)];
        for (celsius, threshold) in cases {
            let fahrenheit = crate::support::units::celsius_to_fahrenheit(celsius);
            assert_eq!(
                classify(Measurement::celsius(celsius), threshold),
                classify(Measurement::fahrenheit(fahrenheit), threshold),
            );
        }
    }

    #[test]
    fn nan_is_never_below() {
        assert_eq!(classify(Measurement::celsius(f64::NAN), 30.0), HeatAlert);
        assert_eq!(classify(Measurement::celsius(0.0), f64::NAN), HeatAlert);
    }

    #[test]
    fn display() {
        assert_eq!(ColdAdvisory.to_string(), "Cold advisory");
        assert_eq!(HeatAlert.to_string(), "Heat alert");
    }
}

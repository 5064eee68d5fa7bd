use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    f64::ThermodynamicTemperature,
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
};

use super::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// One of the two supported temperature scales.
///
/// Textual tags are parsed with [`FromStr`]. The single-letter tags `C` and
/// `F` are accepted as-is, and the full names are accepted in any case:
///
/// ```
/// use twine_advisory::support::units::TemperatureUnit;
///
/// assert_eq!("C".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
/// assert_eq!("fahrenheit".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
/// assert!("K".parse::<TemperatureUnit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the other supported scale.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    /// Expresses `value`, given in this scale, in the [`opposite`](Self::opposite) scale.
    #[must_use]
    pub fn to_opposite(self, value: f64) -> f64 {
        match self {
            Self::Celsius => celsius_to_fahrenheit(value),
            Self::Fahrenheit => fahrenheit_to_celsius(value),
        }
    }

    /// Builds a [`ThermodynamicTemperature`] from a value in this scale.
    #[must_use]
    pub fn quantity(self, value: f64) -> ThermodynamicTemperature {
        match self {
            Self::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
            Self::Fahrenheit => ThermodynamicTemperature::new::<degree_fahrenheit>(value),
        }
    }

    /// Reads a [`ThermodynamicTemperature`] as a value in this scale.
    #[must_use]
    pub fn value_of(self, temperature: ThermodynamicTemperature) -> f64 {
        match self {
            Self::Celsius => temperature.get::<degree_celsius>(),
            Self::Fahrenheit => temperature.get::<degree_fahrenheit>(),
        }
    }

    /// Returns the single-letter tag for this scale.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "°{}", self.symbol())
    }
}

/// An error returned when a unit tag names neither Celsius nor Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unit must be Celsius or Fahrenheit, got {unit:?}")]
pub struct InvalidUnitError {
    /// The rejected tag.
    pub unit: String,
}

impl FromStr for TemperatureUnit {
    type Err = InvalidUnitError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "C" => Ok(Self::Celsius),
            "F" => Ok(Self::Fahrenheit),
            _ if tag.eq_ignore_ascii_case("celsius") => Ok(Self::Celsius),
            _ if tag.eq_ignore_ascii_case("fahrenheit") => Ok(Self::Fahrenheit),
            _ => Err(InvalidUnitError {
                unit: tag.to_owned(),
            }),
        }
    }
}

impl TryFrom<char> for TemperatureUnit {
    type Error = InvalidUnitError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'C' => Ok(Self::Celsius),
            'F' => Ok(Self::Fahrenheit),
            _ => Err(InvalidUnitError {
                unit: tag.to_string(),
            }),
        }
    }
}

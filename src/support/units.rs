//! Temperature scale conversions and extensions to [`uom`].
//!
//! Classification compares values produced by the textbook scale formulas,
//! evaluated in a fixed order so that exact boundary cases stay exact:
//!
//! ```
//! use twine_advisory::support::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};
//!
//! assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
//! assert_eq!(fahrenheit_to_celsius(68.0), 20.0);
//! assert_eq!(celsius_to_fahrenheit(-40.0), fahrenheit_to_celsius(-40.0));
//! ```
//!
//! Going through [`uom`] instead routes every value through kelvin, which is
//! fine for interop but can leave a few ulps of error at the boundary.
//! [`TemperatureUnit`] provides both: [`TemperatureUnit::to_opposite`] uses the
//! formulas above, while [`TemperatureUnit::quantity`] builds a
//! [`ThermodynamicTemperature`](uom::si::f64::ThermodynamicTemperature).

mod unit;

pub use unit::{InvalidUnitError, TemperatureUnit};

/// Converts a Celsius value to Fahrenheit as `temp * 9 / 5 + 32`.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0) / 5.0 + 32.0
}

/// Converts a Fahrenheit value to Celsius as `(temp - 32) * 5 / 9`.
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    ((fahrenheit - 32.0) * 5.0) / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);

        // The scales cross at -40.
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
        assert_eq!(fahrenheit_to_celsius(-40.0), -40.0);
    }

    #[test]
    fn body_temperature_is_exact() {
        // 98.6 - 32 is not exactly 66.6, but the rounding cancels out.
        assert_eq!(fahrenheit_to_celsius(98.6), 37.0);
    }

    #[test]
    fn agrees_with_uom() {
        for celsius in [-273.15, -40.0, 0.0, 21.5, 100.0, 1000.0] {
            let t = ThermodynamicTemperature::new::<degree_celsius>(celsius);
            assert_relative_eq!(
                celsius_to_fahrenheit(celsius),
                t.get::<degree_fahrenheit>(),
                epsilon = 1e-9
            );
        }
    }
}

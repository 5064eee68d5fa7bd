use uom::si::f64::ThermodynamicTemperature;

use crate::support::units::TemperatureUnit;

/// A temperature value tagged with the scale it was taken in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Measurement {
    #[must_use]
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a measurement in degrees Celsius.
    #[must_use]
    pub fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// Creates a measurement in degrees Fahrenheit.
    #[must_use]
    pub fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    /// Creates a measurement by reading `temperature` in the given scale.
    #[must_use]
    pub fn from_thermodynamic_temperature(
        temperature: ThermodynamicTemperature,
        unit: TemperatureUnit,
    ) -> Self {
        Self::new(unit.value_of(temperature), unit)
    }

    /// Returns the value expressed in the opposite scale.
    ///
    /// This is the value classification compares against the threshold.
    #[must_use]
    pub fn converted(&self) -> f64 {
        self.unit.to_opposite(self.value)
    }

    /// Returns the scale of [`converted`](Self::converted).
    #[must_use]
    pub fn converted_unit(&self) -> TemperatureUnit {
        self.unit.opposite()
    }

    #[must_use]
    pub fn to_thermodynamic_temperature(&self) -> ThermodynamicTemperature {
        self.unit.quantity(self.value)
    }
}

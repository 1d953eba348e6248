use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Macroscopic state the run is started from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// liters
    pub volume: f64,
    /// kelvin
    pub temperature: f64,
    /// atmospheres
    pub pressure: f64,
}

/// Range and granularity of one input slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

pub const VOLUME_SLIDER: SliderRange = SliderRange { min: 10.0, max: 100.0, step: None };
pub const TEMPERATURE_SLIDER: SliderRange = SliderRange { min: 100.0, max: 1000.0, step: None };
pub const PRESSURE_SLIDER: SliderRange = SliderRange { min: 0.5, max: 5.0, step: Some(0.1) };

impl SliderRange {
    /// Value the slider would actually show for `value`.
    pub fn snap(&self, value: f64) -> f64 {
        let value = if value.is_nan() { self.min } else { value.clamp(self.min, self.max) };
        match self.step {
            Some(step) => {
                let steps = ((value - self.min) / step).round();
                let snapped = self.min + steps * step;
                // 0.1 isn't exact in binary, put the result back on the decimal grid
                let per_unit = (1.0 / step).round();
                ((snapped * per_unit).round() / per_unit).clamp(self.min, self.max)
            }
            None => value,
        }
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input(field, "value is missing"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::invalid_input(field, format!("'{trimmed}' is not a number")))?;
    if !value.is_finite() {
        return Err(Error::invalid_input(field, "value must be finite"));
    }
    Ok(value)
}

impl RunParameters {
    pub fn new(volume: f64, temperature: f64, pressure: f64) -> Self {
        RunParameters {
            volume,
            temperature,
            pressure,
        }
    }

    /// Parse free-text input. Any field that isn't a finite number rejects the whole set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gasviz_core::RunParameters;
    /// let params = RunParameters::parse("50", " 300 ", "1.0").unwrap();
    /// assert_eq!(params.temperature, 300.0);
    /// assert!(RunParameters::parse("50", "hot", "1.0").is_err());
    /// ```
    pub fn parse(volume: &str, temperature: &str, pressure: &str) -> Result<Self> {
        Ok(RunParameters {
            volume: parse_field("volume", volume)?,
            temperature: parse_field("temperature", temperature)?,
            pressure: parse_field("pressure", pressure)?,
        })
    }

    /// Parameters as the bounded sliders would deliver them.
    pub fn from_sliders(volume: f64, temperature: f64, pressure: f64) -> Self {
        RunParameters {
            volume: VOLUME_SLIDER.snap(volume),
            temperature: TEMPERATURE_SLIDER.snap(temperature),
            pressure: PRESSURE_SLIDER.snap(pressure),
        }
    }

    /// Check what the ideal gas derivation needs. Negative volume or pressure is
    /// allowed here and ends up as an empty population.
    pub fn validate(&self) -> Result<()> {
        if !self.volume.is_finite() {
            return Err(Error::invalid_input("volume", "value must be finite"));
        }
        if !self.pressure.is_finite() {
            return Err(Error::invalid_input("pressure", "value must be finite"));
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(Error::invalid_input("temperature", "must be finite and > 0"));
        }
        Ok(())
    }
}

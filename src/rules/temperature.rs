//! °C / °F / K.  Each ordered pair has its own affine formula.

use tracing::trace;

use crate::error::*;

use super::ConversionRule;

pub const CELSIUS: &str = "Celsius (°C)";
pub const FAHRENHEIT: &str = "Fahrenheit (°F)";
pub const KELVIN: &str = "Kelvin (K)";

/// Shown for same‑unit pairs.
pub const DIRECT_CONVERSION: &str = "Direct conversion (same unit)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    fn parse(name: &str) -> Result<Self> {
        match name {
            CELSIUS => Ok(Self::Celsius),
            FAHRENHEIT => Ok(Self::Fahrenheit),
            KELVIN => Ok(Self::Kelvin),
            _ => Err(ConvertError::UnknownUnit {
                category: "Temperature".to_string(),
                unit: name.to_string(),
            }),
        }
    }
}

/// Temperature conversion rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Temperature;

impl ConversionRule for Temperature {
    fn convert(&self, v: f64, from: &str, to: &str) -> Result<f64> {
        use Scale::*;
        let out = match (Scale::parse(from)?, Scale::parse(to)?) {
            (Celsius, Fahrenheit) => v * 9.0 / 5.0 + 32.0,
            (Celsius, Kelvin) => v + 273.15,
            (Fahrenheit, Celsius) => (v - 32.0) * 5.0 / 9.0,
            (Fahrenheit, Kelvin) => (v - 32.0) * 5.0 / 9.0 + 273.15,
            (Kelvin, Celsius) => v - 273.15,
            (Kelvin, Fahrenheit) => (v - 273.15) * 9.0 / 5.0 + 32.0,
            _ => v,
        };
        trace!(from, to, value = v, result = out, "temperature rule");
        Ok(out)
    }

    fn formula(&self, from: &str, to: &str) -> Option<String> {
        let text = match (from, to) {
            (CELSIUS, FAHRENHEIT) => "°F = (°C × 9/5) + 32",
            (FAHRENHEIT, CELSIUS) => "°C = (°F - 32) × 5/9",
            (CELSIUS, KELVIN) => "K = °C + 273.15",
            (KELVIN, CELSIUS) => "°C = K - 273.15",
            (FAHRENHEIT, KELVIN) => "K = (°F - 32) × 5/9 + 273.15",
            (KELVIN, FAHRENHEIT) => "°F = (K - 273.15) × 9/5 + 32",
            _ => DIRECT_CONVERSION,
        };
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        let t = Temperature;
        assert_eq!(t.convert(0.0, CELSIUS, FAHRENHEIT).unwrap(), 32.0);
        assert_eq!(t.convert(100.0, CELSIUS, KELVIN).unwrap(), 373.15);
        assert_eq!(t.convert(32.0, FAHRENHEIT, CELSIUS).unwrap(), 0.0);
        assert_eq!(t.convert(273.15, KELVIN, CELSIUS).unwrap(), 0.0);
        assert_eq!(t.convert(-40.0, FAHRENHEIT, CELSIUS).unwrap(), -40.0);
    }

    #[test]
    fn same_scale_is_identity() {
        assert_eq!(Temperature.convert(12.5, KELVIN, KELVIN).unwrap(), 12.5);
    }

    #[test]
    fn unknown_scale() {
        let err = Temperature.convert(1.0, "Rankine (°R)", KELVIN).unwrap_err();
        assert!(matches!(err, ConvertError::UnknownUnit { .. }));
    }

    #[test]
    fn formulas() {
        assert_eq!(
            Temperature.formula(CELSIUS, FAHRENHEIT).as_deref(),
            Some("°F = (°C × 9/5) + 32")
        );
        assert_eq!(
            Temperature.formula(KELVIN, KELVIN).as_deref(),
            Some(DIRECT_CONVERSION)
        );
    }
}

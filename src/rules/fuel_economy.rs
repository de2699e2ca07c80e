//! Fuel economy.
//!
//! Everything goes through km/L.  Rate units (distance per volume) scale
//! linearly; L/100km is a consumption unit and relates by reciprocal:
//!
//! ```text
//! km/L      = 100 / (L/100km)
//! L/100km   = 100 / (km/L)
//! ```

use tracing::warn;

use crate::error::*;

use super::ConversionRule;

pub const MPG_US: &str = "Miles per gallon (US)";
pub const MPG_IMPERIAL: &str = "Miles per gallon (Imperial)";
pub const KM_PER_L: &str = "Kilometers per liter (km/L)";
pub const L_PER_100KM: &str = "Liters per 100 kilometers (L/100km)";

#[derive(Debug, Clone, Copy, PartialEq)]
enum FuelUnit {
    /// Distance per volume; factor to km/L.
    Rate(f64),
    /// L/100km.
    Consumption,
}

impl FuelUnit {
    fn parse(name: &str) -> Result<Self> {
        match name {
            MPG_US => Ok(Self::Rate(0.425144)),
            MPG_IMPERIAL => Ok(Self::Rate(0.354006)),
            KM_PER_L => Ok(Self::Rate(1.0)),
            L_PER_100KM => Ok(Self::Consumption),
            _ => Err(ConvertError::UnknownUnit {
                category: "Fuel Economy".to_string(),
                unit: name.to_string(),
            }),
        }
    }
}

/// 100 / x, refusing x = 0 and subnormal x whose reciprocal overflows.
fn reciprocal(x: f64, what: &str) -> Result<f64> {
    let r = 100.0 / x;
    if !r.is_finite() {
        warn!(what, x, "reciprocal out of range in fuel economy conversion");
        return Err(ConvertError::DomainError(format!(
            "{what} of {x} has no finite equivalent in L/100km or km/L"
        )));
    }
    Ok(r)
}

/// Fuel economy conversion rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuelEconomy;

impl ConversionRule for FuelEconomy {
    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64> {
        let (from, to) = (FuelUnit::parse(from)?, FuelUnit::parse(to)?);

        let kpl = match from {
            FuelUnit::Rate(f) => value * f,
            FuelUnit::Consumption => reciprocal(value, "consumption")?,
        };

        match to {
            FuelUnit::Rate(f) => Ok(kpl / f),
            FuelUnit::Consumption => reciprocal(kpl, "fuel economy"),
        }
    }
}

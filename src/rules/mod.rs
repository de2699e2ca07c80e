//! Dedicated conversion rules for categories that can't be expressed as
//! a shared scale factor.

pub mod fuel_economy;
pub mod temperature;

use unit_registry::CustomRule;

use crate::error::Result;

pub use fuel_economy::FuelEconomy;
pub use temperature::Temperature;

/// Conversion logic for one custom category.
///
/// Implementations are stateless and receive unit names exactly as they
/// appear in the registry.
pub trait ConversionRule: Sync {
    /// Convert `value` from `from` to `to`.
    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64>;

    /// Human‑readable formula for the pair, or `None` to fall back to the
    /// generic "1 X = k Y" factor text.
    fn formula(&self, _from: &str, _to: &str) -> Option<String> {
        None
    }
}

/// The rule implementing a registry [`CustomRule`] tag.
pub fn rule_for(rule: CustomRule) -> &'static dyn ConversionRule {
    match rule {
        CustomRule::Temperature => &Temperature,
        CustomRule::FuelEconomy => &FuelEconomy,
    }
}

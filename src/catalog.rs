//! Registry queries with engine errors.

use unit_registry::Category;

use crate::error::*;

/// Category names in display order.
pub fn list_categories() -> Vec<&'static str> {
    unit_registry::list_categories()
}

/// Full category record.
pub fn category(name: &str) -> Result<&'static Category> {
    Ok(unit_registry::category(name)?)
}

/// Unit names of `category` in catalog order.
pub fn units_of(category: &str) -> Result<Vec<&'static str>> {
    Ok(unit_registry::units_of(category)?)
}

/// Scale factor of `unit` relative to its category's base unit.
///
/// Temperature and Fuel Economy have no scale factors and fail with
/// [`ConvertError::UnsupportedOperation`].
pub fn scale_factor(category: &str, unit: &str) -> Result<f64> {
    Ok(unit_registry::scale_factor(category, unit)?)
}

/// Units preselected by a front‑end: first and second of the category.
pub fn default_units(category: &str) -> Result<(&'static str, &'static str)> {
    Ok(unit_registry::default_units(category)?)
}

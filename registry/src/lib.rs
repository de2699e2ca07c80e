//! Static catalog of unit categories for `unitconv`.
//!
//! Each [`Category`] owns an ordered list of [`Unit`]s and a
//! [`Strategy`] telling the engine how to convert between them:
//!
//! | Strategy                   | Categories                                   |
//! |----------------------------|----------------------------------------------|
//! | `Linear`                   | Length, Weight/Mass, Area, Volume, Time, Speed, Digital Storage, Pressure, Energy, Angle |
//! | `Custom(Temperature)`      | Temperature (affine)                         |
//! | `Custom(FuelEconomy)`      | Fuel Economy (rate ↔ consumption, reciprocal) |
//!
//! The catalog is plain `static` data: it is never built at runtime and
//! can be shared freely between threads.
//!
//! ```
//! let units = unit_registry::units_of("Length")?;
//! assert_eq!(units[5], "Meter (m)");
//!
//! let inch = unit_registry::scale_factor("Length", "Inch (in)")?;
//! assert_eq!(inch, 0.0254);
//! # Ok::<(), unit_registry::RegistryError>(())
//! ```

mod catalog;

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

pub use catalog::CATALOG;

// ────────────────────────────────────────────────────────────────────
//  Errors
// ────────────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No category with this name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The unit is not part of the category.
    #[error("Unknown unit '{unit}' in category {category}")]
    UnknownUnit { category: String, unit: String },

    /// Linear‑only query made on a custom category.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A catalog entry breaks one of the registry invariants.
    #[error("Invalid registry definition: {0}")]
    InvalidDefinition(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

// ────────────────────────────────────────────────────────────────────
//  Data model
// ────────────────────────────────────────────────────────────────────

/// Dedicated rule for a category whose units don't share a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CustomRule {
    /// °C / °F / K — affine formulas per unit pair.
    Temperature,
    /// mpg / km/L (rates) vs L/100km (consumption, reciprocal).
    FuelEconomy,
}

/// How the engine converts within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "rule")]
pub enum Strategy {
    /// `value × scale(from) / scale(to)`
    Linear,
    /// Delegated to a dedicated rule function.
    Custom(CustomRule),
}

/// A named unit.  `scale` is "1 unit = scale × base unit" and is only
/// present in linear categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub name: &'static str,
    pub scale: Option<f64>,
}

impl Unit {
    pub const fn linear(name: &'static str, scale: f64) -> Self {
        Self { name, scale: Some(scale) }
    }

    pub const fn custom(name: &'static str) -> Self {
        Self { name, scale: None }
    }

    /// `true` for the reference unit of a linear category.
    pub fn is_base(&self) -> bool {
        self.scale == Some(1.0)
    }
}

/// A physical quantity and its units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category {
    pub name: &'static str,
    /// Emoji shown next to the category by front‑ends.
    pub icon: &'static str,
    pub strategy: Strategy,
    pub units: &'static [Unit],
}

impl Category {
    pub const fn new(
        name: &'static str,
        icon: &'static str,
        strategy: Strategy,
        units: &'static [Unit],
    ) -> Self {
        Self { name, icon, strategy, units }
    }

    pub fn is_linear(&self) -> bool {
        self.strategy == Strategy::Linear
    }

    /// Unit names in catalog order.
    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name).collect()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units.iter().any(|u| u.name == unit)
    }

    /// Look up a unit by its exact display name.
    pub fn unit(&self, name: &str) -> Result<&'static Unit> {
        self.units
            .iter()
            .find(|u| u.name == name)
            .ok_or_else(|| RegistryError::UnknownUnit {
                category: self.name.to_string(),
                unit: name.to_string(),
            })
    }

    /// The unit with scale factor 1 (`None` for custom categories).
    pub fn base_unit(&self) -> Option<&'static Unit> {
        if !self.is_linear() {
            return None;
        }
        self.units.iter().find(|u| u.is_base())
    }

    /// Scale factor of `unit` relative to the base unit.
    pub fn scale_factor(&self, unit: &str) -> Result<f64> {
        if let Strategy::Custom(rule) = self.strategy {
            return Err(RegistryError::UnsupportedOperation(format!(
                "{} uses the {rule:?} rule and has no scale factors",
                self.name
            )));
        }
        let u = self.unit(unit)?;
        u.scale.ok_or_else(|| {
            RegistryError::InvalidDefinition(format!(
                "linear unit '{}' in {} has no scale factor",
                u.name, self.name
            ))
        })
    }

    /// Default `(from, to)` selection: first and second unit, or the
    /// first twice for a single‑unit category.
    pub fn default_units(&self) -> Option<(&'static str, &'static str)> {
        let from = self.units.first()?;
        let to = self.units.get(1).unwrap_or(from);
        Some((from.name, to.name))
    }
}

// ────────────────────────────────────────────────────────────────────
//  Queries on the built‑in catalog
// ────────────────────────────────────────────────────────────────────

/// Every category, in display order.
pub fn categories() -> &'static [Category] {
    &CATALOG
}

/// Category names, in display order.
pub fn list_categories() -> Vec<&'static str> {
    CATALOG.iter().map(|c| c.name).collect()
}

pub fn category(name: &str) -> Result<&'static Category> {
    CATALOG
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| RegistryError::UnknownCategory(name.to_string()))
}

/// Unit names of `category`, in catalog order.
pub fn units_of(category: &str) -> Result<Vec<&'static str>> {
    Ok(self::category(category)?.unit_names())
}

/// Scale factor of a unit in a linear category.
///
/// Fails with [`RegistryError::UnsupportedOperation`] on Temperature and
/// Fuel Economy.
pub fn scale_factor(category: &str, unit: &str) -> Result<f64> {
    self::category(category)?.scale_factor(unit)
}

pub fn default_units(category: &str) -> Result<(&'static str, &'static str)> {
    let cat = self::category(category)?;
    cat.default_units().ok_or_else(|| {
        RegistryError::InvalidDefinition(format!("{} has no units", cat.name))
    })
}

// ────────────────────────────────────────────────────────────────────
//  Invariant checks
// ────────────────────────────────────────────────────────────────────

/// Check the built‑in catalog.  See [`validate_catalog`].
pub fn validate() -> Result<()> {
    validate_catalog(&CATALOG)
}

/// Check a set of categories against the registry invariants:
///
/// * category names are unique, unit names are unique per category;
/// * every category has at least one unit;
/// * linear scale factors are positive and finite, with exactly one
///   base unit (factor 1);
/// * custom categories carry no scale factors.
pub fn validate_catalog(categories: &[Category]) -> Result<()> {
    let invalid = |msg: String| Err(RegistryError::InvalidDefinition(msg));

    let mut seen_categories = HashSet::new();
    for cat in categories {
        if !seen_categories.insert(cat.name) {
            return invalid(format!("duplicate category '{}'", cat.name));
        }
        if cat.units.is_empty() {
            return invalid(format!("{} has no units", cat.name));
        }

        let mut seen_units = HashSet::new();
        for unit in cat.units {
            if !seen_units.insert(unit.name) {
                return invalid(format!("duplicate unit '{}' in {}", unit.name, cat.name));
            }
            match (cat.strategy, unit.scale) {
                (Strategy::Linear, Some(s)) if s.is_finite() && s > 0.0 => {}
                (Strategy::Linear, Some(s)) => {
                    return invalid(format!(
                        "scale factor of '{}' in {} must be positive and finite, got {s}",
                        unit.name, cat.name
                    ));
                }
                (Strategy::Linear, None) => {
                    return invalid(format!(
                        "linear unit '{}' in {} has no scale factor",
                        unit.name, cat.name
                    ));
                }
                (Strategy::Custom(_), Some(_)) => {
                    return invalid(format!(
                        "custom unit '{}' in {} must not carry a scale factor",
                        unit.name, cat.name
                    ));
                }
                (Strategy::Custom(_), None) => {}
            }
        }

        if cat.is_linear() {
            let bases = cat.units.iter().filter(|u| u.is_base()).count();
            if bases != 1 {
                return invalid(format!(
                    "{} must have exactly one base unit, found {bases}",
                    cat.name
                ));
            }
        }
    }
    Ok(())
}

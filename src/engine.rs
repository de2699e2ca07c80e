use tracing::{debug, warn};
use unit_registry::{Category, Strategy};

use crate::config::EngineConfig;
use crate::error::*;
use crate::format::format_with;
use crate::rules::rule_for;
use crate::table::{ComparisonRow, Conversion, ConversionTable};

/// Comparison table multipliers applied to a non‑zero input.
pub const TABLE_MULTIPLIERS: [f64; 8] = [0.01, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 100.0];

/// Comparison table sources used when the input is 0.
pub const TABLE_ZERO_SOURCES: [f64; 6] = [0.0, 1.0, 2.0, 5.0, 10.0, 100.0];

/// The conversion engine.
///
/// Stateless apart from its display configuration; every method is a
/// pure function of its arguments and the static registry, so a single
/// `Engine` can be shared between threads.
///
/// ```
/// use unitconv::Engine;
///
/// let engine = Engine::default();
/// let m = engine.convert("Length", 1.0, "Inch (in)", "Meter (m)")?;
/// assert_eq!(m, 0.0254);
/// assert_eq!(engine.format_number(m), "0.0254");
/// # Ok::<(), unitconv::ConvertError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Build an engine after checking `config`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine configured from `UNITCONV_*` variables / `.env`.
    pub fn from_env() -> Result<Self> {
        Ok(Self { config: EngineConfig::from_env()? })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ── Conversion ──────────────────────────────────────────────────

    /// Convert `value` from `from` to `to` within `category`.
    ///
    /// Linear categories go through the base unit
    /// (`value × scale(from) / scale(to)`); Temperature and Fuel Economy
    /// use their dedicated rules.  Identical units return `value`
    /// untouched.
    pub fn convert(&self, category: &str, value: f64, from: &str, to: &str) -> Result<f64> {
        let cat = unit_registry::category(category)?;
        self.convert_in(cat, value, from, to)
    }

    fn convert_in(&self, cat: &Category, value: f64, from: &str, to: &str) -> Result<f64> {
        cat.unit(from)?;
        cat.unit(to)?;

        if !value.is_finite() {
            warn!(category = cat.name, value, "non-finite input");
            return Err(ConvertError::DomainError(format!(
                "cannot convert non-finite value {value}"
            )));
        }
        if from == to {
            return Ok(value);
        }

        let result = match cat.strategy {
            Strategy::Linear => value * cat.scale_factor(from)? / cat.scale_factor(to)?,
            Strategy::Custom(rule) => rule_for(rule).convert(value, from, to)?,
        };
        if !result.is_finite() {
            warn!(category = cat.name, from, to, value, "conversion overflowed");
            return Err(ConvertError::DomainError(format!(
                "{value} {from} is out of range when converted to {to}"
            )));
        }
        debug!(category = cat.name, from, to, value, result, "converted");
        Ok(result)
    }

    /// Like [`convert`](Self::convert) but returns a displayable record.
    pub fn conversion(&self, category: &str, value: f64, from: &str, to: &str) -> Result<Conversion> {
        let cat = unit_registry::category(category)?;
        let result = self.convert_in(cat, value, from, to)?;
        Ok(Conversion {
            category: cat.name,
            value,
            from_unit: cat.unit(from)?.name,
            to_unit: cat.unit(to)?.name,
            result,
            result_display: self.format_number(result),
        })
    }

    // ── Display artifacts ───────────────────────────────────────────

    /// Render a number: `%g` style inside the configured thresholds
    /// (and for zero), scientific notation outside.
    pub fn format_number(&self, x: f64) -> String {
        format_with(x, &self.config)
    }

    /// Formula text for a unit pair.
    ///
    /// Temperature pairs get their literal formula; every other category
    /// states the factor, e.g. `1 Inch (in) = 0.0254 Meter (m)`.
    pub fn formula(&self, category: &str, from: &str, to: &str) -> Result<String> {
        let cat = unit_registry::category(category)?;
        cat.unit(from)?;
        cat.unit(to)?;

        if let Strategy::Custom(rule) = cat.strategy {
            if let Some(text) = rule_for(rule).formula(from, to) {
                return Ok(text);
            }
        }
        let factor = self.convert_in(cat, 1.0, from, to)?;
        Ok(format!("1 {from} = {} {to}", self.format_number(factor)))
    }

    /// Conversions of values around `value`.
    ///
    /// Sources are `value × [0.01, 0.1, 0.5, 1, 2, 5, 10, 100]`, or
    /// `[0, 1, 2, 5, 10, 100]` when `value` is 0.  Each row is converted
    /// on its own (scaling a temperature doesn't scale its conversion).
    /// Any failing row fails the whole table.
    pub fn comparison_table(
        &self,
        category: &str,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionTable> {
        let cat = unit_registry::category(category)?;
        let from_unit = cat.unit(from)?.name;
        let to_unit = cat.unit(to)?.name;

        let sources: Vec<f64> = if value != 0.0 {
            TABLE_MULTIPLIERS
                .iter()
                .map(|&m| -> Result<f64> {
                    let source = value * m;
                    if !source.is_finite() {
                        warn!(category = cat.name, value, multiplier = m, "table source overflowed");
                        return Err(ConvertError::DomainError(format!(
                            "comparison row {value} × {m} is out of range"
                        )));
                    }
                    Ok(source)
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            TABLE_ZERO_SOURCES.to_vec()
        };

        let rows = sources
            .into_iter()
            .map(|source| -> Result<ComparisonRow> {
                let converted = self.convert_in(cat, source, from, to)?;
                Ok(ComparisonRow {
                    source,
                    converted,
                    source_display: self.format_number(source),
                    converted_display: self.format_number(converted),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(category = cat.name, from, to, rows = rows.len(), "built comparison table");
        Ok(ConversionTable { category: cat.name, from_unit, to_unit, rows })
    }
}

// ── Default‑configured shortcuts ────────────────────────────────────

/// [`Engine::convert`] with the default configuration.
pub fn convert(category: &str, value: f64, from: &str, to: &str) -> Result<f64> {
    Engine::default().convert(category, value, from, to)
}

/// [`Engine::format_number`] with the default configuration.
pub fn format_number(x: f64) -> String {
    Engine::default().format_number(x)
}

/// [`Engine::formula`] with the default configuration.
pub fn formula(category: &str, from: &str, to: &str) -> Result<String> {
    Engine::default().formula(category, from, to)
}

/// [`Engine::comparison_table`] with the default configuration.
pub fn comparison_table(category: &str, value: f64, from: &str, to: &str) -> Result<ConversionTable> {
    Engine::default().comparison_table(category, value, from, to)
}

//! # unitconv
//!
//! Unit conversion engine for calculator front‑ends: twelve categories
//! (length, weight, temperature, fuel economy, …), a number formatting
//! policy, formula text and comparison tables.
//!
//! ## Highlights
//!
//! * **Data‑driven registry** — linear categories are just scale tables
//!   relative to a base unit (see the `unit-registry` crate)
//! * **Custom rules** — Temperature (affine) and Fuel Economy
//!   (reciprocal L/100km) behind the [`ConversionRule`] trait
//! * **Pure** — no I/O, no shared mutable state; safe to call from any
//!   thread
//!
//! ## Quick example
//!
//! ```
//! use unitconv::{convert, format_number, formula};
//!
//! let f = convert("Temperature", 100.0, "Celsius (°C)", "Fahrenheit (°F)")?;
//! assert_eq!(f, 212.0);
//!
//! let gb = convert("Digital Storage", 1.0, "Gibibyte (GiB)", "Gigabyte (GB)")?;
//! assert_eq!(format_number(gb), "1.07374");
//!
//! assert_eq!(
//!     formula("Length", "Inch (in)", "Meter (m)")?,
//!     "1 Inch (in) = 0.0254 Meter (m)"
//! );
//! # Ok::<(), unitconv::ConvertError>(())
//! ```
//!
//! ## Comparison table
//!
//! ```
//! let table = unitconv::comparison_table("Length", 1.0, "Mile (mi)", "Kilometer (km)")?;
//! assert_eq!(table.len(), 8);
//! println!("{table}");
//! # Ok::<(), unitconv::ConvertError>(())
//! ```
//!
//! ## Configuration
//!
//! [`Engine::from_env`] reads `UNITCONV_PRECISION`, `UNITCONV_SCI_LOWER`
//! and `UNITCONV_SCI_UPPER` (a `.env` file is honoured).  The free
//! functions always use the defaults.

// ── Internal modules ─────────────────────────────────────────────────
mod format;

// ── Public modules ───────────────────────────────────────────────────
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod table;

// ── Public re-exports ────────────────────────────────────────────────
pub use error::{ConvertError, Result};
pub use catalog::{category, default_units, list_categories, scale_factor, units_of};
pub use config::EngineConfig;
pub use engine::{comparison_table, convert, format_number, formula, Engine};
pub use rules::{ConversionRule, FuelEconomy, Temperature};
pub use table::{ComparisonRow, Conversion, ConversionTable};

pub use unit_registry::{Category, CustomRule, Strategy, Unit};

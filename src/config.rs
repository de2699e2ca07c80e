//! Engine configuration.
//!
//! Defaults reproduce the standard display policy (6 digits, scientific
//! notation outside `[1e-6, 1e6)`).  [`EngineConfig::from_env`] lets a
//! deployment override them through environment variables or a `.env`
//! file:
//!
//! | Variable             | Field             | Default |
//! |----------------------|-------------------|---------|
//! | `UNITCONV_PRECISION` | `precision`       | `6`     |
//! | `UNITCONV_SCI_LOWER` | `lower_threshold` | `1e-6`  |
//! | `UNITCONV_SCI_UPPER` | `upper_threshold` | `1e6`   |

use std::env;
use std::path::Path;
use std::str::FromStr;
use std::sync::Once;

use tracing::{info, warn};

use crate::error::*;

pub const ENV_PRECISION: &str = "UNITCONV_PRECISION";
pub const ENV_SCI_LOWER: &str = "UNITCONV_SCI_LOWER";
pub const ENV_SCI_UPPER: &str = "UNITCONV_SCI_UPPER";

/// Largest precision accepted; `f64` carries ~17 significant digits.
const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Digits used by both the `%g` and the scientific branch.
    pub precision: usize,
    /// Smallest magnitude rendered without scientific notation.
    pub lower_threshold: f64,
    /// Magnitudes at or above this use scientific notation.
    pub upper_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            lower_threshold: 1e-6,
            upper_threshold: 1e6,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self { Self::default() }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn precision(mut self, p: usize) -> Self { self.precision = p; self }
    pub fn lower_threshold(mut self, t: f64) -> Self { self.lower_threshold = t; self }
    pub fn upper_threshold(mut self, t: f64) -> Self { self.upper_threshold = t; self }

    /// Check ranges: `1 ≤ precision ≤ 17`, `0 < lower < upper`, both finite.
    pub fn validate(&self) -> Result<()> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(ConvertError::InvalidConfig(format!(
                "precision must be 1–{MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        let (lo, hi) = (self.lower_threshold, self.upper_threshold);
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo < hi) {
            return Err(ConvertError::InvalidConfig(format!(
                "thresholds must satisfy 0 < lower < upper, got lower={lo}, upper={hi}"
            )));
        }
        Ok(())
    }

    // ── Environment ─────────────────────────────────────────────────

    /// Defaults overridden by `UNITCONV_*` variables (a `.env` file is
    /// loaded once beforehand).
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable
    /// source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(p) = parse_var::<usize, _>(&lookup, ENV_PRECISION)? {
            cfg.precision = p;
        }
        if let Some(lo) = parse_var::<f64, _>(&lookup, ENV_SCI_LOWER)? {
            cfg.lower_threshold = lo;
        }
        if let Some(hi) = parse_var::<f64, _>(&lookup, ENV_SCI_UPPER)? {
            cfg.upper_threshold = hi;
        }
        cfg.validate()?;
        info!(
            precision = cfg.precision,
            lower = cfg.lower_threshold,
            upper = cfg.upper_threshold,
            "Loaded engine configuration"
        );
        Ok(cfg)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            ConvertError::InvalidConfig(format!("{key}={raw} is not a valid value"))
        }),
    }
}

// ── .env loading (once) ─────────────────────────────────────────────

fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        match dotenvy::dotenv() {
            Ok(_) => return,
            Err(e) if !e.not_found() => {
                warn!(error = %e, "failed to load .env from the working directory");
                return;
            }
            Err(_) => {}
        }
        if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
            let p = Path::new(&dir).join(".env");
            if p.exists() { load_env_file(&p); return; }
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                let p = dir.join(".env");
                if p.exists() { load_env_file(&p); }
            }
        }
    });
}

/// Load one `.env` file; a failure is logged and otherwise ignored.
fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load .env");
            false
        }
    }
}

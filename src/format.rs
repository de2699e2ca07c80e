//! Display formatting for converted values.
//!
//! Values inside `[lower, upper)` (and zero) use the compact `%g` style,
//! anything outside uses scientific notation with the same number of
//! significant digits:
//!
//! | value        | rendered        |
//! |--------------|-----------------|
//! | `0`          | `0`             |
//! | `0.0254`     | `0.0254`        |
//! | `999999`     | `999999`        |
//! | `1000000`    | `1.00000e+06`   |
//! | `1.6e-19`    | `1.60000e-19`   |

use crate::config::EngineConfig;

/// Format `x` with the given thresholds and precision.
pub(crate) fn format_with(x: f64, cfg: &EngineConfig) -> String {
    if !x.is_finite() {
        return non_finite(x);
    }
    let a = x.abs();
    if x == 0.0 || (a >= cfg.lower_threshold && a < cfg.upper_threshold) {
        general(x, cfg.precision)
    } else {
        scientific(x, cfg.precision)
    }
}

/// `%.{precision}g`: `precision` significant digits, trailing zeros
/// removed, exponent form when the exponent is below −4 or at least
/// `precision`.
pub(crate) fn general(x: f64, precision: usize) -> String {
    if !x.is_finite() {
        return non_finite(x);
    }
    if x == 0.0 {
        return "0".to_string();
    }
    let p = precision.max(1);
    let sci = format!("{x:.prec$e}", prec = p - 1);
    let (mantissa, exp) = split_exponent(&sci);

    if exp < -4 || exp >= p as i32 {
        format!("{}e{}", strip_zeros(mantissa), exponent_suffix(exp))
    } else {
        let decimals = (p as i32 - 1 - exp) as usize;
        strip_zeros(&format!("{x:.decimals$}")).to_string()
    }
}

/// Scientific notation with `precision` significant digits (`%.{precision-1}e`):
/// trailing zeros kept, signed two‑digit‑minimum exponent.
pub(crate) fn scientific(x: f64, precision: usize) -> String {
    if !x.is_finite() {
        return non_finite(x);
    }
    let sci = format!("{x:.prec$e}", prec = precision.max(1) - 1);
    let (mantissa, exp) = split_exponent(&sci);
    format!("{mantissa}e{}", exponent_suffix(exp))
}

// ── Helpers ─────────────────────────────────────────────────────────

fn non_finite(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

/// Split Rust's `1.5e-7` output into `("1.5", -7)`.
fn split_exponent(s: &str) -> (&str, i32) {
    match s.split_once('e') {
        Some((m, e)) => (m, e.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn exponent_suffix(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{sign}{:02}", exp.unsigned_abs())
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

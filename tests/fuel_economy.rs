use approx::assert_relative_eq;
use unitconv::{ConvertError, comparison_table, convert, formula};

const MPG_US: &str = "Miles per gallon (US)";
const MPG_UK: &str = "Miles per gallon (Imperial)";
const KPL: &str = "Kilometers per liter (km/L)";
const L100: &str = "Liters per 100 kilometers (L/100km)";

// ═══════════════════════════════════════════════════════════════════
//  Réciprocité L/100km ↔ km/L
// ═══════════════════════════════════════════════════════════════════

#[test]
fn hundred_liters_per_100km_is_one_kpl() {
    assert_eq!(convert("Fuel Economy", 100.0, L100, KPL).unwrap(), 1.0);
}

#[test]
fn consumption_and_rate_are_reciprocal() {
    assert_eq!(convert("Fuel Economy", 4.0, L100, KPL).unwrap(), 25.0);
    assert_eq!(convert("Fuel Economy", 25.0, KPL, L100).unwrap(), 4.0);
}

#[test]
fn mpg_conversions() {
    assert_relative_eq!(convert("Fuel Economy", 1.0, MPG_US, KPL).unwrap(), 0.425144);
    assert_relative_eq!(
        convert("Fuel Economy", 1.0, MPG_US, MPG_UK).unwrap(),
        0.425144 / 0.354006,
        max_relative = 1e-12
    );
    // ~ 7.84 L/100km
    let l100 = convert("Fuel Economy", 30.0, MPG_US, L100).unwrap();
    assert!((l100 - 7.8405).abs() < 1e-3, "30 mpg = {l100} L/100km");
}

#[test]
fn round_trip_through_consumption() {
    for v in [3.5, 7.0, 12.0] {
        let mpg = convert("Fuel Economy", v, L100, MPG_UK).unwrap();
        let back = convert("Fuel Economy", mpg, MPG_UK, L100).unwrap();
        assert_relative_eq!(back, v, max_relative = 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Zéro : erreur de domaine
// ═══════════════════════════════════════════════════════════════════

#[test]
fn zero_consumption_is_domain_error() {
    assert!(matches!(
        convert("Fuel Economy", 0.0, L100, KPL),
        Err(ConvertError::DomainError(_))
    ));
}

#[test]
fn zero_rate_to_consumption_is_domain_error() {
    assert!(matches!(
        convert("Fuel Economy", 0.0, MPG_US, L100),
        Err(ConvertError::DomainError(_))
    ));
}

#[test]
fn subnormal_rate_to_consumption_is_domain_error() {
    // 100 / 1e-320 overflows f64
    assert!(matches!(
        convert("Fuel Economy", 1e-320, KPL, L100),
        Err(ConvertError::DomainError(_))
    ));
    assert!(matches!(
        convert("Fuel Economy", 1e-320, L100, KPL),
        Err(ConvertError::DomainError(_))
    ));
}

#[test]
fn zero_between_rates_is_fine() {
    assert_eq!(convert("Fuel Economy", 0.0, MPG_US, KPL).unwrap(), 0.0);
}

#[test]
fn zero_table_from_consumption_fails_whole_table() {
    assert!(matches!(
        comparison_table("Fuel Economy", 0.0, L100, KPL),
        Err(ConvertError::DomainError(_))
    ));
}

#[test]
fn formula_states_factor() {
    assert_eq!(
        formula("Fuel Economy", L100, KPL).unwrap(),
        "1 Liters per 100 kilometers (L/100km) = 100 Kilometers per liter (km/L)"
    );
}

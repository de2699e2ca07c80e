use unitconv::{Engine, EngineConfig, format_number, formula};

// ═══════════════════════════════════════════════════════════════════
//  Seuils d'affichage
// ═══════════════════════════════════════════════════════════════════

#[test]
fn zero_renders_plain() {
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn just_below_upper_threshold_is_general() {
    assert_eq!(format_number(999999.0), "999999");
}

#[test]
fn upper_threshold_is_scientific() {
    assert_eq!(format_number(1000000.0), "1.00000e+06");
}

#[test]
fn lower_threshold_is_inclusive() {
    assert_eq!(format_number(1e-6), "1e-06");
    assert_eq!(format_number(5e-7), "5.00000e-07");
}

#[test]
fn six_significant_digits() {
    assert_eq!(format_number(3.14159265), "3.14159");
    assert_eq!(format_number(0.3048 / 0.9144), "0.333333");
    assert_eq!(format_number(-273.15), "-273.15");
    assert_eq!(format_number(1609.344), "1609.34");
}

#[test]
fn tiny_and_huge() {
    assert_eq!(format_number(1.602176634e-19), "1.60218e-19");
    assert_eq!(format_number(1125899906842624.0), "1.12590e+15");
    assert_eq!(format_number(1234567.0), "1.23457e+06");
}

// ═══════════════════════════════════════════════════════════════════
//  Texte des facteurs de conversion
// ═══════════════════════════════════════════════════════════════════

#[test]
fn linear_formula_states_factor() {
    assert_eq!(
        formula("Length", "Inch (in)", "Meter (m)").unwrap(),
        "1 Inch (in) = 0.0254 Meter (m)"
    );
    assert_eq!(
        formula("Energy", "Kilowatt-hour (kWh)", "Joule (J)").unwrap(),
        "1 Kilowatt-hour (kWh) = 3.60000e+06 Joule (J)"
    );
    assert_eq!(
        formula("Digital Storage", "Byte", "Byte").unwrap(),
        "1 Byte = 1 Byte"
    );
}

// ═══════════════════════════════════════════════════════════════════
//  Configuration du moteur
// ═══════════════════════════════════════════════════════════════════

#[test]
fn custom_precision_and_thresholds() {
    let engine = Engine::new(
        EngineConfig::new()
            .precision(3)
            .lower_threshold(1e-3)
            .upper_threshold(1e3),
    )
    .unwrap();
    assert_eq!(engine.format_number(3.14159), "3.14");
    assert_eq!(engine.format_number(1000.0), "1.00e+03");
    assert_eq!(engine.format_number(0.0005), "5.00e-04");

    let c = engine.conversion("Length", 1.0, "Mile (mi)", "Meter (m)").unwrap();
    assert_eq!(c.result_display, "1.61e+03");
}

#[test]
fn invalid_config_is_rejected() {
    assert!(Engine::new(EngineConfig::new().precision(0)).is_err());
    assert!(Engine::new(EngineConfig::new().lower_threshold(-1.0)).is_err());
}

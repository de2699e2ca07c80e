use unitconv::{ConvertError, Engine, comparison_table, convert, formula};

// ═══════════════════════════════════════════════════════════════════
//  Erreurs de l'appelant
// ═══════════════════════════════════════════════════════════════════

#[test]
fn unknown_category_everywhere() {
    let unknown = ConvertError::UnknownCategory("Nonexistent".to_string());
    assert_eq!(convert("Nonexistent", 1.0, "a", "b"), Err(unknown.clone()));
    assert_eq!(formula("Nonexistent", "a", "b"), Err(unknown.clone()));
    assert_eq!(comparison_table("Nonexistent", 1.0, "a", "b"), Err(unknown));
}

#[test]
fn unknown_from_unit() {
    assert_eq!(
        convert("Length", 1.0, "Furlong", "Meter (m)"),
        Err(ConvertError::UnknownUnit {
            category: "Length".to_string(),
            unit: "Furlong".to_string(),
        })
    );
}

#[test]
fn unknown_to_unit() {
    assert!(matches!(
        convert("Temperature", 1.0, "Celsius (°C)", "Rankine (°R)"),
        Err(ConvertError::UnknownUnit { .. })
    ));
}

#[test]
fn unit_from_another_category() {
    // Units are scoped to their category.
    assert!(matches!(
        convert("Length", 1.0, "Gram (g)", "Meter (m)"),
        Err(ConvertError::UnknownUnit { .. })
    ));
}

#[test]
fn same_unknown_unit_is_still_unknown() {
    assert!(matches!(
        convert("Length", 1.0, "Furlong", "Furlong"),
        Err(ConvertError::UnknownUnit { .. })
    ));
}

#[test]
fn non_finite_input_is_domain_error() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            convert("Length", v, "Meter (m)", "Meter (m)"),
            Err(ConvertError::DomainError(_))
        ));
    }
}

#[test]
fn overflowing_result_is_domain_error() {
    let err = convert("Energy", 1e300, "Kilowatt-hour (kWh)", "Electronvolt (eV)").unwrap_err();
    assert!(matches!(err, ConvertError::DomainError(_)), "{err:?}");
    assert!(matches!(
        convert("Temperature", 1.7e308, "Celsius (°C)", "Fahrenheit (°F)"),
        Err(ConvertError::DomainError(_))
    ));
    // same unit: no arithmetic, no overflow
    assert_eq!(
        convert("Energy", 1e300, "Kilowatt-hour (kWh)", "Kilowatt-hour (kWh)").unwrap(),
        1e300
    );
}

#[test]
fn error_messages() {
    let err = convert("Length", 1.0, "Furlong", "Meter (m)").unwrap_err();
    assert_eq!(err.to_string(), "Unknown unit 'Furlong' in category Length");
    let err = convert("Nonexistent", 1.0, "a", "b").unwrap_err();
    assert_eq!(err.to_string(), "Unknown category: Nonexistent");
}

// ═══════════════════════════════════════════════════════════════════
//  Résultat affichable
// ═══════════════════════════════════════════════════════════════════

#[test]
fn conversion_record_displays_result_line() {
    let c = Engine::default()
        .conversion("Length", 1.0, "Inch (in)", "Meter (m)")
        .unwrap();
    assert_eq!(c.result, 0.0254);
    assert_eq!(c.to_string(), "1 Inch (in) = 0.0254 Meter (m)");

    let c = Engine::default()
        .conversion("Digital Storage", 1.0, "Pebibyte (PiB)", "Byte")
        .unwrap();
    assert_eq!(c.to_string(), "1 Pebibyte (PiB) = 1.12590e+15 Byte");
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(Engine::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine.convert("Time", i as f64, "Hour (h)", "Second (s)").unwrap()
            })
        })
        .collect();
    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![0.0, 3600.0, 7200.0, 10800.0]);
}

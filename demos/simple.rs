use unitconv::{Engine, list_categories, units_of};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Per-conversion debug events from the engine.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // UNITCONV_* variables are read from the .env file automatically.
    let engine = Engine::from_env()?;

    // ── Catalog ─────────────────────────────────────────────────────
    for name in list_categories() {
        let units = units_of(name)?;
        println!("{name:<16} {} units", units.len());
    }
    println!();

    // ── Linear conversion ───────────────────────────────────────────
    let c = engine.conversion("Length", 26.2, "Mile (mi)", "Kilometer (km)")?;
    println!("{c}");
    println!("{}\n", engine.formula("Length", "Mile (mi)", "Kilometer (km)")?);

    // ── Temperature ─────────────────────────────────────────────────
    let c = engine.conversion("Temperature", 37.0, "Celsius (°C)", "Fahrenheit (°F)")?;
    println!("{c}");
    println!("{}\n", engine.formula("Temperature", "Celsius (°C)", "Fahrenheit (°F)")?);

    // ── Fuel economy (reciprocal) ───────────────────────────────────
    let c = engine.conversion(
        "Fuel Economy",
        6.5,
        "Liters per 100 kilometers (L/100km)",
        "Miles per gallon (US)",
    )?;
    println!("{c}");

    // ── Errors are values ───────────────────────────────────────────
    match engine.convert("Length", 1.0, "Furlong", "Meter (m)") {
        Ok(v) => println!("unexpected: {v}"),
        Err(e) => println!("error: {e}"),
    }
    Ok(())
}

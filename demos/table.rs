use unitconv::{comparison_table, default_units};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Default selection, like a fresh converter screen.
    let (from, to) = default_units("Energy")?;
    let table = comparison_table("Energy", 1.0, from, to)?;
    println!("{table}\n");

    // A zero input switches to the fixed 0/1/2/5/10/100 sources.
    let table = comparison_table("Temperature", 0.0, "Celsius (°C)", "Kelvin (K)")?;
    println!("{table}\n");

    // Raw (source, converted) pairs.
    let table = comparison_table("Digital Storage", 1.0, "Kibibyte (KiB)", "Kilobyte (KB)")?;
    for (source, converted) in table.pairs() {
        println!("{source} KiB -> {converted} KB");
    }
    Ok(())
}

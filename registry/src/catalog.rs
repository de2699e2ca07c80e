//! The built-in unit tables.
//!
//! Every scale factor expresses "1 unit = factor × base unit".  The base
//! unit of each linear category is the one entry with factor `1`.

use crate::{Category, CustomRule, Strategy, Unit};

// ────────────────────────────────────────────────────────────────────
//  Linear tables
// ────────────────────────────────────────────────────────────────────

/// Base: meter.
const LENGTH: &[Unit] = &[
    Unit::linear("Nanometer (nm)", 1e-9),
    Unit::linear("Micrometer (μm)", 1e-6),
    Unit::linear("Millimeter (mm)", 1e-3),
    Unit::linear("Centimeter (cm)", 1e-2),
    Unit::linear("Decimeter (dm)", 1e-1),
    Unit::linear("Meter (m)", 1.0),
    Unit::linear("Kilometer (km)", 1e3),
    Unit::linear("Inch (in)", 0.0254),
    Unit::linear("Foot (ft)", 0.3048),
    Unit::linear("Yard (yd)", 0.9144),
    Unit::linear("Mile (mi)", 1609.344),
    Unit::linear("Nautical mile (nmi)", 1852.0),
];

/// Base: gram.
const WEIGHT: &[Unit] = &[
    Unit::linear("Microgram (μg)", 1e-6),
    Unit::linear("Milligram (mg)", 1e-3),
    Unit::linear("Gram (g)", 1.0),
    Unit::linear("Kilogram (kg)", 1e3),
    Unit::linear("Metric ton (t)", 1e6),
    Unit::linear("Ounce (oz)", 28.34952),
    Unit::linear("Pound (lb)", 453.59237),
    Unit::linear("Stone (st)", 6350.29318),
    Unit::linear("US ton (short)", 907184.74),
    Unit::linear("Imperial ton (long)", 1016046.9088),
];

/// Base: square meter.
const AREA: &[Unit] = &[
    Unit::linear("Square millimeter (mm²)", 1e-6),
    Unit::linear("Square centimeter (cm²)", 1e-4),
    Unit::linear("Square meter (m²)", 1.0),
    Unit::linear("Hectare (ha)", 1e4),
    Unit::linear("Square kilometer (km²)", 1e6),
    Unit::linear("Square inch (in²)", 0.00064516),
    Unit::linear("Square foot (ft²)", 0.09290304),
    Unit::linear("Square yard (yd²)", 0.83612736),
    Unit::linear("Acre", 4046.8564224),
    Unit::linear("Square mile (mi²)", 2589988.110336),
];

/// Base: liter.
const VOLUME: &[Unit] = &[
    Unit::linear("Milliliter (ml)", 1e-3),
    Unit::linear("Cubic centimeter (cm³)", 1e-3),
    Unit::linear("Liter (L)", 1.0),
    Unit::linear("Cubic meter (m³)", 1e3),
    Unit::linear("US teaspoon", 0.00492892),
    Unit::linear("US tablespoon", 0.01478676),
    Unit::linear("US fluid ounce (fl oz)", 0.02957353),
    Unit::linear("US cup", 0.2365882),
    Unit::linear("US pint", 0.4731765),
    Unit::linear("US quart", 0.9463529),
    Unit::linear("US gallon", 3.78541),
    Unit::linear("Imperial fluid ounce", 0.0284131),
    Unit::linear("Imperial pint", 0.56826125),
    Unit::linear("Imperial quart", 1.1365225),
    Unit::linear("Imperial gallon", 4.54609),
];

/// Base: second.
const TIME: &[Unit] = &[
    Unit::linear("Nanosecond (ns)", 1e-9),
    Unit::linear("Microsecond (μs)", 1e-6),
    Unit::linear("Millisecond (ms)", 1e-3),
    Unit::linear("Second (s)", 1.0),
    Unit::linear("Minute (min)", 60.0),
    Unit::linear("Hour (h)", 3600.0),
    Unit::linear("Day (d)", 86400.0),
    Unit::linear("Week (wk)", 604800.0),
    Unit::linear("Month (avg)", 2629746.0),
    Unit::linear("Year (365 days)", 31536000.0),
    Unit::linear("Decade", 315360000.0),
    Unit::linear("Century", 3153600000.0),
];

/// Base: meter per second.
const SPEED: &[Unit] = &[
    Unit::linear("Meter per second (m/s)", 1.0),
    Unit::linear("Kilometer per hour (km/h)", 0.277778),
    Unit::linear("Mile per hour (mph)", 0.44704),
    Unit::linear("Foot per second (ft/s)", 0.3048),
    Unit::linear("Knot (kn)", 0.514444),
    Unit::linear("Mach (at sea level)", 340.29),
];

/// Base: byte.  Decimal (KB, MB, …) and binary (KiB, MiB, …) prefixes
/// are distinct units.
const DIGITAL_STORAGE: &[Unit] = &[
    Unit::linear("Bit", 0.125),
    Unit::linear("Byte", 1.0),
    Unit::linear("Kilobyte (KB)", 1e3),
    Unit::linear("Megabyte (MB)", 1e6),
    Unit::linear("Gigabyte (GB)", 1e9),
    Unit::linear("Terabyte (TB)", 1e12),
    Unit::linear("Petabyte (PB)", 1e15),
    Unit::linear("Kibibyte (KiB)", 1024.0),
    Unit::linear("Mebibyte (MiB)", 1048576.0),
    Unit::linear("Gibibyte (GiB)", 1073741824.0),
    Unit::linear("Tebibyte (TiB)", 1099511627776.0),
    Unit::linear("Pebibyte (PiB)", 1125899906842624.0),
];

/// Base: pascal.
const PRESSURE: &[Unit] = &[
    Unit::linear("Pascal (Pa)", 1.0),
    Unit::linear("Kilopascal (kPa)", 1e3),
    Unit::linear("Megapascal (MPa)", 1e6),
    Unit::linear("Bar", 1e5),
    Unit::linear("Atmosphere (atm)", 101325.0),
    Unit::linear("Torr", 133.322),
    Unit::linear("Pound per square inch (psi)", 6894.76),
    Unit::linear("Millimeter of mercury (mmHg)", 133.322),
];

/// Base: joule.
const ENERGY: &[Unit] = &[
    Unit::linear("Joule (J)", 1.0),
    Unit::linear("Kilojoule (kJ)", 1e3),
    Unit::linear("Calorie (cal)", 4.184),
    Unit::linear("Kilocalorie (kcal)", 4184.0),
    Unit::linear("Watt-hour (Wh)", 3600.0),
    Unit::linear("Kilowatt-hour (kWh)", 3.6e6),
    Unit::linear("Electronvolt (eV)", 1.602176634e-19),
    Unit::linear("British Thermal Unit (BTU)", 1055.06),
    Unit::linear("Foot-pound (ft⋅lb)", 1.355818),
];

/// Base: radian.
const ANGLE: &[Unit] = &[
    Unit::linear("Degree (°)", 0.0174533),
    Unit::linear("Radian (rad)", 1.0),
    Unit::linear("Gradian (grad)", 0.015708),
    Unit::linear("Arcminute (′)", 0.000290888),
    Unit::linear("Arcsecond (″)", 4.84814e-6),
    Unit::linear("Turn/Cycle", 6.28319),
];

// ────────────────────────────────────────────────────────────────────
//  Custom tables (no scale factors)
// ────────────────────────────────────────────────────────────────────

const TEMPERATURE: &[Unit] = &[
    Unit::custom("Celsius (°C)"),
    Unit::custom("Fahrenheit (°F)"),
    Unit::custom("Kelvin (K)"),
];

const FUEL_ECONOMY: &[Unit] = &[
    Unit::custom("Miles per gallon (US)"),
    Unit::custom("Miles per gallon (Imperial)"),
    Unit::custom("Kilometers per liter (km/L)"),
    Unit::custom("Liters per 100 kilometers (L/100km)"),
];

// ────────────────────────────────────────────────────────────────────
//  Catalog
// ────────────────────────────────────────────────────────────────────

/// All categories, in display order.
pub static CATALOG: [Category; 12] = [
    Category::new("Length", "📏", Strategy::Linear, LENGTH),
    Category::new("Weight/Mass", "⚖️", Strategy::Linear, WEIGHT),
    Category::new("Temperature", "🌡️", Strategy::Custom(CustomRule::Temperature), TEMPERATURE),
    Category::new("Area", "📐", Strategy::Linear, AREA),
    Category::new("Volume", "🧪", Strategy::Linear, VOLUME),
    Category::new("Time", "⏱️", Strategy::Linear, TIME),
    Category::new("Speed", "🚀", Strategy::Linear, SPEED),
    Category::new("Digital Storage", "💾", Strategy::Linear, DIGITAL_STORAGE),
    Category::new("Pressure", "🔄", Strategy::Linear, PRESSURE),
    Category::new("Energy", "⚡", Strategy::Linear, ENERGY),
    Category::new("Fuel Economy", "🚗", Strategy::Custom(CustomRule::FuelEconomy), FUEL_ECONOMY),
    Category::new("Angle", "📐", Strategy::Linear, ANGLE),
];

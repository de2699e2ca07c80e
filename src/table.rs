use serde::Serialize;

// ── Single conversion ───────────────────────────────────────────────

/// Outcome of one conversion, ready to display.
///
/// `Display` renders the result line, e.g.
/// `1 Inch (in) = 0.0254 Meter (m)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub category: &'static str,
    pub value: f64,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
    pub result: f64,
    /// `result` passed through the engine's number formatting.
    pub result_display: String,
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.value, self.from_unit, self.result_display, self.to_unit
        )
    }
}

// ── Comparison table ────────────────────────────────────────────────

/// One row: a source value and its independently converted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub source: f64,
    pub converted: f64,
    pub source_display: String,
    pub converted_display: String,
}

/// Source values around the user's input next to their conversions.
///
/// | Field     | Meaning                                    |
/// |-----------|--------------------------------------------|
/// | from_unit | header of the source column               |
/// | to_unit   | header of the converted column            |
/// | rows      | 8 rows (scaled input) or 6 rows (input 0) |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionTable {
    pub category: &'static str,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
    pub rows: Vec<ComparisonRow>,
}

impl ConversionTable {
    /// `(source, converted)` pairs in row order.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.rows.iter().map(|r| (r.source, r.converted)).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl std::fmt::Display for ConversionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let left = self
            .rows
            .iter()
            .map(|r| r.source_display.chars().count())
            .chain(std::iter::once(self.from_unit.chars().count()))
            .max()
            .unwrap_or(0);

        write!(f, "{:<left$} | {}", self.from_unit, self.to_unit)?;
        for r in &self.rows {
            let pad = left - r.source_display.chars().count();
            write!(f, "\n{}{} | {}", r.source_display, " ".repeat(pad), r.converted_display)?;
        }
        Ok(())
    }
}

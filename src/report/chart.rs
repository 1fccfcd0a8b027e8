use crate::models::{breakdown::SizeBreakdown, comparison::ComparisonTable};

use super::format_amount;

pub const BAR_WIDTH: usize = 40;

fn bar(value: f64, scale: f64) -> String {
    if scale <= 0.0 {
        return String::new();
    }
    let length = ((value.abs() / scale) * BAR_WIDTH as f64).round() as usize;
    let glyph = if value < 0.0 { "-" } else { "#" };
    glyph.repeat(length)
}

fn largest_magnitude<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    values.fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

/// Horizontal bar per fragrance; losses are drawn with `-`.
pub fn render_profit_chart(breakdown: &SizeBreakdown) -> String {
    let scale = largest_magnitude(breakdown.rows.iter().map(|r| &r.expected_profit));
    let label_width = breakdown
        .rows
        .iter()
        .map(|r| r.fragrance.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("Expected Profit per Fragrance ({})\n", breakdown.size);
    for row in &breakdown.rows {
        out.push_str(&format!(
            "{:<label_width$} |{} {}\n",
            row.fragrance,
            bar(row.expected_profit, scale),
            format_amount(row.expected_profit),
        ));
    }
    out
}

/// One group of bars per fragrance, one bar per compared size.
pub fn render_grouped_chart(table: &ComparisonTable) -> String {
    let scale = largest_magnitude(table.rows.iter().flat_map(|r| r.profits.iter().flatten()));
    let size_width = table
        .sizes
        .iter()
        .map(|s| s.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Profit Comparison Across Bottle Sizes\n");
    for row in &table.rows {
        out.push_str(&format!("{}\n", row.fragrance));
        for (size, profit) in table.sizes.iter().zip(&row.profits) {
            if let Some(profit) = profit {
                out.push_str(&format!(
                    "  {:>size_width$} |{} {}\n",
                    size.to_string(),
                    bar(*profit, scale),
                    format_amount(*profit),
                ));
            }
        }
    }
    out
}

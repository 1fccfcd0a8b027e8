use crate::models::{breakdown::SizeBreakdown, comparison::ComparisonTable};

use super::{format_amount, format_money};

fn render_grid(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == 0 {
                    format!("{cell:<width$}", width = widths[i])
                } else {
                    format!("{cell:>width$}", width = widths[i])
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(headers);
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

pub fn render_breakdown(breakdown: &SizeBreakdown) -> String {
    let headers: Vec<String> = [
        "Fragrance",
        "UnitTotalCost",
        "Quantity",
        "TotalCost",
        "SellPrice",
        "ExpectedRevenue",
        "ExpectedProfit",
        "ProfitMargin%",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();

    let rows: Vec<Vec<String>> = breakdown
        .rows
        .iter()
        .map(|r| {
            vec![
                r.fragrance.clone(),
                format_amount(r.unit_total_cost),
                format_amount(r.quantity),
                format_amount(r.total_cost),
                format_amount(r.sell_price),
                format_amount(r.expected_revenue),
                format_amount(r.expected_profit),
                r.profit_margin_percent
                    .map(format_amount)
                    .unwrap_or_else(|| "n/a".into()),
            ]
        })
        .collect();

    render_grid(&headers, &rows)
}

pub fn render_summary(breakdown: &SizeBreakdown, currency_symbol: &str) -> String {
    let summary = &breakdown.summary;
    format!(
        "Total Expenses: {}\nExpected Total Revenue: {}\nExpected Total Profit: {}\nBreak-Even Units: {}\n",
        format_money(currency_symbol, summary.total_expenses),
        format_money(currency_symbol, summary.total_revenue),
        format_money(currency_symbol, summary.total_profit),
        format_amount(summary.break_even_units),
    )
}

pub fn render_comparison(table: &ComparisonTable) -> String {
    let headers: Vec<String> = std::iter::once("Fragrance".to_string())
        .chain(table.sizes.iter().map(|s| s.to_string()))
        .collect();

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.fragrance.clone())
                .chain(
                    row.profits
                        .iter()
                        .map(|p| p.map(format_amount).unwrap_or_default()),
                )
                .collect()
        })
        .collect();

    render_grid(&headers, &rows)
}

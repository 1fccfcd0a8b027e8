use serde::{Deserialize, Serialize};

use crate::{
    calculator::CalculatorError,
    utils::{price::calculate_break_even_units, unit::SizeLabel},
};

/// Cost and profit of one fragrance filled into one bottle size.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FragranceCostBreakdown {
    pub fragrance: String,
    pub quantity: f64,
    pub fragrance_cost: f64,
    pub bottle_cost: f64,
    pub label_cost: f64,
    pub unit_total_cost: f64,
    pub total_cost: f64,
    pub sell_price: f64,
    pub expected_revenue: f64,
    pub expected_profit: f64,
    pub profit_margin_percent: Option<f64>,
}

impl FragranceCostBreakdown {
    pub fn margin_percent(&self) -> Result<f64, CalculatorError> {
        self.profit_margin_percent
            .ok_or_else(|| CalculatorError::UndefinedMargin(self.fragrance.clone()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BreakdownSummary {
    pub total_expenses: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub break_even_units: f64,
}

impl BreakdownSummary {
    pub fn from_rows(rows: &[FragranceCostBreakdown], sell_price: f64) -> Self {
        let total_expenses: f64 = rows.iter().map(|r| r.total_cost).sum();
        let total_revenue: f64 = rows.iter().map(|r| r.expected_revenue).sum();

        Self {
            total_expenses,
            total_revenue,
            total_profit: total_revenue - total_expenses,
            break_even_units: calculate_break_even_units(total_expenses, sell_price),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SizeBreakdown {
    pub size: SizeLabel,
    pub sell_price: f64,
    pub rows: Vec<FragranceCostBreakdown>,
    pub summary: BreakdownSummary,
}

impl SizeBreakdown {
    pub fn row(&self, fragrance: &str) -> Option<&FragranceCostBreakdown> {
        self.rows.iter().find(|r| r.fragrance == fragrance)
    }
}

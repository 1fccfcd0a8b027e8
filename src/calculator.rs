use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::{
    DEFAULT_LABEL_COST,
    models::{
        breakdown::{BreakdownSummary, FragranceCostBreakdown, SizeBreakdown},
        catalog::{BottleSizeCatalog, Fragrance, FragranceCatalog, PricingRequest},
        comparison::{ComparisonEntry, ComparisonTable},
    },
    utils::{
        price::{calculate_fragrance_cost, calculate_margin_percent, calculate_unit_total_cost},
        unit::{SizeLabel, SizeLabelError},
    },
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Invalid size format: {0}")]
    InvalidSizeFormat(#[from] SizeLabelError),

    #[error("Unknown bottle size: {0}")]
    UnknownSize(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Profit margin is undefined for {0}: total cost is zero")]
    UndefinedMargin(String),
}

/// Cost and profit engine over an immutable fragrance and bottle catalog.
///
/// Every computation is a pure function of the catalogs and its request, so a
/// single calculator can be shared between threads without locking.
#[derive(Debug, Clone)]
pub struct ProfitCalculator {
    fragrances: FragranceCatalog,
    bottles: BottleSizeCatalog,
    label_cost: f64,
}

impl ProfitCalculator {
    pub fn new(fragrances: FragranceCatalog, bottles: BottleSizeCatalog) -> Self {
        Self {
            fragrances,
            bottles,
            label_cost: DEFAULT_LABEL_COST,
        }
    }

    pub fn with_label_cost(mut self, label_cost: f64) -> Result<Self, CalculatorError> {
        if !label_cost.is_finite() || label_cost < 0.0 {
            return Err(CalculatorError::InvalidInput(format!(
                "label cost must be a non-negative number, got {label_cost}"
            )));
        }
        self.label_cost = label_cost;
        Ok(self)
    }

    pub fn fragrances(&self) -> &FragranceCatalog {
        &self.fragrances
    }

    pub fn bottles(&self) -> &BottleSizeCatalog {
        &self.bottles
    }

    pub fn label_cost(&self) -> f64 {
        self.label_cost
    }

    /// Breakdown of every fragrance filled into `request.size`, honouring each
    /// fragrance's quantity, plus the batch totals.
    pub fn compute_single_size(
        &self,
        request: &PricingRequest,
    ) -> Result<SizeBreakdown, CalculatorError> {
        let (size, bottle_cost) = self.resolve_request(request)?;
        let sell_price = request.sell_price;

        let rows: Vec<FragranceCostBreakdown> = self
            .fragrances
            .iter()
            .map(|fragrance| self.breakdown(fragrance, &size, bottle_cost, sell_price))
            .collect();

        let summary = BreakdownSummary::from_rows(&rows, sell_price);

        debug!(
            "computed {} rows for {size} at {sell_price}: profit {}",
            rows.len(),
            summary.total_profit
        );

        Ok(SizeBreakdown {
            size,
            sell_price,
            rows,
            summary,
        })
    }

    /// Long-form profit of one bottle of every fragrance in every requested size.
    pub fn compute_comparison_entries(
        &self,
        requests: &[PricingRequest],
    ) -> Result<Vec<ComparisonEntry>, CalculatorError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(requests.len() * self.fragrances.len());

        for request in requests {
            let (size, bottle_cost) = self.resolve_request(request)?;

            if !seen.insert(size.clone()) {
                return Err(CalculatorError::InvalidInput(format!(
                    "size {size} selected more than once"
                )));
            }

            for fragrance in self.fragrances.iter() {
                let (_, unit_total_cost) = self.unit_cost(fragrance, &size, bottle_cost);
                entries.push(ComparisonEntry {
                    fragrance: fragrance.name.clone(),
                    size: size.clone(),
                    expected_profit: request.sell_price - unit_total_cost,
                });
            }
        }

        Ok(entries)
    }

    /// Profit per fragrance across the requested sizes, pivoted so that each
    /// fragrance is a row and each requested size a column.
    pub fn compute_multi_size_comparison(
        &self,
        requests: &[PricingRequest],
    ) -> Result<ComparisonTable, CalculatorError> {
        let entries = self.compute_comparison_entries(requests)?;
        let table = ComparisonTable::from_entries(&entries)?;

        debug!(
            "compared {} fragrances across {} sizes",
            table.rows.len(),
            table.sizes.len()
        );

        Ok(table)
    }

    fn resolve_request(&self, request: &PricingRequest) -> Result<(SizeLabel, f64), CalculatorError> {
        let size: SizeLabel = request.size.parse()?;

        if !request.sell_price.is_finite() || request.sell_price < 0.0 {
            return Err(CalculatorError::InvalidInput(format!(
                "sell price for {size} must be a non-negative number, got {}",
                request.sell_price
            )));
        }

        let bottle_cost = self
            .bottles
            .cost_of(&size)
            .ok_or_else(|| CalculatorError::UnknownSize(size.to_string()))?;

        Ok((size, bottle_cost))
    }

    fn unit_cost(&self, fragrance: &Fragrance, size: &SizeLabel, bottle_cost: f64) -> (f64, f64) {
        let fragrance_cost = calculate_fragrance_cost(fragrance.cost_price, size.as_f64());
        let unit_total_cost = calculate_unit_total_cost(fragrance_cost, bottle_cost, self.label_cost);
        (fragrance_cost, unit_total_cost)
    }

    fn breakdown(
        &self,
        fragrance: &Fragrance,
        size: &SizeLabel,
        bottle_cost: f64,
        sell_price: f64,
    ) -> FragranceCostBreakdown {
        let (fragrance_cost, unit_total_cost) = self.unit_cost(fragrance, size, bottle_cost);
        let total_cost = unit_total_cost * fragrance.quantity;
        let expected_revenue = sell_price * fragrance.quantity;
        let expected_profit = expected_revenue - total_cost;

        FragranceCostBreakdown {
            fragrance: fragrance.name.clone(),
            quantity: fragrance.quantity,
            fragrance_cost,
            bottle_cost,
            label_cost: self.label_cost,
            unit_total_cost,
            total_cost,
            sell_price,
            expected_revenue,
            expected_profit,
            profit_margin_percent: calculate_margin_percent(expected_profit, total_cost),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::{calculator::CalculatorError, utils::unit::SizeLabel};

/// One long-form observation: the profit of a fragrance in a given size.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ComparisonEntry {
    pub fragrance: String,
    pub size: SizeLabel,
    pub expected_profit: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ComparisonRow {
    pub fragrance: String,
    /// Aligned with `ComparisonTable::sizes`.
    pub profits: Vec<Option<f64>>,
}

/// Profit pivot: one row per fragrance, one column per selected size.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ComparisonTable {
    pub sizes: Vec<SizeLabel>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Rows and columns keep the order in which fragrances and sizes first appear.
    pub fn from_entries(entries: &[ComparisonEntry]) -> Result<Self, CalculatorError> {
        let mut table = Self::default();

        for entry in entries {
            let column = match table.sizes.iter().position(|s| s == &entry.size) {
                Some(index) => index,
                None => {
                    table.sizes.push(entry.size.clone());
                    for row in table.rows.iter_mut() {
                        row.profits.push(None);
                    }
                    table.sizes.len() - 1
                }
            };

            let row_index = match table.rows.iter().position(|r| r.fragrance == entry.fragrance) {
                Some(index) => index,
                None => {
                    table.rows.push(ComparisonRow {
                        fragrance: entry.fragrance.clone(),
                        profits: vec![None; table.sizes.len()],
                    });
                    table.rows.len() - 1
                }
            };

            let cell = &mut table.rows[row_index].profits[column];
            if cell.is_some() {
                return Err(CalculatorError::InvalidInput(format!(
                    "duplicate comparison entry for {} at {}",
                    entry.fragrance, entry.size
                )));
            }
            *cell = Some(entry.expected_profit);
        }

        Ok(table)
    }

    /// Unpivots back to long form, column by column.
    pub fn to_entries(&self) -> Vec<ComparisonEntry> {
        let rows = &self.rows;

        self.sizes
            .iter()
            .enumerate()
            .flat_map(move |(column, size)| {
                rows.iter().filter_map(move |row| {
                    let expected_profit = row.profits.get(column).copied().flatten()?;
                    Some(ComparisonEntry {
                        fragrance: row.fragrance.clone(),
                        size: size.clone(),
                        expected_profit,
                    })
                })
            })
            .collect()
    }

    pub fn get(&self, fragrance: &str, size: &SizeLabel) -> Option<f64> {
        let column = self.sizes.iter().position(|s| s == size)?;
        self.row(fragrance)?.profits.get(column).copied().flatten()
    }

    pub fn row(&self, fragrance: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.fragrance == fragrance)
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

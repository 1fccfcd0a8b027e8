use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{calculator::CalculatorError, utils::unit::SizeLabel};

fn default_quantity() -> f64 {
    1.0
}

fn ensure_non_negative(value: f64, what: &str) -> Result<(), CalculatorError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalculatorError::InvalidInput(format!(
            "{what} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Fragrance {
    pub name: String,
    /// Cost of 100ml of concentrate.
    pub cost_price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
}

impl Fragrance {
    pub fn new(name: impl Into<String>, cost_price: f64) -> Self {
        Self {
            name: name.into(),
            cost_price,
            quantity: default_quantity(),
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BottleSize {
    pub size: SizeLabel,
    /// Packaging cost of one empty bottle.
    pub cost: f64,
}

impl BottleSize {
    pub fn new(size: SizeLabel, cost: f64) -> Self {
        Self { size, cost }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PricingRequest {
    pub size: String,
    pub sell_price: f64,
}

impl PricingRequest {
    pub fn new(size: impl Into<String>, sell_price: f64) -> Self {
        Self {
            size: size.into(),
            sell_price,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FragranceCatalog(Vec<Fragrance>);

impl FragranceCatalog {
    pub fn new(fragrances: Vec<Fragrance>) -> Result<Self, CalculatorError> {
        let mut names = HashSet::new();

        for fragrance in &fragrances {
            if fragrance.name.trim().is_empty() {
                return Err(CalculatorError::InvalidInput(
                    "fragrance name must not be empty".into(),
                ));
            }
            if !names.insert(fragrance.name.as_str()) {
                return Err(CalculatorError::InvalidInput(format!(
                    "duplicate fragrance: {}",
                    fragrance.name
                )));
            }
            ensure_non_negative(
                fragrance.cost_price,
                &format!("cost price of {}", fragrance.name),
            )?;
            ensure_non_negative(
                fragrance.quantity,
                &format!("quantity of {}", fragrance.name),
            )?;
        }

        Ok(Self(fragrances))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragrance> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Fragrance> {
        self.0.iter().find(|f| f.name == name)
    }

    /// Returns a copy of the catalog with one fragrance's quantity replaced.
    pub fn with_quantity(&self, name: &str, quantity: f64) -> Result<Self, CalculatorError> {
        ensure_non_negative(quantity, &format!("quantity of {name}"))?;

        if self.get(name).is_none() {
            return Err(CalculatorError::InvalidInput(format!(
                "unknown fragrance: {name}"
            )));
        }

        let fragrances = self
            .0
            .iter()
            .map(|f| {
                if f.name == name {
                    f.clone().with_quantity(quantity)
                } else {
                    f.clone()
                }
            })
            .collect();

        Ok(Self(fragrances))
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BottleSizeCatalog(Vec<BottleSize>);

impl BottleSizeCatalog {
    pub fn new(bottles: Vec<BottleSize>) -> Result<Self, CalculatorError> {
        let mut seen = HashSet::new();

        for bottle in &bottles {
            if !seen.insert(bottle.size.clone()) {
                return Err(CalculatorError::InvalidInput(format!(
                    "duplicate bottle size: {}",
                    bottle.size
                )));
            }
            ensure_non_negative(bottle.cost, &format!("bottle cost of {}", bottle.size))?;
        }

        Ok(Self(bottles))
    }

    pub fn cost_of(&self, size: &SizeLabel) -> Option<f64> {
        self.0.iter().find(|b| &b.size == size).map(|b| b.cost)
    }

    pub fn sizes(&self) -> impl Iterator<Item = &SizeLabel> {
        self.0.iter().map(|b| &b.size)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BottleSize> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#![allow(dead_code)]

use perfumery::{ProfitCalculator, config::Settings};

pub fn default_calculator() -> ProfitCalculator {
    Settings::default().calculator().unwrap()
}

pub mod calculator;
pub mod config;
pub mod models;
pub mod report;
pub mod utils;

pub use calculator::{CalculatorError, ProfitCalculator};

pub const DEFAULT_LABEL_COST: f64 = 10.0;
pub const DEFAULT_CONFIG_PATH: &str = "perfumery.toml";

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{
    DEFAULT_CONFIG_PATH, DEFAULT_LABEL_COST,
    calculator::{CalculatorError, ProfitCalculator},
    models::catalog::{BottleSize, BottleSizeCatalog, Fragrance, FragranceCatalog},
    utils::unit::SizeLabel,
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configured catalog is invalid: {0}")]
    Catalog(#[from] CalculatorError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency_symbol: String,
    pub label_cost: f64,
    pub default_sell_price: f64,
    pub compare_sizes: Vec<SizeLabel>,
    pub bottles: Vec<BottleSize>,
    pub fragrances: Vec<Fragrance>,
}

impl Settings {
    pub fn load(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let default = Self::default();

        match Self::load_from_file(config_path) {
            Ok(settings) => Ok(settings),
            Err(err) if config_path.is_none() => {
                warn!("Could not read config file: {err}. Using default configuration.");
                Ok(default)
            }
            Err(err) => Err(err),
        }
    }

    fn load_from_file(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let path = config_path.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

        let config = Config::builder()
            .add_source(File::with_name(path).required(config_path.is_some()))
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(config)
    }

    pub fn calculator(&self) -> Result<ProfitCalculator, SettingsError> {
        let fragrances = FragranceCatalog::new(self.fragrances.clone())?;
        let bottles = BottleSizeCatalog::new(self.bottles.clone())?;

        Ok(ProfitCalculator::new(fragrances, bottles).with_label_cost(self.label_cost)?)
    }
}

fn default_bottles() -> Vec<BottleSize> {
    [
        (3, 125.0),
        (6, 150.0),
        (10, 500.0),
        (12, 500.0),
        (15, 500.0),
        (20, 670.0),
        (30, 1000.0),
        (50, 1100.0),
        (100, 1300.0),
    ]
    .into_iter()
    .filter_map(|(ml, cost)| SizeLabel::new(ml).ok().map(|size| BottleSize::new(size, cost)))
    .collect()
}

fn default_fragrances() -> Vec<Fragrance> {
    [
        ("Royal Black", 8300.0),
        ("Bombshell", 8500.0),
        ("Attractive", 8800.0),
        ("Sweet Temptation", 6800.0),
        ("Black Orchid", 7200.0),
        ("Sugar Baby", 7500.0),
        ("Pink Sugar", 7500.0),
        ("Black Oud", 9200.0),
        ("Good Girl", 8500.0),
        ("Pure Seduction", 6800.0),
        ("Gucci Bamboo", 8500.0),
        ("Giorgio Armani", 6800.0),
        ("Dunhil", 8500.0),
        ("Creed Aventus", 8500.0),
        ("Signature", 8500.0),
    ]
    .into_iter()
    .map(|(name, cost_price)| Fragrance::new(name, cost_price))
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₦".to_string(),
            label_cost: DEFAULT_LABEL_COST,
            default_sell_price: 1500.0,
            compare_sizes: [6, 12, 30]
                .into_iter()
                .filter_map(|ml| SizeLabel::new(ml).ok())
                .collect(),
            bottles: default_bottles(),
            fragrances: default_fragrances(),
        }
    }
}

use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::Parser;
use perfumery::{
    ProfitCalculator,
    config::Settings,
    models::catalog::PricingRequest,
    report::{
        chart::{render_grouped_chart, render_profit_chart},
        table::{render_breakdown, render_comparison, render_summary},
    },
    utils::unit::SizeLabel,
};
use serde_json::json;
use tracing::{info, warn};

fn init_tracing() {
    tracing_subscriber::fmt::init();
}

fn parse_pair(value: &str) -> Result<(String, f64), String> {
    let (key, amount) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {value}"))?;
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number in {value}: {e}"))?;
    Ok((key.trim().to_string(), amount))
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(long, help = "(Optional) Sets the configuration file path.", required = false)]
    pub config: Option<String>,

    #[arg(
        long,
        help = "(Optional) Sets the bottle size for the detailed view.",
        required = false
    )]
    pub size: Option<String>,

    #[arg(
        long,
        help = "(Optional) Sets the selling price for the detailed view size.",
        required = false
    )]
    pub price: Option<f64>,

    #[arg(
        long,
        help = "(Optional) Adds a SIZE=PRICE pair to the size comparison.",
        value_parser = parse_pair,
        required = false
    )]
    pub compare: Vec<(String, f64)>,

    #[arg(
        long,
        help = "(Optional) Overrides a fragrance quantity as NAME=QUANTITY.",
        value_parser = parse_pair,
        required = false
    )]
    pub quantity: Vec<(String, f64)>,

    #[arg(long, help = "(Optional) Prints results as JSON.", required = false)]
    pub json: bool,
}

/// Keeps the first price given for each size. Unparseable sizes are passed
/// through so the calculator can report them.
fn dedup_requests(requests: Vec<PricingRequest>) -> Vec<PricingRequest> {
    let mut seen: HashSet<SizeLabel> = HashSet::new();
    let mut unique: Vec<PricingRequest> = Vec::with_capacity(requests.len());
    for request in requests {
        if let Ok(size) = request.size.parse::<SizeLabel>() {
            if !seen.insert(size) {
                warn!("Ignoring repeated comparison size {}", request.size);
                continue;
            }
        }
        unique.push(request);
    }
    unique
}

fn comparison_requests(settings: &Settings, compare: Vec<(String, f64)>) -> Vec<PricingRequest> {
    let requests = if compare.is_empty() {
        settings
            .compare_sizes
            .iter()
            .map(|s| PricingRequest::new(s.to_string(), settings.default_sell_price))
            .collect()
    } else {
        compare
            .into_iter()
            .map(|(size, price)| PricingRequest::new(size, price))
            .collect()
    };
    dedup_requests(requests)
}

fn apply_quantities(
    calculator: ProfitCalculator,
    quantities: &[(String, f64)],
) -> Result<ProfitCalculator> {
    if quantities.is_empty() {
        return Ok(calculator);
    }

    let mut fragrances = calculator.fragrances().clone();
    for (name, quantity) in quantities {
        fragrances = fragrances.with_quantity(name, *quantity)?;
    }

    Ok(ProfitCalculator::new(fragrances, calculator.bottles().clone())
        .with_label_cost(calculator.label_cost())?)
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let settings = Settings::load(&args.config)?;
    let calculator = apply_quantities(settings.calculator()?, &args.quantity)?;

    info!(
        "Loaded {} fragrances and {} bottle sizes",
        calculator.fragrances().len(),
        calculator.bottles().len()
    );

    let size = match args.size {
        Some(size) => size,
        None => calculator
            .bottles()
            .sizes()
            .next()
            .map(|s| s.to_string())
            .context("No bottle sizes configured")?,
    };
    let price = args.price.unwrap_or(settings.default_sell_price);

    let breakdown = calculator.compute_single_size(&PricingRequest::new(size, price))?;

    let requests = comparison_requests(&settings, args.compare);
    let comparison = calculator.compute_multi_size_comparison(&requests)?;

    if args.json {
        let payload = json!({
            "breakdown": breakdown,
            "comparison": comparison,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Calculations for {} bottles\n", breakdown.size);
    println!("{}", render_breakdown(&breakdown));
    println!("{}", render_summary(&breakdown, &settings.currency_symbol));
    println!("{}", render_profit_chart(&breakdown));

    if !comparison.is_empty() {
        println!("{}", render_comparison(&comparison));
        println!("{}", render_grouped_chart(&comparison));
    }

    Ok(())
}

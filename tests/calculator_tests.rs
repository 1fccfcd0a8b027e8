mod common;

use perfumery::{
    CalculatorError, ProfitCalculator,
    models::catalog::{BottleSize, BottleSizeCatalog, Fragrance, FragranceCatalog, PricingRequest},
    utils::unit::SizeLabelError,
};

use common::default_calculator;

fn size_ml(label: &str) -> f64 {
    label.trim_end_matches("ml").parse().unwrap()
}

#[test]
fn sweet_temptation_twelve_ml() {
    let calculator = default_calculator();
    let breakdown = calculator
        .compute_single_size(&PricingRequest::new("12ml", 1500.0))
        .unwrap();

    let row = breakdown.row("Sweet Temptation").unwrap();
    assert_eq!(row.fragrance_cost, 816.0);
    assert_eq!(row.bottle_cost, 500.0);
    assert_eq!(row.label_cost, 10.0);
    assert_eq!(row.unit_total_cost, 1326.0);
    assert_eq!(row.total_cost, 1326.0);
    assert_eq!(row.expected_revenue, 1500.0);
    assert_eq!(row.expected_profit, 174.0);
    let margin = row.margin_percent().unwrap();
    assert!((margin - 13.12).abs() < 0.005, "margin was {margin}");
}

#[test]
fn unit_total_cost_matches_formula_for_every_size() {
    let calculator = default_calculator();

    for bottle in calculator.bottles().iter() {
        let label = bottle.size.to_string();
        let breakdown = calculator
            .compute_single_size(&PricingRequest::new(label.clone(), 1500.0))
            .unwrap();

        assert_eq!(breakdown.rows.len(), calculator.fragrances().len());
        for (row, fragrance) in breakdown.rows.iter().zip(calculator.fragrances().iter()) {
            let expected = (fragrance.cost_price / 100.0) * size_ml(&label) + bottle.cost + 10.0;
            assert_eq!(row.unit_total_cost, expected, "{} at {label}", row.fragrance);
            assert_eq!(row.expected_profit, row.expected_revenue - row.total_cost);
        }
    }
}

#[test]
fn summary_totals_and_break_even() {
    let calculator = default_calculator();
    let breakdown = calculator
        .compute_single_size(&PricingRequest::new("30ml", 2500.0))
        .unwrap();
    let summary = &breakdown.summary;

    let expenses: f64 = breakdown.rows.iter().map(|r| r.total_cost).sum();
    let revenue: f64 = breakdown.rows.iter().map(|r| r.expected_revenue).sum();
    assert_eq!(summary.total_expenses, expenses);
    assert_eq!(summary.total_revenue, revenue);
    assert_eq!(summary.total_profit, summary.total_revenue - summary.total_expenses);
    assert!((summary.break_even_units * 2500.0 - summary.total_expenses).abs() < 1e-6);
}

#[test]
fn free_bottles_break_even_at_zero() {
    let calculator = default_calculator();
    let breakdown = calculator
        .compute_single_size(&PricingRequest::new("6ml", 0.0))
        .unwrap();

    assert_eq!(breakdown.summary.break_even_units, 0.0);
    assert_eq!(breakdown.summary.total_revenue, 0.0);
    assert!(breakdown.summary.total_profit < 0.0);
}

#[test]
fn quantities_scale_cost_and_revenue() {
    let fragrances = FragranceCatalog::new(vec![
        Fragrance::new("Sweet Temptation", 6800.0).with_quantity(3.0),
    ])
    .unwrap();
    let bottles =
        BottleSizeCatalog::new(vec![BottleSize::new("12ml".parse().unwrap(), 500.0)]).unwrap();
    let calculator = ProfitCalculator::new(fragrances, bottles);

    let breakdown = calculator
        .compute_single_size(&PricingRequest::new("12ml", 1500.0))
        .unwrap();
    let row = &breakdown.rows[0];

    assert_eq!(row.unit_total_cost, 1326.0);
    assert_eq!(row.total_cost, 3978.0);
    assert_eq!(row.expected_revenue, 4500.0);
    assert_eq!(row.expected_profit, 522.0);
    assert_eq!(breakdown.summary.break_even_units, 3978.0 / 1500.0);
}

#[test]
fn zero_cost_reports_undefined_margin() {
    let fragrances = FragranceCatalog::new(vec![Fragrance::new("Water", 0.0)]).unwrap();
    let bottles =
        BottleSizeCatalog::new(vec![BottleSize::new("3ml".parse().unwrap(), 0.0)]).unwrap();
    let calculator = ProfitCalculator::new(fragrances, bottles)
        .with_label_cost(0.0)
        .unwrap();

    let breakdown = calculator
        .compute_single_size(&PricingRequest::new("3ml", 100.0))
        .unwrap();
    let row = &breakdown.rows[0];

    assert_eq!(row.unit_total_cost, 0.0);
    assert_eq!(row.profit_margin_percent, None);
    assert_eq!(
        row.margin_percent(),
        Err(CalculatorError::UndefinedMargin("Water".into()))
    );
}

#[test]
fn rejects_malformed_sizes() {
    let calculator = default_calculator();

    for label in ["12", "twelve ml", "0ml", ""] {
        let result = calculator.compute_single_size(&PricingRequest::new(label, 1500.0));
        assert!(
            matches!(result, Err(CalculatorError::InvalidSizeFormat(_))),
            "{label:?} gave {result:?}"
        );
    }

    assert_eq!(
        calculator
            .compute_single_size(&PricingRequest::new("12", 1500.0))
            .unwrap_err(),
        CalculatorError::InvalidSizeFormat(SizeLabelError::MissingUnit("12".into()))
    );
}

#[test]
fn rejects_sizes_outside_the_catalog() {
    let calculator = default_calculator();
    assert_eq!(
        calculator
            .compute_single_size(&PricingRequest::new("7ml", 1500.0))
            .unwrap_err(),
        CalculatorError::UnknownSize("7ml".into())
    );
}

#[test]
fn rejects_negative_prices() {
    let calculator = default_calculator();

    for price in [-1.0, f64::NAN, f64::INFINITY] {
        let result = calculator.compute_single_size(&PricingRequest::new("12ml", price));
        assert!(matches!(result, Err(CalculatorError::InvalidInput(_))));
    }

    let result = calculator.compute_multi_size_comparison(&[
        PricingRequest::new("6ml", 1200.0),
        PricingRequest::new("12ml", -5.0),
    ]);
    assert!(matches!(result, Err(CalculatorError::InvalidInput(_))));
}

#[test]
fn rejects_negative_label_cost() {
    let calculator = default_calculator();
    assert!(matches!(
        calculator.with_label_cost(-10.0),
        Err(CalculatorError::InvalidInput(_))
    ));
}

#[test]
fn repeated_calls_are_independent() {
    let calculator = default_calculator();
    let request = PricingRequest::new("50ml", 4000.0);

    let first = calculator.compute_single_size(&request).unwrap();
    calculator
        .compute_single_size(&PricingRequest::new("3ml", 500.0))
        .unwrap();
    let second = calculator.compute_single_size(&request).unwrap();

    assert_eq!(first, second);
}

#[test]
fn shared_between_threads() {
    let calculator = default_calculator();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["3ml", "12ml", "100ml"]
            .into_iter()
            .map(|size| {
                let calculator = &calculator;
                scope.spawn(move || {
                    calculator
                        .compute_single_size(&PricingRequest::new(size, 1500.0))
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            let breakdown = handle.join().unwrap();
            assert_eq!(breakdown.rows.len(), 15);
        }
    });
}

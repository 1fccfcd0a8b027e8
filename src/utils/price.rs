/// Cost of the concentrate in one bottle; `cost_price` is quoted per 100ml.
pub fn calculate_fragrance_cost(cost_price: f64, size_ml: f64) -> f64 {
    (cost_price / 100.0) * size_ml
}

pub fn calculate_unit_total_cost(fragrance_cost: f64, bottle_cost: f64, label_cost: f64) -> f64 {
    fragrance_cost + bottle_cost + label_cost
}

/// Profit as a percentage of cost. `None` when there is no cost to divide by.
pub fn calculate_margin_percent(profit: f64, total_cost: f64) -> Option<f64> {
    if total_cost == 0.0 {
        return None;
    }
    Some(profit / total_cost * 100.0)
}

/// Units that must sell at `sell_price` to cover `total_expenses`; 0 for a free bottle.
pub fn calculate_break_even_units(total_expenses: f64, sell_price: f64) -> f64 {
    if sell_price > 0.0 {
        total_expenses / sell_price
    } else {
        0.0
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

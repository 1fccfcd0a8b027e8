pub mod chart;
pub mod table;

use crate::utils::price::round_to;

pub fn format_amount(value: f64) -> String {
    let rounded = round_to(value, 2) + 0.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.2}")
    }
}

pub fn format_money(currency_symbol: &str, value: f64) -> String {
    format!("{currency_symbol}{}", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_fraction_for_whole_amounts() {
        assert_eq!(format_amount(1326.0), "1326");
        assert_eq!(format_amount(13.1221), "13.12");
        assert_eq!(format_money("₦", -174.0), "₦-174");
    }

    #[test]
    fn tiny_negatives_print_as_zero() {
        assert_eq!(format_amount(-0.001), "0");
        assert_eq!(format_amount(-0.0), "0");
    }
}

//! Display formatting for the calculator session.

use crate::calculator::Operation;

/// Decimal places a displayed result is rounded to.
pub const RESULT_DECIMALS: usize = 10;

/// Formats a result for the display.
///
/// Integers print plainly; other values are rounded to [`RESULT_DECIMALS`]
/// places with trailing zeros stripped.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() || value.fract() == 0.0 {
        return format_number(value);
    }

    let rounded = format!("{value:.prec$}", prec = RESULT_DECIMALS)
        .parse::<f64>()
        .unwrap_or(value);
    format_number(rounded)
}

/// Plain number text: shortest round-trip digits, no exponent, `-0` as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Symbol shown between operands in the history.
pub fn operator_symbol(operation: Operation) -> &'static str {
    match operation {
        Operation::Add => "+",
        Operation::Subtract => "−",
        Operation::Multiply => "×",
        Operation::Divide => "÷",
        Operation::Power => "x^y",
        Operation::Modulo => "Mod",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_print_plainly() {
        assert_eq!(format_result(5.0), "5");
        assert_eq!(format_result(-1024.0), "-1024");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_rounds_to_ten_places() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_result(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn test_strips_trailing_zeros() {
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(0.000_000_000_01), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_result(f64::INFINITY), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(operator_symbol(Operation::Subtract), "−");
        assert_eq!(operator_symbol(Operation::Power), "x^y");
        assert_eq!(operator_symbol(Operation::Modulo), "Mod");
    }
}

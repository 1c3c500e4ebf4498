//! Amount Parsing and Display
//!
//! The marketing datasets write money the way people do ("₹75,000");
//! everything numeric in the models goes through [`parse_amount`] once
//! on the way in. [`format_inr`] is the presentation-only inverse with
//! Indian digit grouping.

/// Parse a possibly currency-formatted amount. Strips every character
/// that is not an ASCII digit or a dot, then parses; anything that
/// still fails comes back as 0.0 rather than an error.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Format whole rupees with Indian grouping: the last three digits,
/// then pairs ("₹75,00,000"). Fractions round to the nearest rupee.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let digits = format!("{:.0}", amount.abs());
    let grouped = group_indian(&digits);
    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 2 {
        parts.push(&head[end - 2..end]);
        end -= 2;
    }
    parts.push(&head[..end]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_numbers() {
        assert_eq!(parse_amount("75000"), 75000.0);
        assert_eq!(parse_amount("12.50"), 12.5);
    }

    #[test]
    fn test_strips_currency_formatting() {
        assert_eq!(parse_amount("₹75,000"), 75000.0);
        assert_eq!(parse_amount("Rs 1,20,000"), 120000.0);
        assert_eq!(parse_amount(" ₹ 500 /month "), 500.0);
    }

    #[test]
    fn test_parse_failure_is_zero_not_an_error() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("n/a"), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
    }

    #[test]
    fn test_formats_with_indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(500.0), "₹500");
        assert_eq!(format_inr(75000.0), "₹75,000");
        assert_eq!(format_inr(7_500_000.0), "₹75,00,000");
        assert_eq!(format_inr(123_456_789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_formats_rounding_and_sign() {
        assert_eq!(format_inr(999.6), "₹1,000");
        assert_eq!(format_inr(-75000.0), "-₹75,000");
    }

    #[test]
    fn test_round_trips_through_display_formatting() {
        let amount = parse_amount("₹75,00,000");
        assert_eq!(format_inr(amount), "₹75,00,000");
    }
}

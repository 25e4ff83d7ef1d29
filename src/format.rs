//! Display formatting for currency amounts
//!
//! Loan figures use Indian digit grouping (12,34,567) with a currency code
//! suffix. Product prices use a plain two-decimal dollar format.

/// Format a whole-unit amount with Indian grouping and a currency suffix
///
/// Rounds half away from zero. Non-finite amounts render as `0`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    format!("{} {}", group_indian(amount), currency)
}

/// Format a price as `$1234.50`
pub fn format_usd(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

fn group_indian(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        // Leading part is grouped in pairs, counted from the right
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(0.0, "INR"), "0 INR");
        assert_eq!(format_currency(999.0, "INR"), "999 INR");
        assert_eq!(format_currency(1000.0, "INR"), "1,000 INR");
        assert_eq!(format_currency(100_000.0, "INR"), "1,00,000 INR");
        assert_eq!(format_currency(1_234_567.0, "INR"), "12,34,567 INR");
        assert_eq!(format_currency(123_456_789.0, "INR"), "12,34,56,789 INR");
    }

    #[test]
    fn test_rounding_and_sign() {
        assert_eq!(format_currency(8678.5, "INR"), "8,679 INR");
        assert_eq!(format_currency(8678.49, "INR"), "8,678 INR");
        assert_eq!(format_currency(-12_500.0, "INR"), "-12,500 INR");
        assert_eq!(format_currency(-0.4, "INR"), "0 INR");
    }

    #[test]
    fn test_non_finite_renders_zero() {
        assert_eq!(format_currency(f64::NAN, "USD"), "0 USD");
        assert_eq!(format_currency(f64::INFINITY, "USD"), "0 USD");
    }

    #[test]
    fn test_usd() {
        assert_eq!(format_usd(9.99), "$9.99");
        assert_eq!(format_usd(10.0), "$10.00");
        assert_eq!(format_usd(-2.5), "-$2.50");
    }
}

//! Formatting of amounts and quantities for the en-IN locale
//!
//! Indian digit grouping separates the last three integer digits, then every
//! two digits after that: `12,34,567`.

/// Rupee sign used as the currency prefix
pub const RUPEE: char = '₹';

/// Fraction digits shown for currency amounts
const CURRENCY_FRACTION_DIGITS: usize = 2;

/// Maximum fraction digits shown for quantities
const QUANTITY_FRACTION_DIGITS: usize = 3;

/// Insert Indian-style group separators into a run of ASCII digits
///
/// # Examples
///
/// ```
/// use jobwork_domain::format::group_indian;
///
/// assert_eq!(group_indian("1234567"), "12,34,567");
/// assert_eq!(group_indian("999"), "999");
/// ```
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a rupee amount, e.g. `₹12,34,567.50`
///
/// Always two fraction digits. Negative amounts get a leading `-`. NaN and
/// infinities format as zero.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.*}", CURRENCY_FRACTION_DIGITS, amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let sign = if amount < 0.0 && !is_all_zero(&fixed) { "-" } else { "" };
    format!("{sign}{RUPEE}{}.{frac_part}", group_indian(int_part))
}

/// Format a quantity (pieces, metres) with up to three fraction digits
///
/// Trailing fractional zeros are dropped: `12.50` becomes `12.5` and `150000`
/// becomes `1,50,000`.
pub fn format_quantity(quantity: f64) -> String {
    let quantity = if quantity.is_finite() { quantity } else { 0.0 };
    let fixed = format!("{:.*}", QUANTITY_FRACTION_DIGITS, quantity.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let sign = if quantity < 0.0 && !is_all_zero(&fixed) { "-" } else { "" };
    let grouped = group_indian(int_part);
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

fn is_all_zero(fixed: &str) -> bool {
    fixed.chars().all(|c| c == '0' || c == '.')
}

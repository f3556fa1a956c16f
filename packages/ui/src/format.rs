//! Display helpers for amounts, dates and counters.

use store::models::parse_day;

/// Two decimals with the currency symbol in front: `$12.50`.
pub fn money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{symbol}{:.2}", -amount)
    } else {
        format!("{symbol}{amount:.2}")
    }
}

/// Calendar day of a backend timestamp, or the raw value if it does not
/// parse.
pub fn day(value: &str) -> String {
    match parse_day(value) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    }
}

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Thousands separated by a thin space: `12 345`.
pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(12.5, "$"), "$12.50");
        assert_eq!(money(0.0, "MAD "), "MAD 0.00");
        assert_eq!(money(-3.0, "$"), "-$3.00");
    }

    #[test]
    fn test_day() {
        assert_eq!(day("2024-06-01T10:00:00.000Z"), "2024-06-01");
        assert_eq!(day("yesterday"), "yesterday");
    }

    #[test]
    fn test_counters() {
        assert_eq!(percent(12.5), "12.50%");
        assert_eq!(percent(0.0), "0.00%");
        assert_eq!(count(0), "0");
        assert_eq!(count(999), "999");
        assert_eq!(count(1000), "1 000");
        assert_eq!(count(1234567), "1 234 567");
    }
}

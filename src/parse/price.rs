use std::sync::OnceLock;

use regex::Regex;

/// Reduce a rendered price like `"3,50 €"` to minor units (350).
///
/// Everything that is not an ASCII digit is stripped, so the decimal
/// separator and currency symbol fall away and the remaining digits already
/// read as cents. Text with no digits at all counts as zero.
pub fn price_cents(text: &str) -> u32 {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[^0-9]+").expect("regex should be valid"));
    re.replace_all(text, "").parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separator_and_currency_sign() {
        assert_eq!(price_cents("3,50 €"), 350);
    }

    #[test]
    fn dot_separator() {
        assert_eq!(price_cents("12.00€"), 1200);
    }

    #[test]
    fn no_digits_is_zero() {
        assert_eq!(price_cents("—"), 0);
        assert_eq!(price_cents(""), 0);
    }

    #[test]
    fn bare_digits_pass_through() {
        assert_eq!(price_cents("250"), 250);
    }
}

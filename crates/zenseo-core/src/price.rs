//! Price display in Brazilian reais.
//!
//! Prices arrive from the shop API as numbers, numeric strings, already
//! formatted strings or nothing at all. Formatting never fails: anything that
//! is not a number is shown as given.

use crate::locale::Locale;

/// Shown when the shop sends no price.
pub const MISSING_PRICE: &str = "R$ 0,00";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceInput<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl<'a> From<Option<&'a str>> for PriceInput<'a> {
    fn from(raw: Option<&'a str>) -> Self {
        raw.map_or(PriceInput::Missing, PriceInput::Text)
    }
}

/// Formats `input` as BRL in `locale`.
///
/// - `pt-BR`: `R$ 1.234,56` (non-breaking space after the symbol)
/// - `en`: `R$1,234.56`
pub fn format_price(input: PriceInput<'_>, locale: Locale) -> String {
    match input {
        PriceInput::Missing => MISSING_PRICE.to_string(),
        PriceInput::Number(n) => format_amount(n, locale),
        PriceInput::Text(s) if s.contains('$') => s.to_string(),
        PriceInput::Text(s) => match parse_leading_number(s) {
            Some(n) => format_amount(n, locale),
            None => s.to_string(),
        },
    }
}

fn format_amount(amount: f64, locale: Locale) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let (group_sep, decimal_sep, symbol) = match locale {
        Locale::PtBr => ('.', ',', "R$\u{a0}"),
        Locale::En => (',', '.', "R$"),
    };
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100, group_sep);
    format!("{sign}{symbol}{whole}{decimal_sep}{:02}", cents % 100)
}

fn group_thousands(n: u64, sep: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Longest numeric prefix after leading whitespace (`"12.5 BRL"` → 12.5).
/// `None` when there are no digits.
fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_in_both_locales() {
        assert_eq!(format_price(PriceInput::Number(1234.5), Locale::PtBr), "R$\u{a0}1.234,50");
        assert_eq!(format_price(PriceInput::Number(1234.5), Locale::En), "R$1,234.50");
        assert_eq!(format_price(PriceInput::Number(0.0), Locale::PtBr), "R$\u{a0}0,00");
        assert_eq!(
            format_price(PriceInput::Number(1_000_000.0), Locale::En),
            "R$1,000,000.00"
        );
    }

    #[test]
    fn negative_and_rounding() {
        assert_eq!(format_price(PriceInput::Number(-9.999), Locale::En), "-R$10.00");
        assert_eq!(format_price(PriceInput::Number(-0.001), Locale::En), "R$0.00");
        assert_eq!(format_price(PriceInput::Number(19.994), Locale::PtBr), "R$\u{a0}19,99");
    }

    #[test]
    fn numeric_strings() {
        assert_eq!(format_price(PriceInput::Text("49.90"), Locale::PtBr), "R$\u{a0}49,90");
        assert_eq!(format_price(PriceInput::Text(" 12abc"), Locale::En), "R$12.00");
        assert_eq!(format_price(PriceInput::Text("7."), Locale::En), "R$7.00");
    }

    #[test]
    fn preformatted_and_garbage_pass_through() {
        assert_eq!(format_price(PriceInput::Text("R$ 10,00"), Locale::En), "R$ 10,00");
        assert_eq!(format_price(PriceInput::Text("$5"), Locale::PtBr), "$5");
        assert_eq!(format_price(PriceInput::Text("free"), Locale::PtBr), "free");
        assert_eq!(format_price(PriceInput::Text(""), Locale::PtBr), "");
    }

    #[test]
    fn missing_price() {
        assert_eq!(format_price(PriceInput::from(None), Locale::En), MISSING_PRICE);
        assert_eq!(MISSING_PRICE, "R$ 0,00");
        assert_eq!(
            format_price(PriceInput::from(Some("3")), Locale::En),
            "R$3.00"
        );
    }

    #[test]
    fn non_finite_numbers_shown_raw() {
        assert_eq!(format_price(PriceInput::Number(f64::NAN), Locale::En), "NaN");
    }
}

//! crates/dash_core/src/format.rs
//!
//! Locale formatting for dashboard figures.
//!
//! - Integers use the locale grouping separator every three digits.
//! - Percentages are `x * 100` rounded to exactly two decimals, with the
//!   locale decimal separator and a trailing `%`. Rounding applies to the
//!   exact stored value of `x * 100`; an exact half rounds away from zero.
//!   The integer part is not grouped (shares never exceed 100%).
//! - The dashboard always formats with `PT_BR`; other locales exist for tests
//!   and callers that embed the formatter elsewhere.

/// Separator pair for a number locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    pub group: char,
    pub decimal: char,
}

/// Brazilian Portuguese: `1.234.567` and `12,34%`.
pub const PT_BR: NumberLocale = NumberLocale { group: '.', decimal: ',' };

/// English (US): `1,234,567` and `12.34%`.
pub const EN_US: NumberLocale = NumberLocale { group: ',', decimal: '.' };

/// Placeholder for values that cannot be rendered (NaN, ±inf).
pub const NOT_A_NUMBER: &str = "—";

/// Format a count with pt-BR digit grouping.
#[inline]
pub fn format_integer(n: u64) -> String {
    format_integer_in(n, PT_BR)
}

/// Format a fraction in [0,1] as a pt-BR percentage with two decimals.
#[inline]
pub fn format_percent(x: f64) -> String {
    format_percent_in(x, PT_BR)
}

pub fn format_integer_in(n: u64, locale: NumberLocale) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(locale.group);
        }
        out.push(ch);
    }
    out
}

pub fn format_percent_in(x: f64, locale: NumberLocale) -> String {
    if !x.is_finite() {
        return NOT_A_NUMBER.to_string();
    }
    // -0.0 prints without a sign
    let pct = if x == 0.0 { 0.0 } else { x * 100.0 };
    let body = if is_half_hundredth(pct) {
        // `{:.2}` breaks exact ties to even; these round away from zero instead
        let hundredths = (pct * 100.0).round() as i64;
        let sign = if hundredths < 0 { "-" } else { "" };
        let abs = hundredths.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    } else {
        format!("{:.2}", pct)
    };
    format!("{}%", body.replace('.', &locale.decimal.to_string()))
}

/// True when `v` sits exactly halfway between two hundredths.
///
/// A binary float is such a tie only if `8 * v` is an odd integer.
fn is_half_hundredth(v: f64) -> bool {
    let eighths = v * 8.0;
    eighths.fract() == 0.0 && (eighths % 2.0).abs() == 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn integers_group_by_thousands() {
        assert_eq!(format_integer(0), "0");
        assert_eq!(format_integer(999), "999");
        assert_eq!(format_integer(1_000), "1.000");
        assert_eq!(format_integer(1_234_567), "1.234.567");
        assert_eq!(format_integer(u64::MAX), "18.446.744.073.709.551.615");
        assert_eq!(format_integer_in(1_234_567, EN_US), "1,234,567");
    }

    #[test]
    fn percents_have_two_decimals() {
        assert_eq!(format_percent(0.1234), "12,34%");
        assert_eq!(format_percent(1.0), "100,00%");
        assert_eq!(format_percent(0.0), "0,00%");
        assert_eq!(format_percent(0.5), "50,00%");
        assert_eq!(format_percent(0.000_04), "0,00%");
        assert_eq!(format_percent(0.000_1), "0,01%");
        assert_eq!(format_percent(-0.0), "0,00%");
        assert_eq!(format_percent_in(0.1234, EN_US), "12.34%");
    }

    #[test]
    fn percents_round_the_stored_value() {
        // 0.00035 * 100 is stored just below 0.035
        assert_eq!(format_percent(0.000_35), "0,03%");
        assert_eq!(format_percent(0.000_45), "0,04%");
        assert_eq!(format_percent(0.125), "12,50%");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(format_percent(1.0 / 32.0), "3,13%");
        assert_eq!(format_percent(5.0 / 32.0), "15,63%");
        assert_eq!(format_percent(3.0 / 32.0), "9,38%");
        assert_eq!(format_percent(-1.0 / 32.0), "-3,13%");
    }

    #[test]
    fn non_finite_is_placeholder() {
        assert_eq!(format_percent(f64::NAN), NOT_A_NUMBER);
        assert_eq!(format_percent(f64::INFINITY), NOT_A_NUMBER);
    }

    proptest! {
        #[test]
        fn integer_grouping_strips_back_to_digits(n in any::<u64>()) {
            let s = format_integer(n);
            prop_assert_eq!(s.replace('.', ""), n.to_string());
            let groups: Vec<&str> = s.split('.').collect();
            prop_assert!((1..=3).contains(&groups[0].len()));
            for g in &groups[1..] {
                prop_assert_eq!(g.len(), 3);
            }
        }

        #[test]
        fn percent_shape_is_fixed(x in 0.0f64..=1.0) {
            let s = format_percent(x);
            prop_assert!(s.ends_with('%'));
            let body = &s[..s.len() - 1];
            let (int_part, frac_part) = body.split_once(',').unwrap();
            prop_assert_eq!(frac_part.len(), 2);
            prop_assert!(frac_part.chars().all(|c| c.is_ascii_digit()));
            let whole: u32 = int_part.parse().unwrap();
            prop_assert!(whole <= 100);
        }

        #[test]
        fn percent_matches_fixed_point_rendering(x in 0.0f64..=1.0) {
            let pct = x * 100.0;
            prop_assume!(!is_half_hundredth(pct));
            let expected = format!("{:.2}%", pct).replace('.', ",");
            prop_assert_eq!(format_percent(x), expected);
        }

        #[test]
        fn percent_ties_round_up(k in 0u32..16) {
            let x = f64::from(2 * k + 1) / 32.0;
            let hundredths = f64::from(2 * k + 1) * 312.5;
            let up = hundredths.ceil() as u64;
            prop_assert_eq!(format_percent(x), format!("{},{:02}%", up / 100, up % 100));
        }
    }
}

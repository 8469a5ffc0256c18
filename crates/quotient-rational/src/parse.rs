//! Text and native float decoding into numerator/denominator pairs.
//!
//! Pairs come back unreduced; each variant canonicalizes them through its
//! own `value_of`, so the zero-denominator rule stays with the variant.

use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use quotient_integers::Integer;
use regex::Regex;

use crate::error::RationalError;

static RATIO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?\d+)(?:/([+-]?\d+))?$").expect("ratio pattern is valid")
});

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d*)(?:\.(\d*))?(?:[eE]([+-]?\d+))?$").expect("decimal pattern is valid")
});

/// Largest decimal exponent accepted in text, in either direction.
pub const MAX_EXPONENT: u64 = 100_000;

fn parse_error(input: &str) -> RationalError {
    RationalError::Parse {
        input: input.to_owned(),
    }
}

fn parse_integer(digits: &str, input: &str) -> Result<Integer, RationalError> {
    let unsigned = digits.strip_prefix('+').unwrap_or(digits);
    Integer::from_str_radix(unsigned, 10).map_err(|_| parse_error(input))
}

/// Splits `"n"`, `"n/d"` or decimal text like `"-1.25e3"` into a pair.
///
/// # Errors
///
/// Returns [`RationalError::Parse`] when the text is none of these, or
/// when its exponent is larger in magnitude than [`MAX_EXPONENT`].
pub fn parse_parts(input: &str) -> Result<(Integer, Integer), RationalError> {
    let text = input.trim();

    if let Some(caps) = RATIO.captures(text) {
        let numerator = parse_integer(&caps[1], input)?;
        let denominator = match caps.get(2) {
            Some(denominator) => parse_integer(denominator.as_str(), input)?,
            None => Integer::one(),
        };
        return Ok((numerator, denominator));
    }

    let caps = DECIMAL.captures(text).ok_or_else(|| parse_error(input))?;
    let whole = caps.get(2).map_or("", |m| m.as_str());
    let fraction = caps.get(3).map_or("", |m| m.as_str());
    if whole.is_empty() && fraction.is_empty() {
        return Err(parse_error(input));
    }

    let digits = format!("{whole}{fraction}");
    let mut numerator = parse_integer(&digits, input)?;
    if &caps[1] == "-" {
        numerator = -numerator;
    }

    let exponent = match caps.get(4) {
        Some(exponent) => exponent
            .as_str()
            .parse::<i64>()
            .map_err(|_| parse_error(input))?,
        None => 0,
    };
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return Err(parse_error(input));
    }
    let fraction_len = i64::try_from(fraction.len()).map_err(|_| parse_error(input))?;
    let scale = exponent
        .checked_sub(fraction_len)
        .ok_or_else(|| parse_error(input))?;
    let power = u32::try_from(scale.unsigned_abs()).map_err(|_| parse_error(input))?;

    if scale >= 0 {
        Ok((numerator * Integer::power_of_ten(power), Integer::one()))
    } else {
        Ok((numerator, Integer::power_of_ten(power)))
    }
}

/// Decodes a finite native float through its shortest round-trip decimal
/// rendering, so `0.1` becomes `1/10` rather than its binary expansion.
pub(crate) fn float_parts(rendered: &str) -> Result<(Integer, Integer), RationalError> {
    let (numerator, denominator) = parse_parts(rendered)?;
    if numerator.is_zero() {
        Ok((Integer::zero(), Integer::one()))
    } else {
        Ok((numerator, denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(n: i64, d: i64) -> (Integer, Integer) {
        (Integer::new(n), Integer::new(d))
    }

    #[test]
    fn test_integers_and_ratios() {
        assert_eq!(parse_parts("-12").unwrap(), pair(-12, 1));
        assert_eq!(parse_parts("+7").unwrap(), pair(7, 1));
        assert_eq!(parse_parts("6/-4").unwrap(), pair(6, -4));
        assert_eq!(parse_parts(" 3/0 ").unwrap(), pair(3, 0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(parse_parts("-1.25").unwrap(), pair(-125, 100));
        assert_eq!(parse_parts(".5").unwrap(), pair(5, 10));
        assert_eq!(parse_parts("2.").unwrap(), pair(2, 1));
        assert_eq!(parse_parts("1.5e-3").unwrap(), pair(15, 10_000));
        assert_eq!(parse_parts("12E2").unwrap(), pair(1200, 1));
    }

    #[test]
    fn test_rejects_garbage() {
        for input in [
            "",
            ".",
            "1/",
            "/2",
            "abc",
            "1.2.3",
            "1e",
            "--1",
            "1/2.5",
            "1.5e-9223372036854775808",
            "1e999999999",
            "1e100001",
        ] {
            assert!(
                matches!(parse_parts(input), Err(RationalError::Parse { .. })),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_exponent_limit() {
        let at_limit = format!("1e-{MAX_EXPONENT}");
        let (numerator, denominator) = parse_parts(&at_limit).unwrap();
        assert_eq!(numerator, Integer::one());
        assert_eq!(denominator, Integer::power_of_ten(100_000));
        assert!(parse_parts(&format!("0.5e{}", MAX_EXPONENT + 1)).is_err());
    }

    #[test]
    fn test_float_rendering() {
        assert_eq!(float_parts(&format!("{}", 0.1_f64)).unwrap(), pair(1, 10));
        assert_eq!(float_parts(&format!("{}", -0.0_f64)).unwrap(), pair(0, 1));
        assert_eq!(float_parts(&format!("{}", 123.456_f64)).unwrap(), pair(123_456, 1000));
    }
}

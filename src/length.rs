//! Loosely-typed password lengths.
//!
//! A requested length may arrive as a number, a numeric string, a boolean, a one-element list,
//! and so on (typically straight out of a JSON or YAML options document). It is stored as given
//! and only turned into a character count when a password is generated.

use serde::Deserialize;

use crate::GenerateError;

/// A requested password length, as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Length>),
    Object(serde_json::Map<String, serde_json::Value>),
}

impl Length {
    /// Coerce the length to a number.
    ///
    /// Returns NaN for values that have no numeric reading (`"1st"`, `[24, 42]`, objects).
    pub fn to_number(&self) -> f64 {
        match self {
            Length::Null => 0.0,
            Length::Bool(b) => f64::from(u8::from(*b)),
            Length::Number(n) => *n,
            Length::Text(s) => parse_numeric_literal(s),
            Length::List(items) => match items.as_slice() {
                [] => 0.0,
                // A list reads as its elements joined by commas, so only a sole element can be
                // numeric, and a boolean element reads as the word "true" or "false".
                [Length::Bool(_)] => f64::NAN,
                [only] => only.to_number(),
                _ => f64::NAN,
            },
            Length::Object(_) => f64::NAN,
        }
    }

    /// The number of characters to generate.
    ///
    /// The length must coerce to a finite number of at least 1. Fractional lengths count up to
    /// the next whole character: 42.0 gives 42, while 42.1 and 42.9 both give 43.
    pub fn count(&self) -> Result<usize, GenerateError> {
        let number = self.to_number();
        if !number.is_finite() || number < 1.0 {
            return Err(GenerateError::InvalidLength);
        }
        // Float-to-int `as` saturates; generation reports lengths it cannot allocate.
        Ok(number.ceil() as usize)
    }
}

fn parse_numeric_literal(text: &str) -> f64 {
    let text = text.trim();
    match text {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => (),
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            if digits.is_empty() {
                return f64::NAN;
            }
            return digits.chars().try_fold(0.0, |acc, ch| {
                ch.to_digit(radix)
                    .map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
        }
    }

    if is_decimal_literal(text) {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, where either side of the point may be empty but not
/// both. Rejects spellings such as `inf` or `nan` that `str::parse` would otherwise accept.
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}

macro_rules! length_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Length {
                fn from(n: $t) -> Length {
                    Length::Number(n as f64)
                }
            }
        )*
    };
}

length_from_number!(i32, i64, u32, u64, usize, f32, f64);

impl From<bool> for Length {
    fn from(b: bool) -> Length {
        Length::Bool(b)
    }
}

impl From<&str> for Length {
    fn from(s: &str) -> Length {
        Length::Text(s.to_owned())
    }
}

impl From<String> for Length {
    fn from(s: String) -> Length {
        Length::Text(s)
    }
}

impl<T: Into<Length>> From<Vec<T>> for Length {
    fn from(items: Vec<T>) -> Length {
        Length::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Length {
    fn from(value: serde_json::Value) -> Length {
        use serde_json::Value;

        match value {
            Value::Null => Length::Null,
            Value::Bool(b) => Length::Bool(b),
            Value::Number(n) => Length::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Length::Text(s),
            Value::Array(items) => Length::List(items.into_iter().map(Length::from).collect()),
            Value::Object(map) => Length::Object(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn count(length: impl Into<Length>) -> Result<usize, GenerateError> {
        length.into().count()
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(count(1).unwrap(), 1);
        assert_eq!(count(8).unwrap(), 8);
        assert_eq!(count(256u32).unwrap(), 256);
    }

    #[test]
    fn fractions_count_up() {
        assert_eq!(count(42.0).unwrap(), 42);
        assert_eq!(count(42.1).unwrap(), 43);
        assert_eq!(count(42.5).unwrap(), 43);
        assert_eq!(count(42.9).unwrap(), 43);
        assert_eq!(count(1.5).unwrap(), 2);
    }

    #[test]
    fn loose_values_that_are_accepted() {
        assert_eq!(count(true).unwrap(), 1);
        assert_eq!(count(vec![42]).unwrap(), 42);
        assert_eq!(count("24").unwrap(), 24);
        assert_eq!(count("1.0").unwrap(), 1);
        assert_eq!(count(" 12 ").unwrap(), 12);
        assert_eq!(count("0x10").unwrap(), 16);
        assert_eq!(count("1e1").unwrap(), 10);
        assert_eq!(count(".5e1").unwrap(), 5);
        assert_eq!(count(Length::from(json!([["7"]]))).unwrap(), 7);
    }

    #[test]
    fn loose_values_that_are_rejected() {
        let rejected: Vec<Length> = vec![
            0.into(),
            0.1.into(),
            (-1).into(),
            Length::Null,
            f64::NAN.into(),
            f64::INFINITY.into(),
            false.into(),
            "".into(),
            "1st".into(),
            "inf".into(),
            "nan".into(),
            "Infinity".into(),
            "0x".into(),
            "1e".into(),
            ".".into(),
            Length::List(vec![]),
            vec![24, 42].into(),
            vec![true].into(),
            Length::from(json!({"number": 42})),
            Length::from(json!([{}])),
        ];
        for length in rejected {
            assert_eq!(
                length.count(),
                Err(GenerateError::InvalidLength),
                "{length:?} should be rejected"
            );
        }
    }

    #[test]
    fn coercion_to_number() {
        assert_eq!(Length::Null.to_number(), 0.0);
        assert_eq!(Length::from(false).to_number(), 0.0);
        assert_eq!(Length::from("").to_number(), 0.0);
        assert_eq!(Length::List(vec![]).to_number(), 0.0);
        assert_eq!(Length::List(vec![Length::Null]).to_number(), 0.0);
        assert_eq!(Length::from("-Infinity").to_number(), f64::NEG_INFINITY);
        assert_eq!(Length::from("0b101").to_number(), 5.0);
        assert_eq!(Length::from("0o17").to_number(), 15.0);
        assert!(Length::from("12px").to_number().is_nan());
        assert!(Length::from("--1").to_number().is_nan());
    }

    #[test]
    fn deserializes_any_shape() {
        let parsed: Vec<Length> =
            serde_json::from_str(r#"[null, true, 3, 2.5, "24", [42], {"a": 1}]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Length::Null,
                Length::Bool(true),
                Length::Number(3.0),
                Length::Number(2.5),
                Length::Text("24".to_owned()),
                Length::List(vec![Length::Number(42.0)]),
                Length::from(json!({"a": 1})),
            ]
        );
    }

    #[test]
    fn deserializes_from_yaml() {
        let parsed: Length = serde_yaml::from_str("'24'").unwrap();
        assert_eq!(parsed.count().unwrap(), 24);
        let parsed: Length = serde_yaml::from_str("12").unwrap();
        assert_eq!(parsed.count().unwrap(), 12);
    }
}

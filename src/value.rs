use std::{cmp::Ordering, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// A scalar field value inside a fact.
///
/// # Loose Comparison
///
/// Values compare the way a loosely typed host would compare them:
/// - Two strings compare as text
/// - Any other pairing compares numerically, with strings parsed as numbers
///   and booleans read as `1`/`0`
/// - Integers and numeric text compare as exact decimals, so `10` equals
///   `"10.0"`
/// - Once a float is involved both sides compare as `f64`
///
/// # Examples
///
/// ```
/// use factql::Value;
///
/// assert!(Value::Integer(1).loose_eq(&Value::String("1".to_string())));
/// assert!(Value::Float(2.0).loose_eq(&Value::Integer(2)));
/// assert!(!Value::String("a".to_string()).loose_eq(&Value::Integer(0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Present but empty; never equal or ordered against anything
    Null,

    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),
}

impl Value {
    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Null => None,
            Value::Boolean(b) => Some(Number::Exact(if *b { Decimal::ONE } else { Decimal::ZERO })),
            Value::Integer(n) => Some(Number::Exact(Decimal::from(*n))),
            Value::Float(n) => Some(Number::Approx(*n)),
            Value::String(s) => parse_number(s),
        }
    }

    pub fn loose_eq(&self, other: &Value) -> bool {
        self.loose_cmp(other) == Some(Ordering::Equal)
    }

    /// `None` when the two values have no ordering (null, unparsable text, NaN).
    pub fn loose_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => self.as_number()?.compare(&other.as_number()?),
        }
    }
}

/// Numeric reading of a value. Decimal when the source is exact, `f64` once
/// a float is involved.
#[derive(Debug, Clone, Copy)]
enum Number {
    Exact(Decimal),
    Approx(f64),
}

impl Number {
    fn to_f64(self) -> Option<f64> {
        match self {
            Number::Exact(d) => d.to_f64(),
            Number::Approx(n) => Some(n),
        }
    }

    fn compare(self, other: &Number) -> Option<Ordering> {
        match (self, *other) {
            (Number::Exact(a), Number::Exact(b)) => Some(a.cmp(&b)),
            (a, b) => a.to_f64()?.partial_cmp(&b.to_f64()?),
        }
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Number::Exact(Decimal::ZERO));
    }
    match Decimal::from_str(text) {
        Ok(d) => Some(Number::Exact(d)),
        Err(_) => text.parse::<f64>().ok().map(Number::Approx),
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

//! Cell value types

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::serial;

/// A typed cell value.
///
/// Exactly one case holds at a time. Values are produced by cell resolution
/// (or by serializing an object) and consumed read-only downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing or blank cell
    Null,

    /// Numeric value (plain numbers; also the storage for serialized
    /// integers and floats)
    Number(Decimal),

    /// Text value
    Text(String),

    /// Date-time value
    DateTime(NaiveDateTime),

    /// Boolean cell, kept as the integer the source stores (0/1)
    BoolInt(i32),
}

impl Value {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::DateTime(_) => "date-time",
            Value::BoolInt(_) => "boolean",
        }
    }

    /// Try to get the value as a decimal without coercion
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Value::Number(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get the value as a string slice without coercion
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a date-time without coercion
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(t) => Some(*t),
            _ => None,
        }
    }

    /// Numeric view of the value, or a conversion error naming `to`.
    fn numeric(&self, to: &'static str) -> Result<Decimal> {
        match self {
            Value::Number(d) => Ok(*d),
            Value::BoolInt(i) => Ok(Decimal::from(*i)),
            Value::Text(s) => Decimal::from_str(s.trim()).map_err(|_| Error::Conversion {
                from: self.type_name(),
                to,
            }),
            _ => Err(Error::Conversion {
                from: self.type_name(),
                to,
            }),
        }
    }

    /// Coerce to a decimal.
    pub fn to_decimal(&self) -> Result<Decimal> {
        self.numeric("decimal")
    }

    /// Coerce to an `f64`.
    pub fn to_f64(&self) -> Result<f64> {
        let d = self.numeric("f64")?;
        d.to_f64().ok_or(Error::Conversion {
            from: self.type_name(),
            to: "f64",
        })
    }

    /// Coerce to an `f32`.
    pub fn to_f32(&self) -> Result<f32> {
        let d = self.numeric("f32")?;
        d.to_f32().ok_or(Error::Conversion {
            from: self.type_name(),
            to: "f32",
        })
    }

    /// Coerce to an `i64`, rounding fractional values half-to-even.
    pub fn to_i64(&self) -> Result<i64> {
        let d = self.numeric("i64")?;
        d.round().to_i64().ok_or(Error::Conversion {
            from: self.type_name(),
            to: "i64",
        })
    }

    /// Coerce to an `i32`, rounding fractional values half-to-even.
    pub fn to_i32(&self) -> Result<i32> {
        let d = self.numeric("i32")?;
        d.round().to_i32().ok_or(Error::Conversion {
            from: self.type_name(),
            to: "i32",
        })
    }

    /// Coerce to an `i16`, rounding fractional values half-to-even.
    pub fn to_i16(&self) -> Result<i16> {
        let d = self.numeric("i16")?;
        d.round().to_i16().ok_or(Error::Conversion {
            from: self.type_name(),
            to: "i16",
        })
    }

    /// Coerce to a date-time.
    ///
    /// Numeric values (including numeric text) are interpreted as a serial
    /// day count in the default 1900 system.
    pub fn to_datetime(&self) -> Result<NaiveDateTime> {
        match self {
            Value::DateTime(t) => Ok(*t),
            Value::Null => Err(Error::Conversion {
                from: self.type_name(),
                to: "date-time",
            }),
            _ => serial::datetime_from_serial(self.to_f64()?, false),
        }
    }

    /// Coerce to text. Every value has a text form; null becomes the empty
    /// string.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, ""),
            Value::Number(d) => write!(f, "{}", d),
            Value::Text(s) => write!(f, "{}", s),
            Value::DateTime(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
            Value::BoolInt(i) => write!(f, "{}", i),
        }
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Number(Decimal::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Decimal::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Decimal::from(n))
    }
}

/// Floats are quantized to 6 fractional digits on entry; a float outside
/// the decimal range collapses to zero.
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(
            Decimal::from_f64(n)
                .map(|d| d.round_dp(6))
                .unwrap_or(Decimal::ZERO),
        )
    }
}

/// Floats are quantized to 6 fractional digits on entry; a float outside
/// the decimal range collapses to zero.
impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(
            Decimal::from_f32(n)
                .map(|d| d.round_dp(6))
                .unwrap_or(Decimal::ZERO),
        )
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Number(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(t: NaiveDateTime) -> Self {
        Value::DateTime(t)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::DateTime(d.and_hms_opt(0, 0, 0).unwrap())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

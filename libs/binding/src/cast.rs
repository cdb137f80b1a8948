//! String → typed value coercion.
//!
//! Header values arrive as raw text; these routines coerce them into the
//! scalar or array shape a parameter declares. Casting is strict: no
//! whitespace trimming, no truthy/falsy boolean aliases. A repeated header
//! casts element-wise in wire order and the first bad element aborts.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use types::{TypeTag, Value};

/// A failed string → scalar conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CastError {
    /// The raw text does not parse as the target scalar type
    #[error("cannot cast '{raw}' to {target}")]
    InvalidScalar { raw: String, target: &'static str },

    /// One element of a repeated header does not parse
    #[error("cannot cast element {index} '{raw}' to {target}")]
    InvalidElement {
        index: usize,
        raw: String,
        target: &'static str,
    },
}

impl CastError {
    /// Create an InvalidScalar error for the offending text.
    pub fn invalid_scalar(raw: impl Into<String>, target: TypeTag) -> Self {
        Self::InvalidScalar {
            raw: raw.into(),
            target: target.name(),
        }
    }

    fn at_element(self, index: usize) -> Self {
        match self {
            Self::InvalidScalar { raw, target } => Self::InvalidElement { index, raw, target },
            other => other,
        }
    }
}

/// Cast a single raw header value to the tagged scalar type.
pub fn cast_scalar(tag: TypeTag, raw: &str) -> Result<Value, CastError> {
    match tag {
        TypeTag::Str => Ok(Value::Str(raw.to_string())),
        TypeTag::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| CastError::invalid_scalar(raw, tag)),
        TypeTag::Float => raw
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| CastError::invalid_scalar(raw, tag)),
        TypeTag::Decimal => Decimal::from_str(raw)
            .map(Value::Decimal)
            .map_err(|_| CastError::invalid_scalar(raw, tag)),
        TypeTag::Bool => match raw {
            _ if raw.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
            _ if raw.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
            _ => Err(CastError::invalid_scalar(raw, tag)),
        },
    }
}

/// Cast every value of a repeated header to the tagged element type.
///
/// Wire order is preserved. The first element that fails to parse aborts
/// the whole cast with its position attached.
pub fn cast_array(tag: TypeTag, raws: &[&str]) -> Result<Value, CastError> {
    let mut items = Vec::with_capacity(raws.len());
    for (index, raw) in raws.iter().enumerate() {
        let item = cast_scalar(tag, raw).map_err(|e| e.at_element(index))?;
        items.push(item);
    }
    Ok(Value::Array(items))
}

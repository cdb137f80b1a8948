//! Post-cast constraint validation.
//!
//! A [`Constraintset`] carries the optional bounds a signature declares for
//! one parameter and validates a bound value against them. Sets are built
//! during signature analysis (patterns compiled once) and are serde-capable
//! so deployments can load constraint tables from configuration.

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::Value;

/// A violated constraint.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstraintError {
    #[error("length {actual} is below minimum {min}")]
    TooShort { actual: usize, min: usize },

    #[error("length {actual} exceeds maximum {max}")]
    TooLong { actual: usize, max: usize },

    #[error("value '{value}' does not match pattern '{pattern}'")]
    PatternMismatch { value: String, pattern: String },

    #[error("value {actual} is below minimum {min}")]
    BelowMinimum { actual: String, min: String },

    #[error("value {actual} exceeds maximum {max}")]
    AboveMaximum { actual: String, max: String },

    #[error("array has {actual} items, fewer than minimum {min}")]
    TooFewItems { actual: usize, min: usize },

    #[error("array has {actual} items, more than maximum {max}")]
    TooManyItems { actual: usize, max: usize },
}

/// Declared constraints for one parameter.
///
/// Only the bounds matching the bound value's shape apply; the rest are
/// ignored. Array bounds apply to the element count, element values are
/// validated individually against the same set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Constraintset {
    /// Minimum string length
    pub min_length: Option<usize>,
    /// Maximum string length
    pub max_length: Option<usize>,
    /// Regular expression a string value must match
    #[serde(default, with = "pattern_serde")]
    pub pattern: Option<Regex>,
    /// Minimum integer value
    pub min_int: Option<i64>,
    /// Maximum integer value
    pub max_int: Option<i64>,
    /// Minimum numeric value for float/decimal
    pub min_float: Option<f64>,
    /// Maximum numeric value for float/decimal
    pub max_float: Option<f64>,
    /// Minimum array element count
    pub min_items: Option<usize>,
    /// Maximum array element count
    pub max_items: Option<usize>,
}

impl Constraintset {
    /// Validate a bound value against this set.
    pub fn validate(&self, value: &Value) -> Result<(), ConstraintError> {
        match value {
            Value::Str(s) => self.check_string(s),
            Value::Int(i) => self.check_int(*i),
            Value::Float(f) => self.check_float(*f),
            Value::Decimal(d) => match d.to_f64() {
                Some(f) => self.check_float(f),
                None => Ok(()),
            },
            Value::Bool(_) => Ok(()),
            Value::Array(items) => {
                self.check_items(items.len())?;
                for item in items {
                    self.validate(item)?;
                }
                Ok(())
            }
            Value::Record(record) => {
                for (_, field) in record.fields() {
                    if let Some(field) = field {
                        self.validate(field)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn check_string(&self, s: &str) -> Result<(), ConstraintError> {
        let len = s.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(ConstraintError::TooShort { actual: len, min });
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(ConstraintError::TooLong { actual: len, max });
            }
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(s) {
                return Err(ConstraintError::PatternMismatch {
                    value: s.to_string(),
                    pattern: pattern.as_str().to_string(),
                });
            }
        }
        Ok(())
    }

    fn check_int(&self, i: i64) -> Result<(), ConstraintError> {
        if let Some(min) = self.min_int {
            if i < min {
                return Err(ConstraintError::BelowMinimum {
                    actual: i.to_string(),
                    min: min.to_string(),
                });
            }
        }
        if let Some(max) = self.max_int {
            if i > max {
                return Err(ConstraintError::AboveMaximum {
                    actual: i.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(())
    }

    fn check_float(&self, f: f64) -> Result<(), ConstraintError> {
        if let Some(min) = self.min_float {
            if f < min {
                return Err(ConstraintError::BelowMinimum {
                    actual: f.to_string(),
                    min: min.to_string(),
                });
            }
        }
        if let Some(max) = self.max_float {
            if f > max {
                return Err(ConstraintError::AboveMaximum {
                    actual: f.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(())
    }

    fn check_items(&self, count: usize) -> Result<(), ConstraintError> {
        if let Some(min) = self.min_items {
            if count < min {
                return Err(ConstraintError::TooFewItems { actual: count, min });
            }
        }
        if let Some(max) = self.max_items {
            if count > max {
                return Err(ConstraintError::TooManyItems { actual: count, max });
            }
        }
        Ok(())
    }
}

mod pattern_serde {
    use regex::Regex;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Regex>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(pattern) => serializer.serialize_some(pattern.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Regex>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|p| Regex::new(&p).map_err(serde::de::Error::custom))
            .transpose()
    }
}

//! Typed values produced by header binding.
//!
//! The binding layer converts raw header strings into these values before
//! handing them to the service handler. Absence is expressed as
//! `Option<Value>` rather than a dedicated null variant, so a bound-but-nil
//! parameter and a bound value are distinguishable at the type level.

use rust_decimal::Decimal;

/// Effective scalar classification used to select a casting routine.
///
/// Resolved once per parameter during signature analysis; the binder never
/// re-inspects declared types at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// UTF-8 string, passed through unchanged
    Str,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Arbitrary-precision decimal
    Decimal,
    /// Boolean, `true`/`false` literals only
    Bool,
}

impl TypeTag {
    /// Type name for error messages and debugging.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Str => "string",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Decimal => "decimal",
            TypeTag::Bool => "boolean",
        }
    }
}

/// A value bound from one or more header lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 string
    Str(String),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Decimal for precise arithmetic
    Decimal(Decimal),
    /// Boolean value
    Bool(bool),
    /// Homogeneous array, one element per header line
    Array(Vec<Value>),
    /// Structured record assembled from multiple headers
    Record(RecordValue),
}

impl Value {
    /// Get the type name for error messages and debugging.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
        }
    }

    /// Borrow the inner string, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Inner integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Inner boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the elements, if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the record, if this is a `Record`.
    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}

/// A structured value assembled from multiple headers.
///
/// Fields are kept in assembly order, which matches the field declaration
/// order of the originating record descriptor. A field holding `None` was
/// declared nilable and had no usable header value.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    type_name: String,
    fields: Vec<(String, Option<Value>)>,
}

impl RecordValue {
    /// Create an empty record of the named structural type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Declared structural type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Append a field. Assembly order is preserved.
    pub fn push_field(&mut self, name: impl Into<String>, value: Option<Value>) {
        self.fields.push((name.into(), value));
    }

    /// Look up a field by name.
    ///
    /// Outer `None` means no such field; inner `None` means the field was
    /// bound as nil.
    pub fn field(&self, name: &str) -> Option<Option<&Value>> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_ref())
    }

    /// Iterate fields in assembly order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

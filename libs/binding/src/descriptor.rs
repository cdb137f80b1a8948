//! Immutable parameter descriptors.
//!
//! Descriptors are resolved once from the service signature during startup
//! analysis and shared read-only across all requests. Fields are private
//! and there are no setters past construction, so a descriptor cannot
//! drift after a binding set is built.

use types::TypeTag;

use crate::constraint::Constraintset;

/// Metadata for one field inside a structured header record.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    header_key: String,
    type_tag: TypeTag,
    is_array: bool,
    nilable: bool,
}

impl FieldDescriptor {
    /// Describe a scalar field looked up under the given header key.
    pub fn new(header_key: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            header_key: header_key.into(),
            type_tag,
            is_array: false,
            nilable: false,
        }
    }

    /// Mark the field as a repeated-header array.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Mark the field as nilable.
    pub fn nilable(mut self) -> Self {
        self.nilable = true;
        self
    }

    /// Header key this field is looked up under.
    pub fn header_key(&self) -> &str {
        &self.header_key
    }

    /// Effective element type.
    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    /// Whether the field aggregates repeated header values.
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// Whether the field's declared type permits nil.
    pub fn is_nilable(&self) -> bool {
        self.nilable
    }
}

/// Ordered field list for one structured header parameter.
///
/// Field order defines header-lookup order; it must match declaration
/// order so error reporting is reproducible.
#[derive(Debug, Clone)]
pub struct RecordDescriptor {
    type_name: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub(crate) fn new(type_name: String, fields: Vec<FieldDescriptor>) -> Self {
        Self { type_name, fields }
    }

    /// Target structural type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// Shape of one header parameter.
///
/// Scalar, array, and record parameters bind differently; dispatch in the
/// binder is an exhaustive match over this enum.
#[derive(Debug, Clone)]
pub enum ParamShape {
    /// Single value cast from the first header line
    Scalar(TypeTag),
    /// All header lines cast element-wise
    Array(TypeTag),
    /// Structured record assembled from multiple headers
    Record(RecordDescriptor),
}

/// Metadata for one declared header parameter.
#[derive(Debug, Clone)]
pub struct HeaderParam {
    name: String,
    header_name: String,
    feed_index: usize,
    nilable: bool,
    shape: ParamShape,
    constraints: Option<Constraintset>,
}

impl HeaderParam {
    pub(crate) fn new(
        name: String,
        header_name: String,
        feed_index: usize,
        nilable: bool,
        shape: ParamShape,
        constraints: Option<Constraintset>,
    ) -> Self {
        Self {
            name,
            header_name,
            feed_index,
            nilable,
            shape,
            constraints,
        }
    }

    /// Parameter token (the declared variable name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wire header name; defaults to the token unless overridden.
    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    /// Feed slot this parameter binds into.
    pub fn feed_index(&self) -> usize {
        self.feed_index
    }

    /// Whether the declared type permits nil.
    pub fn is_nilable(&self) -> bool {
        self.nilable
    }

    /// Parameter shape.
    pub fn shape(&self) -> &ParamShape {
        &self.shape
    }

    /// Declared constraints, if any.
    pub fn constraints(&self) -> Option<&Constraintset> {
        self.constraints.as_ref()
    }
}

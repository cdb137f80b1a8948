//! Construction of immutable binding sets.
//!
//! Built once per signature during startup analysis. The builders consume
//! `self` on every step and `build()` freezes the result; there is no way
//! to mutate a descriptor after the set exists, so sharing it across
//! request tasks needs no locking.

use types::TypeTag;

use crate::binder::HeaderBindingSet;
use crate::constraint::Constraintset;
use crate::descriptor::{FieldDescriptor, HeaderParam, ParamShape, RecordDescriptor};

/// Builder for one [`RecordDescriptor`].
#[derive(Debug)]
pub struct RecordDescriptorBuilder {
    type_name: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordDescriptorBuilder {
    /// Start a record descriptor for the named structural type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field. Declaration order defines header-lookup order.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Freeze into an immutable descriptor.
    pub fn build(self) -> RecordDescriptor {
        RecordDescriptor::new(self.type_name, self.fields)
    }
}

/// Builder for one [`HeaderParam`].
///
/// The wire header name defaults to the parameter token; annotate with
/// [`header_name`](Self::header_name) when the signature maps the token to
/// a differently-named header.
#[derive(Debug)]
pub struct HeaderParamBuilder {
    name: String,
    header_name: Option<String>,
    nilable: bool,
    shape: ParamShape,
    constraints: Option<Constraintset>,
}

impl HeaderParamBuilder {
    /// Declare a scalar parameter.
    pub fn scalar(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self::with_shape(name, ParamShape::Scalar(type_tag))
    }

    /// Declare an array parameter aggregating repeated header lines.
    pub fn array(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self::with_shape(name, ParamShape::Array(type_tag))
    }

    /// Declare a record parameter assembled from multiple headers.
    pub fn record(name: impl Into<String>, descriptor: RecordDescriptor) -> Self {
        Self::with_shape(name, ParamShape::Record(descriptor))
    }

    fn with_shape(name: impl Into<String>, shape: ParamShape) -> Self {
        Self {
            name: name.into(),
            header_name: None,
            nilable: false,
            shape,
            constraints: None,
        }
    }

    /// Override the wire header name.
    pub fn header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = Some(header_name.into());
        self
    }

    /// Mark the parameter as nilable.
    pub fn nilable(mut self) -> Self {
        self.nilable = true;
        self
    }

    /// Attach post-cast constraints.
    pub fn constraints(mut self, constraints: Constraintset) -> Self {
        self.constraints = Some(constraints);
        self
    }

    fn freeze(self, feed_index: usize) -> HeaderParam {
        let header_name = self.header_name.unwrap_or_else(|| self.name.clone());
        HeaderParam::new(
            self.name,
            header_name,
            feed_index,
            self.nilable,
            self.shape,
            self.constraints,
        )
    }
}

/// Builder for a complete [`HeaderBindingSet`].
///
/// Feed indices are assigned sequentially in declaration order at build
/// time, so they are unique by construction.
#[derive(Debug, Default)]
pub struct HeaderBindingSetBuilder {
    params: Vec<HeaderParamBuilder>,
}

impl HeaderBindingSetBuilder {
    /// Start an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Declaration order is binding order.
    pub fn param(mut self, param: HeaderParamBuilder) -> Self {
        self.params.push(param);
        self
    }

    /// Freeze into an immutable binding set.
    pub fn build(self) -> HeaderBindingSet {
        let mut set = HeaderBindingSet::empty();
        for (feed_index, param) in self.params.into_iter().enumerate() {
            set.add(param.freeze(feed_index));
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ParamShape;

    #[test]
    fn feed_indices_follow_declaration_order() {
        let set = HeaderBindingSetBuilder::new()
            .param(HeaderParamBuilder::scalar("first", TypeTag::Str))
            .param(HeaderParamBuilder::array("second", TypeTag::Int))
            .build();

        let indices: Vec<usize> = set.params().iter().map(|p| p.feed_index()).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(set.feed_len(), 2);
    }

    #[test]
    fn header_name_defaults_to_token() {
        let set = HeaderBindingSetBuilder::new()
            .param(HeaderParamBuilder::scalar("x-api-key", TypeTag::Str))
            .param(HeaderParamBuilder::scalar("version", TypeTag::Int).header_name("X-Version"))
            .build();

        assert_eq!(set.params()[0].header_name(), "x-api-key");
        assert_eq!(set.params()[1].name(), "version");
        assert_eq!(set.params()[1].header_name(), "X-Version");
    }

    #[test]
    fn record_builder_keeps_field_order() {
        let descriptor = RecordDescriptorBuilder::new("ClientInfo")
            .field(FieldDescriptor::new("x-client-id", TypeTag::Str))
            .field(FieldDescriptor::new("x-client-rate", TypeTag::Float).nilable())
            .build();

        let keys: Vec<&str> = descriptor.fields().iter().map(|f| f.header_key()).collect();
        assert_eq!(keys, vec!["x-client-id", "x-client-rate"]);

        let set = HeaderBindingSetBuilder::new()
            .param(HeaderParamBuilder::record("client", descriptor).nilable())
            .build();
        assert!(matches!(set.params()[0].shape(), ParamShape::Record(_)));
        assert!(set.params()[0].is_nilable());
    }
}

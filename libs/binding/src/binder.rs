//! Header parameter binding orchestration.
//!
//! [`HeaderBindingSet`] holds every declared header parameter of one
//! service signature and exposes the single `populate` entry point that
//! fills a request's [`OutputFeed`]. Parameters bind independently in
//! declaration order; the first failure aborts the whole call.

use tracing::{debug, warn};
use types::{HeaderMap, RecordValue, Value};

use crate::cast::{cast_array, cast_scalar};
use crate::descriptor::{HeaderParam, ParamShape, RecordDescriptor};
use crate::error::{BindingError, BindingResult};
use crate::feed::OutputFeed;

/// All header parameters declared by one service signature.
///
/// Built once via [`HeaderBindingSetBuilder`](crate::HeaderBindingSetBuilder)
/// and read-only thereafter; safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct HeaderBindingSet {
    params: Vec<HeaderParam>,
}

impl HeaderBindingSet {
    pub(crate) fn empty() -> Self {
        Self { params: Vec::new() }
    }

    /// Append a parameter. The builder guarantees feed-index uniqueness;
    /// no duplicate detection happens here.
    pub(crate) fn add(&mut self, param: HeaderParam) {
        self.params.push(param);
    }

    /// Declared parameters in binding order.
    pub fn params(&self) -> &[HeaderParam] {
        &self.params
    }

    /// Check if the signature declares no header parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Feed size a caller must allocate for `populate`.
    pub fn feed_len(&self) -> usize {
        self.params.len()
    }

    /// Find a parameter by its declared token.
    ///
    /// Linear scan; used by consumers needing descriptor metadata outside
    /// the binding path.
    pub fn lookup(&self, token: &str) -> Option<&HeaderParam> {
        self.params.iter().find(|p| p.name() == token)
    }

    /// Bind every declared parameter from `headers` into `feed`.
    ///
    /// `treat_nilable_as_optional` lets an absent header satisfy a nilable
    /// parameter; an explicitly empty header value satisfies any nilable
    /// parameter regardless of the flag. The first failing parameter
    /// aborts the call; earlier slots may already be written, so a feed
    /// from a failed call must be discarded.
    pub fn populate(
        &self,
        headers: &HeaderMap,
        feed: &mut OutputFeed,
        treat_nilable_as_optional: bool,
    ) -> BindingResult<()> {
        debug!(parameters = self.params.len(), "binding header parameters");
        for param in &self.params {
            match param.shape() {
                ParamShape::Record(descriptor) => {
                    let assembled = assemble_record(
                        descriptor,
                        headers,
                        param.is_nilable(),
                        treat_nilable_as_optional,
                    )?;
                    match assembled {
                        Some(record) => {
                            let value = Value::Record(record);
                            constrain(param, &value)?;
                            feed.bind(param.feed_index(), Some(value));
                        }
                        None => {
                            debug!(header = param.header_name(), "record bound as nil");
                            feed.bind(param.feed_index(), None);
                        }
                    }
                }
                ParamShape::Scalar(tag) => {
                    let Some(values) = usable_values(param, headers, treat_nilable_as_optional)?
                    else {
                        feed.bind(param.feed_index(), None);
                        continue;
                    };
                    let value = cast_scalar(*tag, values[0])
                        .map_err(|e| BindingError::cast_failure(param.header_name(), e))?;
                    constrain(param, &value)?;
                    feed.bind(param.feed_index(), Some(value));
                }
                ParamShape::Array(tag) => {
                    let Some(values) = usable_values(param, headers, treat_nilable_as_optional)?
                    else {
                        feed.bind(param.feed_index(), None);
                        continue;
                    };
                    let value = cast_array(*tag, &values)
                        .map_err(|e| BindingError::cast_failure(param.header_name(), e))?;
                    constrain(param, &value)?;
                    feed.bind(param.feed_index(), Some(value));
                }
            }
        }
        Ok(())
    }
}

/// Resolve the raw values for a scalar/array parameter.
///
/// `Ok(None)` means the parameter binds as nil; `Err` is the MissingValue
/// failure. An explicit empty header value counts as absent for any
/// nilable parameter, independent of the optional-treatment flag; only
/// true absence is gated on the flag.
fn usable_values<'h>(
    param: &HeaderParam,
    headers: &'h HeaderMap,
    treat_nilable_as_optional: bool,
) -> BindingResult<Option<Vec<&'h str>>> {
    let header_name = param.header_name();
    let values = headers.get_all(header_name);
    if values.is_empty() {
        if param.is_nilable() && treat_nilable_as_optional {
            debug!(header = header_name, "absent nilable header bound as nil");
            return Ok(None);
        }
        warn!(header = header_name, "no header value found");
        return Err(BindingError::missing_value(header_name));
    }
    if values.len() == 1 && values[0].is_empty() {
        if param.is_nilable() {
            debug!(header = header_name, "empty header value bound as nil");
            return Ok(None);
        }
        warn!(header = header_name, "no header value found");
        return Err(BindingError::missing_value(header_name));
    }
    Ok(Some(values))
}

fn constrain(param: &HeaderParam, value: &Value) -> BindingResult<()> {
    if let Some(set) = param.constraints() {
        set.validate(value)
            .map_err(|e| BindingError::cast_failure(param.header_name(), e))?;
    }
    Ok(())
}

/// Assemble one structured header parameter field by field.
///
/// Returns `Ok(None)` when a required field is missing but the parent
/// parameter is nilable: the whole record counts as not provided rather
/// than partially populated, and any fields already cast are dropped.
fn assemble_record(
    descriptor: &RecordDescriptor,
    headers: &HeaderMap,
    parent_nilable: bool,
    treat_nilable_as_optional: bool,
) -> BindingResult<Option<RecordValue>> {
    let mut record = RecordValue::new(descriptor.type_name());
    for field in descriptor.fields() {
        let key = field.header_key();
        let values = headers.get_all(key);
        if values.is_empty() {
            if field.is_nilable() && treat_nilable_as_optional {
                record.push_field(key, None);
                continue;
            }
            if parent_nilable {
                return Ok(None);
            }
            warn!(header = key, "no header value found");
            return Err(BindingError::missing_value(key));
        }
        if values.len() == 1 && values[0].is_empty() {
            // Nilability alone gates the empty-string case, mirroring the
            // scalar-parameter asymmetry.
            if field.is_nilable() {
                record.push_field(key, None);
                continue;
            }
            if parent_nilable {
                return Ok(None);
            }
            warn!(header = key, "no header value found");
            return Err(BindingError::missing_value(key));
        }
        let value = if field.is_array() {
            cast_array(field.type_tag(), &values)
        } else {
            cast_scalar(field.type_tag(), values[0])
        }
        .map_err(|e| BindingError::cast_failure(key, e))?;
        record.push_field(key, Some(value));
    }
    Ok(Some(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{HeaderBindingSetBuilder, HeaderParamBuilder};
    use types::TypeTag;

    fn two_param_set() -> HeaderBindingSet {
        HeaderBindingSetBuilder::new()
            .param(HeaderParamBuilder::scalar("version", TypeTag::Int).header_name("X-Version"))
            .param(HeaderParamBuilder::array("tags", TypeTag::Str))
            .build()
    }

    #[test]
    fn lookup_matches_token_not_header_name() {
        let set = two_param_set();
        assert!(set.lookup("version").is_some());
        assert!(set.lookup("X-Version").is_none());
        assert!(set.lookup("unknown").is_none());
    }

    #[test]
    fn empty_set_populates_nothing() {
        let set = HeaderBindingSetBuilder::new().build();
        let mut feed = OutputFeed::new(set.feed_len());
        let headers = HeaderMap::new();
        set.populate(&headers, &mut feed, false).unwrap();
        assert!(feed.is_empty());
    }
}

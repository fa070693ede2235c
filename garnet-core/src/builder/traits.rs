/*!
Builders for applied traits, with a constructor function for each prelude trait the generators
understand.
*/

use crate::builder::values::ObjectBuilder;
use crate::error::ErrorSource;
use crate::model::shapes::TraitValue;
use crate::model::values::Value;
use crate::model::ShapeID;
use crate::prelude::{
    prelude_shape_named, ENDPOINT_TRAIT_HOSTPREFIX, HTTP_TRAIT_CODE, HTTP_TRAIT_METHOD,
    HTTP_TRAIT_URI, TRAIT_DEPRECATED, TRAIT_DOCUMENTATION, TRAIT_ENDPOINT, TRAIT_ENUM,
    TRAIT_ERROR, TRAIT_HOSTLABEL, TRAIT_HTTP, TRAIT_HTTPCHECKSUMREQUIRED, TRAIT_HTTPHEADER,
    TRAIT_HTTPLABEL, TRAIT_HTTPPAYLOAD, TRAIT_HTTPPREFIXHEADERS, TRAIT_HTTPQUERY,
    TRAIT_HTTPQUERYPARAMS, TRAIT_HTTPRESPONSECODE, TRAIT_IDEMPOTENCYTOKEN, TRAIT_IDEMPOTENT,
    TRAIT_LENGTH, TRAIT_MEDIATYPE, TRAIT_PATTERN, TRAIT_RANGE, TRAIT_READONLY, TRAIT_REQUIRED,
    TRAIT_REQUIRESLENGTH, TRAIT_SENSITIVE, TRAIT_SPARSE, TRAIT_STREAMING, TRAIT_TIMESTAMPFORMAT,
    TRAIT_TITLE,
};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Builder for a single applied trait; an identifier and optional value.
///
#[derive(Clone, Debug)]
pub struct TraitBuilder {
    pub(crate) shape_id: ShapeID,
    pub(crate) value: TraitValue,
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn documentation(value: &str) -> TraitBuilder {
    TraitBuilder::with_value(prelude_shape_named(TRAIT_DOCUMENTATION), value.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn deprecated(message: Option<&str>, since: Option<&str>) -> TraitBuilder {
    let mut values = ObjectBuilder::default();
    if let Some(message) = message {
        values = values.string("message", message);
    }
    if let Some(since) = since {
        values = values.string("since", since);
    }
    TraitBuilder::with_value(prelude_shape_named(TRAIT_DEPRECATED), values.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn error_source(src: ErrorSource) -> TraitBuilder {
    TraitBuilder::with_value(prelude_shape_named(TRAIT_ERROR), src.to_string().into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn required() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_REQUIRED))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn streaming() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_STREAMING))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn requires_length() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_REQUIRESLENGTH))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn idempotent() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_IDEMPOTENT))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn idempotency_token() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_IDEMPOTENCYTOKEN))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn readonly() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_READONLY))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn sensitive() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_SENSITIVE))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn sparse() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_SPARSE))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn pattern(pat: &str) -> TraitBuilder {
    assert!(!pat.is_empty());
    TraitBuilder::with_value(prelude_shape_named(TRAIT_PATTERN), pat.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn length(min: Option<i64>, max: Option<i64>) -> TraitBuilder {
    assert!(min.is_some() || max.is_some());
    let mut values = ObjectBuilder::default();
    if let Some(min) = min {
        values = values.integer("min", min);
    }
    if let Some(max) = max {
        values = values.integer("max", max);
    }
    TraitBuilder::with_value(prelude_shape_named(TRAIT_LENGTH), values.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn range(min: Option<i64>, max: Option<i64>) -> TraitBuilder {
    assert!(min.is_some() || max.is_some());
    let mut values = ObjectBuilder::default();
    if let Some(min) = min {
        values = values.integer("min", min);
    }
    if let Some(max) = max {
        values = values.integer("max", max);
    }
    TraitBuilder::with_value(prelude_shape_named(TRAIT_RANGE), values.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait; each entry becomes an
/// enum definition with the provided string as its value.
pub fn enum_values(values: &[&str]) -> TraitBuilder {
    assert!(!values.is_empty());
    let definitions: Vec<Value> = values
        .iter()
        .copied()
        .map(|value| ObjectBuilder::default().string("value", value).into())
        .collect();
    TraitBuilder::with_value(prelude_shape_named(TRAIT_ENUM), definitions.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn media_type(value: &str) -> TraitBuilder {
    assert!(!value.is_empty());
    TraitBuilder::with_value(prelude_shape_named(TRAIT_MEDIATYPE), value.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn timestamp_format(value: &str) -> TraitBuilder {
    assert!(!value.is_empty());
    TraitBuilder::with_value(prelude_shape_named(TRAIT_TIMESTAMPFORMAT), value.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn title(value: &str) -> TraitBuilder {
    TraitBuilder::with_value(prelude_shape_named(TRAIT_TITLE), value.into())
}

// ------------------------------------------------------------------------------------------------

/// Create a new `TraitBuilder` for the prelude trait `http`.
pub fn http(method: &str, uri: &str, code: Option<i64>) -> TraitBuilder {
    let mut values = ObjectBuilder::default()
        .string(HTTP_TRAIT_METHOD, method)
        .string(HTTP_TRAIT_URI, uri);
    if let Some(code) = code {
        values = values.integer(HTTP_TRAIT_CODE, code);
    }
    TraitBuilder::with_value(prelude_shape_named(TRAIT_HTTP), values.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn http_label() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_HTTPLABEL))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn http_query(name: &str) -> TraitBuilder {
    assert!(!name.is_empty());
    TraitBuilder::with_value(prelude_shape_named(TRAIT_HTTPQUERY), name.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn http_query_params() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_HTTPQUERYPARAMS))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn http_header(name: &str) -> TraitBuilder {
    assert!(!name.is_empty());
    TraitBuilder::with_value(prelude_shape_named(TRAIT_HTTPHEADER), name.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn http_prefix_headers(prefix: &str) -> TraitBuilder {
    TraitBuilder::with_value(prelude_shape_named(TRAIT_HTTPPREFIXHEADERS), prefix.into())
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn http_payload() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_HTTPPAYLOAD))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn http_response_code() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_HTTPRESPONSECODE))
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn http_checksum_required() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_HTTPCHECKSUMREQUIRED))
}

/// Create a new `TraitBuilder` for the prelude trait `endpoint`.
pub fn endpoint(host_prefix: &str) -> TraitBuilder {
    assert!(!host_prefix.is_empty());
    TraitBuilder::with_value(
        prelude_shape_named(TRAIT_ENDPOINT),
        ObjectBuilder::default()
            .string(ENDPOINT_TRAIT_HOSTPREFIX, host_prefix)
            .into(),
    )
}

/// Create a new `TraitBuilder` for the corresponding prelude trait.
pub fn host_label() -> TraitBuilder {
    TraitBuilder::annotation(prelude_shape_named(TRAIT_HOSTLABEL))
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl TraitBuilder {
    /// Construct a new trait builder for an annotation trait; one with no value.
    pub fn annotation(shape_id: ShapeID) -> Self {
        Self {
            shape_id,
            value: None,
        }
    }

    /// Construct a new trait builder with an identifier and value.
    pub fn with_value(shape_id: ShapeID, value: Value) -> Self {
        Self {
            shape_id,
            value: Some(value),
        }
    }
}

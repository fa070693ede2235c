/*!
Constants for the shapes and traits defined in the Smithy prelude, namespace `smithy.api`.

The generators only deal with resolved models, so prelude shapes are never present as top-level
shapes; member targets in the prelude namespace resolve to [`Simple`](../model/shapes/enum.Simple.html)
kinds through [`prelude_target_simple`](fn.prelude_target_simple.html).
*/

use crate::model::identity::{NamespaceID, ShapeID};
use crate::model::shapes::Simple;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The namespace for the Smithy prelude.
pub const PRELUDE_NAMESPACE: &str = "smithy.api";

// ------------------------------------------------------------------------------------------------
// Prelude Shapes
// ------------------------------------------------------------------------------------------------

/// The name of the prelude shape `Blob`.
pub const SHAPE_BLOB: &str = "Blob";
/// The name of the prelude shape `Boolean`.
pub const SHAPE_BOOLEAN: &str = "Boolean";
/// The name of the prelude shape `Document`.
pub const SHAPE_DOCUMENT: &str = "Document";
/// The name of the prelude shape `String`.
pub const SHAPE_STRING: &str = "String";
/// The name of the prelude shape `Byte`.
pub const SHAPE_BYTE: &str = "Byte";
/// The name of the prelude shape `Short`.
pub const SHAPE_SHORT: &str = "Short";
/// The name of the prelude shape `Integer`.
pub const SHAPE_INTEGER: &str = "Integer";
/// The name of the prelude shape `Long`.
pub const SHAPE_LONG: &str = "Long";
/// The name of the prelude shape `Float`.
pub const SHAPE_FLOAT: &str = "Float";
/// The name of the prelude shape `Double`.
pub const SHAPE_DOUBLE: &str = "Double";
/// The name of the prelude shape `BigInteger`.
pub const SHAPE_BIGINTEGER: &str = "BigInteger";
/// The name of the prelude shape `BigDecimal`.
pub const SHAPE_BIGDECIMAL: &str = "BigDecimal";
/// The name of the prelude shape `Timestamp`.
pub const SHAPE_TIMESTAMP: &str = "Timestamp";
/// The name of the prelude shape `PrimitiveBoolean`.
pub const SHAPE_PRIMITIVEBOOLEAN: &str = "PrimitiveBoolean";
/// The name of the prelude shape `PrimitiveByte`.
pub const SHAPE_PRIMITIVEBYTE: &str = "PrimitiveByte";
/// The name of the prelude shape `PrimitiveShort`.
pub const SHAPE_PRIMITIVESHORT: &str = "PrimitiveShort";
/// The name of the prelude shape `PrimitiveInteger`.
pub const SHAPE_PRIMITIVEINTEGER: &str = "PrimitiveInteger";
/// The name of the prelude shape `PrimitiveLong`.
pub const SHAPE_PRIMITIVELONG: &str = "PrimitiveLong";
/// The name of the prelude shape `PrimitiveFloat`.
pub const SHAPE_PRIMITIVEFLOAT: &str = "PrimitiveFloat";
/// The name of the prelude shape `PrimitiveDouble`.
pub const SHAPE_PRIMITIVEDOUBLE: &str = "PrimitiveDouble";

// ------------------------------------------------------------------------------------------------
// Prelude Traits
// ------------------------------------------------------------------------------------------------

/// The name of the prelude trait `documentation`.
pub const TRAIT_DOCUMENTATION: &str = "documentation";
/// The name of the prelude trait `deprecated`.
pub const TRAIT_DEPRECATED: &str = "deprecated";
/// The name of the prelude trait `error`.
pub const TRAIT_ERROR: &str = "error";
/// The name of the prelude trait `required`.
pub const TRAIT_REQUIRED: &str = "required";
/// The name of the prelude trait `streaming`.
pub const TRAIT_STREAMING: &str = "streaming";
/// The name of the prelude trait `requiresLength`.
pub const TRAIT_REQUIRESLENGTH: &str = "requiresLength";
/// The name of the prelude trait `idempotent`.
pub const TRAIT_IDEMPOTENT: &str = "idempotent";
/// The name of the prelude trait `idempotencyToken`.
pub const TRAIT_IDEMPOTENCYTOKEN: &str = "idempotencyToken";
/// The name of the prelude trait `readonly`.
pub const TRAIT_READONLY: &str = "readonly";
/// The name of the prelude trait `sparse`.
pub const TRAIT_SPARSE: &str = "sparse";
/// The name of the prelude trait `sensitive`.
pub const TRAIT_SENSITIVE: &str = "sensitive";
/// The name of the prelude trait `enum`.
pub const TRAIT_ENUM: &str = "enum";
/// The name of the prelude trait `length`.
pub const TRAIT_LENGTH: &str = "length";
/// The name of the prelude trait `range`.
pub const TRAIT_RANGE: &str = "range";
/// The name of the prelude trait `pattern`.
pub const TRAIT_PATTERN: &str = "pattern";
/// The name of the prelude trait `mediaType`.
pub const TRAIT_MEDIATYPE: &str = "mediaType";
/// The name of the prelude trait `timestampFormat`.
pub const TRAIT_TIMESTAMPFORMAT: &str = "timestampFormat";
/// The name of the prelude trait `http`.
pub const TRAIT_HTTP: &str = "http";
/// The name of the prelude trait `httpLabel`.
pub const TRAIT_HTTPLABEL: &str = "httpLabel";
/// The name of the prelude trait `httpQuery`.
pub const TRAIT_HTTPQUERY: &str = "httpQuery";
/// The name of the prelude trait `httpQueryParams`.
pub const TRAIT_HTTPQUERYPARAMS: &str = "httpQueryParams";
/// The name of the prelude trait `httpHeader`.
pub const TRAIT_HTTPHEADER: &str = "httpHeader";
/// The name of the prelude trait `httpPrefixHeaders`.
pub const TRAIT_HTTPPREFIXHEADERS: &str = "httpPrefixHeaders";
/// The name of the prelude trait `httpPayload`.
pub const TRAIT_HTTPPAYLOAD: &str = "httpPayload";
/// The name of the prelude trait `httpResponseCode`.
pub const TRAIT_HTTPRESPONSECODE: &str = "httpResponseCode";
/// The name of the prelude trait `httpChecksumRequired`.
pub const TRAIT_HTTPCHECKSUMREQUIRED: &str = "httpChecksumRequired";
/// The name of the prelude trait `endpoint`.
pub const TRAIT_ENDPOINT: &str = "endpoint";
/// The name of the prelude trait `hostLabel`.
pub const TRAIT_HOSTLABEL: &str = "hostLabel";
/// The name of the prelude trait `title`.
pub const TRAIT_TITLE: &str = "title";

// ------------------------------------------------------------------------------------------------
// Trait Values
// ------------------------------------------------------------------------------------------------

/// The `timestampFormat` value for seconds since the Unix epoch.
pub const TIMESTAMP_FORMAT_EPOCH_SECONDS: &str = "epoch-seconds";
/// The `timestampFormat` value for an RFC 7231 `IMF-fixdate`.
pub const TIMESTAMP_FORMAT_HTTP_DATE: &str = "http-date";
/// The `timestampFormat` value for an RFC 3339 `date-time`.
pub const TIMESTAMP_FORMAT_DATE_TIME: &str = "date-time";

/// The `http` trait member holding the method string.
pub const HTTP_TRAIT_METHOD: &str = "method";
/// The `http` trait member holding the URI template.
pub const HTTP_TRAIT_URI: &str = "uri";
/// The `http` trait member holding the success status code.
pub const HTTP_TRAIT_CODE: &str = "code";
/// The `endpoint` trait member holding the host prefix template.
pub const ENDPOINT_TRAIT_HOSTPREFIX: &str = "hostPrefix";

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

lazy_static! {
    static ref PRELUDE_NAMESPACE_ID: NamespaceID = NamespaceID::from_str(PRELUDE_NAMESPACE).unwrap();
}

///
/// Returns the `NamespaceID` for the Smithy prelude.
///
pub fn prelude_namespace_id() -> &'static NamespaceID {
    &PRELUDE_NAMESPACE_ID
}

///
/// Construct the `ShapeID` for a named shape, or trait, in the prelude namespace.
///
pub fn prelude_shape_named(name: &str) -> ShapeID {
    ShapeID::new_unchecked(PRELUDE_NAMESPACE, name, None)
}

///
/// If `id` targets a simple shape in the prelude namespace, return the corresponding
/// [`Simple`](../model/shapes/enum.Simple.html) kind.
///
pub fn prelude_target_simple(id: &ShapeID) -> Option<Simple> {
    if id.namespace() != prelude_namespace_id() {
        return None;
    }
    match id.shape_name().to_string().as_str() {
        SHAPE_BLOB => Some(Simple::Blob),
        SHAPE_BOOLEAN | SHAPE_PRIMITIVEBOOLEAN => Some(Simple::Boolean),
        SHAPE_DOCUMENT => Some(Simple::Document),
        SHAPE_STRING => Some(Simple::String),
        SHAPE_BYTE | SHAPE_PRIMITIVEBYTE => Some(Simple::Byte),
        SHAPE_SHORT | SHAPE_PRIMITIVESHORT => Some(Simple::Short),
        SHAPE_INTEGER | SHAPE_PRIMITIVEINTEGER => Some(Simple::Integer),
        SHAPE_LONG | SHAPE_PRIMITIVELONG => Some(Simple::Long),
        SHAPE_FLOAT | SHAPE_PRIMITIVEFLOAT => Some(Simple::Float),
        SHAPE_DOUBLE | SHAPE_PRIMITIVEDOUBLE => Some(Simple::Double),
        SHAPE_BIGINTEGER => Some(Simple::BigInteger),
        SHAPE_BIGDECIMAL => Some(Simple::BigDecimal),
        SHAPE_TIMESTAMP => Some(Simple::Timestamp),
        _ => None,
    }
}

///
/// Returns `true` if `id` is within the prelude namespace, else `false`.
///
pub fn is_prelude_shape(id: &ShapeID) -> bool {
    id.namespace() == prelude_namespace_id()
}

/*!
Classification of structure members by HTTP binding trait, and resolution of the `http` trait
itself. Builders and parsers share this index so the two sides of the wire contract cannot
drift apart.
*/

use crate::uri::UriTemplate;
use garnet_core::error::{ErrorKind, Result};
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{HasTraits, MemberShape, StructureOrUnion, TopLevelShape};
use garnet_core::model::Model;
use garnet_core::prelude::{
    prelude_shape_named, ENDPOINT_TRAIT_HOSTPREFIX, HTTP_TRAIT_CODE, HTTP_TRAIT_METHOD,
    HTTP_TRAIT_URI, TIMESTAMP_FORMAT_DATE_TIME, TIMESTAMP_FORMAT_EPOCH_SECONDS,
    TIMESTAMP_FORMAT_HTTP_DATE, TRAIT_ENDPOINT, TRAIT_HOSTLABEL, TRAIT_HTTP, TRAIT_HTTPHEADER,
    TRAIT_HTTPLABEL,
    TRAIT_HTTPPAYLOAD, TRAIT_HTTPPREFIXHEADERS, TRAIT_HTTPQUERY, TRAIT_HTTPQUERYPARAMS,
    TRAIT_HTTPRESPONSECODE, TRAIT_REQUIRESLENGTH, TRAIT_STREAMING, TRAIT_TIMESTAMPFORMAT,
};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The resolved value of an operation's `http` trait.
///
#[derive(Clone, Debug)]
pub struct HttpTrait {
    /// The HTTP method, byte-for-byte from the model.
    pub method: String,
    /// The parsed URI template.
    pub uri: UriTemplate,
    /// The success status code; defaults to 200 when the trait carries none.
    pub code: u16,
}

///
/// The locations a member value may bind to on the wire.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingLocation {
    /// A named HTTP header.
    Header,
    /// A query string parameter.
    Query,
    /// A URI path label.
    Label,
    /// The request or response body.
    Body,
}

///
/// The serialized form of a timestamp value.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Seconds since the Unix epoch.
    EpochSeconds,
    /// RFC 7231 `IMF-fixdate`.
    HttpDate,
    /// RFC 3339 `date-time`.
    DateTime,
}

///
/// A member bound to the query string; named `httpQuery` members and map-valued
/// `httpQueryParams` members share one list so that emission follows model member order.
///
#[derive(Debug)]
pub enum QueryBinding<'a> {
    /// A member bound to a named query parameter.
    Named(&'a MemberShape, String),
    /// A map member whose entries are appended to the query string.
    Params(&'a MemberShape),
}

///
/// The members of one structure, classified by HTTP binding. Within each class, members appear
/// in model order.
///
#[derive(Debug, Default)]
pub struct StructureBindings<'a> {
    /// Members bound to URI path labels.
    pub labels: Vec<&'a MemberShape>,
    /// Members bound to the query string, in model member order.
    pub query: Vec<QueryBinding<'a>>,
    /// Members bound to a named header.
    pub headers: Vec<(&'a MemberShape, String)>,
    /// Map members bound to a header name prefix.
    pub prefix_headers: Vec<(&'a MemberShape, String)>,
    /// The member bound as the whole payload, if any.
    pub payload: Option<&'a MemberShape>,
    /// The member carrying the response status code, if any.
    pub response_code: Option<&'a MemberShape>,
    /// Members with no binding trait; serialized as the document body.
    pub body: Vec<&'a MemberShape>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl HttpTrait {
    ///
    /// Resolve the `http` trait applied to an operation shape; absence, or a malformed value,
    /// is a model integrity failure.
    ///
    pub fn of(operation: &TopLevelShape) -> Result<Self> {
        let value = operation
            .prelude_trait_named(TRAIT_HTTP)
            .and_then(|value| value.as_ref())
            .ok_or_else(|| {
                ErrorKind::UnknownMember(format!("{}${}", operation.id(), TRAIT_HTTP))
            })?;
        let method = value
            .get(HTTP_TRAIT_METHOD)
            .and_then(|v| v.as_string())
            .ok_or_else(|| ErrorKind::InvalidValueVariant("String".to_string()))?
            .clone();
        let uri = value
            .get(HTTP_TRAIT_URI)
            .and_then(|v| v.as_string())
            .ok_or_else(|| ErrorKind::InvalidValueVariant("String".to_string()))?;
        let code = value
            .get(HTTP_TRAIT_CODE)
            .and_then(|v| v.as_number())
            .map(|n| n.as_i64() as u16)
            .unwrap_or(200);
        Ok(Self {
            method,
            uri: UriTemplate::parse(uri)?,
            code,
        })
    }
}

impl TimestampFormat {
    /// The default format for each binding location; the body default is protocol-defined and
    /// passed by the caller.
    pub fn default_for(location: BindingLocation, body_default: TimestampFormat) -> Self {
        match location {
            BindingLocation::Header => TimestampFormat::HttpDate,
            BindingLocation::Query | BindingLocation::Label => TimestampFormat::DateTime,
            BindingLocation::Body => body_default,
        }
    }

    /// Parse a `timestampFormat` trait value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            TIMESTAMP_FORMAT_EPOCH_SECONDS => Some(TimestampFormat::EpochSeconds),
            TIMESTAMP_FORMAT_HTTP_DATE => Some(TimestampFormat::HttpDate),
            TIMESTAMP_FORMAT_DATE_TIME => Some(TimestampFormat::DateTime),
            _ => None,
        }
    }
}

impl<'a> StructureBindings<'a> {
    ///
    /// Classify every member of `structure`; binding traits may be applied to the member or,
    /// for `mediaType` and `timestampFormat`, inherited from the member's target.
    ///
    pub fn index(model: &'a Model, structure: &'a StructureOrUnion) -> Self {
        let mut bindings = Self::default();
        for member in structure.members() {
            if member_has(model, member, TRAIT_HTTPLABEL) {
                bindings.labels.push(member);
            } else if let Some(name) = member_string(model, member, TRAIT_HTTPQUERY) {
                bindings.query.push(QueryBinding::Named(member, name));
            } else if member_has(model, member, TRAIT_HTTPQUERYPARAMS) {
                bindings.query.push(QueryBinding::Params(member));
            } else if let Some(name) = member_string(model, member, TRAIT_HTTPHEADER) {
                bindings.headers.push((member, name));
            } else if let Some(prefix) = member_string(model, member, TRAIT_HTTPPREFIXHEADERS) {
                bindings.prefix_headers.push((member, prefix));
            } else if member_has(model, member, TRAIT_HTTPPAYLOAD) {
                bindings.payload = Some(member);
            } else if member_has(model, member, TRAIT_HTTPRESPONSECODE) {
                bindings.response_code = Some(member);
            } else {
                bindings.body.push(member);
            }
        }
        bindings
    }

    /// Returns `true` if a document body must be built for these bindings, else `false`.
    pub fn has_document_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Find the label member with the given name, if present.
    pub fn label_named(&self, name: &str) -> Option<&'a MemberShape> {
        self.labels
            .iter()
            .find(|member| member.member_name().as_ref() == name)
            .copied()
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Resolve the timestamp format for a member at the given location; an explicit
/// `timestampFormat` on the member, or its target, wins over the location default.
///
pub fn timestamp_format(
    model: &Model,
    member: &MemberShape,
    location: BindingLocation,
    body_default: TimestampFormat,
) -> TimestampFormat {
    member_string(model, member, TRAIT_TIMESTAMPFORMAT)
        .and_then(|value| TimestampFormat::parse(&value))
        .unwrap_or_else(|| TimestampFormat::default_for(location, body_default))
}

///
/// Returns `true` if the operation's input carries a streaming payload member without a
/// required length; such bodies have no finite content length.
///
pub fn has_streaming_payload(model: &Model, operation: &TopLevelShape) -> bool {
    let input = match operation
        .body()
        .as_operation()
        .and_then(|operation| operation.input())
    {
        Some(input) => input,
        None => return false,
    };
    let structure = match model
        .shape(input)
        .and_then(|shape| shape.body().as_structure())
    {
        Some(structure) => structure,
        None => return false,
    };
    structure.members().any(|member| {
        member_has(model, member, TRAIT_HTTPPAYLOAD)
            && member_has(model, member, TRAIT_STREAMING)
            && !member_has(model, member, TRAIT_REQUIRESLENGTH)
    })
}

///
/// Find the input member bound to a host prefix label; the member must carry the `hostLabel`
/// trait and share the label's name.
///
pub fn host_label_member<'a>(
    model: &Model,
    structure: &'a StructureOrUnion,
    label: &str,
) -> Option<&'a MemberShape> {
    structure.members().find(|member| {
        member.member_name().as_ref() == label && member_has(model, member, TRAIT_HOSTLABEL)
    })
}

///
/// The host prefix template from an operation's `endpoint` trait, if present.
///
pub fn host_prefix(operation: &TopLevelShape) -> Option<String> {
    operation
        .prelude_trait_named(TRAIT_ENDPOINT)
        .and_then(|value| value.as_ref())
        .and_then(|value| value.get(ENDPOINT_TRAIT_HOSTPREFIX))
        .and_then(|value| value.as_string())
        .cloned()
}

///
/// Returns `true` if the named prelude trait applies to the member or its target shape.
///
pub fn member_has(model: &Model, member: &MemberShape, trait_name: &str) -> bool {
    model.member_has_trait(member, &prelude_shape_named(trait_name))
}

///
/// The string value of the named prelude trait on the member, with target fallback.
///
pub fn member_string(model: &Model, member: &MemberShape, trait_name: &str) -> Option<String> {
    model
        .member_trait(member, &prelude_shape_named(trait_name))
        .and_then(|value| value.as_ref())
        .and_then(|value| value.as_string())
        .cloned()
}

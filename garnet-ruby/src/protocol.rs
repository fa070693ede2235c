/*!
The pluggable contract every wire protocol implements. The orchestrator resolves a generator by
matching the service's protocol trait against each registered generator's `protocol_id`; a
service with no matching generator fails with `UnsupportedProtocol`.
*/

use crate::bindings::TimestampFormat;
use crate::context::GenerationContext;
use crate::middleware::MiddlewareRecord;
use crate::transport::{ApplicationTransport, ConfigField};
use garnet_core::error::{ErrorKind, Result};
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{HasTraits, TopLevelShape};
use garnet_core::model::ShapeID;
use std::fmt::Debug;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The body codec a protocol supplies to the shared builder and parser generators; the emitted
/// runtime calls and the body timestamp default.
///
#[derive(Clone, Debug)]
pub struct PayloadCodec {
    /// The media type set on document bodies.
    pub content_type: &'static str,
    /// The runtime function serializing a Ruby hash to the body text.
    pub dump_fn: &'static str,
    /// The runtime function parsing the body text to a Ruby hash.
    pub parse_fn: &'static str,
    /// The default timestamp format for body-bound members.
    pub body_timestamp_format: TimestampFormat,
}

///
/// A pluggable wire-protocol generator.
///
pub trait ProtocolGenerator: Debug {
    /// The shape id of the protocol trait this generator serves.
    fn protocol_id(&self) -> ShapeID;

    /// The transport the emitted client uses.
    fn application_transport(&self) -> ApplicationTransport;

    /// Emit the per-operation request builders file.
    fn generate_builders(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;

    /// Emit the per-operation response parsers file.
    fn generate_parsers(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;

    /// Emit the per-operation response stubs file.
    fn generate_stubs(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;

    /// Emit the modeled error classes file.
    fn generate_errors(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;

    /// Middleware this protocol adds to the transport defaults.
    fn client_middleware(&self) -> Vec<MiddlewareRecord> {
        Default::default()
    }

    /// Configuration keys this protocol adds to the client config.
    fn extra_config(&self) -> Vec<ConfigField> {
        Default::default()
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Resolve the protocol generator for a service by matching its applied traits against each
/// registered generator's protocol id, in registration order.
///
pub fn resolve_protocol<'a>(
    generators: &'a [Box<dyn ProtocolGenerator>],
    service: &TopLevelShape,
) -> Result<&'a dyn ProtocolGenerator> {
    for generator in generators {
        if service.has_trait(&generator.protocol_id()) {
            return Ok(generator.as_ref());
        }
    }
    Err(ErrorKind::UnsupportedProtocol(service.id().to_string()).into())
}

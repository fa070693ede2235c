/*!
The `railsJson` protocol; JSON document bodies over the default HTTP transport, with
Rails-flavored error reporting. The error class is discriminated by the `X-Error-Code` response
header, falling back to an `error` key in the response body.
*/

use crate::bindings::TimestampFormat;
use crate::context::GenerationContext;
use crate::generators::{builders, errors, parsers, stubs, FROZEN_STRING_LITERAL};
use crate::middleware::{MiddlewareRecord, MiddlewareStep};
use crate::protocol::{PayloadCodec, ProtocolGenerator};
use crate::transport::{http_transport, ApplicationTransport};
use crate::writer::RubyWriter;
use garnet_core::error::Result;
use garnet_core::model::ShapeID;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The namespace of the Garnet protocol traits.
pub const PROTOCOL_NAMESPACE: &str = "garnet.protocols";

/// The shape name of the `railsJson` protocol trait.
pub const PROTOCOL_RAILS_JSON: &str = "railsJson";

///
/// The `railsJson` protocol generator.
///
#[derive(Debug, Default)]
pub struct RailsJson;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// The shape id of the `railsJson` protocol trait.
pub fn rails_json_trait_id() -> ShapeID {
    ShapeID::new_unchecked(PROTOCOL_NAMESPACE, PROTOCOL_RAILS_JSON, None)
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl RailsJson {
    fn codec() -> PayloadCodec {
        PayloadCodec {
            content_type: "application/json",
            dump_fn: "Garnet::JSON.dump",
            parse_fn: "Garnet::JSON.parse",
            body_timestamp_format: TimestampFormat::EpochSeconds,
        }
    }
}

impl ProtocolGenerator for RailsJson {
    fn protocol_id(&self) -> ShapeID {
        rails_json_trait_id()
    }

    fn application_transport(&self) -> ApplicationTransport {
        http_transport()
    }

    fn generate_builders(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        builders::generate(ctx, &Self::codec())
    }

    fn generate_parsers(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        parsers::generate(ctx, &Self::codec())
    }

    fn generate_stubs(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        stubs::generate(ctx, &Self::codec())
    }

    fn generate_errors(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        errors::generate(ctx, &|writer: &mut RubyWriter| {
            writer.write("code = http_resp.headers['X-Error-Code']");
            writer.open_block("if code.nil? && http_resp.body", "end");
            writer.write("map = begin");
            writer.indent();
            writer.write("Garnet::JSON.parse(http_resp.body.read)");
            writer.outdent();
            writer.write("rescue Garnet::JSON::ParseError");
            writer.indent();
            writer.write("nil");
            writer.outdent();
            writer.write("end");
            writer.write("http_resp.body.rewind");
            writer.write("code = map['error'] if map.is_a?(Hash)");
            writer.close_block()?;
            writer.write("code");
            Ok(())
        })
    }

    fn client_middleware(&self) -> Vec<MiddlewareRecord> {
        vec![
            MiddlewareRecord::builder("Middleware::RequestId", MiddlewareStep::Deserialize)
                .order(50)
                .extra_files(|ctx| {
                    let path = format!(
                        "lib/{}/middleware/request_id.rb",
                        ctx.settings.gem_name()
                    );
                    ctx.manifest
                        .write_file(&path, request_id_middleware(ctx.settings.module_name())?)?;
                    Ok(vec![path])
                })
                .build(),
        ]
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn request_id_middleware(module_name: &str) -> Result<String> {
    let mut writer = RubyWriter::new();
    writer.write(FROZEN_STRING_LITERAL);
    writer.blank();
    writer.open_block(&format!("module {}", module_name), "end");
    writer.open_block("module Middleware", "end");
    writer.write("# Copies the service-assigned request id from each response onto the");
    writer.write("# operation output's metadata.");
    writer.open_block("class RequestId", "end");
    writer.open_block("def initialize(app)", "end");
    writer.write("@app = app");
    writer.close_block()?;
    writer.blank();
    writer.open_block("def call(input, context)", "end");
    writer.write("output = @app.call(input, context)");
    writer.write("output.metadata[:request_id] = context.response.headers['X-Request-Id']");
    writer.write("output");
    writer.close_block()?;
    writer.close_all()?;
    writer.finish()
}

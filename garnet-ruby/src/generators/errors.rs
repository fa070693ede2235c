/*!
Emits `errors.rb`; a class per modeled error inheriting the common API-error bases, plus the
protocol-specific `error_code` resolver mapping a response onto an error class name.
*/

use crate::context::GenerationContext;
use crate::generators::{begin_file, documentation_of, open_modules};
use crate::transport::operation_errors;
use crate::writer::RubyWriter;
use garnet_core::error::{ErrorKind, Result};
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{HasTraits, TopLevelShape};
use garnet_core::model::ShapeID;
use garnet_core::prelude::TRAIT_ERROR;
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate `errors.rb` for every error declared by the service's operations. The
/// `error_code_body` callback writes the body of the protocol-specific resolver.
///
pub fn generate(
    ctx: &mut GenerationContext<'_>,
    error_code_body: &dyn Fn(&mut RubyWriter) -> Result<()>,
) -> Result<()> {
    let mut writer = RubyWriter::new();
    begin_file(&mut writer, &[]);
    open_modules(&mut writer, ctx, Some("Errors"));

    writer.blank();
    writer.write("# Resolves the error class name for an HTTP response.");
    writer.open_block("def self.error_code(http_resp)", "end");
    writer.inject(error_code_body)?;
    writer.close_block()?;

    writer.blank();
    writer.write("# Base class for all errors returned by this service.");
    writer.write("class ApiError < Garnet::HTTP::ApiError; end");
    writer.blank();
    writer.write("# Base class for all errors returned where the client is at fault.");
    writer.write("class ApiClientError < ApiError; end");
    writer.blank();
    writer.write("# Base class for all errors returned where the server is at fault.");
    writer.write("class ApiServerError < ApiError; end");

    let mut emitted: HashSet<ShapeID> = Default::default();
    let operations = ctx.operations()?;
    for operation in operations {
        for error in operation_errors(ctx, operation)? {
            if !emitted.insert(error.id().clone()) {
                continue;
            }
            error_class(ctx, &mut writer, error)?;
        }
    }

    writer.close_all()?;
    let path = ctx.settings.lib_path("errors");
    ctx.manifest.write_file(&path, writer.finish()?)
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn error_class(
    ctx: &mut GenerationContext<'_>,
    writer: &mut RubyWriter,
    error: &TopLevelShape,
) -> Result<()> {
    let source = error
        .prelude_trait_named(TRAIT_ERROR)
        .and_then(|value| value.as_ref())
        .and_then(|value| value.as_string())
        .ok_or_else(|| ErrorKind::UnknownMember(format!("{}$error", error.id())))?;
    let base = match source.as_str() {
        "client" => "ApiClientError",
        "server" => "ApiServerError",
        other => return Err(ErrorKind::InvalidErrorSource(other.to_string()).into()),
    };
    let name = ctx.symbols.shape_symbol(error).name().to_string();
    writer.blank();
    if let Some(doc) = documentation_of(error) {
        writer.doc_comment(&doc);
    }
    writer.open_block(&format!("class {} < {}", name, base), "end");
    writer.open_block("def initialize(http_resp:, **kwargs)", "end");
    writer.write(&format!("@data = Parsers::{}.parse(http_resp)", name));
    writer.write("super(http_resp: http_resp, **kwargs)");
    writer.close_block()?;
    writer.blank();
    writer.write("attr_reader :data");
    writer.close_block()
}

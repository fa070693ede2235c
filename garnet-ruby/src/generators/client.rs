/*!
Emits `client.rb`; the top-level client class with one method per operation. Each method builds
an empty middleware stack, pushes the operation's resolved middleware in canonical step order,
runs the stack with a fresh context, and raises any error carried on the output.
*/

use crate::context::GenerationContext;
use crate::generators::{begin_file, documentation_of};
use crate::middleware::MiddlewareStack;
use crate::transport::ApplicationTransport;
use crate::writer::RubyWriter;
use garnet_core::error::Result;
use garnet_core::model::shapes::{HasTraits, TopLevelShape};

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate `client.rb` with one public method per operation of the service.
///
pub fn generate(
    ctx: &mut GenerationContext<'_>,
    transport: &ApplicationTransport,
    stack: &MiddlewareStack,
) -> Result<()> {
    let mut writer = RubyWriter::new();
    begin_file(&mut writer, &["stringio"]);
    writer.open_block(&format!("module {}", ctx.settings.module_name()), "end");

    if let Some(doc) = documentation_of(ctx.service) {
        writer.doc_comment(&doc);
    } else {
        writer.write("# An API client for the service.");
    }
    writer.open_block("class Client", "end");
    writer.write("include Garnet::ClientStubs");
    writer.blank();
    writer.write("# @param [Config] config");
    writer.write("#   The configuration for this client.");
    writer.open_block(
        &format!(
            "def initialize(config = {}::Config.build, options = {{}})",
            ctx.settings.module_name()
        ),
        "end",
    );
    writer.write("@config = config");
    writer.write("@stubs = Garnet::Stubbing::Stubs.new");
    writer.close_block()?;

    let operations = ctx.operations()?;
    for operation in operations {
        operation_method(ctx, &mut writer, transport, stack, operation)?;
    }

    writer.close_all()?;
    let path = ctx.settings.lib_path("client");
    ctx.manifest.write_file(&path, writer.finish()?)
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn operation_method(
    ctx: &mut GenerationContext<'_>,
    writer: &mut RubyWriter,
    transport: &ApplicationTransport,
    stack: &MiddlewareStack,
    operation: &TopLevelShape,
) -> Result<()> {
    let method_name = ctx.symbols.operation_method_name(operation);
    let input = super::input_root(operation).map(|input| ctx.model.expect_shape(input)).transpose()?;
    let input_name = input.map(|shape| ctx.symbols.shape_symbol(shape).name().to_string());
    let output_name = super::output_root(operation)
        .map(|output| ctx.model.expect_shape(output))
        .transpose()?
        .map(|shape| ctx.symbols.shape_symbol(shape).name().to_string());

    writer.blank();
    if let Some(doc) = documentation_of(operation) {
        writer.doc_comment(&doc);
        writer.write("#");
    }
    if operation.is_deprecated() {
        writer.write("# @deprecated");
        writer.write("#");
    }
    writer.write("# @param [Hash] params");
    if let Some(input_name) = &input_name {
        writer.write(&format!("#   Request parameters; see {{Types::{}}}.", input_name));
    }
    if let Some(output_name) = &output_name {
        writer.write(&format!("# @return [Types::{}]", output_name));
    }
    writer.open_block_template(
        "def $name(params = {}, options = {})",
        &[("name", method_name.as_str())],
        "end",
    );
    writer.write("stack = Garnet::MiddlewareStack.new");
    match &input_name {
        Some(input_name) => writer.write(&format!(
            "input = Params::{}.build(params, context: 'params')",
            input_name
        )),
        None => writer.write("input = {}"),
    }

    for record in stack.resolve(ctx.model, ctx.service, operation) {
        record.render(writer, ctx, operation)?;
    }

    writer.open_block("resp = stack.run(", ")");
    writer.write("input: input,");
    writer.open_block("context: Garnet::Context.new(", ")");
    writer.write(&format!("request: {},", transport.request_fragment()));
    writer.write(&format!("response: {},", transport.response_fragment()));
    writer.write("params: params,");
    writer.write("logger: @config.logger,");
    writer.write(&format!("operation_name: :{}", method_name));
    writer.close_block()?;
    writer.close_block()?;
    writer.write("raise resp.error if resp.error");
    writer.write("resp");
    writer.close_block()?;
    Ok(())
}

/*!
Emits `config.rb`; a struct enumerating every configuration key contributed by the transport,
the resolved middleware, the protocol, and user extensions, with validation and a default-value
chain per key.
*/

use crate::context::GenerationContext;
use crate::generators::begin_file;
use crate::middleware::MiddlewareStack;
use crate::transport::{ApplicationTransport, ConfigField};
use crate::writer::RubyWriter;
use garnet_core::error::Result;
use std::collections::BTreeMap;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate `config.rb` from the union of all contributed configuration fields; keys are
/// emitted in name order and the first contribution of a name wins.
///
pub fn generate(
    ctx: &mut GenerationContext<'_>,
    transport: &ApplicationTransport,
    stack: &MiddlewareStack,
    extra: &[ConfigField],
) -> Result<()> {
    let mut fields: BTreeMap<String, ConfigField> = Default::default();
    for field in transport
        .config()
        .chain(stack.config_fields(ctx.model, ctx.service))
        .chain(extra.iter())
    {
        let _ = fields
            .entry(field.name().to_string())
            .or_insert_with(|| field.clone());
    }

    let mut writer = RubyWriter::new();
    begin_file(&mut writer, &["logger"]);
    writer.open_block(&format!("module {}", ctx.settings.module_name()), "end");

    for field in fields.values() {
        writer.write(&format!("# @!attribute {}", field.name()));
        writer.write(&format!("#   {}", field.documentation()));
        if field.operation_override() {
            writer.write("#   May be overridden per operation through the `options` hash.");
        }
        writer.write(&format!("#   @return [{}]", field.ruby_type()));
    }
    writer.write("Config = ::Struct.new(");
    writer.indent();
    for name in fields.keys() {
        writer.write(&format!(":{},", name));
    }
    writer.write("keyword_init: true");
    writer.outdent();
    writer.open_block(") do", "end");
    writer.write("include Garnet::Configuration");
    writer.blank();

    writer.write("# Validates the configuration.");
    writer.open_block("def validate!", "end");
    for field in fields.values() {
        writer.write(&format!(
            "Garnet::Validator.validate_types!({}, {}, context: 'config[:{}]') unless {}.nil?",
            field.name(),
            field.ruby_type(),
            field.name(),
            field.name()
        ));
    }
    writer.close_block()?;
    writer.blank();

    writer.write("# The default value chain for each key.");
    writer.open_block("def self.defaults", "end");
    writer.open_block("{", "}");
    for field in fields.values() {
        if let Some(default_expr) = field.default_expr() {
            writer.write(&format!("{}: [{}],", field.name(), default_expr));
        }
    }
    writer.close_block()?;
    writer.close_block()?;
    writer.close_block()?;

    writer.close_all()?;
    let path = ctx.settings.lib_path("config");
    ctx.manifest.write_file(&path, writer.finish()?)
}

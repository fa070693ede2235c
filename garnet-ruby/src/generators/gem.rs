/*!
Emits the gem entrypoint, `lib/<gem>.rb`; the runtime require, ordered relative requires for
every emitted file, and the version constant. Emitted last so sidecar middleware files are
already present in the manifest.
*/

use crate::context::GenerationContext;
use crate::generators::FROZEN_STRING_LITERAL;
use crate::writer::RubyWriter;
use garnet_core::error::Result;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate the gem entrypoint from the current state of the manifest.
///
pub fn generate(ctx: &mut GenerationContext<'_>) -> Result<()> {
    let gem_name = ctx.settings.gem_name().to_string();
    let middleware_prefix = format!("lib/{}/middleware/", gem_name);
    let middleware_files: Vec<String> = ctx
        .manifest
        .paths()
        .filter(|path| path.starts_with(&middleware_prefix))
        .map(|path| {
            path.trim_start_matches("lib/")
                .trim_end_matches(".rb")
                .to_string()
        })
        .collect();

    let mut writer = RubyWriter::new();
    writer.write(FROZEN_STRING_LITERAL);
    writer.blank();
    writer.write("require 'garnet'");
    writer.blank();
    for file in &["types", "params", "validators", "builders", "parsers", "stubs", "errors"] {
        writer.write(&format!("require_relative '{}/{}'", gem_name, file));
    }
    for file in &middleware_files {
        writer.write(&format!("require_relative '{}'", file));
    }
    for file in &["config", "client"] {
        writer.write(&format!("require_relative '{}/{}'", gem_name, file));
    }
    writer.blank();
    writer.open_block(&format!("module {}", ctx.settings.module_name()), "end");
    writer.write(&format!("GEM_VERSION = '{}'", ctx.settings.gem_version()));
    writer.close_block()?;

    let path = ctx.settings.entrypoint_path();
    ctx.manifest.write_file(&path, writer.finish()?)
}

/*!
The actions behind each command of the `garnet` binary.
*/

use crate::GenerateCommand;
use garnet_core::error::Result;
use garnet_core::io::read_model_from_file;
use garnet_core::model::ShapeID;
use garnet_json::JsonReader;
use garnet_ruby::generator::ServiceGenerator;
use garnet_ruby::settings::GenerationSettings;
use heck::SnakeCase;
use log::debug;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Read the model, generate the service named by the command, and write the emitted gem under
/// the output directory. Returns the relative paths of the files written.
///
pub fn generate(cmd: GenerateCommand) -> Result<Vec<String>> {
    let mut reader = JsonReader::default();
    let model = read_model_from_file(&mut reader, cmd.model_file)?;
    let service = ShapeID::from_str(&cmd.service)?;
    debug!("generating service '{}'", service);

    let gem_name = cmd
        .gem_name
        .unwrap_or_else(|| service.shape_name().as_ref().to_snake_case());
    let mut settings = GenerationSettings::new(service, &gem_name);
    if let Some(module_name) = cmd.module_name {
        settings = settings.with_module_name(&module_name);
    }

    let manifest = ServiceGenerator::default().generate(&model, &settings)?;
    manifest.write_to(&cmd.output_dir)?;
    Ok(manifest.paths().cloned().collect())
}

/*!
Settings for a single generation run; the target service, gem naming, and version.
*/

use garnet_core::model::ShapeID;
use heck::CamelCase;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Settings for one generation; exactly one service is generated per run.
///
#[derive(Clone, Debug)]
pub struct GenerationSettings {
    service: ShapeID,
    gem_name: String,
    module_name: String,
    gem_version: String,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl GenerationSettings {
    ///
    /// Construct settings for the given service shape and gem name. The Ruby module name is
    /// derived from the gem name unless overridden with
    /// [`with_module_name`](struct.GenerationSettings.html#method.with_module_name).
    ///
    pub fn new(service: ShapeID, gem_name: &str) -> Self {
        Self {
            service,
            gem_name: gem_name.to_string(),
            module_name: gem_name.to_camel_case(),
            gem_version: "1.0.0".to_string(),
        }
    }

    /// Override the Ruby module name wrapping all emitted code.
    pub fn with_module_name(mut self, module_name: &str) -> Self {
        self.module_name = module_name.to_string();
        self
    }

    /// Override the version constant emitted into the gem entrypoint.
    pub fn with_gem_version(mut self, gem_version: &str) -> Self {
        self.gem_version = gem_version.to_string();
        self
    }

    /// The shape id of the service to generate.
    pub fn service(&self) -> &ShapeID {
        &self.service
    }

    /// The name of the emitted gem; also the root of all emitted file paths.
    pub fn gem_name(&self) -> &str {
        &self.gem_name
    }

    /// The Ruby module wrapping all emitted code.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// The version constant emitted into the gem entrypoint.
    pub fn gem_version(&self) -> &str {
        &self.gem_version
    }

    /// The manifest path of the gem entrypoint file.
    pub fn entrypoint_path(&self) -> String {
        format!("lib/{}.rb", self.gem_name)
    }

    /// The manifest path of a file within the gem's lib directory.
    pub fn lib_path(&self, file_name: &str) -> String {
        format!("lib/{}/{}.rb", self.gem_name, file_name)
    }
}

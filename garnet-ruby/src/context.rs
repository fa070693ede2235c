/*!
The shared state threaded through every emitter during one generation.
*/

use crate::manifest::FileManifest;
use crate::settings::GenerationSettings;
use crate::symbols::SymbolProvider;
use garnet_core::error::Result;
use garnet_core::model::shapes::TopLevelShape;
use garnet_core::model::Model;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The context for one generation run; the model and service under generation, the settings,
/// the symbol provider, and the manifest collecting emitted files. Fields are public so that
/// emitters can borrow them independently.
///
#[derive(Debug)]
pub struct GenerationContext<'a> {
    /// The model under generation.
    pub model: &'a Model,
    /// The service shape under generation.
    pub service: &'a TopLevelShape,
    /// The settings for this run.
    pub settings: &'a GenerationSettings,
    /// The symbol provider for this run.
    pub symbols: SymbolProvider,
    /// The manifest collecting emitted files.
    pub manifest: FileManifest,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a> GenerationContext<'a> {
    /// Construct a new context for one generation run.
    pub fn new(
        model: &'a Model,
        service: &'a TopLevelShape,
        settings: &'a GenerationSettings,
    ) -> Self {
        Self {
            model,
            service,
            settings,
            symbols: SymbolProvider::new(settings.module_name(), settings.gem_name()),
            manifest: FileManifest::new(),
        }
    }

    ///
    /// The operations of the service under generation, sorted by shape id.
    ///
    pub fn operations(&self) -> Result<Vec<&'a TopLevelShape>> {
        use garnet_core::model::identity::HasIdentity;
        self.model.top_down_operations(self.service.id())
    }

    /// Consume the context, returning the manifest of emitted files.
    pub fn into_manifest(self) -> FileManifest {
        self.manifest
    }
}

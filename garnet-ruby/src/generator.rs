/*!
The orchestrator for one whole-service generation; resolves the protocol, assembles the
middleware stack, and runs every emitter in a fixed file order. Re-running the generator over
the same model and settings produces byte-identical output.
*/

use crate::context::GenerationContext;
use crate::generators::{client, config, gem, params, types, validators};
use crate::manifest::FileManifest;
use crate::middleware::{MiddlewareRecord, MiddlewareStack};
use crate::protocol::{resolve_protocol, ProtocolGenerator};
use crate::protocols::rails_json::RailsJson;
use crate::settings::GenerationSettings;
use crate::transport::ConfigField;
use garnet_core::error::{ErrorKind, Result};
use garnet_core::model::Model;
use std::fmt::{Debug, Formatter};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// A factory for user-added middleware records; invoked once per generation.
pub type MiddlewareFactory = Box<dyn Fn() -> MiddlewareRecord>;

///
/// Generates a complete Ruby client SDK for one service of a model.
///
pub struct ServiceGenerator {
    protocols: Vec<Box<dyn ProtocolGenerator>>,
    middleware: Vec<MiddlewareFactory>,
    config: Vec<ConfigField>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Debug for ServiceGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceGenerator")
            .field("protocols", &self.protocols)
            .field("middleware", &self.middleware.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for ServiceGenerator {
    fn default() -> Self {
        Self {
            protocols: vec![Box::new(RailsJson)],
            middleware: Default::default(),
            config: Default::default(),
        }
    }
}

impl ServiceGenerator {
    /// Register an additional protocol generator; earlier registrations win on conflicts.
    pub fn with_protocol(mut self, protocol: Box<dyn ProtocolGenerator>) -> Self {
        self.protocols.push(protocol);
        self
    }

    /// Register a user-added middleware record, appended after the protocol's middleware.
    pub fn with_middleware<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> MiddlewareRecord + 'static,
    {
        self.middleware.push(Box::new(factory));
        self
    }

    /// Register a user-added configuration field.
    pub fn with_config(mut self, field: ConfigField) -> Self {
        self.config.push(field);
        self
    }

    ///
    /// Generate the client SDK for the service named in `settings`, returning the manifest of
    /// emitted files.
    ///
    pub fn generate(&self, model: &Model, settings: &GenerationSettings) -> Result<FileManifest> {
        let service = model.expect_shape(settings.service())?;
        if !service.is_service() {
            return Err(ErrorKind::InvalidShapeVariant("Service".to_string()).into());
        }
        let protocol = resolve_protocol(&self.protocols, service)?;
        let transport = protocol.application_transport();

        let mut stack = MiddlewareStack::new();
        stack.append(transport.default_middleware());
        stack.append(protocol.client_middleware());
        for factory in &self.middleware {
            stack.register(factory());
        }

        let mut ctx = GenerationContext::new(model, service, settings);

        types::generate(&mut ctx)?;
        params::generate(&mut ctx)?;
        validators::generate(&mut ctx)?;
        protocol.generate_builders(&mut ctx)?;
        protocol.generate_parsers(&mut ctx)?;
        protocol.generate_stubs(&mut ctx)?;
        protocol.generate_errors(&mut ctx)?;

        for record in stack.records() {
            if record.applies_to_service(model, service) {
                let _ = record.write_extra_files(&mut ctx)?;
            }
        }

        let mut extra = protocol.extra_config();
        extra.extend(self.config.iter().cloned());
        config::generate(&mut ctx, &transport, &stack, &extra)?;
        client::generate(&mut ctx, &transport, &stack)?;
        gem::generate(&mut ctx)?;

        Ok(ctx.into_manifest())
    }
}

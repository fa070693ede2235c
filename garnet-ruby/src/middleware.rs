/*!
The middleware model; typed records describing the per-request pipeline the emitted client
composes, and the ordered stack they are collected into.

The emitted pipeline carries a request through the states `INITIALIZED → SERIALIZED → BUILT →
SIGNED → SENT → DESERIALIZED → DONE`; each record attaches to the step that performs the
corresponding transition. Any middleware may short-circuit by setting `output.error`, after
which only DESERIALIZE-level error mapping runs.
*/

use crate::context::GenerationContext;
use crate::transport::ConfigField;
use crate::writer::RubyWriter;
use garnet_core::error::Result;
use garnet_core::model::shapes::TopLevelShape;
use garnet_core::model::Model;
use std::fmt::{Debug, Formatter};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The pipeline phase a middleware record attaches to, in execution order.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MiddlewareStep {
    /// Prepare the operation input.
    Initialize,
    /// Serialize the input onto the request shell.
    Serialize,
    /// Finalize request metadata; lengths, checksums, host prefixes.
    Build,
    /// Sign and send the request.
    Finalize,
    /// Deserialize the response, mapping errors.
    Deserialize,
}

/// A predicate deciding whether a record applies to a service at all.
pub type ServicePredicate = Box<dyn Fn(&Model, &TopLevelShape) -> bool>;

/// A predicate deciding whether a record applies to one operation of a service.
pub type OperationPredicate = Box<dyn Fn(&Model, &TopLevelShape, &TopLevelShape) -> bool>;

/// A producer of per-operation parameters; `(name, ruby expression)` pairs in render order.
pub type OperationParams =
    Box<dyn Fn(&mut GenerationContext<'_>, &TopLevelShape) -> Result<Vec<(String, String)>>>;

/// An override for the default `stack.use(...)` render of a record.
pub type RenderHook = Box<dyn Fn(&mut RubyWriter, &str, &[(String, String)]) -> Result<()>>;

/// A producer of sidecar files; returns the manifest paths written.
pub type ExtraFiles = Box<dyn Fn(&mut GenerationContext<'_>) -> Result<Vec<String>>>;

///
/// One middleware in the emitted pipeline; immutable once built. Records are created through
/// [`MiddlewareRecord::builder`](struct.MiddlewareRecord.html#method.builder).
///
pub struct MiddlewareRecord {
    klass: String,
    step: MiddlewareStep,
    order: i8,
    additional_params: Vec<(String, String)>,
    operation_params: Option<OperationParams>,
    service_predicate: Option<ServicePredicate>,
    operation_predicate: Option<OperationPredicate>,
    client_config: Vec<ConfigField>,
    render_hook: Option<RenderHook>,
    extra_files: Option<ExtraFiles>,
}

///
/// Builder for [`MiddlewareRecord`](struct.MiddlewareRecord.html).
///
pub struct MiddlewareBuilder {
    record: MiddlewareRecord,
}

///
/// The ordered collection of middleware records for a service. Resolution filters by the
/// record predicates and sorts by `(step, order)`, stable over insertion order.
///
#[derive(Debug, Default)]
pub struct MiddlewareStack {
    records: Vec<MiddlewareRecord>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl MiddlewareStep {
    /// All steps, in pipeline order.
    pub const ALL: [MiddlewareStep; 5] = [
        MiddlewareStep::Initialize,
        MiddlewareStep::Serialize,
        MiddlewareStep::Build,
        MiddlewareStep::Finalize,
        MiddlewareStep::Deserialize,
    ];

    /// The conventional upper-case label for this step.
    pub fn label(&self) -> &'static str {
        match self {
            MiddlewareStep::Initialize => "INITIALIZE",
            MiddlewareStep::Serialize => "SERIALIZE",
            MiddlewareStep::Build => "BUILD",
            MiddlewareStep::Finalize => "FINALIZE",
            MiddlewareStep::Deserialize => "DESERIALIZE",
        }
    }
}

// ------------------------------------------------------------------------------------------------

impl Debug for MiddlewareBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiddlewareBuilder")
            .field("record", &self.record)
            .finish()
    }
}

impl Debug for MiddlewareRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiddlewareRecord")
            .field("klass", &self.klass)
            .field("step", &self.step)
            .field("order", &self.order)
            .finish()
    }
}

impl MiddlewareRecord {
    /// Start building a record for the given emitted class name and pipeline step.
    pub fn builder(klass: &str, step: MiddlewareStep) -> MiddlewareBuilder {
        MiddlewareBuilder {
            record: MiddlewareRecord {
                klass: klass.to_string(),
                step,
                order: 0,
                additional_params: Default::default(),
                operation_params: None,
                service_predicate: None,
                operation_predicate: None,
                client_config: Default::default(),
                render_hook: None,
                extra_files: None,
            },
        }
    }

    /// The emitted class name the runtime uses to locate this middleware.
    pub fn klass(&self) -> &str {
        &self.klass
    }

    /// The pipeline step this record attaches to.
    pub fn step(&self) -> MiddlewareStep {
        self.step
    }

    /// The ordering of this record within its step; smaller goes earlier.
    pub fn order(&self) -> i8 {
        self.order
    }

    /// The configuration keys this middleware needs flattened into the client config.
    pub fn client_config(&self) -> impl Iterator<Item = &ConfigField> {
        self.client_config.iter()
    }

    /// Evaluate the service predicate; records default to applying.
    pub fn applies_to_service(&self, model: &Model, service: &TopLevelShape) -> bool {
        self.service_predicate
            .as_ref()
            .map(|predicate| predicate(model, service))
            .unwrap_or(true)
    }

    /// Evaluate the operation predicate; records default to applying.
    pub fn applies_to_operation(
        &self,
        model: &Model,
        service: &TopLevelShape,
        operation: &TopLevelShape,
    ) -> bool {
        self.operation_predicate
            .as_ref()
            .map(|predicate| predicate(model, service, operation))
            .unwrap_or(true)
    }

    ///
    /// Materialize the parameters for one operation; the per-operation producer's parameters
    /// followed by the static additions.
    ///
    pub fn params_for(
        &self,
        ctx: &mut GenerationContext<'_>,
        operation: &TopLevelShape,
    ) -> Result<Vec<(String, String)>> {
        let mut params = match &self.operation_params {
            Some(producer) => producer(ctx, operation)?,
            None => Default::default(),
        };
        params.extend(self.additional_params.iter().cloned());
        Ok(params)
    }

    ///
    /// Render this record into an operation method; `stack.use(Klass, key: value, …)` unless a
    /// render hook overrides it.
    ///
    pub fn render(
        &self,
        writer: &mut RubyWriter,
        ctx: &mut GenerationContext<'_>,
        operation: &TopLevelShape,
    ) -> Result<()> {
        let params = self.params_for(ctx, operation)?;
        if let Some(hook) = &self.render_hook {
            return hook(writer, &self.klass, &params);
        }
        if params.is_empty() {
            writer.write(&format!("stack.use({})", self.klass));
        } else {
            writer.open_block(&format!("stack.use({},", self.klass), ")");
            for (index, (key, value)) in params.iter().enumerate() {
                let separator = if index + 1 == params.len() { "" } else { "," };
                writer.write(&format!("{}: {}{}", key, value, separator));
            }
            writer.close_block()?;
        }
        Ok(())
    }

    /// Run the extra-files producer, returning the manifest paths written.
    pub fn write_extra_files(&self, ctx: &mut GenerationContext<'_>) -> Result<Vec<String>> {
        match &self.extra_files {
            Some(producer) => producer(ctx),
            None => Ok(Default::default()),
        }
    }
}

// ------------------------------------------------------------------------------------------------

impl MiddlewareBuilder {
    /// Set the in-step order; signed, smaller goes earlier, ties break by insertion order.
    pub fn order(mut self, order: i8) -> Self {
        self.record.order = order;
        self
    }

    /// Add a static parameter merged after the per-operation parameters.
    pub fn additional_param(mut self, name: &str, value: &str) -> Self {
        self.record
            .additional_params
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Set the per-operation parameter producer.
    pub fn operation_params<F>(mut self, producer: F) -> Self
    where
        F: Fn(&mut GenerationContext<'_>, &TopLevelShape) -> Result<Vec<(String, String)>>
            + 'static,
    {
        self.record.operation_params = Some(Box::new(producer));
        self
    }

    /// Set the service predicate.
    pub fn service_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Model, &TopLevelShape) -> bool + 'static,
    {
        self.record.service_predicate = Some(Box::new(predicate));
        self
    }

    /// Set the operation predicate.
    pub fn operation_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Model, &TopLevelShape, &TopLevelShape) -> bool + 'static,
    {
        self.record.operation_predicate = Some(Box::new(predicate));
        self
    }

    /// Add a configuration key this middleware needs on the client config.
    pub fn client_config(mut self, field: ConfigField) -> Self {
        self.record.client_config.push(field);
        self
    }

    /// Override the default `stack.use` render.
    pub fn render_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut RubyWriter, &str, &[(String, String)]) -> Result<()> + 'static,
    {
        self.record.render_hook = Some(Box::new(hook));
        self
    }

    /// Set the sidecar file producer.
    pub fn extra_files<F>(mut self, producer: F) -> Self
    where
        F: Fn(&mut GenerationContext<'_>) -> Result<Vec<String>> + 'static,
    {
        self.record.extra_files = Some(Box::new(producer));
        self
    }

    /// Finish building; the record is immutable hereafter.
    pub fn build(self) -> MiddlewareRecord {
        self.record
    }
}

// ------------------------------------------------------------------------------------------------

impl MiddlewareStack {
    /// Construct a new, empty, stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the stack.
    pub fn register(&mut self, record: MiddlewareRecord) {
        self.records.push(record);
    }

    /// Add all the given records to the stack, preserving their order.
    pub fn append(&mut self, records: Vec<MiddlewareRecord>) {
        self.records.extend(records);
    }

    /// Return an iterator over every registered record, in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &MiddlewareRecord> {
        self.records.iter()
    }

    ///
    /// Resolve the records applying to one operation, in emission order; predicate filtering
    /// followed by a stable sort on `(step, order)`.
    ///
    pub fn resolve(
        &self,
        model: &Model,
        service: &TopLevelShape,
        operation: &TopLevelShape,
    ) -> Vec<&MiddlewareRecord> {
        let mut records: Vec<&MiddlewareRecord> = self
            .records
            .iter()
            .filter(|record| {
                record.applies_to_service(model, service)
                    && record.applies_to_operation(model, service, operation)
            })
            .collect();
        records.sort_by_key(|record| (record.step, record.order));
        records
    }

    ///
    /// The configuration fields contributed by records whose service predicate passes.
    ///
    pub fn config_fields(&self, model: &Model, service: &TopLevelShape) -> Vec<&ConfigField> {
        self.records
            .iter()
            .filter(|record| record.applies_to_service(model, service))
            .flat_map(|record| record.client_config())
            .collect()
    }
}

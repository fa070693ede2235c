/*!
Builders to construct models in a more fluent style. See the example in the
[library overview](../index.html#model-api-example).

Relative shape names given to builders resolve against the model builder's default namespace,
unless they name a simple shape from the prelude; absolute names (containing `#`) are used as
given. Builders trade safety for convenience and may panic on invalid names where the core model
returns errors.
*/

use crate::model::identity::HasIdentity;
use crate::model::shapes::{
    HasTraits, ListOrSet, Map, MemberShape, Operation, Service, ShapeKind, StructureOrUnion,
    TopLevelShape,
};
use crate::model::values::Value;
use crate::model::{Identifier, Model, NamespaceID, ShapeID};
use crate::prelude::{prelude_shape_named, prelude_target_simple};
use crate::syntax::SHAPE_ID_ABSOLUTE_SEPARATOR;
use crate::Version;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Builder for a top-level `Model`. This implements `From<T>` to provide the model itself.
///
#[derive(Debug)]
pub struct ModelBuilder {
    default_namespace: NamespaceID,
    model: Model,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl From<ModelBuilder> for Model {
    fn from(builder: ModelBuilder) -> Self {
        builder.model
    }
}

impl ModelBuilder {
    /// Construct a new model builder using the provided Smithy version and a default namespace.
    pub fn new(smithy_version: Version, default_namespace: &str) -> Self {
        Self {
            default_namespace: NamespaceID::from_str(default_namespace).unwrap(),
            model: Model::new(smithy_version),
        }
    }

    /// Add the key/value pair to the model's metadata.
    pub fn metadata(mut self, key: &str, value: Value) -> Self {
        let _ = self.model.add_metadata(key.to_string(), value);
        self
    }

    /// Add the given shape to the model.
    pub fn shape(mut self, shape: TopLevelShape) -> Self {
        if shape.id().is_member() {
            panic!(
                "{}",
                crate::error::ErrorKind::ShapeIDExpected(shape.id().clone())
            );
        }
        let _ = self.model.add_shape(shape);
        self
    }

    /// Create and add a new simple shape to this model using the `SimpleShapeBuilder` instance.
    pub fn simple_shape(self, builder: shapes::SimpleShapeBuilder) -> Self {
        let id = self.shape_name(&builder.shape_name);
        let mut shape = TopLevelShape::new(id, ShapeKind::Simple(builder.simple_shape));
        apply_traits(&mut shape, builder.applied_traits);
        self.shape(shape)
    }

    /// Create and add a new list shape to this model using the `ListBuilder` instance.
    pub fn list(self, builder: shapes::ListBuilder) -> Self {
        let id = self.shape_name(&builder.shape_name);
        let member = self.member_shape(&id, builder.member);
        let mut shape = TopLevelShape::new(id, ShapeKind::List(ListOrSet::from(member)));
        apply_traits(&mut shape, builder.applied_traits);
        self.shape(shape)
    }

    /// Create and add a new set shape to this model using the `ListBuilder` instance.
    pub fn set(self, builder: shapes::ListBuilder) -> Self {
        let id = self.shape_name(&builder.shape_name);
        let member = self.member_shape(&id, builder.member);
        let mut shape = TopLevelShape::new(id, ShapeKind::Set(ListOrSet::from(member)));
        apply_traits(&mut shape, builder.applied_traits);
        self.shape(shape)
    }

    /// Create and add a new map shape to this model using the `MapBuilder` instance.
    pub fn map(self, builder: shapes::MapBuilder) -> Self {
        let id = self.shape_name(&builder.shape_name);
        let key = self.member_shape(&id, builder.key);
        let value = self.member_shape(&id, builder.value);
        let mut shape = TopLevelShape::new(id, ShapeKind::Map(Map::from(key, value)));
        apply_traits(&mut shape, builder.applied_traits);
        self.shape(shape)
    }

    /// Create and add a new structure shape to this model using the `StructureBuilder` instance.
    pub fn structure(self, builder: shapes::StructureBuilder) -> Self {
        let id = self.shape_name(&builder.shape_name);
        let members = self.member_shapes(&id, builder.members);
        let mut shape = TopLevelShape::new(
            id,
            ShapeKind::Structure(StructureOrUnion::with_members(&members)),
        );
        apply_traits(&mut shape, builder.applied_traits);
        self.shape(shape)
    }

    /// Create and add a new union shape to this model using the `StructureBuilder` instance.
    pub fn union(self, builder: shapes::StructureBuilder) -> Self {
        let id = self.shape_name(&builder.shape_name);
        let members = self.member_shapes(&id, builder.members);
        let mut shape = TopLevelShape::new(
            id,
            ShapeKind::Union(StructureOrUnion::with_members(&members)),
        );
        apply_traits(&mut shape, builder.applied_traits);
        self.shape(shape)
    }

    /// Create and add a new service shape to this model using the `ServiceBuilder` instance.
    pub fn service(self, builder: shapes::ServiceBuilder) -> Self {
        let id = self.shape_name(&builder.shape_name);
        let mut service = Service::new(&builder.version);
        for operation in &builder.operations {
            service.add_operation(self.resolve(operation));
        }
        let mut shape = TopLevelShape::new(id, ShapeKind::Service(service));
        apply_traits(&mut shape, builder.applied_traits);
        self.shape(shape)
    }

    /// Create and add a new operation shape to this model using the `OperationBuilder` instance.
    pub fn operation(self, builder: shapes::OperationBuilder) -> Self {
        let id = self.shape_name(&builder.shape_name);
        let mut operation = Operation::default();
        if let Some(input) = &builder.input {
            operation.set_input(self.resolve(input));
        }
        if let Some(output) = &builder.output {
            operation.set_output(self.resolve(output));
        }
        for error in &builder.errors {
            operation.add_error(self.resolve(error));
        }
        let mut shape = TopLevelShape::new(id, ShapeKind::Operation(operation));
        apply_traits(&mut shape, builder.applied_traits);
        self.shape(shape)
    }

    /// Create a new shape name using the default namespace.
    pub fn shape_name(&self, shape_name: &str) -> ShapeID {
        self.default_namespace
            .make_shape(Identifier::new_unchecked(shape_name))
    }

    // --------------------------------------------------------------------------------------------

    fn resolve(&self, name: &str) -> ShapeID {
        if name.contains(SHAPE_ID_ABSOLUTE_SEPARATOR) {
            ShapeID::from_str(name).unwrap()
        } else {
            let candidate = prelude_shape_named(name);
            if prelude_target_simple(&candidate).is_some() {
                candidate
            } else {
                self.shape_name(name)
            }
        }
    }

    fn member_shape(&self, parent_id: &ShapeID, builder: shapes::MemberBuilder) -> MemberShape {
        let mut member = MemberShape::new_from(
            parent_id,
            Identifier::new_unchecked(&builder.member_name),
            self.resolve(&builder.target),
        );
        for a_trait in builder.applied_traits {
            member
                .apply_with_value(a_trait.shape_id, a_trait.value)
                .unwrap();
        }
        member
    }

    fn member_shapes(
        &self,
        parent_id: &ShapeID,
        builders: Vec<shapes::MemberBuilder>,
    ) -> Vec<MemberShape> {
        builders
            .into_iter()
            .map(|builder| self.member_shape(parent_id, builder))
            .collect()
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn apply_traits(shape: &mut TopLevelShape, traits: Vec<traits::TraitBuilder>) {
    for a_trait in traits {
        shape
            .apply_with_value(a_trait.shape_id, a_trait.value)
            .unwrap();
    }
}

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

#[doc(hidden)]
pub mod shapes;
pub use shapes::{
    ListBuilder, MapBuilder, MemberBuilder, OperationBuilder, ServiceBuilder, SimpleShapeBuilder,
    StructureBuilder,
};

pub mod traits;
pub use traits::TraitBuilder;

pub mod values;
pub use values::{ArrayBuilder, ObjectBuilder};

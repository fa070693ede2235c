/*!
The in-memory semantic model; a collection of top-level shapes queryable by shape id, plus the
query facade used by the code generators.
*/

use crate::error::{ErrorKind, Result};
use crate::model::shapes::{
    HasTraits, MemberShape, Simple, TopLevelShape, TraitValue,
};
use crate::model::values::{Value, ValueMap};
use crate::prelude::{is_prelude_shape, prelude_target_simple};
use crate::Version;
use std::collections::BTreeMap;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A resolved semantic model; a map from shape id to top-level shape plus model metadata. Shapes
/// iterate in shape-id order so that all downstream processing is deterministic.
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Model {
    smithy_version: Version,
    metadata: ValueMap,
    shapes: BTreeMap<ShapeID, TopLevelShape>,
}

///
/// The resolution of a member's target shape id; either a simple kind from the prelude, or a
/// shape defined within the model.
///
#[derive(Clone, Debug)]
pub enum Target<'a> {
    /// The target is a simple shape in the prelude namespace.
    Simple(Simple),
    /// The target is a shape defined in this model.
    Shape(&'a TopLevelShape),
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Model {
    /// Create a new model using the provided Smithy version.
    pub fn new(smithy_version: Version) -> Self {
        Self {
            smithy_version,
            metadata: Default::default(),
            shapes: Default::default(),
        }
    }

    /// Return the Smithy version this model conforms to.
    pub fn smithy_version(&self) -> &Version {
        &self.smithy_version
    }

    // --------------------------------------------------------------------------------------------

    /// Returns `true` if this model has any metadata associated with it, else `false`.
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// Return an iterator over the model's metadata key/value pairs.
    pub fn metadata(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.metadata.iter()
    }

    /// Add the key/value pair to the model's metadata.
    pub fn add_metadata(&mut self, key: String, value: Value) -> Option<Value> {
        self.metadata.insert(key, value)
    }

    // --------------------------------------------------------------------------------------------

    /// Returns `true` if this model contains a shape with the given id, else `false`.
    pub fn has_shape(&self, shape_id: &ShapeID) -> bool {
        self.shapes.contains_key(shape_id)
    }

    /// Return the shape in this model with the given id, if present.
    pub fn shape(&self, shape_id: &ShapeID) -> Option<&TopLevelShape> {
        self.shapes.get(shape_id)
    }

    ///
    /// Return the shape in this model with the given id; a missing shape is a model integrity
    /// failure.
    ///
    pub fn expect_shape(&self, shape_id: &ShapeID) -> Result<&TopLevelShape> {
        self.shape(shape_id)
            .ok_or_else(|| ErrorKind::UnknownShape(shape_id.to_string()).into())
    }

    /// Return an iterator over all shapes in this model, in shape-id order.
    pub fn shapes(&self) -> impl Iterator<Item = &TopLevelShape> {
        self.shapes.values()
    }

    /// Return an iterator over the ids of all shapes in this model, in order.
    pub fn shape_names(&self) -> impl Iterator<Item = &ShapeID> {
        self.shapes.keys()
    }

    /// Add the given shape to the model, returning any shape previously held under the same id.
    pub fn add_shape(&mut self, shape: TopLevelShape) -> Option<TopLevelShape> {
        self.shapes.insert(shape.id().clone(), shape)
    }

    /// Remove the shape with the given id from the model.
    pub fn remove_shape(&mut self, shape_id: &ShapeID) -> Option<TopLevelShape> {
        self.shapes.remove(shape_id)
    }

    // --------------------------------------------------------------------------------------------

    ///
    /// Resolve a member's target id to either a prelude simple kind or a shape in this model; a
    /// target resolving to neither is a model integrity failure.
    ///
    pub fn resolve_target(&self, target: &ShapeID) -> Result<Target<'_>> {
        if let Some(simple) = prelude_target_simple(target) {
            Ok(Target::Simple(simple))
        } else if is_prelude_shape(target) {
            Err(ErrorKind::UnknownShape(target.to_string()).into())
        } else {
            Ok(Target::Shape(self.expect_shape(target)?))
        }
    }

    ///
    /// Return the value of the named trait for a member, applying member-over-target resolution:
    /// a value applied to the member wins, otherwise the member's target shape is consulted.
    ///
    pub fn member_trait<'a>(
        &'a self,
        member: &'a MemberShape,
        trait_id: &ShapeID,
    ) -> Option<&'a TraitValue> {
        member.trait_named(trait_id).or_else(|| {
            self.shape(member.target())
                .and_then(|target| target.trait_named(trait_id))
        })
    }

    /// Returns `true` if the named trait applies to the member or to its target shape.
    pub fn member_has_trait(&self, member: &MemberShape, trait_id: &ShapeID) -> bool {
        self.member_trait(member, trait_id).is_some()
    }

    // --------------------------------------------------------------------------------------------

    ///
    /// Return all operations reachable from the given service shape, ordered by shape id so that
    /// emission order is stable. The service id must name a service shape within this model.
    ///
    pub fn top_down_operations(&self, service_id: &ShapeID) -> Result<Vec<&TopLevelShape>> {
        let service_shape = self.expect_shape(service_id)?;
        let service = match service_shape.body().as_service() {
            Some(service) => service,
            None => return Err(ErrorKind::InvalidShapeVariant("Service".to_string()).into()),
        };
        let mut operations: Vec<&TopLevelShape> = Default::default();
        for operation_id in service.operations() {
            let operation = self.expect_shape(operation_id)?;
            if !operation.is_operation() {
                return Err(ErrorKind::InvalidShapeVariant("Operation".to_string()).into());
            }
            if !operations.iter().any(|seen| seen.id() == operation.id()) {
                operations.push(operation);
            }
        }
        operations.sort_by(|lhs, rhs| lhs.id().cmp(rhs.id()));
        Ok(operations)
    }
}

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod identity;
pub use identity::{HasIdentity, Identifier, NamespaceID, ShapeID};

pub mod shapes;

pub mod values;

pub mod visitor;

pub mod walk;

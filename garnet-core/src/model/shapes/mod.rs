/*!
Model structures common across all shape types.

The concept of a _shape_ in Smithy is abstract; shapes are classified as _simple_, _aggregate_,
and _service_. The model here introduces [`TopLevelShape`](struct.TopLevelShape.html) as a common
concrete structure which contains an enumeration, [`ShapeKind`](enum.ShapeKind.html), to
represent the kind-specific data.
*/

use crate::error::{ErrorKind, Result};
use crate::model::identity::HasIdentity;
use crate::model::values::Value;
use crate::model::{Identifier, ShapeID};
use crate::prelude::{
    prelude_shape_named, TRAIT_DEPRECATED, TRAIT_DOCUMENTATION, TRAIT_ERROR,
    TRAIT_HTTPCHECKSUMREQUIRED, TRAIT_IDEMPOTENT, TRAIT_READONLY, TRAIT_REQUIRED,
    TRAIT_REQUIRESLENGTH, TRAIT_SENSITIVE, TRAIT_SPARSE, TRAIT_STREAMING,
};
use std::collections::BTreeMap;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The value of an applied trait, this is optional for some traits.
///
pub type TraitValue = Option<Value>;

///
/// The set of traits applied to a shape, ordered by trait identifier so that iteration over a
/// shape's traits is deterministic.
///
pub type AppliedTraits = BTreeMap<ShapeID, TraitValue>;

///
/// This trait is implemented by model elements that may have Smithy traits applied.
///
pub trait HasTraits {
    /// Returns `true` if the model element has any applied traits, else `false`.
    fn has_traits(&self) -> bool {
        !self.traits().is_empty()
    }

    /// Returns `true` if the model element has an applied trait with the associated id,
    /// else `false`.
    fn has_trait(&self, id: &ShapeID) -> bool {
        self.traits().contains_key(id)
    }

    /// Return all traits applied to this model element.
    fn traits(&self) -> &AppliedTraits;

    /// Return all traits applied to this model element, mutably.
    fn traits_mut(&mut self) -> &mut AppliedTraits;

    /// Returns the value of the trait applied to this element with the provided id.
    fn trait_named(&self, id: &ShapeID) -> Option<&TraitValue> {
        self.traits().get(id)
    }

    /// Apply a trait with the provided identifier to this model element.
    fn apply(&mut self, id: ShapeID) -> Result<()> {
        self.apply_with_value(id, None)
    }

    ///
    /// Apply a trait with the provided identifier and value to this model element ensuring the
    /// conflict resolution rules are applied.
    ///
    /// From [Trait conflict resolution](https://awslabs.github.io/smithy/1.0/spec/core/model.html#trait-conflict-resolution):
    ///
    /// > Duplicate traits applied to shapes are allowed in the following cases:
    /// >
    /// > 1. If the trait is a list or set shape, then the conflicting trait values are concatenated
    /// >    into a single trait value.
    /// > 1. If both values are exactly equal, then the conflict is ignored.
    /// >
    /// > All other instances of trait collisions are prohibited.
    ///
    fn apply_with_value(&mut self, a_trait: ShapeID, value: TraitValue) -> Result<()>;

    /// Add all these traits to this model element.
    fn append_traits(&mut self, traits: &AppliedTraits) -> Result<()> {
        for (id, value) in traits {
            self.apply_with_value(id.clone(), value.clone())?;
        }
        Ok(())
    }

    /// Remove the trait with the given identifier from this model element.
    fn remove_trait(&mut self, id: &ShapeID) {
        let _ = self.traits_mut().remove(id);
    }

    // --------------------------------------------------------------------------------------------

    /// Returns the value of the named prelude trait, if applied.
    fn prelude_trait_named(&self, name: &str) -> Option<&TraitValue> {
        self.trait_named(&prelude_shape_named(name))
    }

    /// Returns `true` if the model element has the named prelude trait applied, else `false`.
    fn has_prelude_trait(&self, name: &str) -> bool {
        self.has_trait(&prelude_shape_named(name))
    }

    /// Returns `true` if the model element has the prelude trait `documentation` applied.
    fn has_documentation(&self) -> bool {
        self.has_prelude_trait(TRAIT_DOCUMENTATION)
    }

    /// Returns `true` if the model element has the prelude trait `deprecated` applied.
    fn is_deprecated(&self) -> bool {
        self.has_prelude_trait(TRAIT_DEPRECATED)
    }

    /// Returns `true` if the model element has the prelude trait `error` applied.
    fn is_error(&self) -> bool {
        self.has_prelude_trait(TRAIT_ERROR)
    }

    /// Returns `true` if the model element has the prelude trait `idempotent` applied.
    fn is_idempotent(&self) -> bool {
        self.has_prelude_trait(TRAIT_IDEMPOTENT)
    }

    /// Returns `true` if the model element has the prelude trait `readonly` applied.
    fn is_readonly(&self) -> bool {
        self.has_prelude_trait(TRAIT_READONLY)
    }

    /// Returns `true` if the model element has the prelude trait `required` applied.
    fn is_required(&self) -> bool {
        self.has_prelude_trait(TRAIT_REQUIRED)
    }

    /// Returns `true` if the model element has the prelude trait `sensitive` applied.
    fn is_sensitive(&self) -> bool {
        self.has_prelude_trait(TRAIT_SENSITIVE)
    }

    /// Returns `true` if the model element has the prelude trait `sparse` applied.
    fn is_sparse(&self) -> bool {
        self.has_prelude_trait(TRAIT_SPARSE)
    }

    /// Returns `true` if the model element has the prelude trait `streaming` applied.
    fn is_streaming(&self) -> bool {
        self.has_prelude_trait(TRAIT_STREAMING)
    }

    /// Returns `true` if the model element has the prelude trait `requiresLength` applied.
    fn has_required_length(&self) -> bool {
        self.has_prelude_trait(TRAIT_REQUIRESLENGTH)
    }

    /// Returns `true` if the model element has the prelude trait `httpChecksumRequired` applied.
    fn is_checksum_required(&self) -> bool {
        self.has_prelude_trait(TRAIT_HTTPCHECKSUMREQUIRED)
    }
}

///
/// This structure represents a top-level shape within a model. The shape-specific data is within
/// the `ShapeKind` enumeration. Aggregate shapes may have members of type `MemberShape`, but a
/// model only directly contains top-level shapes.
///
#[derive(Clone, Debug, PartialEq)]
pub struct TopLevelShape {
    id: ShapeID,
    traits: AppliedTraits,
    body: ShapeKind,
}

///
/// This enumeration represents the set of shape types supported by the generators.
///
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    /// A shape holding atomic, or primitive values.
    Simple(Simple),
    /// An ordered list of shapes.
    List(ListOrSet),
    /// An unordered set of shapes.
    Set(ListOrSet),
    /// A map of names to shapes.
    Map(Map),
    /// A structure consisting of named members with shape-id targets.
    Structure(StructureOrUnion),
    /// A tagged sum consisting of named members with shape-id targets.
    Union(StructureOrUnion),
    /// A shape representing some deployed software service.
    Service(Service),
    /// A shape representing an operation on a software service.
    Operation(Operation),
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl From<Simple> for ShapeKind {
    fn from(body: Simple) -> Self {
        Self::Simple(body)
    }
}

impl From<Service> for ShapeKind {
    fn from(body: Service) -> Self {
        Self::Service(body)
    }
}

impl From<Operation> for ShapeKind {
    fn from(body: Operation) -> Self {
        Self::Operation(body)
    }
}

impl ShapeKind {
    is_as! { is_simple, Simple, as_simple, Simple }
    is_as! { is_list, List, as_list, ListOrSet }
    is_as! { is_set, Set, as_set, ListOrSet }
    is_as! { is_map, Map, as_map, Map}
    is_as! { is_structure, Structure, as_structure, StructureOrUnion}
    is_as! { is_union, Union, as_union, StructureOrUnion}
    is_as! { is_service, Service, as_service, Service }
    is_as! { is_operation, Operation, as_operation, Operation }
}

// ------------------------------------------------------------------------------------------------

impl HasIdentity for TopLevelShape {
    fn id(&self) -> &ShapeID {
        &self.id
    }

    fn set_id(&mut self, id: ShapeID) {
        self.id = id
    }
}

has_traits_impl! { TopLevelShape . traits }

impl TopLevelShape {
    ///
    /// Construct a new shape with the given identifier (shape name) and shape-specific data.
    ///
    pub fn new(id: ShapeID, body: ShapeKind) -> Self {
        Self {
            id,
            traits: Default::default(),
            body,
        }
    }

    ///
    /// Construct a new shape with the given identifier, shape-specific data, and applied traits.
    ///
    pub fn with_traits(id: ShapeID, body: ShapeKind, traits: AppliedTraits) -> Self {
        Self { id, traits, body }
    }

    ///
    /// Return a reference to the shape-specific data within the shape.
    ///
    pub fn body(&self) -> &ShapeKind {
        &self.body
    }

    ///
    /// Return a mutable reference to the shape-specific data within the shape.
    ///
    pub fn body_mut(&mut self) -> &mut ShapeKind {
        &mut self.body
    }

    // --------------------------------------------------------------------------------------------

    delegate! { is_simple, inner = body }
    delegate! { is_list, inner = body }
    delegate! { is_set, inner = body }
    delegate! { is_map, inner = body }
    delegate! { is_structure, inner = body }
    delegate! { is_union, inner = body }
    delegate! { is_service, inner = body }
    delegate! { is_operation, inner = body }

    // --------------------------------------------------------------------------------------------

    ///
    /// Does this shape support members?
    ///
    pub fn has_members(&self) -> bool {
        !matches!(self.body(), ShapeKind::Simple(_))
    }

    ///
    /// Return the value of this shape's member named `member`, if one exists.
    ///
    pub fn member(&self, member: &Identifier) -> Option<&MemberShape> {
        match self.body() {
            ShapeKind::List(v) | ShapeKind::Set(v) => {
                if member.as_ref() == crate::syntax::MEMBER_MEMBER {
                    Some(v.member())
                } else {
                    None
                }
            }
            ShapeKind::Map(v) => {
                if member.as_ref() == crate::syntax::MEMBER_KEY {
                    Some(v.key())
                } else if member.as_ref() == crate::syntax::MEMBER_VALUE {
                    Some(v.value())
                } else {
                    None
                }
            }
            ShapeKind::Structure(v) | ShapeKind::Union(v) => v.member(member),
            _ => None,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// From [Trait conflict resolution](https://awslabs.github.io/smithy/1.0/spec/core/model.html#trait-conflict-resolution):
///
/// > Duplicate traits applied to shapes are allowed in the following cases:
/// >
/// > 1. If the trait is a list or set shape, then the conflicting trait values are concatenated
/// >    into a single trait value.
/// > 1. If both values are exactly equal, then the conflict is ignored.
/// >
/// > All other instances of trait collisions are prohibited.
///
pub fn merge_traits(id: &ShapeID, left: &TraitValue, right: &TraitValue) -> Result<TraitValue> {
    match (left, right) {
        (Some(Value::Array(left)), Some(Value::Array(right))) => {
            if left.is_empty() {
                Ok(Some(Value::Array(right.clone())))
            } else if right.is_empty() {
                Ok(Some(Value::Array(left.clone())))
            } else {
                let mut result = left.clone();
                result.extend(right.iter().cloned());
                Ok(Some(Value::Array(result)))
            }
        }
        (left, right) => {
            if left == right {
                Ok(left.clone())
            } else {
                Err(ErrorKind::MergeTraitConflict(id.clone()).into())
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

#[doc(hidden)]
pub mod simple;
pub use simple::Simple;

#[doc(hidden)]
pub mod aggregate;
pub use aggregate::{ListOrSet, Map, MemberShape, StructureOrUnion};

#[doc(hidden)]
pub mod service;
pub use service::{Operation, Service};

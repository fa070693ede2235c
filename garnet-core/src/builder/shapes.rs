/*!
Builders for each of the top-level shape kinds.
*/

use crate::builder::traits::TraitBuilder;
use crate::model::shapes::Simple;

// ------------------------------------------------------------------------------------------------
// Macros
// ------------------------------------------------------------------------------------------------

macro_rules! shape_traits {
    ($struct_name:ident) => {
        impl $struct_name {
            /// Apply the provided trait to this shape.
            pub fn apply_trait(mut self, a_trait: TraitBuilder) -> Self {
                self.applied_traits.push(a_trait);
                self
            }

            /// Apply the prelude trait `documentation` to this shape.
            pub fn documentation(self, documentation: &str) -> Self {
                self.apply_trait($crate::builder::traits::documentation(documentation))
            }
        }
    };
}

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Builder for shapes with the kind `ShapeKind::Simple`.
///
#[derive(Clone, Debug)]
pub struct SimpleShapeBuilder {
    pub(crate) shape_name: String,
    pub(crate) simple_shape: Simple,
    pub(crate) applied_traits: Vec<TraitBuilder>,
}

///
/// Builder for shapes with the kinds `ShapeKind::List` or `ShapeKind::Set`.
///
#[derive(Clone, Debug)]
pub struct ListBuilder {
    pub(crate) shape_name: String,
    pub(crate) member: MemberBuilder,
    pub(crate) applied_traits: Vec<TraitBuilder>,
}

///
/// Builder for shapes with the kind `ShapeKind::Map`.
///
#[derive(Clone, Debug)]
pub struct MapBuilder {
    pub(crate) shape_name: String,
    pub(crate) key: MemberBuilder,
    pub(crate) value: MemberBuilder,
    pub(crate) applied_traits: Vec<TraitBuilder>,
}

///
/// Builder for shapes with the kinds `ShapeKind::Structure` or `ShapeKind::Union`.
///
#[derive(Clone, Debug)]
pub struct StructureBuilder {
    pub(crate) shape_name: String,
    pub(crate) members: Vec<MemberBuilder>,
    pub(crate) applied_traits: Vec<TraitBuilder>,
}

///
/// Builder for shapes with the kind `ShapeKind::Service`.
///
#[derive(Clone, Debug)]
pub struct ServiceBuilder {
    pub(crate) shape_name: String,
    pub(crate) version: String,
    pub(crate) operations: Vec<String>,
    pub(crate) applied_traits: Vec<TraitBuilder>,
}

///
/// Builder for shapes with the kind `ShapeKind::Operation`.
///
#[derive(Clone, Debug)]
pub struct OperationBuilder {
    pub(crate) shape_name: String,
    pub(crate) input: Option<String>,
    pub(crate) output: Option<String>,
    pub(crate) errors: Vec<String>,
    pub(crate) applied_traits: Vec<TraitBuilder>,
}

///
/// Builder for members of aggregate shapes.
///
#[derive(Clone, Debug)]
pub struct MemberBuilder {
    pub(crate) member_name: String,
    pub(crate) target: String,
    pub(crate) applied_traits: Vec<TraitBuilder>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

shape_traits! { SimpleShapeBuilder }
shape_traits! { ListBuilder }
shape_traits! { MapBuilder }
shape_traits! { StructureBuilder }
shape_traits! { ServiceBuilder }
shape_traits! { OperationBuilder }
shape_traits! { MemberBuilder }

impl SimpleShapeBuilder {
    /// Construct a new simple shape builder with the given name and kind.
    pub fn new(shape_name: &str, simple_shape: Simple) -> Self {
        Self {
            shape_name: shape_name.to_string(),
            simple_shape,
            applied_traits: Default::default(),
        }
    }

    /// Construct a new simple shape builder for `Simple::Blob`.
    pub fn blob(shape_name: &str) -> Self {
        Self::new(shape_name, Simple::Blob)
    }

    /// Construct a new simple shape builder for `Simple::Boolean`.
    pub fn boolean(shape_name: &str) -> Self {
        Self::new(shape_name, Simple::Boolean)
    }

    /// Construct a new simple shape builder for `Simple::Document`.
    pub fn document(shape_name: &str) -> Self {
        Self::new(shape_name, Simple::Document)
    }

    /// Construct a new simple shape builder for `Simple::String`.
    pub fn string(shape_name: &str) -> Self {
        Self::new(shape_name, Simple::String)
    }

    /// Construct a new simple shape builder for `Simple::Integer`.
    pub fn integer(shape_name: &str) -> Self {
        Self::new(shape_name, Simple::Integer)
    }

    /// Construct a new simple shape builder for `Simple::Long`.
    pub fn long(shape_name: &str) -> Self {
        Self::new(shape_name, Simple::Long)
    }

    /// Construct a new simple shape builder for `Simple::Float`.
    pub fn float(shape_name: &str) -> Self {
        Self::new(shape_name, Simple::Float)
    }

    /// Construct a new simple shape builder for `Simple::Double`.
    pub fn double(shape_name: &str) -> Self {
        Self::new(shape_name, Simple::Double)
    }

    /// Construct a new simple shape builder for `Simple::Timestamp`.
    pub fn timestamp(shape_name: &str) -> Self {
        Self::new(shape_name, Simple::Timestamp)
    }
}

// ------------------------------------------------------------------------------------------------

impl ListBuilder {
    /// Construct a new list, or set, builder with the given element target.
    pub fn new(shape_name: &str, member_target: &str) -> Self {
        Self {
            shape_name: shape_name.to_string(),
            member: MemberBuilder::new(crate::syntax::MEMBER_MEMBER, member_target),
            applied_traits: Default::default(),
        }
    }

    /// Apply the provided trait to the list's `member` member.
    pub fn apply_member_trait(mut self, a_trait: TraitBuilder) -> Self {
        self.member = self.member.apply_trait(a_trait);
        self
    }
}

// ------------------------------------------------------------------------------------------------

impl MapBuilder {
    /// Construct a new map builder with the given key and value targets.
    pub fn new(shape_name: &str, key_target: &str, value_target: &str) -> Self {
        Self {
            shape_name: shape_name.to_string(),
            key: MemberBuilder::new(crate::syntax::MEMBER_KEY, key_target),
            value: MemberBuilder::new(crate::syntax::MEMBER_VALUE, value_target),
            applied_traits: Default::default(),
        }
    }
}

// ------------------------------------------------------------------------------------------------

impl StructureBuilder {
    /// Construct a new structure, or union, builder.
    pub fn new(shape_name: &str) -> Self {
        Self {
            shape_name: shape_name.to_string(),
            members: Default::default(),
            applied_traits: Default::default(),
        }
    }

    /// Add a member with the given name and target.
    pub fn member(self, member_name: &str, target: &str) -> Self {
        self.add_member(MemberBuilder::new(member_name, target))
    }

    /// Add a member with the given name, target, and applied traits.
    pub fn member_with(self, member_name: &str, target: &str, traits: Vec<TraitBuilder>) -> Self {
        let mut member = MemberBuilder::new(member_name, target);
        member.applied_traits.extend(traits);
        self.add_member(member)
    }

    /// Add the given member to this builder.
    pub fn add_member(mut self, member: MemberBuilder) -> Self {
        self.members.push(member);
        self
    }
}

// ------------------------------------------------------------------------------------------------

impl ServiceBuilder {
    /// Construct a new service builder.
    pub fn new(shape_name: &str) -> Self {
        Self {
            shape_name: shape_name.to_string(),
            version: Default::default(),
            operations: Default::default(),
            applied_traits: Default::default(),
        }
    }

    /// Set the version of this service.
    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Add an operation, by shape name, to this service.
    pub fn operation(mut self, operation: &str) -> Self {
        self.operations.push(operation.to_string());
        self
    }
}

// ------------------------------------------------------------------------------------------------

impl OperationBuilder {
    /// Construct a new operation builder.
    pub fn new(shape_name: &str) -> Self {
        Self {
            shape_name: shape_name.to_string(),
            input: Default::default(),
            output: Default::default(),
            errors: Default::default(),
            applied_traits: Default::default(),
        }
    }

    /// Set the input shape, by name, of this operation.
    pub fn input(mut self, input: &str) -> Self {
        self.input = Some(input.to_string());
        self
    }

    /// Set the output shape, by name, of this operation.
    pub fn output(mut self, output: &str) -> Self {
        self.output = Some(output.to_string());
        self
    }

    /// Add an error shape, by name, to this operation.
    pub fn error(mut self, error: &str) -> Self {
        self.errors.push(error.to_string());
        self
    }

    /// Apply the prelude trait `readonly` to this operation.
    pub fn readonly(self) -> Self {
        self.apply_trait(crate::builder::traits::readonly())
    }

    /// Apply the prelude trait `idempotent` to this operation.
    pub fn idempotent(self) -> Self {
        self.apply_trait(crate::builder::traits::idempotent())
    }
}

// ------------------------------------------------------------------------------------------------

impl MemberBuilder {
    /// Construct a new member builder with the given name and target.
    pub fn new(member_name: &str, target: &str) -> Self {
        Self {
            member_name: member_name.to_string(),
            target: target.to_string(),
            applied_traits: Default::default(),
        }
    }
}

use crate::error::{ErrorKind, Result as ModelResult};
use crate::model::identity::HasIdentity;
use crate::model::shapes::{AppliedTraits, HasTraits};
use crate::model::values::Value;
use crate::model::{Identifier, ShapeID};
use crate::syntax::{MEMBER_KEY, MEMBER_MEMBER, MEMBER_VALUE};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Represents a member shape, part of an aggregate top-level shape. The `target` is the target
/// type for this member.
///
#[derive(Clone, Debug, PartialEq)]
pub struct MemberShape {
    id: ShapeID,
    traits: AppliedTraits,
    target: ShapeID,
}

///
/// Corresponds to the Smithy List and Set shapes. It has a single member, named `member`, which
/// determines the shape type for each element of the list.
///
#[derive(Clone, Debug, PartialEq)]
pub struct ListOrSet {
    pub(crate) member: MemberShape,
}

///
/// Corresponds to the Smithy Map shape. It has two members, `key` and `value`, which determine
/// the shape types for each entry within the map.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    pub(crate) key: MemberShape,
    pub(crate) value: MemberShape,
}

///
/// Corresponds to the Smithy Structure or Union shape. Members are held in model, or insertion,
/// order; the generators rely on this order for deterministic output.
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StructureOrUnion {
    pub(crate) members: Vec<MemberShape>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl HasIdentity for MemberShape {
    fn id(&self) -> &ShapeID {
        &self.id
    }

    fn set_id(&mut self, id: ShapeID) {
        self.id = id
    }
}

has_traits_impl! { MemberShape . traits }

impl MemberShape {
    /// Construct a new member shape with the given target shape (type).
    pub fn new(id: ShapeID, target: ShapeID) -> Self {
        Self {
            id,
            traits: Default::default(),
            target,
        }
    }

    /// Construct a new member shape, of the parent shape, with the given target shape (type).
    pub fn new_from(parent_id: &ShapeID, id: Identifier, target: ShapeID) -> Self {
        Self {
            id: parent_id.make_member(id),
            traits: Default::default(),
            target,
        }
    }

    /// Construct a new member shape with the given target shape (type) and applied traits.
    pub fn with_traits(id: ShapeID, target: ShapeID, traits: AppliedTraits) -> Self {
        Self { id, traits, target }
    }

    /// The name of this member within its containing shape.
    pub fn member_name(&self) -> &Identifier {
        self.id.member_name().unwrap()
    }

    /// Return the shape identifier which is the target type for this member.
    pub fn target(&self) -> &ShapeID {
        &self.target
    }

    /// Set the shape identifier which is the target type for this member.
    pub fn set_target(&mut self, target: ShapeID) {
        self.target = target;
    }
}

// ------------------------------------------------------------------------------------------------

impl ListOrSet {
    /// Construct a new list, or set, with the given `ShapeID` as the reference to the member type.
    pub fn new(parent_id: &ShapeID, target: ShapeID) -> Self {
        Self {
            member: MemberShape::new_from(
                parent_id,
                Identifier::new_unchecked(MEMBER_MEMBER),
                target,
            ),
        }
    }

    /// Construct a new list, or set, with the given value as the member.
    pub fn from(member: MemberShape) -> Self {
        assert_eq!(member.member_name().as_ref(), MEMBER_MEMBER);
        Self { member }
    }

    /// Return the member shape describing the type of each element of the list or set.
    pub fn member(&self) -> &MemberShape {
        &self.member
    }
}

// ------------------------------------------------------------------------------------------------

impl Map {
    /// Construct a new map with the given `ShapeID`s as the reference to the key and value types.
    pub fn new(parent_id: &ShapeID, key_shape: ShapeID, value_shape: ShapeID) -> Self {
        Self {
            key: MemberShape::new_from(parent_id, Identifier::new_unchecked(MEMBER_KEY), key_shape),
            value: MemberShape::new_from(
                parent_id,
                Identifier::new_unchecked(MEMBER_VALUE),
                value_shape,
            ),
        }
    }

    /// Construct a new map with the given key/value pair as the members.
    pub fn from(key: MemberShape, value: MemberShape) -> Self {
        assert_eq!(key.member_name().as_ref(), MEMBER_KEY);
        assert_eq!(value.member_name().as_ref(), MEMBER_VALUE);
        Self { key, value }
    }

    /// Return the member shape describing the type of the key for each entry of the map.
    pub fn key(&self) -> &MemberShape {
        &self.key
    }

    /// Return the member shape describing the type of the value for each entry of the map.
    pub fn value(&self) -> &MemberShape {
        &self.value
    }
}

// ------------------------------------------------------------------------------------------------

impl StructureOrUnion {
    /// Construct a new, empty, structure or union.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new structure or union with the provided group of members, retaining their
    /// order. All members must have member identifiers; this method will panic otherwise.
    pub fn with_members(members: &[MemberShape]) -> Self {
        assert!(members.iter().all(|shape| shape.id().is_member()));
        Self {
            members: members.to_vec(),
        }
    }

    /// Returns `true` if this structure or union has _any_ members, else `false`.
    pub fn has_members(&self) -> bool {
        !self.members.is_empty()
    }

    /// Returns `true` if this structure or union has a member with the given name, else `false`.
    pub fn has_member(&self, member_name: &Identifier) -> bool {
        self.member(member_name).is_some()
    }

    /// Returns the member in the structure or union with the given name, else `None`.
    pub fn member(&self, member_name: &Identifier) -> Option<&MemberShape> {
        self.members
            .iter()
            .find(|member| member.member_name() == member_name)
    }

    /// Return an iterator over all members in this structure or union, in model order.
    pub fn members(&self) -> impl Iterator<Item = &MemberShape> {
        self.members.iter()
    }

    /// Add a member with the given name and target to the end of the member list.
    pub fn add_member_from(&mut self, parent_id: &ShapeID, id: Identifier, target: ShapeID) {
        let shape = MemberShape::new_from(parent_id, id, target);
        let _ = self.add_a_member(shape);
    }

    /// Add the given member to the end of the member list; replaces any member with the same name.
    pub fn add_a_member(&mut self, member: MemberShape) -> ModelResult<Option<MemberShape>> {
        if !member.id().is_member() {
            Err(ErrorKind::MemberIDExpected(member.id().clone()).into())
        } else {
            let previous = match self
                .members
                .iter()
                .position(|m| m.member_name() == member.member_name())
            {
                Some(index) => Some(std::mem::replace(&mut self.members[index], member)),
                None => {
                    self.members.push(member);
                    None
                }
            };
            Ok(previous)
        }
    }
}

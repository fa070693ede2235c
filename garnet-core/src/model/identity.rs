/*!
Identifier types used across model structures; `Identifier`, `NamespaceID`, and `ShapeID`.
*/

use crate::error;
use crate::syntax::{
    SHAPE_ID_ABSOLUTE_SEPARATOR, SHAPE_ID_MEMBER_SEPARATOR, SHAPE_ID_NAMESPACE_SEPARATOR,
};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A trait implemented by model elements that have a shape identifier.
///
pub trait HasIdentity {
    /// The identifier for this model element.
    fn id(&self) -> &ShapeID;

    /// Set the identifier for this model element.
    fn set_id(&mut self, id: ShapeID);
}

///
/// A single name, such as a shape or member name.
///
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

///
/// A dotted sequence of identifiers, such as `example.stadium`.
///
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespaceID(String);

///
/// An absolute shape identifier; shape ids are globally unique within a model and order by
/// their string form.
///
/// ```abnf
/// com.foo.baz#ShapeName$memberName
/// \_________/ \_______/ \________/
///      |          |          |
///  Namespace  Shape name  Member name
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeID {
    namespace: NamespaceID,
    shape_name: Identifier,
    member_name: Option<Identifier>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identifier {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(error::ErrorKind::InvalidShapeID(s.to_string()).into())
        }
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Identifier {
    /// Construct a new identifier, panics if `s` is not a valid identifier.
    pub fn new_unchecked(s: &str) -> Self {
        assert!(Self::is_valid(s));
        Self(s.to_string())
    }

    /// Returns `true` if the provided string is a valid identifier, else `false`.
    pub fn is_valid(s: &str) -> bool {
        !s.is_empty()
            && s.starts_with(|c: char| c.is_alphabetic() || c == '_')
            && s.chars().all(|c: char| c.is_alphanumeric() || c == '_')
    }
}

// ------------------------------------------------------------------------------------------------

impl Display for NamespaceID {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NamespaceID {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(error::ErrorKind::InvalidShapeID(s.to_string()).into())
        }
    }
}

impl AsRef<str> for NamespaceID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl NamespaceID {
    /// Construct a new namespace, panics if `s` is not valid.
    pub fn new_unchecked(s: &str) -> Self {
        assert!(Self::is_valid(s));
        Self(s.to_string())
    }

    /// Returns `true` if the provided string is a valid namespace, else `false`.
    pub fn is_valid(s: &str) -> bool {
        !s.is_empty()
            && s.split(SHAPE_ID_NAMESPACE_SEPARATOR)
                .all(Identifier::is_valid)
    }

    /// Construct a new absolute `ShapeID` within this namespace.
    pub fn make_shape(&self, shape_name: Identifier) -> ShapeID {
        ShapeID {
            namespace: self.clone(),
            shape_name,
            member_name: None,
        }
    }
}

// ------------------------------------------------------------------------------------------------

impl Display for ShapeID {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.namespace, SHAPE_ID_ABSOLUTE_SEPARATOR, self.shape_name
        )?;
        if let Some(member_name) = &self.member_name {
            write!(f, "{}{}", SHAPE_ID_MEMBER_SEPARATOR, member_name)?;
        }
        Ok(())
    }
}

impl FromStr for ShapeID {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(SHAPE_ID_ABSOLUTE_SEPARATOR)
            .collect::<Vec<&str>>();
        if parts.len() != 2 {
            return Err(error::ErrorKind::InvalidShapeID(s.to_string()).into());
        }
        let namespace = NamespaceID::from_str(parts[0])?;

        let parts = parts[1]
            .split(SHAPE_ID_MEMBER_SEPARATOR)
            .collect::<Vec<&str>>();
        let (shape_name, member_name) = match parts.len() {
            1 => (Identifier::from_str(parts[0])?, None),
            2 => (
                Identifier::from_str(parts[0])?,
                Some(Identifier::from_str(parts[1])?),
            ),
            _ => return Err(error::ErrorKind::InvalidShapeID(s.to_string()).into()),
        };

        Ok(Self {
            namespace,
            shape_name,
            member_name,
        })
    }
}

impl ShapeID {
    ///
    /// Construct a new `ShapeID` from the component parts, panics if any part is not valid.
    ///
    pub fn new_unchecked(namespace: &str, shape_name: &str, member_name: Option<&str>) -> Self {
        Self {
            namespace: NamespaceID::new_unchecked(namespace),
            shape_name: Identifier::new_unchecked(shape_name),
            member_name: member_name.map(Identifier::new_unchecked),
        }
    }

    /// Returns the namespace component of this identifier.
    pub fn namespace(&self) -> &NamespaceID {
        &self.namespace
    }

    /// Returns the shape name component of this identifier.
    pub fn shape_name(&self) -> &Identifier {
        &self.shape_name
    }

    /// Returns the member name component of this identifier, if present.
    pub fn member_name(&self) -> Option<&Identifier> {
        self.member_name.as_ref()
    }

    /// Returns `true` if this identifier names a member, else `false`.
    pub fn is_member(&self) -> bool {
        self.member_name.is_some()
    }

    /// Construct a new member identifier within this shape.
    pub fn make_member(&self, member_name: Identifier) -> Self {
        Self {
            namespace: self.namespace.clone(),
            shape_name: self.shape_name.clone(),
            member_name: Some(member_name),
        }
    }

    /// Return the identifier of the containing shape; drops any member name.
    pub fn shape_only(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            shape_name: self.shape_name.clone(),
            member_name: None,
        }
    }
}

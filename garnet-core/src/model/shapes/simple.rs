use crate::error;
use crate::syntax::{
    SHAPE_BIG_DECIMAL, SHAPE_BIG_INTEGER, SHAPE_BLOB, SHAPE_BOOLEAN, SHAPE_BYTE, SHAPE_DOCUMENT,
    SHAPE_DOUBLE, SHAPE_FLOAT, SHAPE_INTEGER, SHAPE_LONG, SHAPE_SHORT, SHAPE_STRING,
    SHAPE_TIMESTAMP,
};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Corresponds to the set of simple, atomic, shape types in the Smithy specification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Simple {
    /// Uninterpreted binary data.
    Blob,
    /// Boolean value type.
    Boolean,
    /// Open content; a protocol-specific untyped value.
    Document,
    /// UTF-8 encoded string.
    String,
    /// 8-bit signed integer.
    Byte,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// Single precision IEEE-754 floating point number.
    Float,
    /// Double precision IEEE-754 floating point number.
    Double,
    /// Arbitrarily large signed integer.
    BigInteger,
    /// Arbitrary precision signed decimal number.
    BigDecimal,
    /// An instant in time, with no UTC offset or timezone.
    Timestamp,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Simple {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Blob => SHAPE_BLOB,
                Self::Boolean => SHAPE_BOOLEAN,
                Self::Document => SHAPE_DOCUMENT,
                Self::String => SHAPE_STRING,
                Self::Byte => SHAPE_BYTE,
                Self::Short => SHAPE_SHORT,
                Self::Integer => SHAPE_INTEGER,
                Self::Long => SHAPE_LONG,
                Self::Float => SHAPE_FLOAT,
                Self::Double => SHAPE_DOUBLE,
                Self::BigInteger => SHAPE_BIG_INTEGER,
                Self::BigDecimal => SHAPE_BIG_DECIMAL,
                Self::Timestamp => SHAPE_TIMESTAMP,
            }
        )
    }
}

impl FromStr for Simple {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SHAPE_BLOB => Ok(Self::Blob),
            SHAPE_BOOLEAN => Ok(Self::Boolean),
            SHAPE_DOCUMENT => Ok(Self::Document),
            SHAPE_STRING => Ok(Self::String),
            SHAPE_BYTE => Ok(Self::Byte),
            SHAPE_SHORT => Ok(Self::Short),
            SHAPE_INTEGER => Ok(Self::Integer),
            SHAPE_LONG => Ok(Self::Long),
            SHAPE_FLOAT => Ok(Self::Float),
            SHAPE_DOUBLE => Ok(Self::Double),
            SHAPE_BIG_INTEGER => Ok(Self::BigInteger),
            SHAPE_BIG_DECIMAL => Ok(Self::BigDecimal),
            SHAPE_TIMESTAMP => Ok(Self::Timestamp),
            _ => Err(error::ErrorKind::InvalidShapeVariant(s.to_string()).into()),
        }
    }
}

impl Simple {
    /// Returns `true` if this kind holds a numeric value, else `false`.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::Short
                | Self::Integer
                | Self::Long
                | Self::Float
                | Self::Double
                | Self::BigInteger
                | Self::BigDecimal
        )
    }

    /// Returns `true` if this kind holds a floating point value, else `false`.
    pub fn is_floating_point(&self) -> bool {
        matches!(self, Self::Float | Self::Double | Self::BigDecimal)
    }
}

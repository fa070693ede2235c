/*!
Builders for `Value` objects and arrays.
*/

use crate::model::values::{Value, ValueMap};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Builder for object, `ValueMap`, values.
///
#[derive(Clone, Debug, Default)]
pub struct ObjectBuilder {
    values: ValueMap,
}

///
/// Builder for array values.
///
#[derive(Clone, Debug, Default)]
pub struct ArrayBuilder {
    values: Vec<Value>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl From<ObjectBuilder> for Value {
    fn from(builder: ObjectBuilder) -> Self {
        Value::Object(builder.values)
    }
}

impl ObjectBuilder {
    /// Insert a string-valued key.
    pub fn string(mut self, key: &str, value: &str) -> Self {
        let _ = self.values.insert(key.to_string(), value.into());
        self
    }

    /// Insert an integer-valued key.
    pub fn integer(mut self, key: &str, value: i64) -> Self {
        let _ = self.values.insert(key.to_string(), value.into());
        self
    }

    /// Insert a boolean-valued key.
    pub fn boolean(mut self, key: &str, value: bool) -> Self {
        let _ = self.values.insert(key.to_string(), value.into());
        self
    }

    /// Insert a key with the given value.
    pub fn value(mut self, key: &str, value: Value) -> Self {
        let _ = self.values.insert(key.to_string(), value);
        self
    }
}

// ------------------------------------------------------------------------------------------------

impl From<ArrayBuilder> for Value {
    fn from(builder: ArrayBuilder) -> Self {
        Value::Array(builder.values)
    }
}

impl ArrayBuilder {
    /// Append a string element.
    pub fn string(mut self, value: &str) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append an element with the given value.
    pub fn value(mut self, value: Value) -> Self {
        self.values.push(value);
        self
    }
}

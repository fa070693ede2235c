/*!
String constants for the keys and type names used by the JSON AST representation.
*/

#![allow(dead_code)]

pub(crate) const K_SMITHY: &str = "smithy";
pub(crate) const K_METADATA: &str = "metadata";
pub(crate) const K_SHAPES: &str = "shapes";
pub(crate) const K_TYPE: &str = "type";
pub(crate) const K_TRAITS: &str = "traits";
pub(crate) const K_MEMBERS: &str = "members";
pub(crate) const K_MEMBER: &str = "member";
pub(crate) const K_KEY: &str = "key";
pub(crate) const K_VALUE: &str = "value";
pub(crate) const K_TARGET: &str = "target";
pub(crate) const K_VERSION: &str = "version";
pub(crate) const K_OPERATIONS: &str = "operations";
pub(crate) const K_INPUT: &str = "input";
pub(crate) const K_OUTPUT: &str = "output";
pub(crate) const K_ERRORS: &str = "errors";

pub(crate) const V_LIST: &str = "list";
pub(crate) const V_SET: &str = "set";
pub(crate) const V_MAP: &str = "map";
pub(crate) const V_STRUCTURE: &str = "structure";
pub(crate) const V_UNION: &str = "union";
pub(crate) const V_SERVICE: &str = "service";
pub(crate) const V_OPERATION: &str = "operation";
pub(crate) const V_APPLY: &str = "apply";

/*!
String constants for the Smithy model syntax; shape type names, well-known member names, and
shape-id separators.
*/

/// The character separating segments of a namespace.
pub const SHAPE_ID_NAMESPACE_SEPARATOR: char = '.';

/// The character separating a namespace from a shape name.
pub const SHAPE_ID_ABSOLUTE_SEPARATOR: char = '#';

/// The character separating a shape name from a member name.
pub const SHAPE_ID_MEMBER_SEPARATOR: char = '$';

// ------------------------------------------------------------------------------------------------

/// The name of the simple shape `blob`.
pub const SHAPE_BLOB: &str = "blob";

/// The name of the simple shape `boolean`.
pub const SHAPE_BOOLEAN: &str = "boolean";

/// The name of the simple shape `document`.
pub const SHAPE_DOCUMENT: &str = "document";

/// The name of the simple shape `string`.
pub const SHAPE_STRING: &str = "string";

/// The name of the simple shape `byte`.
pub const SHAPE_BYTE: &str = "byte";

/// The name of the simple shape `short`.
pub const SHAPE_SHORT: &str = "short";

/// The name of the simple shape `integer`.
pub const SHAPE_INTEGER: &str = "integer";

/// The name of the simple shape `long`.
pub const SHAPE_LONG: &str = "long";

/// The name of the simple shape `float`.
pub const SHAPE_FLOAT: &str = "float";

/// The name of the simple shape `double`.
pub const SHAPE_DOUBLE: &str = "double";

/// The name of the simple shape `bigInteger`.
pub const SHAPE_BIG_INTEGER: &str = "bigInteger";

/// The name of the simple shape `bigDecimal`.
pub const SHAPE_BIG_DECIMAL: &str = "bigDecimal";

/// The name of the simple shape `timestamp`.
pub const SHAPE_TIMESTAMP: &str = "timestamp";

// ------------------------------------------------------------------------------------------------

/// The name of the aggregate shape `list`.
pub const SHAPE_LIST: &str = "list";

/// The name of the aggregate shape `set`.
pub const SHAPE_SET: &str = "set";

/// The name of the aggregate shape `map`.
pub const SHAPE_MAP: &str = "map";

/// The name of the aggregate shape `structure`.
pub const SHAPE_STRUCTURE: &str = "structure";

/// The name of the aggregate shape `union`.
pub const SHAPE_UNION: &str = "union";

/// The name of the service shape `service`.
pub const SHAPE_SERVICE: &str = "service";

/// The name of the service shape `operation`.
pub const SHAPE_OPERATION: &str = "operation";

/// The name of the `apply` statement, serialized as a shape type in the JSON AST.
pub const SHAPE_APPLY: &str = "apply";

// ------------------------------------------------------------------------------------------------

/// The name of the list, and set, member `member`.
pub const MEMBER_MEMBER: &str = "member";

/// The name of the map member `key`.
pub const MEMBER_KEY: &str = "key";

/// The name of the map member `value`.
pub const MEMBER_VALUE: &str = "value";

/// The name of the service member `version`.
pub const MEMBER_VERSION: &str = "version";

/// The name of the service member `operations`.
pub const MEMBER_OPERATIONS: &str = "operations";

/// The name of the operation member `input`.
pub const MEMBER_INPUT: &str = "input";

/// The name of the operation member `output`.
pub const MEMBER_OUTPUT: &str = "output";

/// The name of the operation member `errors`.
pub const MEMBER_ERRORS: &str = "errors";

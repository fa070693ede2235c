/*!
Deterministic mapping from shape ids to emitted Ruby names. Symbols are memoized per generation
so repeated requests for the same shape are cheap and, more importantly, stable.
*/

use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{MemberShape, TopLevelShape};
use garnet_core::model::ShapeID;
use heck::{CamelCase, SnakeCase};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// An emitted Ruby name for a shape; the unqualified class name, the wrapping module, and the
/// file the defining class is emitted into.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RubySymbol {
    name: String,
    namespace: String,
    file_path: String,
}

///
/// Maps shape ids to emitted symbols, caching each mapping for the lifetime of a generation.
///
#[derive(Debug)]
pub struct SymbolProvider {
    module_name: String,
    gem_name: String,
    cache: HashMap<ShapeID, Rc<RubySymbol>>,
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

/// Prefix applied to data-shape names that would otherwise begin with a digit.
const STRUCT_NAME_PREFIX: &str = "Struct____";

/// Prefix applied to operation names that would otherwise begin with a digit.
const OPERATION_NAME_PREFIX: &str = "Operation____";

lazy_static! {
    static ref RESERVED_MEMBER_NAMES: HashSet<&'static str> = [
        "alias", "and", "begin", "break", "case", "class", "def", "do", "else", "elsif", "end",
        "ensure", "false", "for", "if", "in", "module", "next", "nil", "not", "or", "redo",
        "rescue", "retry", "return", "self", "super", "then", "true", "undef", "unless", "until",
        "when", "while", "yield", "send", "object_id",
    ]
    .iter()
    .copied()
    .collect();
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl RubySymbol {
    /// The unqualified class name, e.g. `GetHighScoreInput`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module wrapping all emitted code, e.g. `HighScoreService`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The manifest path of the file defining this symbol's data type.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// The fully qualified name, e.g. `HighScoreService::Types::GetHighScoreInput`.
    pub fn qualified_name(&self) -> String {
        format!("{}::Types::{}", self.namespace, self.name)
    }

    /// The name qualified against one of the emitted sub-modules, e.g. `Builders::GetHighScore`.
    pub fn in_module(&self, module: &str) -> String {
        format!("{}::{}", module, self.name)
    }
}

// ------------------------------------------------------------------------------------------------

impl SymbolProvider {
    /// Construct a new provider for the given module and gem names.
    pub fn new(module_name: &str, gem_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            gem_name: gem_name.to_string(),
            cache: Default::default(),
        }
    }

    ///
    /// Return the symbol for the given shape, creating and caching it on first request.
    ///
    pub fn shape_symbol(&mut self, shape: &TopLevelShape) -> Rc<RubySymbol> {
        if let Some(symbol) = self.cache.get(shape.id()) {
            return Rc::clone(symbol);
        }
        let name = shape_name(shape.id(), shape.is_operation());
        let file = if shape.is_operation() { "client" } else { "types" };
        let symbol = Rc::new(RubySymbol {
            name,
            namespace: self.module_name.clone(),
            file_path: format!("lib/{}/{}.rb", self.gem_name, file),
        });
        let _ = self.cache.insert(shape.id().clone(), Rc::clone(&symbol));
        symbol
    }

    ///
    /// The emitted accessor name for a member; snake case, with reserved identifiers suffixed by
    /// a single underscore.
    ///
    pub fn member_name(&self, member: &MemberShape) -> String {
        escape_member_name(member.member_name().as_ref())
    }

    ///
    /// The emitted Ruby method name for an operation, e.g. `get_high_score`.
    ///
    pub fn operation_method_name(&self, shape: &TopLevelShape) -> String {
        escape_member_name(&shape.id().shape_name().as_ref().to_snake_case())
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn shape_name(id: &ShapeID, is_operation: bool) -> String {
    let name = id.shape_name().as_ref().to_camel_case();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        let prefix = if is_operation {
            OPERATION_NAME_PREFIX
        } else {
            STRUCT_NAME_PREFIX
        };
        format!("{}{}", prefix, name)
    } else {
        name
    }
}

fn escape_member_name(name: &str) -> String {
    let snake = name.to_snake_case();
    if RESERVED_MEMBER_NAMES.contains(snake.as_str()) {
        format!("{}_", snake)
    } else {
        snake
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Derive a Ruby constant name for an enum value; values are emitted verbatim as the constant's
/// string content, this derives only the constant's name.
///
pub fn enum_constant_name(value: &str) -> String {
    use heck::ShoutySnakeCase;
    let name = value.to_shouty_snake_case();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("V_{}", name)
    } else {
        name
    }
}

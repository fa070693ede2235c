/*!
The emitters; one per artifact of the emitted gem. Each emitter walks the service's operations
in sorted order and, per operation, the transitive closure of the relevant shapes, tracking an
emitted set so every shape produces at most one top-level class per emitter.
*/

use crate::context::GenerationContext;
use crate::writer::RubyWriter;
use garnet_core::model::shapes::{HasTraits, TopLevelShape};
use garnet_core::model::ShapeID;
use garnet_core::prelude::TRAIT_DOCUMENTATION;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The first line of every emitted Ruby file.
pub(crate) const FROZEN_STRING_LITERAL: &str = "# frozen_string_literal: true";

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Write the common file prologue; the frozen-string pragma and any `require` lines.
///
pub(crate) fn begin_file(writer: &mut RubyWriter, requires: &[&str]) {
    writer.write(FROZEN_STRING_LITERAL);
    writer.blank();
    for require in requires {
        writer.write(&format!("require '{}'", require));
    }
    if !requires.is_empty() {
        writer.blank();
    }
}

///
/// Open the wrapping service module and, when given, a category sub-module.
///
pub(crate) fn open_modules(
    writer: &mut RubyWriter,
    ctx: &GenerationContext<'_>,
    submodule: Option<&str>,
) {
    writer.open_block(&format!("module {}", ctx.settings.module_name()), "end");
    if let Some(submodule) = submodule {
        writer.open_block(&format!("module {}", submodule), "end");
    }
}

///
/// The value of the `documentation` trait on a shape or member, if present.
///
pub(crate) fn documentation_of(element: &impl HasTraits) -> Option<String> {
    element
        .prelude_trait_named(TRAIT_DOCUMENTATION)
        .and_then(|value| value.as_ref())
        .and_then(|value| value.as_string())
        .cloned()
}

///
/// The `enum` trait values of a shape, verbatim and in model order, if the trait is applied.
///
pub(crate) fn enum_values_of(shape: &TopLevelShape) -> Option<Vec<String>> {
    let values = shape
        .prelude_trait_named(garnet_core::prelude::TRAIT_ENUM)
        .and_then(|value| value.as_ref())
        .and_then(|value| value.as_array())?;
    Some(
        values
            .iter()
            .filter_map(|definition| definition.get("value"))
            .filter_map(|value| value.as_string())
            .cloned()
            .collect(),
    )
}

///
/// Escape a string into a single-quoted Ruby literal.
///
pub(crate) fn ruby_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

///
/// The roots of an operation's input closure; the input shape id, if declared.
///
pub(crate) fn input_root(operation: &TopLevelShape) -> Option<&ShapeID> {
    operation
        .body()
        .as_operation()
        .and_then(|operation| operation.input())
}

///
/// The roots of an operation's output closure; the output shape id, if declared.
///
pub(crate) fn output_root(operation: &TopLevelShape) -> Option<&ShapeID> {
    operation
        .body()
        .as_operation()
        .and_then(|operation| operation.output())
}

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod builders;

pub mod client;

pub mod config;

pub mod errors;

pub mod gem;

pub mod params;

pub mod parsers;

pub mod stubs;

pub mod types;

pub mod validators;

/*!
* This crate provides the core semantic model shared by the Garnet set of crates. Garnet turns a
* resolved Smithy model into a complete Ruby client SDK; this crate holds everything the code
* generators consume:
*
* 1. The [model](model/index.html) elements themselves; shape identifiers, shapes, members,
*    applied traits, and node values.
* 1. The model [builder](builder/index.html) API that allows for a more _fluent_ and less
*    repetitive construction of a core model, used heavily by tests and fixtures.
* 1. The [prelude](prelude/index.html) constants for the shapes and traits defined by the Smithy
*    specification, including the HTTP binding traits the generators care about.
* 1. A [walker](model/walk/index.html) over a shape's transitive closure and a
*    [visitor](model/visitor/index.html) for double-dispatch over shape kinds.
* 1. A trait for [reading](io/index.html) models from serialized representations.
* 1. A common [error](error/index.html) module to be used by all Garnet crates.
*
* # Model API Example
*
* The following creates a model containing a single operation with an input structure, in the
* fluent builder style.
*
* ```rust
* use garnet_core::builder::traits::{http, http_label, required};
* use garnet_core::builder::{
*     ModelBuilder, OperationBuilder, ServiceBuilder, StructureBuilder,
* };
* use garnet_core::model::Model;
* use garnet_core::Version;
*
* let model: Model = ModelBuilder::new(Version::default(), "example.motd")
*     .service(
*         ServiceBuilder::new("MessageOfTheDay")
*             .version("2020-06-21")
*             .operation("GetMessage"),
*     )
*     .operation(
*         OperationBuilder::new("GetMessage")
*             .readonly()
*             .input("GetMessageInput")
*             .apply_trait(http("GET", "/message/{date}", None)),
*     )
*     .structure(
*         StructureBuilder::new("GetMessageInput")
*             .member_with("date", "String", vec![http_label(), required()]),
*     )
*     .into();
* assert!(model.shape_names().count() == 3);
* ```
*/

#![warn(
    // ---------- Stylistic
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    // ---------- Public
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    // ---------- Unsafe
    unsafe_code,
    // ---------- Unused
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results,
)]

#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate lazy_static;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Versions of the Smithy specification.
///
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Hash)]
pub enum Version {
    /// Version 1.0 (initial, and current)
    V10,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Default for Version {
    fn default() -> Self {
        Self::current()
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "1.0")
    }
}

impl FromStr for Version {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "1.0" || s == "1" {
            Ok(Self::V10)
        } else {
            Err(error::ErrorKind::InvalidVersionNumber(s.to_string()).into())
        }
    }
}

impl Version {
    ///
    /// Returns the most current version of the Smithy specification.
    ///
    pub fn current() -> Self {
        Self::V10
    }
}

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

#[macro_use]
mod macros;

pub mod builder;

pub mod error;

pub mod io;

pub mod model;

pub mod prelude;

pub mod syntax;

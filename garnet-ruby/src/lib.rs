/*!
* This crate implements the Garnet code-generation pipeline; it consumes a resolved Smithy model
* from [garnet_core](../garnet_core/index.html) and emits a complete Ruby client SDK. The emitted
* gem depends on the `garnet` runtime gem for its middleware stack, HTTP primitives, stubbing,
* and validation helpers.
*
* The pipeline is organized as:
*
* 1. A [writer](writer/index.html) that accumulates properly indented Ruby source, a
*    [symbol provider](symbols/index.html) that maps shape ids to emitted names, and a
*    [file manifest](manifest/index.html) collecting the emitted files.
* 1. A [middleware](middleware/index.html) model describing the per-operation pipeline the
*    emitted client composes, and an HTTP [transport](transport/index.html) supplying the
*    default middleware and configuration.
* 1. A pluggable [protocol](protocol/index.html) interface, with a JSON-over-HTTP
*    [implementation](protocols/rails_json/index.html), driving the binding-aware
*    [generators](generators/index.html).
* 1. A [service generator](generator/index.html) orchestrating one whole-service generation.
*
* # Example
*
* ```rust,no_run
* use garnet_core::model::Model;
* use garnet_ruby::generator::ServiceGenerator;
* use garnet_ruby::settings::GenerationSettings;
* use garnet_core::model::ShapeID;
* use std::str::FromStr;
* # fn load_model() -> Model { Model::default() }
*
* let model = load_model();
* let settings = GenerationSettings::new(
*     ShapeID::from_str("example.stadium#Stadium").unwrap(),
*     "stadium",
* );
* let manifest = ServiceGenerator::default()
*     .generate(&model, &settings)
*     .unwrap();
* manifest.write_to(std::path::Path::new("generated/")).unwrap();
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
extern crate lazy_static;

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod bindings;

pub mod context;

pub mod generator;

pub mod generators;

pub mod manifest;

pub mod middleware;

pub mod protocol;

pub mod protocols;

pub mod settings;

pub mod symbols;

pub mod transport;

pub mod uri;

pub mod writer;

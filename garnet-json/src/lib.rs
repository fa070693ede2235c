/*!
Reads the [JSON AST](https://awslabs.github.io/smithy/1.0/spec/core/json-ast.html)
representation of a Smithy model into the Garnet core model. This is the serialized input
format accepted by the generator's command line.

# Example

```rust
use garnet_core::io::read_model_from_string;
use garnet_json::JsonReader;

let json = r##"{
    "smithy": "1.0",
    "shapes": {
        "example.motd#Date": {
            "type": "string",
            "traits": {
                "smithy.api#pattern": "^\\d\\d\\d\\d\\-\\d\\d-\\d\\d$"
            }
        }
    }
}"##;

let mut reader = JsonReader::default();
let model = read_model_from_string(&mut reader, json).unwrap();
assert_eq!(model.shape_names().count(), 1);
```
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

///
/// The file extension used by the JSON AST representation.
///
pub const FILE_EXTENSION: &str = "json";

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

#[doc(hidden)]
pub mod reader;
pub use reader::JsonReader;

mod syntax;

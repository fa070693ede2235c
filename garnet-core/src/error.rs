/*!
Standard `Error`, `ErrorKind`, and `Result` types shared by all Garnet crates.

The model kinds cover integrity failures while loading or querying a semantic model; the
generator kinds cover failures raised by the code-generation pipeline itself.
*/

#![allow(missing_docs)]

use crate::model::identity::ShapeID;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

error_chain! {
    errors {
        InvalidVersionNumber(v: String) {
            description("Invalid version number")
            display("Invalid version number: '{}'", v)
        }
        InvalidShapeID(id: String) {
            description("Invalid shape ID format")
            display("Invalid shape ID format: '{}'", id)
        }
        ShapeIDExpected(id: ShapeID) {
            description("Expected a shape, not member, ID")
            display("Expected a shape, not member, ID: '{}'", id)
        }
        MemberIDExpected(id: ShapeID) {
            description("Expected a member, not shape, ID")
            display("Expected a member, not shape, ID: '{}'", id)
        }
        InvalidShapeVariant(expecting: String) {
            description("Invalid shape kind variant")
            display("Invalid shape kind variant, expecting a `ShapeKind::{}`", expecting)
        }
        InvalidValueVariant(expecting: String) {
            description("Invalid value variant")
            display("Invalid value variant, expecting a `Value::{}`", expecting)
        }
        InvalidErrorSource(src: String) {
            description("Invalid error source, expecting 'client' or 'server'")
            display("Invalid error source, expecting 'client' or 'server', not '{}'", src)
        }
        MergeTraitConflict(id: ShapeID) {
            description("A conflict was found when merging two applied traits")
            display("A conflict was found when merging two applied values for trait '{}'", id)
        }
        Serialization(repr: String) {
            description("An error occurred serializing a model")
            display("An error occurred serializing a model into {}", repr)
        }
        Deserialization(representation: String, location: String, context: Option<String>) {
            description("An error occurred de-serializing a model")
            display("An error occurred de-serializing a model from {} at location '{}' (context '{:?}')", representation, location, context)
        }
        InvalidUriTemplate(uri: String) {
            description("Invalid URI template in an http trait")
            display("Invalid URI template in an http trait: '{}'", uri)
        }
        UnknownShape(s: String) {
            description("A reference to an unknown shape ID was encountered")
            display("A reference to an unknown shape ID was encountered: {}", s)
        }
        UnknownMember(s: String) {
            description("An unknown member ID was encountered")
            display("An unknown member ID was encountered: {}", s)
        }
        UnsupportedProtocol(s: String) {
            description("No registered protocol generator matches the service's protocol trait")
            display("No registered protocol generator matches the service's protocol trait: {}", s)
        }
        UnbalancedBlock(s: String) {
            description("A code writer was closed, or finished, with unbalanced blocks")
            display("A code writer was closed, or finished, with unbalanced blocks: {}", s)
        }
        ManifestConflict(path: String) {
            description("Two different contents were written to the same manifest path")
            display("Two different contents were written to the same manifest path: '{}'", path)
        }
        InvalidManifestPath(path: String) {
            description("A manifest path was not relative, or not normalizable")
            display("A manifest path was not relative, or not normalizable: '{}'", path)
        }
        NotImplemented(s: String) {
            description("An emitter has no handler for a shape variant")
            display("An emitter has no handler for a shape variant: {}", s)
        }
    }

    foreign_links {
        Fmt(::std::fmt::Error);
        Io(::std::io::Error);
    }
}

///
/// The identification of an error's source used by the `error` trait.
///
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorSource {
    /// The error originated in the client.
    Client,
    /// The error originated in the server.
    Server,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for ErrorSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ErrorSource::Client => "client",
                ErrorSource::Server => "server",
            }
        )
    }
}

impl FromStr for ErrorSource {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "server" => Ok(Self::Server),
            _ => Err(ErrorKind::InvalidErrorSource(s.to_string()).into()),
        }
    }
}

/*!
This crate contains common fixture models for testing the Garnet generator crates. The main
fixture is the `Stadium` service, a small high-score API that exercises every HTTP binding the
generators understand; labels, greedy labels, query members and query maps, headers, prefix
headers, payloads, response codes, streaming blobs, and modeled errors.
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

use garnet_core::builder::traits::{
    documentation, endpoint, enum_values, error_source, host_label, http,
    http_checksum_required, http_header, http_label, http_payload, http_prefix_headers,
    http_query, http_query_params, http_response_code, idempotency_token, length, media_type,
    range, required, sensitive, sparse, streaming, TraitBuilder,
};
use garnet_core::builder::{
    ListBuilder, MapBuilder, ModelBuilder, OperationBuilder, ServiceBuilder, SimpleShapeBuilder,
    StructureBuilder,
};
use garnet_core::error::ErrorSource;
use garnet_core::model::{Model, ShapeID};
use garnet_core::Version;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The namespace of the fixture models.
pub const NAMESPACE: &str = "example.stadium";

/// The shape id, in string form, of the fixture service.
pub const SERVICE_ID: &str = "example.stadium#Stadium";

/// The shape id, in string form, of the protocol trait applied to the fixture service.
pub const PROTOCOL_TRAIT_ID: &str = "garnet.protocols#railsJson";

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// The shape id of the fixture service.
pub fn stadium_service_id() -> ShapeID {
    ShapeID::from_str(SERVICE_ID).unwrap()
}

///
/// The `Stadium` fixture service model.
///
pub fn stadium_model() -> Model {
    ModelBuilder::new(Version::default(), NAMESPACE)
        .service(
            ServiceBuilder::new("Stadium")
                .version("2023-01-28")
                .operation("UploadAsset")
                .operation("GetHighScore")
                .operation("CreateHighScore")
                .operation("UpdateHighScore")
                .operation("DeleteHighScore")
                .operation("ListHighScores")
                .operation("GetArchive")
                .operation("GetLeaderboard")
                .operation("GetTree")
                .operation("Ping")
                .apply_trait(TraitBuilder::annotation(
                    ShapeID::from_str(PROTOCOL_TRAIT_ID).unwrap(),
                ))
                .apply_trait(documentation("Tracks high scores for games.")),
        )
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("GetHighScore")
                .readonly()
                .input("GetHighScoreInput")
                .output("GetHighScoreOutput")
                .apply_trait(http("GET", "/high_scores/{id}", None))
                .apply_trait(documentation("Get a single high score by its identifier.")),
        )
        .structure(
            StructureBuilder::new("GetHighScoreInput")
                .member_with("id", "String", vec![http_label(), required()]),
        )
        .structure(StructureBuilder::new("GetHighScoreOutput").member("high_score", "HighScore"))
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("CreateHighScore")
                .input("CreateHighScoreInput")
                .output("CreateHighScoreOutput")
                .error("UnprocessableEntityError")
                .apply_trait(http("POST", "/high_scores", Some(201)))
                .apply_trait(http_checksum_required())
                .apply_trait(documentation("Record a new high score.")),
        )
        .structure(
            StructureBuilder::new("CreateHighScoreInput")
                .member("high_score", "HighScore")
                .member_with("tags", "Tags", vec![http_prefix_headers("X-Tag-")])
                .member_with("items", "Numbers", vec![http_query("x")])
                .member_with("flags", "StringList", vec![http_header("X-Flags")])
                .member_with("token", "String", vec![idempotency_token()]),
        )
        .structure(
            StructureBuilder::new("CreateHighScoreOutput")
                .member("high_score", "HighScore")
                .member_with("location", "String", vec![http_header("Location")])
                .member_with("meta", "Tags", vec![http_prefix_headers("X-Meta-")]),
        )
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("UpdateHighScore")
                .idempotent()
                .input("UpdateHighScoreInput")
                .output("UpdateHighScoreOutput")
                .error("UnprocessableEntityError")
                .error("InternalServerError")
                .apply_trait(http("PUT", "/high_scores/{id}", None)),
        )
        .structure(
            StructureBuilder::new("UpdateHighScoreInput")
                .member_with("id", "String", vec![http_label(), required()])
                .member_with("high_score", "HighScore", vec![http_payload()]),
        )
        .structure(StructureBuilder::new("UpdateHighScoreOutput").member("high_score", "HighScore"))
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("DeleteHighScore")
                .idempotent()
                .input("DeleteHighScoreInput")
                .output("DeleteHighScoreOutput")
                .apply_trait(http("DELETE", "/high_scores/{id}", None)),
        )
        .structure(
            StructureBuilder::new("DeleteHighScoreInput")
                .member_with("id", "String", vec![http_label(), required()]),
        )
        .structure(StructureBuilder::new("DeleteHighScoreOutput"))
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("ListHighScores")
                .readonly()
                .input("ListHighScoresInput")
                .output("ListHighScoresOutput")
                .apply_trait(http("GET", "/high_scores", None)),
        )
        .structure(
            StructureBuilder::new("ListHighScoresInput")
                .member_with("limit", "Integer", vec![http_query("limit")])
                .member_with("extra", "Tags", vec![http_query_params()]),
        )
        .structure(
            StructureBuilder::new("ListHighScoresOutput")
                .member("high_scores", "Scores")
                .member("sparse_scores", "SparseScores")
                .member("suit", "Suit"),
        )
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("GetArchive")
                .readonly()
                .input("GetArchiveInput")
                .output("GetArchiveOutput")
                .apply_trait(http("GET", "/archive/{path+}?format=full", None)),
        )
        .structure(
            StructureBuilder::new("GetArchiveInput")
                .member_with("path", "String", vec![http_label(), required()])
                .member_with(
                    "meta",
                    "String",
                    vec![http_header("X-J"), media_type("application/json")],
                )
                .member_with("since", "Timestamp", vec![http_query("since")])
                .member_with("kinds", "StringList", vec![http_query("kind")])
                .member_with("suit", "Suit", vec![http_query("suit")]),
        )
        .structure(
            StructureBuilder::new("GetArchiveOutput")
                .member_with("data", "Blob", vec![http_payload()])
                .member_with("modified", "Timestamp", vec![http_header("Last-Modified")])
                .member_with("code", "Integer", vec![http_response_code()])
                .member_with("labels", "StringList", vec![http_header("X-Labels")]),
        )
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("UploadAsset")
                .input("UploadAssetInput")
                .output("UploadAssetOutput")
                .apply_trait(http("PUT", "/assets/{name}", None)),
        )
        .structure(
            StructureBuilder::new("UploadAssetInput")
                .member_with("name", "String", vec![http_label(), required()])
                .member_with("data", "StreamBlob", vec![http_payload()]),
        )
        .structure(StructureBuilder::new("UploadAssetOutput"))
        .simple_shape(SimpleShapeBuilder::blob("StreamBlob").apply_trait(streaming()))
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("GetLeaderboard")
                .readonly()
                .input("GetLeaderboardInput")
                .output("GetLeaderboardOutput")
                .apply_trait(http("GET", "/leaderboard", None))
                .apply_trait(endpoint("{region}.data.")),
        )
        .structure(
            StructureBuilder::new("GetLeaderboardInput")
                .member_with("region", "String", vec![host_label(), required()])
                .member_with("game", "String", vec![http_query("game")]),
        )
        .structure(
            StructureBuilder::new("GetLeaderboardOutput").member("high_scores", "Scores"),
        )
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("GetTree")
                .readonly()
                .input("GetTreeInput")
                .output("GetTreeOutput")
                .apply_trait(http("GET", "/tree", None)),
        )
        .structure(StructureBuilder::new("GetTreeInput"))
        .structure(
            StructureBuilder::new("GetTreeOutput")
                .member("tree", "Tree")
                .member("doc", "Document")
                .member("tags", "Tags"),
        )
        .structure(
            StructureBuilder::new("Tree")
                .member("value", "Integer")
                .member("child", "Tree"),
        )
        // ----------------------------------------------------------------------------------------
        .operation(
            OperationBuilder::new("Ping")
                .readonly()
                .input("PingInput")
                .output("PingOutput")
                .apply_trait(http("GET", "/ping", None))
                .apply_trait(endpoint("status.")),
        )
        .structure(StructureBuilder::new("PingInput"))
        .structure(StructureBuilder::new("PingOutput"))
        // ----------------------------------------------------------------------------------------
        .structure(
            StructureBuilder::new("HighScore")
                .documentation("A single high score entry.")
                .member("id", "String")
                .member_with("game", "String", vec![required(), length(Some(1), Some(120))])
                .member_with("score", "Integer", vec![range(Some(0), None)])
                .member("time", "Timestamp")
                .member_with("secret", "String", vec![sensitive()])
                .member("attachment", "Attachment"),
        )
        .union(
            StructureBuilder::new("Attachment")
                .member("image", "ImageAsset")
                .member("note", "String"),
        )
        .structure(
            StructureBuilder::new("ImageAsset")
                .member("url", "String")
                .member("height", "Integer"),
        )
        .list(ListBuilder::new("Scores", "HighScore"))
        .list(ListBuilder::new("SparseScores", "HighScore").apply_trait(sparse()))
        .list(ListBuilder::new("Numbers", "Integer"))
        .list(ListBuilder::new("StringList", "String"))
        .map(MapBuilder::new("Tags", "String", "String"))
        .simple_shape(
            SimpleShapeBuilder::string("Suit")
                .apply_trait(enum_values(&["spades", "hearts", "clubs", "diamonds"])),
        )
        // ----------------------------------------------------------------------------------------
        .structure(
            StructureBuilder::new("UnprocessableEntityError")
                .apply_trait(error_source(ErrorSource::Client))
                .member("errors", "AttributeErrors"),
        )
        .map(MapBuilder::new("AttributeErrors", "String", "ErrorMessages"))
        .list(ListBuilder::new("ErrorMessages", "String"))
        .structure(
            StructureBuilder::new("InternalServerError")
                .apply_trait(error_source(ErrorSource::Server))
                .member("message", "String"),
        )
        .into()
}

///
/// A service with no protocol trait applied; used to exercise protocol resolution failures.
///
pub fn plain_service_model() -> Model {
    ModelBuilder::new(Version::default(), NAMESPACE)
        .service(
            ServiceBuilder::new("Stadium")
                .version("2023-01-28")
                .operation("Ping"),
        )
        .operation(
            OperationBuilder::new("Ping")
                .readonly()
                .input("PingInput")
                .output("PingOutput")
                .apply_trait(http("GET", "/ping", None)),
        )
        .structure(StructureBuilder::new("PingInput"))
        .structure(StructureBuilder::new("PingOutput"))
        .into()
}

use garnet_core::builder::traits::{http, http_label, required, timestamp_format};
use garnet_core::builder::{
    ModelBuilder, OperationBuilder, ServiceBuilder, SimpleShapeBuilder, StructureBuilder,
};
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::HasTraits;
use garnet_core::model::{Identifier, Model, ShapeID};
use garnet_core::prelude::{prelude_shape_named, TRAIT_REQUIRED, TRAIT_TIMESTAMPFORMAT};
use garnet_core::Version;
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn make_model() -> Model {
    ModelBuilder::new(Version::default(), "example.stadium")
        .service(
            ServiceBuilder::new("Stadium")
                .version("2023-01-28")
                .operation("GetHighScore")
                .operation("CreateHighScore")
                .operation("GetHighScore"),
        )
        .operation(
            OperationBuilder::new("GetHighScore")
                .readonly()
                .input("GetHighScoreInput")
                .apply_trait(http("GET", "/high_scores/{id}", None)),
        )
        .operation(
            OperationBuilder::new("CreateHighScore")
                .input("CreateHighScoreInput")
                .apply_trait(http("POST", "/high_scores", Some(201))),
        )
        .structure(
            StructureBuilder::new("GetHighScoreInput")
                .member_with("id", "String", vec![http_label(), required()]),
        )
        .structure(
            StructureBuilder::new("CreateHighScoreInput")
                .member("zulu", "String")
                .member("alpha", "String")
                .member("mike", "EventTime"),
        )
        .simple_shape(
            SimpleShapeBuilder::timestamp("EventTime")
                .apply_trait(timestamp_format("epoch-seconds")),
        )
        .into()
}

#[test]
fn test_expect_shape_missing_is_error() {
    let model = make_model();
    let missing = ShapeID::from_str("example.stadium#NoSuchShape").unwrap();
    assert!(model.expect_shape(&missing).is_err());
}

#[test]
fn test_member_order_is_model_order() {
    let model = make_model();
    let id = ShapeID::from_str("example.stadium#CreateHighScoreInput").unwrap();
    let shape = model.expect_shape(&id).unwrap();
    let structure = shape.body().as_structure().unwrap();
    let names: Vec<String> = structure
        .members()
        .map(|member| member.member_name().to_string())
        .collect();
    assert_eq!(names, vec!["zulu", "alpha", "mike"]);
}

#[test]
fn test_member_trait_resolution_prefers_member_then_target() {
    let model = make_model();
    let id = ShapeID::from_str("example.stadium#CreateHighScoreInput").unwrap();
    let shape = model.expect_shape(&id).unwrap();
    let structure = shape.body().as_structure().unwrap();
    let member = structure
        .member(&Identifier::from_str("mike").unwrap())
        .unwrap();

    // not on the member itself, falls back to the target shape
    let format = prelude_shape_named(TRAIT_TIMESTAMPFORMAT);
    assert!(!member.has_trait(&format));
    assert!(model.member_has_trait(member, &format));
    let value = model.member_trait(member, &format).unwrap();
    assert_eq!(
        value.as_ref().unwrap().as_string().unwrap().as_str(),
        "epoch-seconds"
    );
}

#[test]
fn test_member_trait_on_member_wins() {
    let model = make_model();
    let id = ShapeID::from_str("example.stadium#GetHighScoreInput").unwrap();
    let shape = model.expect_shape(&id).unwrap();
    let member = shape
        .body()
        .as_structure()
        .unwrap()
        .member(&Identifier::from_str("id").unwrap())
        .unwrap();
    assert!(member.has_trait(&prelude_shape_named(TRAIT_REQUIRED)));
    assert!(model.member_has_trait(member, &prelude_shape_named(TRAIT_REQUIRED)));
}

#[test]
fn test_top_down_operations_sorted_and_unique() {
    let model = make_model();
    let service = ShapeID::from_str("example.stadium#Stadium").unwrap();
    let operations = model.top_down_operations(&service).unwrap();
    let names: Vec<String> = operations
        .iter()
        .map(|operation| operation.id().shape_name().to_string())
        .collect();
    assert_eq!(names, vec!["CreateHighScore", "GetHighScore"]);
}

#[test]
fn test_top_down_operations_requires_a_service() {
    let model = make_model();
    let not_service = ShapeID::from_str("example.stadium#GetHighScoreInput").unwrap();
    assert!(model.top_down_operations(&not_service).is_err());
}

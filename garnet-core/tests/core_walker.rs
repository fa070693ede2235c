use garnet_core::builder::{
    ListBuilder, ModelBuilder, OperationBuilder, StructureBuilder,
};
use garnet_core::error::Result;
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::TopLevelShape;
use garnet_core::model::{Model, ShapeID};
use garnet_core::Version;
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn make_model() -> Model {
    ModelBuilder::new(Version::default(), "example.walk")
        .operation(
            OperationBuilder::new("GetThing")
                .input("GetThingInput")
                .output("GetThingOutput"),
        )
        .structure(
            StructureBuilder::new("GetThingInput")
                .member("first", "Thing")
                .member("second", "Things"),
        )
        .structure(StructureBuilder::new("GetThingOutput").member("thing", "Thing"))
        .structure(
            StructureBuilder::new("Thing")
                .member("name", "String")
                .member("parent", "Thing"),
        )
        .list(ListBuilder::new("Things", "Thing"))
        .into()
}

fn walk_names(model: &Model, root: &str) -> Result<Vec<String>> {
    let root = ShapeID::from_str(root).unwrap();
    let shapes: Result<Vec<&TopLevelShape>> = model.walk(&root).collect();
    Ok(shapes?
        .iter()
        .map(|shape| shape.id().shape_name().to_string())
        .collect())
}

#[test]
fn test_walk_visits_each_shape_once_in_depth_first_order() {
    let model = make_model();
    let names = walk_names(&model, "example.walk#GetThing").unwrap();
    assert_eq!(
        names,
        vec![
            "GetThing",
            "GetThingInput",
            "Thing",
            "Things",
            "GetThingOutput",
        ]
    );
}

#[test]
fn test_walk_handles_recursive_shapes() {
    let model = make_model();
    let names = walk_names(&model, "example.walk#Thing").unwrap();
    assert_eq!(names, vec!["Thing"]);
}

#[test]
fn test_walk_prelude_targets_are_terminal() {
    let model = make_model();
    let names = walk_names(&model, "example.walk#Things").unwrap();
    assert_eq!(names, vec!["Things", "Thing"]);
}

#[test]
fn test_walk_dangling_target_is_an_error() {
    let model: Model = ModelBuilder::new(Version::default(), "example.walk")
        .structure(StructureBuilder::new("Broken").member("oops", "Missing"))
        .into();
    let root = ShapeID::from_str("example.walk#Broken").unwrap();
    let result: Result<Vec<&TopLevelShape>> = model.walk(&root).collect();
    assert!(result.is_err());
}

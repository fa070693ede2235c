use garnet_core::io::read_model_from_string;
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::HasTraits;
use garnet_core::model::{Identifier, ShapeID};
use garnet_core::prelude::prelude_shape_named;
use garnet_json::JsonReader;
use pretty_assertions::assert_eq;
use std::str::FromStr;

const STADIUM_FRAGMENT: &str = r##"{
    "smithy": "1.0",
    "metadata": {
        "authors": ["generated"]
    },
    "shapes": {
        "example.stadium#Stadium": {
            "type": "service",
            "version": "2023-01-28",
            "operations": [
                { "target": "example.stadium#GetHighScore" }
            ],
            "traits": {
                "garnet.protocols#railsJson": {}
            }
        },
        "example.stadium#GetHighScore": {
            "type": "operation",
            "input": { "target": "example.stadium#GetHighScoreInput" },
            "output": { "target": "example.stadium#GetHighScoreOutput" },
            "traits": {
                "smithy.api#readonly": {},
                "smithy.api#http": { "method": "GET", "uri": "/high_scores/{id}" }
            }
        },
        "example.stadium#GetHighScoreInput": {
            "type": "structure",
            "members": {
                "id": {
                    "target": "smithy.api#String",
                    "traits": {
                        "smithy.api#httpLabel": {},
                        "smithy.api#required": {}
                    }
                }
            }
        },
        "example.stadium#GetHighScoreOutput": {
            "type": "structure",
            "members": {
                "zulu": { "target": "smithy.api#String" },
                "alpha": { "target": "smithy.api#Integer" }
            }
        },
        "example.stadium#Scores": {
            "type": "list",
            "member": { "target": "smithy.api#String" }
        },
        "example.stadium#Tags": {
            "type": "map",
            "key": { "target": "smithy.api#String" },
            "value": { "target": "smithy.api#String" }
        }
    }
}"##;

#[test]
fn test_read_shapes_and_metadata() {
    let mut reader = JsonReader::default();
    let model = read_model_from_string(&mut reader, STADIUM_FRAGMENT).unwrap();
    assert_eq!(model.shape_names().count(), 6);
    assert!(model.has_metadata());
}

#[test]
fn test_read_service_and_operation() {
    let mut reader = JsonReader::default();
    let model = read_model_from_string(&mut reader, STADIUM_FRAGMENT).unwrap();

    let service_id = ShapeID::from_str("example.stadium#Stadium").unwrap();
    let service = model.expect_shape(&service_id).unwrap();
    assert!(service.is_service());
    assert!(service.has_trait(&ShapeID::from_str("garnet.protocols#railsJson").unwrap()));

    let operations = model.top_down_operations(&service_id).unwrap();
    assert_eq!(operations.len(), 1);
    assert!(operations[0].has_trait(&prelude_shape_named("readonly")));
}

#[test]
fn test_read_member_order_and_traits() {
    let mut reader = JsonReader::default();
    let model = read_model_from_string(&mut reader, STADIUM_FRAGMENT).unwrap();

    let output_id = ShapeID::from_str("example.stadium#GetHighScoreOutput").unwrap();
    let output = model.expect_shape(&output_id).unwrap();
    let names: Vec<String> = output
        .body()
        .as_structure()
        .unwrap()
        .members()
        .map(|member| member.member_name().to_string())
        .collect();
    assert_eq!(names, vec!["zulu", "alpha"]);

    let input_id = ShapeID::from_str("example.stadium#GetHighScoreInput").unwrap();
    let input = model.expect_shape(&input_id).unwrap();
    let member = input
        .body()
        .as_structure()
        .unwrap()
        .member(&Identifier::from_str("id").unwrap())
        .unwrap();
    assert!(member.has_trait(&prelude_shape_named("httpLabel")));
    assert_eq!(member.target().to_string(), "smithy.api#String");
}

#[test]
fn test_read_list_and_map() {
    let mut reader = JsonReader::default();
    let model = read_model_from_string(&mut reader, STADIUM_FRAGMENT).unwrap();

    let list = model
        .expect_shape(&ShapeID::from_str("example.stadium#Scores").unwrap())
        .unwrap();
    assert!(list.is_list());

    let map = model
        .expect_shape(&ShapeID::from_str("example.stadium#Tags").unwrap())
        .unwrap();
    let map_body = map.body().as_map().unwrap();
    assert_eq!(map_body.key().target().to_string(), "smithy.api#String");
    assert_eq!(map_body.value().target().to_string(), "smithy.api#String");
}

#[test]
fn test_unknown_shape_type_is_an_error() {
    let json = r##"{
        "smithy": "1.0",
        "shapes": {
            "example.stadium#Oops": { "type": "resource" }
        }
    }"##;
    let mut reader = JsonReader::default();
    assert!(read_model_from_string(&mut reader, json).is_err());
}

#[test]
fn test_apply_statements_are_skipped() {
    let json = r##"{
        "smithy": "1.0",
        "shapes": {
            "example.stadium#Ok": { "type": "string" },
            "example.stadium#Applied": { "type": "apply" }
        }
    }"##;
    let mut reader = JsonReader::default();
    let model = read_model_from_string(&mut reader, json).unwrap();
    assert_eq!(model.shape_names().count(), 1);
}

#[test]
fn test_missing_version_is_an_error() {
    let json = r##"{ "shapes": {} }"##;
    let mut reader = JsonReader::default();
    assert!(read_model_from_string(&mut reader, json).is_err());
}

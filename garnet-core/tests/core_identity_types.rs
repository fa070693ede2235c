use garnet_core::model::{Identifier, NamespaceID, ShapeID};
use pretty_assertions::assert_eq;
use std::str::FromStr;

#[test]
fn test_identifier_is_valid() {
    assert!(Identifier::is_valid("HighScore"));
    assert!(Identifier::is_valid("_internal"));
    assert!(Identifier::is_valid("high_score2"));
    assert!(!Identifier::is_valid(""));
    assert!(!Identifier::is_valid("2fast"));
    assert!(!Identifier::is_valid("has space"));
}

#[test]
fn test_namespace_is_valid() {
    assert!(NamespaceID::is_valid("example"));
    assert!(NamespaceID::is_valid("example.stadium"));
    assert!(!NamespaceID::is_valid(""));
    assert!(!NamespaceID::is_valid("example..stadium"));
    assert!(!NamespaceID::is_valid(".stadium"));
}

#[test]
fn test_shape_id_from_str() {
    let id = ShapeID::from_str("example.stadium#HighScore").unwrap();
    assert_eq!(id.namespace().to_string(), "example.stadium");
    assert_eq!(id.shape_name().to_string(), "HighScore");
    assert!(id.member_name().is_none());
    assert!(!id.is_member());
}

#[test]
fn test_shape_id_from_str_with_member() {
    let id = ShapeID::from_str("example.stadium#HighScore$game").unwrap();
    assert!(id.is_member());
    assert_eq!(id.member_name().unwrap().to_string(), "game");
}

#[test]
fn test_shape_id_from_str_rejects_relative() {
    assert!(ShapeID::from_str("HighScore").is_err());
    assert!(ShapeID::from_str("example.stadium#").is_err());
    assert!(ShapeID::from_str("#HighScore").is_err());
}

#[test]
fn test_shape_id_display_round_trip() {
    for s in &[
        "example.stadium#HighScore",
        "example.stadium#HighScore$game",
        "smithy.api#String",
    ] {
        let id = ShapeID::from_str(s).unwrap();
        assert_eq!(&id.to_string(), s);
    }
}

#[test]
fn test_shape_id_ordering_follows_string_form() {
    let mut ids = vec![
        ShapeID::from_str("example.stadium#Ping").unwrap(),
        ShapeID::from_str("example.stadium#CreateHighScore").unwrap(),
        ShapeID::from_str("example.aaa#Zebra").unwrap(),
        ShapeID::from_str("example.stadium#GetHighScore").unwrap(),
    ];
    ids.sort();
    let strings: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    assert_eq!(
        strings,
        vec![
            "example.aaa#Zebra",
            "example.stadium#CreateHighScore",
            "example.stadium#GetHighScore",
            "example.stadium#Ping",
        ]
    );
}

#[test]
fn test_make_member_and_shape_only() {
    let id = ShapeID::from_str("example.stadium#HighScore").unwrap();
    let member = id.make_member(Identifier::from_str("game").unwrap());
    assert_eq!(member.to_string(), "example.stadium#HighScore$game");
    assert_eq!(member.shape_only(), id);
}

use garnet_core::model::shapes::{Operation, ShapeKind, StructureOrUnion, TopLevelShape};
use garnet_core::model::ShapeID;
use garnet_ruby::symbols::{enum_constant_name, SymbolProvider};
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn structure_shape(name: &str) -> TopLevelShape {
    TopLevelShape::new(
        ShapeID::new_unchecked("example.stadium", name, None),
        ShapeKind::Structure(StructureOrUnion::new()),
    )
}

fn operation_shape(name: &str) -> TopLevelShape {
    TopLevelShape::new(
        ShapeID::new_unchecked("example.stadium", name, None),
        ShapeKind::Operation(Operation::default()),
    )
}

fn provider() -> SymbolProvider {
    SymbolProvider::new("Stadium", "stadium")
}

#[test]
fn test_structure_names_are_pascal_case() {
    let mut provider = provider();
    let symbol = provider.shape_symbol(&structure_shape("high_score_input"));
    assert_eq!(symbol.name(), "HighScoreInput");
    assert_eq!(symbol.namespace(), "Stadium");
    assert_eq!(symbol.file_path(), "lib/stadium/types.rb");
    assert_eq!(symbol.qualified_name(), "Stadium::Types::HighScoreInput");
    assert_eq!(symbol.in_module("Builders"), "Builders::HighScoreInput");
}

#[test]
fn test_leading_digit_names_are_prefixed() {
    let mut provider = provider();
    let symbol = provider.shape_symbol(&structure_shape("_2fast"));
    assert!(symbol.name().starts_with("Struct____"), "{}", symbol.name());

    let symbol = provider.shape_symbol(&operation_shape("_2fast"));
    assert!(
        symbol.name().starts_with("Operation____"),
        "{}",
        symbol.name()
    );
}

#[test]
fn test_symbols_are_memoized() {
    let mut provider = provider();
    let shape = structure_shape("HighScore");
    let first = provider.shape_symbol(&shape);
    let second = provider.shape_symbol(&shape);
    assert!(std::rc::Rc::ptr_eq(&first, &second));
}

#[test]
fn test_member_names_are_snake_case() {
    let provider = provider();
    let parent = ShapeID::from_str("example.stadium#HighScore").unwrap();
    let member = garnet_core::model::shapes::MemberShape::new_from(
        &parent,
        garnet_core::model::Identifier::from_str("highScoreValue").unwrap(),
        ShapeID::from_str("smithy.api#String").unwrap(),
    );
    assert_eq!(provider.member_name(&member), "high_score_value");
}

#[test]
fn test_reserved_member_names_are_suffixed() {
    let provider = provider();
    let parent = ShapeID::from_str("example.stadium#HighScore").unwrap();
    for (raw, expected) in &[("class", "class_"), ("End", "end_"), ("yield", "yield_")] {
        let member = garnet_core::model::shapes::MemberShape::new_from(
            &parent,
            garnet_core::model::Identifier::from_str(raw).unwrap(),
            ShapeID::from_str("smithy.api#String").unwrap(),
        );
        assert_eq!(&provider.member_name(&member), expected);
    }
}

#[test]
fn test_operation_method_names() {
    let provider = provider();
    let operation = operation_shape("GetHighScore");
    assert_eq!(provider.operation_method_name(&operation), "get_high_score");
}

#[test]
fn test_enum_constant_names() {
    assert_eq!(enum_constant_name("spades"), "SPADES");
    assert_eq!(enum_constant_name("hello-world"), "HELLO_WORLD");
    assert_eq!(enum_constant_name("1st"), "V_1ST");
}

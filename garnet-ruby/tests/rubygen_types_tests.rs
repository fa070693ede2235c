mod common;

#[test]
fn test_structures_become_keyword_structs() {
    let manifest = common::generate_stadium();
    let types = common::file(&manifest, "types");
    assert!(types.contains("GetHighScoreInput = ::Struct.new("));
    assert!(types.contains(":id,"));
    assert!(types.contains("keyword_init: true"));
    assert!(types.contains("include Garnet::Structure"));
}

#[test]
fn test_empty_structures_use_nil_member_list() {
    let manifest = common::generate_stadium();
    let types = common::file(&manifest, "types");
    assert!(types.contains("PingInput = ::Struct.new(\n      nil,"));
}

#[test]
fn test_member_docs_carry_return_types() {
    let manifest = common::generate_stadium();
    let types = common::file(&manifest, "types");
    assert!(types.contains("# @!attribute high_score"));
    assert!(types.contains("#   @return [Types::HighScore]"));
    assert!(types.contains("#   @return [Time]"));
}

#[test]
fn test_sensitive_members_are_redacted_in_to_s() {
    let manifest = common::generate_stadium();
    let types = common::file(&manifest, "types");
    assert!(types.contains("def to_s"));
    assert!(types.contains("[SENSITIVE]"));
    assert!(types.contains("#<struct Stadium::Types::HighScore "));
}

#[test]
fn test_enum_values_are_verbatim_constants() {
    let manifest = common::generate_stadium();
    let types = common::file(&manifest, "types");
    assert!(types.contains("module Suit"));
    assert!(types.contains("SPADES = 'spades'"));
    assert!(types.contains("DIAMONDS = 'diamonds'"));
}

#[test]
fn test_unions_are_tagged_sums_with_unknown() {
    let manifest = common::generate_stadium();
    let types = common::file(&manifest, "types");
    assert!(types.contains("class Attachment < Garnet::Union"));
    assert!(types.contains("class Image < Attachment"));
    assert!(types.contains("class Note < Attachment"));
    assert!(types.contains("class Unknown < Attachment"));
}

#[test]
fn test_each_shape_emits_one_type() {
    let manifest = common::generate_stadium();
    let types = common::file(&manifest, "types");
    assert_eq!(types.matches("HighScore = ::Struct.new(").count(), 1);
    assert_eq!(types.matches("module Suit").count(), 1);
}

#[test]
fn test_documentation_traits_become_comments() {
    let manifest = common::generate_stadium();
    let types = common::file(&manifest, "types");
    assert!(types.contains("# A single high score entry."));
}

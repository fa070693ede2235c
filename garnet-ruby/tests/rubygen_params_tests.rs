mod common;

#[test]
fn test_structure_params_build_typed_records() {
    let manifest = common::generate_stadium();
    let params = common::file(&manifest, "params");
    assert!(params.contains(
        "Garnet::Params.validate_types!(params, ::Hash, Types::GetHighScoreInput, context: context)"
    ));
    assert!(params.contains("type = Types::GetHighScoreInput.new"));
    assert!(params.contains("type.id = params[:id]"));
}

#[test]
fn test_nested_aggregates_delegate_with_dotted_context() {
    let manifest = common::generate_stadium();
    let params = common::file(&manifest, "params");
    assert!(params.contains(
        "type.high_score = HighScore.build(params[:high_score], context: \"#{context}[:high_score]\") unless params[:high_score].nil?"
    ));
}

#[test]
fn test_idempotency_tokens_are_auto_filled() {
    let manifest = common::generate_stadium();
    let params = common::file(&manifest, "params");
    assert!(params.contains("require 'securerandom'"));
    assert!(params.contains("type.token = params[:token] || ::SecureRandom.uuid"));
}

#[test]
fn test_list_params_index_their_context() {
    let manifest = common::generate_stadium();
    let params = common::file(&manifest, "params");
    assert!(params.contains("params.each_with_index.map do |element, index|"));
    assert!(params.contains("HighScore.build(element, context: \"#{context}[#{index}]\")"));
}

#[test]
fn test_union_params_require_exactly_one_member() {
    let manifest = common::generate_stadium();
    let params = common::file(&manifest, "params");
    assert!(params.contains("return params if params.is_a?(Types::Attachment)"));
    assert!(params.contains("unless params.size == 1"));
    assert!(params.contains("key, value = params.flatten"));
    assert!(params.contains("when :image"));
}

#[test]
fn test_validators_check_required_and_kinds() {
    let manifest = common::generate_stadium();
    let validators = common::file(&manifest, "validators");
    assert!(validators.contains(
        "Garnet::Validator.validate_required!(input[:id], context: \"#{context}[:id]\")"
    ));
    assert!(validators.contains(
        "Garnet::Validator.validate_types!(input[:id], ::String, context: \"#{context}[:id]\")"
    ));
    assert!(validators.contains(
        "Garnet::Validator.validate_types!(input, Types::GetHighScoreInput, context: context)"
    ));
}

#[test]
fn test_validators_recurse_into_aggregates() {
    let manifest = common::generate_stadium();
    let validators = common::file(&manifest, "validators");
    assert!(validators.contains(
        "HighScore.validate!(input[:high_score], context: \"#{context}[:high_score]\") unless input[:high_score].nil?"
    ));
}

#[test]
fn test_streaming_members_validate_io_likeness() {
    let manifest = common::generate_stadium();
    let validators = common::file(&manifest, "validators");
    assert!(validators.contains(
        "Garnet::Validator.validate_responds_to!(input[:data], :read, :rewind, context: \"#{context}[:data]\")"
    ));
}

#[test]
fn test_enum_members_validate_inclusion() {
    let manifest = common::generate_stadium();
    let validators = common::file(&manifest, "validators");
    assert!(validators.contains(
        "Garnet::Validator.validate_included!(input[:suit], ['spades', 'hearts', 'clubs', 'diamonds'], context: \"#{context}[:suit]\")"
    ));
}

#[test]
fn test_map_validators_check_keys_and_values() {
    let manifest = common::generate_stadium();
    let validators = common::file(&manifest, "validators");
    assert!(validators.contains(
        "Garnet::Validator.validate_types!(key, ::String, ::Symbol, context: \"#{context}.keys\")"
    ));
}

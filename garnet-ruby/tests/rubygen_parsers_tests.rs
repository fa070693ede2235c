mod common;

#[test]
fn test_response_code_member_is_injected() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains("data.code = http_resp.status"));
}

#[test]
fn test_header_members_parse_by_kind() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains(
        "data.modified = Time.parse(http_resp.headers['Last-Modified']) unless http_resp.headers['Last-Modified'].nil?"
    ));
    assert!(parsers.contains("data.location = http_resp.headers['Location'] unless http_resp.headers['Location'].nil?"));
}

#[test]
fn test_header_lists_split_with_quote_awareness() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains(
        "Garnet::HTTP.split_header_list_values(http_resp.headers['X-Labels'])"
    ));
}

#[test]
fn test_prefix_headers_collect_into_map() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains("data.meta = {}"));
    assert!(parsers.contains("if key.start_with?('X-Meta-')"));
    assert!(parsers.contains("data.meta[key.delete_prefix('X-Meta-')] = value"));
}

#[test]
fn test_blob_payload_assigns_raw_body() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains("data.data = http_resp.body.read"));
}

#[test]
fn test_document_body_parses_members() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains("map = Garnet::JSON.parse(http_resp.body.read)"));
    assert!(parsers.contains(
        "data.high_score = HighScore.parse(map['high_score']) unless map['high_score'].nil?"
    ));
}

#[test]
fn test_body_timestamps_default_to_epoch_seconds() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains("data.time = Time.at(map['time']) unless map['time'].nil?"));
}

#[test]
fn test_sparse_lists_preserve_nulls_and_dense_lists_filter() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains("value.nil? ? nil : HighScore.parse(value)"));
    assert!(parsers.contains("list.compact.map do |value|"));
}

#[test]
fn test_error_shapes_get_parsers() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains("# Parser for the UnprocessableEntityError error."));
    assert!(parsers.contains("data = Types::UnprocessableEntityError.new"));
    assert!(parsers.contains("data = Types::InternalServerError.new"));
    assert!(parsers.contains(
        "data.errors = AttributeErrors.parse(map['errors']) unless map['errors'].nil?"
    ));
}

#[test]
fn test_union_parser_handles_unknown_variants() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains("when 'image'"));
    assert!(parsers.contains("Types::Attachment::Unknown.new(name: key, value: value)"));
}

#[test]
fn test_empty_output_parses_to_empty_structure() {
    let manifest = common::generate_stadium();
    let parsers = common::file(&manifest, "parsers");
    assert!(parsers.contains("data = Types::DeleteHighScoreOutput.new"));
}

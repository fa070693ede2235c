mod common;

#[test]
fn test_recursive_shapes_short_circuit_through_visited() {
    let manifest = common::generate_stadium();
    let stubs = common::file(&manifest, "stubs");
    assert!(stubs.contains("return nil if visited.include?('Tree')"));
    assert!(stubs.contains("visited = visited + ['Tree']"));
    assert!(stubs.contains("child: Tree.default(visited),"));
}

#[test]
fn test_defaults_by_kind() {
    let manifest = common::generate_stadium();
    let stubs = common::file(&manifest, "stubs");
    // string and blob default to the member name, numerics to one, timestamps to now
    assert!(stubs.contains("id: 'id',"));
    assert!(stubs.contains("score: 1,"));
    assert!(stubs.contains("time: Time.now,"));
    assert!(stubs.contains("value: 1,"));
}

#[test]
fn test_map_default_uses_test_key() {
    let manifest = common::generate_stadium();
    let stubs = common::file(&manifest, "stubs");
    assert!(stubs.contains("test_key: 'value',"));
}

#[test]
fn test_document_default_is_shape_named_array() {
    let manifest = common::generate_stadium();
    let stubs = common::file(&manifest, "stubs");
    assert!(stubs.contains("doc: { 'Document' => [0, 1, 2] },"));
}

#[test]
fn test_operation_stub_sets_success_status() {
    let manifest = common::generate_stadium();
    let stubs = common::file(&manifest, "stubs");
    assert!(stubs.contains("http_resp.status = 201"));
    assert!(stubs.contains("http_resp.status = 200"));
}

#[test]
fn test_response_code_member_overrides_status() {
    let manifest = common::generate_stadium();
    let stubs = common::file(&manifest, "stubs");
    assert!(stubs.contains("http_resp.status = stub[:code] unless stub[:code].nil?"));
}

#[test]
fn test_stub_serializes_body_through_codec() {
    let manifest = common::generate_stadium();
    let stubs = common::file(&manifest, "stubs");
    assert!(stubs.contains("http_resp.headers['Content-Type'] = 'application/json'"));
    assert!(stubs.contains("http_resp.body = StringIO.new(Garnet::JSON.dump(data))"));
    assert!(stubs.contains(
        "data['high_score'] = HighScore.stub(stub[:high_score]) unless stub[:high_score].nil?"
    ));
}

#[test]
fn test_blob_payload_stub_writes_raw_body() {
    let manifest = common::generate_stadium();
    let stubs = common::file(&manifest, "stubs");
    assert!(stubs.contains("http_resp.body = StringIO.new(stub[:data] || '')"));
}

#[test]
fn test_structure_stub_defaults_to_typed_empty() {
    let manifest = common::generate_stadium();
    let stubs = common::file(&manifest, "stubs");
    assert!(stubs.contains("stub ||= Types::HighScore.new"));
}

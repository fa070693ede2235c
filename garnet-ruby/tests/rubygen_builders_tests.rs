mod common;

#[test]
fn test_method_is_set_byte_identically() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains("http_req.http_method = 'GET'"));
    assert!(builders.contains("http_req.http_method = 'POST'"));
    assert!(builders.contains("http_req.http_method = 'PUT'"));
    assert!(builders.contains("http_req.http_method = 'DELETE'"));
}

#[test]
fn test_label_binding_emits_runtime_check_and_escape() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains("if input[:id].to_s.empty?"));
    assert!(builders
        .contains("raise ArgumentError, \"HTTP label :id cannot be nil or empty.\""));
    assert!(builders.contains("'/high_scores/%<id>s',"));
    assert!(builders.contains("id: Garnet::HTTP.uri_escape(input[:id].to_s)"));
}

#[test]
fn test_greedy_label_preserves_slashes() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains(
        "path: input[:path].to_s.split('/').map { |s| Garnet::HTTP.uri_escape(s) }.join('/')"
    ));
}

#[test]
fn test_static_query_and_query_members() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains("params['format'] = 'full'"));
    assert!(builders.contains(
        "params['x'] = input[:items].map { |value| value.to_s } unless input[:items].nil?"
    ));
    assert!(builders.contains(
        "params['since'] = Garnet::TimeHelper.to_date_time(input[:since]) unless input[:since].nil?"
    ));
    assert!(builders.contains("http_req.append_query_param_list(params)"));
}

#[test]
fn test_query_params_map_appends_pairs() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains(
        "input[:extra].each { |k, v| params[k] = v.to_s } unless input[:extra].nil?"
    ));
}

#[test]
fn test_query_bindings_emit_in_model_member_order() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    // ListHighScoresInput declares `limit` (httpQuery) before `extra` (httpQueryParams)
    let limit = builders.find("params['limit'] =").expect("limit query");
    let extra = builders.find("input[:extra].each").expect("extra query map");
    assert!(limit < extra);
}

#[test]
fn test_host_labels_emit_runtime_checks() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains("if input[:region].to_s.empty?"));
    assert!(builders
        .contains("raise ArgumentError, \"Host label :region cannot be nil or empty.\""));
}

#[test]
fn test_prefix_headers_emit_key_loop() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains(
        "input[:tags].each { |key, value| http_req.headers[\"X-Tag-#{key}\"] = value } unless input[:tags].nil?"
    ));
}

#[test]
fn test_header_lists_join_with_quoting() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains("input[:flags].compact.map { |value| value.to_s }"));
    assert!(builders.contains(
        ".map { |value| (value.include?('\"') || value.include?(',')) ? \"\\\"#{value.gsub('\"', '\\\"')}\\\"\" : value }.join(', ')"
    ));
}

#[test]
fn test_media_type_header_is_base64_encoded() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains(
        "http_req.headers['X-J'] = ::Base64::strict_encode64(input[:meta]).strip unless input[:meta].nil?"
    ));
}

#[test]
fn test_structure_payload_uses_shape_serializer() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains(
        "http_req.body = StringIO.new(Garnet::JSON.dump(HighScore.build(input[:high_score])))"
    ));
    assert!(builders.contains("http_req.headers['Content-Type'] = 'application/json'"));
}

#[test]
fn test_streaming_payload_is_assigned_raw() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains("http_req.body = input[:data]"));
    assert!(builders.contains("'application/octet-stream'"));
}

#[test]
fn test_document_body_members_serialize_in_model_order() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    let high_score = builders
        .find("data['high_score'] =")
        .expect("body member high_score");
    let token = builders.find("data['token'] =").expect("body member token");
    assert!(high_score < token);
}

#[test]
fn test_body_timestamps_default_to_epoch_seconds() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains(
        "data['time'] = Garnet::TimeHelper.to_epoch_seconds(input[:time]).to_i unless input[:time].nil?"
    ));
}

#[test]
fn test_sparse_list_serializer_preserves_nils() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains("data << (element.nil? ? nil : HighScore.build(element))"));
    assert!(builders.contains("data << HighScore.build(element) unless element.nil?"));
}

#[test]
fn test_each_shape_emits_one_builder_class() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert_eq!(builders.matches("class HighScore\n").count(), 1);
    assert_eq!(builders.matches("class Tags\n").count(), 1);
}

#[test]
fn test_union_serializer_dispatches_on_variant() {
    let manifest = common::generate_stadium();
    let builders = common::file(&manifest, "builders");
    assert!(builders.contains("when Types::Attachment::Image"));
    assert!(builders.contains("data['image'] = ImageAsset.build(input.__getobj__)"));
    assert!(builders.contains(
        "raise ArgumentError, \"Expected input to be one of the subclasses of Types::Attachment\""
    ));
}

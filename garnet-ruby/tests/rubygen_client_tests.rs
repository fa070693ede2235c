mod common;

use garnet_ruby::generator::ServiceGenerator;
use garnet_ruby::middleware::{MiddlewareRecord, MiddlewareStep};

fn method_body(client: &str, method: &str) -> String {
    let start = client
        .find(&format!("def {}(", method))
        .unwrap_or_else(|| panic!("missing method {}", method));
    let rest = &client[start..];
    let end = rest[4..].find("\n    def ").map(|i| i + 4).unwrap_or(rest.len());
    rest[..end].to_string()
}

#[test]
fn test_client_has_one_method_per_operation() {
    let manifest = common::generate_stadium();
    let client = common::file(&manifest, "client");
    for method in &[
        "create_high_score",
        "delete_high_score",
        "get_archive",
        "get_high_score",
        "get_leaderboard",
        "get_tree",
        "list_high_scores",
        "ping",
        "update_high_score",
        "upload_asset",
    ] {
        assert!(
            client.contains(&format!("def {}(params = {{}}, options = {{}})", method)),
            "missing {}",
            method
        );
    }
}

#[test]
fn test_operations_emit_in_sorted_order() {
    let manifest = common::generate_stadium();
    let client = common::file(&manifest, "client");
    let create = client.find("def create_high_score").unwrap();
    let get = client.find("def get_high_score").unwrap();
    let upload = client.find("def upload_asset").unwrap();
    assert!(create < get && get < upload);
}

#[test]
fn test_method_builds_params_and_runs_stack() {
    let manifest = common::generate_stadium();
    let client = common::file(&manifest, "client");
    let body = method_body(&client, "get_high_score");
    assert!(body.contains("stack = Garnet::MiddlewareStack.new"));
    assert!(body.contains("input = Params::GetHighScoreInput.build(params, context: 'params')"));
    assert!(body.contains("operation_name: :get_high_score"));
    assert!(body.contains("raise resp.error if resp.error"));
    assert!(body.contains("resp"));
}

#[test]
fn test_middleware_renders_in_step_order() {
    let manifest = common::generate_stadium();
    let client = common::file(&manifest, "client");
    let body = method_body(&client, "get_high_score");
    let validate = body.find("Garnet::Middleware::Validate").unwrap();
    let build = body.find("Garnet::Middleware::Build").unwrap();
    let content_length = body.find("Garnet::Middleware::ContentLength").unwrap();
    let send = body.find("Garnet::Middleware::Send").unwrap();
    let parse = body.find("Garnet::Middleware::Parse").unwrap();
    let request_id = body.find("Middleware::RequestId").unwrap();
    assert!(validate < build);
    assert!(build < content_length);
    assert!(content_length < send);
    assert!(send < parse);
    assert!(parse < request_id);
}

#[test]
fn test_checksum_middleware_only_on_marked_operations() {
    let manifest = common::generate_stadium();
    let client = common::file(&manifest, "client");
    assert!(method_body(&client, "create_high_score").contains("Garnet::Middleware::ContentMD5"));
    assert!(!method_body(&client, "get_high_score").contains("Garnet::Middleware::ContentMD5"));
}

#[test]
fn test_host_prefix_middleware_only_with_endpoint_trait() {
    let manifest = common::generate_stadium();
    let client = common::file(&manifest, "client");
    let ping = method_body(&client, "ping");
    assert!(ping.contains("Garnet::Middleware::HostPrefix"));
    assert!(ping.contains("host_prefix: 'status.'"));
    assert!(!method_body(&client, "get_high_score").contains("Garnet::Middleware::HostPrefix"));
}

#[test]
fn test_host_prefix_labels_render_from_input_members() {
    let manifest = common::generate_stadium();
    let client = common::file(&manifest, "client");
    let leaderboard = method_body(&client, "get_leaderboard");
    assert!(leaderboard.contains("host_prefix: \"#{input[:region]}.data.\""));
}

#[test]
fn test_content_length_skipped_for_streaming_payload() {
    let manifest = common::generate_stadium();
    let client = common::file(&manifest, "client");
    assert!(!method_body(&client, "upload_asset").contains("Garnet::Middleware::ContentLength"));
}

#[test]
fn test_parse_middleware_lists_errors_in_model_order() {
    let manifest = common::generate_stadium();
    let client = common::file(&manifest, "client");
    let body = method_body(&client, "update_high_score");
    assert!(body.contains(
        "errors: [Errors::UnprocessableEntityError, Errors::InternalServerError]"
    ));
    assert!(body.contains("data_parser: Parsers::UpdateHighScore"));
    let get = method_body(&client, "get_high_score");
    assert!(get.contains("success_status: 200, errors: []"));
    let create = method_body(&client, "create_high_score");
    assert!(create.contains("success_status: 201"));
}

#[test]
fn test_user_middleware_ordering_and_predicates() {
    let model = garnet_test::stadium_model();
    let manifest = ServiceGenerator::default()
        .with_middleware(|| {
            MiddlewareRecord::builder("Middleware::Early", MiddlewareStep::Build)
                .order(-5)
                .build()
        })
        .with_middleware(|| {
            MiddlewareRecord::builder("Middleware::Late", MiddlewareStep::Build)
                .order(10)
                .operation_predicate(|_, _, operation| {
                    use garnet_core::model::identity::HasIdentity;
                    operation.id().shape_name().as_ref() != "Ping"
                })
                .build()
        })
        .generate(&model, &common::stadium_settings())
        .unwrap();
    let client = common::file(&manifest, "client");

    let get = method_body(&client, "get_high_score");
    let early = get.find("Middleware::Early").unwrap();
    let late = get.find("Middleware::Late").unwrap();
    assert!(early < late);

    let ping = method_body(&client, "ping");
    assert!(ping.contains("Middleware::Early"));
    assert!(!ping.contains("Middleware::Late"));
}

#[test]
fn test_config_enumerates_contributed_keys() {
    let manifest = common::generate_stadium();
    let config = common::file(&manifest, "config");
    assert!(config.contains("Config = ::Struct.new("));
    for key in &[
        ":disable_host_prefix,",
        ":endpoint,",
        ":http_wire_trace,",
        ":log_level,",
        ":logger,",
        ":stub_responses,",
        ":validate_input,",
    ] {
        assert!(config.contains(key), "missing {}", key);
    }
    assert!(config.contains("include Garnet::Configuration"));
    assert!(config.contains("http_wire_trace: [false],"));
    assert!(config.contains("log_level: [:info],"));
    assert!(config.contains(
        "Garnet::Validator.validate_types!(endpoint, String, context: 'config[:endpoint]') unless endpoint.nil?"
    ));
}

#[test]
fn test_errors_file_has_bases_and_resolver() {
    let manifest = common::generate_stadium();
    let errors = common::file(&manifest, "errors");
    assert!(errors.contains("def self.error_code(http_resp)"));
    assert!(errors.contains("code = http_resp.headers['X-Error-Code']"));
    assert!(errors.contains("class ApiError < Garnet::HTTP::ApiError; end"));
    assert!(errors.contains("class ApiClientError < ApiError; end"));
    assert!(errors.contains("class ApiServerError < ApiError; end"));
    assert!(errors.contains("class UnprocessableEntityError < ApiClientError"));
    assert!(errors.contains("class InternalServerError < ApiServerError"));
    assert!(errors.contains("@data = Parsers::UnprocessableEntityError.parse(http_resp)"));
    assert!(errors.contains("attr_reader :data"));
}

#[test]
fn test_gem_entrypoint_requires_everything() {
    let manifest = common::generate_stadium();
    let entry = manifest.file("lib/stadium.rb").unwrap();
    assert!(entry.contains("require 'garnet'"));
    for file in &[
        "stadium/types",
        "stadium/params",
        "stadium/validators",
        "stadium/builders",
        "stadium/parsers",
        "stadium/stubs",
        "stadium/errors",
        "stadium/middleware/request_id",
        "stadium/config",
        "stadium/client",
    ] {
        assert!(
            entry.contains(&format!("require_relative '{}'", file)),
            "missing {}",
            file
        );
    }
    assert!(entry.contains("module Stadium"));
    assert!(entry.contains("GEM_VERSION = '1.0.0'"));
}

#[test]
fn test_request_id_sidecar_is_emitted() {
    let manifest = common::generate_stadium();
    let sidecar = manifest.file("lib/stadium/middleware/request_id.rb").unwrap();
    assert!(sidecar.contains("module Stadium"));
    assert!(sidecar.contains("class RequestId"));
    assert!(sidecar.contains("context.response.headers['X-Request-Id']"));
}

mod common;

use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::TopLevelShape;
use garnet_core::model::{Model, ShapeID};
use garnet_ruby::context::GenerationContext;
use garnet_ruby::middleware::{MiddlewareRecord, MiddlewareStack, MiddlewareStep};
use garnet_ruby::transport::http_transport;
use garnet_ruby::writer::RubyWriter;
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn operation<'a>(model: &'a Model, name: &str) -> &'a TopLevelShape {
    model
        .expect_shape(&ShapeID::from_str(&format!("example.stadium#{}", name)).unwrap())
        .unwrap()
}

fn service(model: &Model) -> &TopLevelShape {
    model.expect_shape(&garnet_test::stadium_service_id()).unwrap()
}

#[test]
fn test_records_sort_by_step_then_order() {
    let model = garnet_test::stadium_model();
    let mut stack = MiddlewareStack::new();
    stack.register(
        MiddlewareRecord::builder("Middleware::Late", MiddlewareStep::Build)
            .order(10)
            .build(),
    );
    stack.register(
        MiddlewareRecord::builder("Middleware::Tracer", MiddlewareStep::Initialize).build(),
    );
    stack.register(
        MiddlewareRecord::builder("Middleware::Early", MiddlewareStep::Build)
            .order(-5)
            .build(),
    );
    let resolved = stack.resolve(&model, service(&model), operation(&model, "Ping"));
    let klasses: Vec<&str> = resolved.iter().map(|record| record.klass()).collect();
    assert_eq!(
        klasses,
        vec!["Middleware::Tracer", "Middleware::Early", "Middleware::Late"]
    );
}

#[test]
fn test_equal_orders_keep_insertion_order() {
    let model = garnet_test::stadium_model();
    let mut stack = MiddlewareStack::new();
    stack.register(MiddlewareRecord::builder("Middleware::First", MiddlewareStep::Build).build());
    stack.register(MiddlewareRecord::builder("Middleware::Second", MiddlewareStep::Build).build());
    let resolved = stack.resolve(&model, service(&model), operation(&model, "Ping"));
    let klasses: Vec<&str> = resolved.iter().map(|record| record.klass()).collect();
    assert_eq!(klasses, vec!["Middleware::First", "Middleware::Second"]);
}

#[test]
fn test_operation_predicate_filters_records() {
    let model = garnet_test::stadium_model();
    let mut stack = MiddlewareStack::new();
    stack.register(
        MiddlewareRecord::builder("Middleware::NotForPing", MiddlewareStep::Build)
            .operation_predicate(|_, _, operation| {
                operation.id().shape_name().as_ref() != "Ping"
            })
            .build(),
    );
    assert!(stack
        .resolve(&model, service(&model), operation(&model, "Ping"))
        .is_empty());
    assert_eq!(
        stack
            .resolve(&model, service(&model), operation(&model, "GetHighScore"))
            .len(),
        1
    );
}

#[test]
fn test_default_render_is_stack_use() {
    let model = garnet_test::stadium_model();
    let settings = common::stadium_settings();
    let mut ctx = GenerationContext::new(&model, service(&model), &settings);
    let record = MiddlewareRecord::builder("Garnet::Middleware::ContentLength", MiddlewareStep::Build)
        .build();
    let mut writer = RubyWriter::new();
    record
        .render(&mut writer, &mut ctx, operation(&model, "Ping"))
        .unwrap();
    assert_eq!(
        writer.finish().unwrap(),
        "stack.use(Garnet::Middleware::ContentLength)\n"
    );
}

#[test]
fn test_render_with_params_and_hook() {
    let model = garnet_test::stadium_model();
    let settings = common::stadium_settings();
    let mut ctx = GenerationContext::new(&model, service(&model), &settings);

    let record = MiddlewareRecord::builder("Middleware::Tagged", MiddlewareStep::Build)
        .additional_param("tag", "'fixed'")
        .build();
    let mut writer = RubyWriter::new();
    record
        .render(&mut writer, &mut ctx, operation(&model, "Ping"))
        .unwrap();
    assert_eq!(
        writer.finish().unwrap(),
        "stack.use(Middleware::Tagged,\n  tag: 'fixed'\n)\n"
    );

    let hooked = MiddlewareRecord::builder("Middleware::Hooked", MiddlewareStep::Build)
        .render_hook(|writer, klass, _params| {
            writer.write(&format!("stack.use_before(Garnet::Middleware::Send, {})", klass));
            Ok(())
        })
        .build();
    let mut writer = RubyWriter::new();
    hooked
        .render(&mut writer, &mut ctx, operation(&model, "Ping"))
        .unwrap();
    assert_eq!(
        writer.finish().unwrap(),
        "stack.use_before(Garnet::Middleware::Send, Middleware::Hooked)\n"
    );
}

#[test]
fn test_transport_content_md5_applies_only_with_checksum_required() {
    let model = garnet_test::stadium_model();
    let transport = http_transport();
    let stack = {
        let mut stack = MiddlewareStack::new();
        stack.append(transport.default_middleware());
        stack
    };
    let for_create: Vec<&str> = stack
        .resolve(&model, service(&model), operation(&model, "CreateHighScore"))
        .iter()
        .map(|record| record.klass())
        .collect();
    assert!(for_create.contains(&"Garnet::Middleware::ContentMD5"));
    let for_get: Vec<&str> = stack
        .resolve(&model, service(&model), operation(&model, "GetHighScore"))
        .iter()
        .map(|record| record.klass())
        .collect();
    assert!(!for_get.contains(&"Garnet::Middleware::ContentMD5"));
}

#[test]
fn test_transport_content_length_skips_streaming_payloads() {
    let model = garnet_test::stadium_model();
    let transport = http_transport();
    let stack = {
        let mut stack = MiddlewareStack::new();
        stack.append(transport.default_middleware());
        stack
    };
    let for_upload: Vec<&str> = stack
        .resolve(&model, service(&model), operation(&model, "UploadAsset"))
        .iter()
        .map(|record| record.klass())
        .collect();
    assert!(!for_upload.contains(&"Garnet::Middleware::ContentLength"));
    let for_get: Vec<&str> = stack
        .resolve(&model, service(&model), operation(&model, "GetHighScore"))
        .iter()
        .map(|record| record.klass())
        .collect();
    assert!(for_get.contains(&"Garnet::Middleware::ContentLength"));
}

#[test]
fn test_transport_host_prefix_applies_only_with_endpoint_trait() {
    let model = garnet_test::stadium_model();
    let transport = http_transport();
    let stack = {
        let mut stack = MiddlewareStack::new();
        stack.append(transport.default_middleware());
        stack
    };
    let for_ping: Vec<&str> = stack
        .resolve(&model, service(&model), operation(&model, "Ping"))
        .iter()
        .map(|record| record.klass())
        .collect();
    assert!(for_ping.contains(&"Garnet::Middleware::HostPrefix"));
    let for_get: Vec<&str> = stack
        .resolve(&model, service(&model), operation(&model, "GetHighScore"))
        .iter()
        .map(|record| record.klass())
        .collect();
    assert!(!for_get.contains(&"Garnet::Middleware::HostPrefix"));
}

#[test]
fn test_config_fields_are_collected_from_records() {
    let model = garnet_test::stadium_model();
    let transport = http_transport();
    let mut stack = MiddlewareStack::new();
    stack.append(transport.default_middleware());
    let names: Vec<&str> = stack
        .config_fields(&model, service(&model))
        .iter()
        .map(|field| field.name())
        .collect();
    assert!(names.contains(&"validate_input"));
    assert!(names.contains(&"stub_responses"));
    assert!(names.contains(&"disable_host_prefix"));
}

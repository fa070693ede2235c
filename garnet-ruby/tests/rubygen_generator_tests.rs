mod common;

use garnet_ruby::generator::ServiceGenerator;
use garnet_ruby::settings::GenerationSettings;
use garnet_core::model::ShapeID;
use pretty_assertions::assert_eq;
use std::str::FromStr;

#[test]
fn test_full_file_layout() {
    let manifest = common::generate_stadium();
    let paths: Vec<&String> = manifest.paths().collect();
    assert_eq!(
        paths,
        vec![
            "lib/stadium.rb",
            "lib/stadium/builders.rb",
            "lib/stadium/client.rb",
            "lib/stadium/config.rb",
            "lib/stadium/errors.rb",
            "lib/stadium/middleware/request_id.rb",
            "lib/stadium/params.rb",
            "lib/stadium/parsers.rb",
            "lib/stadium/stubs.rb",
            "lib/stadium/types.rb",
            "lib/stadium/validators.rb",
        ]
    );
}

#[test]
fn test_generation_is_deterministic() {
    let first = common::generate_stadium();
    let second = common::generate_stadium();
    assert_eq!(first.len(), second.len());
    for (path, content) in first.files() {
        assert_eq!(Some(content), second.file(path), "file {} differs", path);
    }
}

#[test]
fn test_every_file_is_frozen_string_literal_ruby() {
    let manifest = common::generate_stadium();
    for (path, content) in manifest.files() {
        assert!(
            content.starts_with("# frozen_string_literal: true\n"),
            "file {} missing pragma",
            path
        );
        assert!(content.ends_with("end\n"), "file {} unbalanced", path);
    }
}

#[test]
fn test_unsupported_protocol_fails() {
    let model = garnet_test::plain_service_model();
    let result = ServiceGenerator::default().generate(&model, &common::stadium_settings());
    let err = result.err().expect("expected a protocol resolution failure");
    assert!(err.to_string().contains("protocol"));
}

#[test]
fn test_unknown_service_fails() {
    let model = garnet_test::stadium_model();
    let settings = GenerationSettings::new(
        ShapeID::from_str("example.stadium#NoSuchService").unwrap(),
        "stadium",
    );
    assert!(ServiceGenerator::default().generate(&model, &settings).is_err());
}

#[test]
fn test_service_id_must_name_a_service() {
    let model = garnet_test::stadium_model();
    let settings = GenerationSettings::new(
        ShapeID::from_str("example.stadium#HighScore").unwrap(),
        "stadium",
    );
    assert!(ServiceGenerator::default().generate(&model, &settings).is_err());
}

#[test]
fn test_module_name_derives_from_gem_name() {
    let settings = GenerationSettings::new(garnet_test::stadium_service_id(), "high_score_service");
    assert_eq!(settings.module_name(), "HighScoreService");
    assert_eq!(settings.entrypoint_path(), "lib/high_score_service.rb");
    assert_eq!(
        settings.lib_path("types"),
        "lib/high_score_service/types.rb"
    );

    let overridden = settings.with_module_name("Scores");
    assert_eq!(overridden.module_name(), "Scores");
}

#![allow(dead_code)]

use garnet_ruby::generator::ServiceGenerator;
use garnet_ruby::manifest::FileManifest;
use garnet_ruby::settings::GenerationSettings;

pub fn stadium_settings() -> GenerationSettings {
    GenerationSettings::new(garnet_test::stadium_service_id(), "stadium")
}

pub fn generate_stadium() -> FileManifest {
    let model = garnet_test::stadium_model();
    ServiceGenerator::default()
        .generate(&model, &stadium_settings())
        .unwrap()
}

pub fn file(manifest: &FileManifest, name: &str) -> String {
    manifest
        .file(&format!("lib/stadium/{}.rb", name))
        .unwrap_or_else(|| panic!("missing file {}", name))
        .clone()
}

use garnet_ruby::manifest::FileManifest;
use pretty_assertions::assert_eq;

#[test]
fn test_paths_are_normalized() {
    let mut manifest = FileManifest::new();
    manifest
        .write_file("./lib//stadium/types.rb", "# types".to_string())
        .unwrap();
    assert!(manifest.has_file("lib/stadium/types.rb"));
    assert_eq!(
        manifest.paths().collect::<Vec<&String>>(),
        vec!["lib/stadium/types.rb"]
    );
}

#[test]
fn test_duplicate_identical_writes_are_tolerated() {
    let mut manifest = FileManifest::new();
    manifest
        .write_file("lib/stadium.rb", "# entry".to_string())
        .unwrap();
    manifest
        .write_file("lib/stadium.rb", "# entry".to_string())
        .unwrap();
    assert_eq!(manifest.len(), 1);
}

#[test]
fn test_conflicting_writes_fail() {
    let mut manifest = FileManifest::new();
    manifest
        .write_file("lib/stadium.rb", "# one".to_string())
        .unwrap();
    assert!(manifest
        .write_file("lib/stadium.rb", "# two".to_string())
        .is_err());
}

#[test]
fn test_parent_traversal_is_rejected() {
    let mut manifest = FileManifest::new();
    assert!(manifest
        .write_file("../escape.rb", "# nope".to_string())
        .is_err());
}

#[test]
fn test_absolute_paths_are_rejected() {
    let mut manifest = FileManifest::new();
    assert!(manifest
        .write_file("/etc/passwd", "# nope".to_string())
        .is_err());
}

#[test]
fn test_files_iterate_in_path_order() {
    let mut manifest = FileManifest::new();
    manifest.write_file("lib/z.rb", String::new()).unwrap();
    manifest.write_file("lib/a.rb", String::new()).unwrap();
    manifest.write_file("lib/m.rb", String::new()).unwrap();
    let paths: Vec<&String> = manifest.paths().collect();
    assert_eq!(paths, vec!["lib/a.rb", "lib/m.rb", "lib/z.rb"]);
}

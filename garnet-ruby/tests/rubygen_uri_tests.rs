use garnet_ruby::uri::{HostPrefixPart, HostPrefixTemplate, PathSegment, UriTemplate};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_static_path() {
    let template = UriTemplate::parse("/high_scores").unwrap();
    assert_eq!(
        template.segments().cloned().collect::<Vec<PathSegment>>(),
        vec![PathSegment::Literal("high_scores".to_string())]
    );
    assert!(!template.has_labels());
    assert_eq!(template.format_string(), "/high_scores");
}

#[test]
fn test_parse_labels() {
    let template = UriTemplate::parse("/high_scores/{id}").unwrap();
    assert_eq!(template.labels(), vec![("id", false)]);
    assert_eq!(template.format_string(), "/high_scores/%<id>s");
}

#[test]
fn test_parse_greedy_label() {
    let template = UriTemplate::parse("/archive/{path+}").unwrap();
    assert_eq!(template.labels(), vec![("path", true)]);
    assert_eq!(
        template.segments().cloned().collect::<Vec<PathSegment>>(),
        vec![
            PathSegment::Literal("archive".to_string()),
            PathSegment::Greedy("path".to_string()),
        ]
    );
}

#[test]
fn test_parse_static_query() {
    let template = UriTemplate::parse("/archive/{path+}?format=full&flag").unwrap();
    assert_eq!(
        template
            .static_query()
            .cloned()
            .collect::<Vec<(String, Option<String>)>>(),
        vec![
            ("format".to_string(), Some("full".to_string())),
            ("flag".to_string(), None),
        ]
    );
    assert_eq!(template.format_string(), "/archive/%<path>s");
}

#[test]
fn test_format_string_escapes_percent() {
    let template = UriTemplate::parse("/odd%20path/{id}").unwrap();
    assert_eq!(template.format_string(), "/odd%%20path/%<id>s");
}

#[test]
fn test_root_path() {
    let template = UriTemplate::parse("/").unwrap();
    assert_eq!(template.format_string(), "/");
}

#[test]
fn test_parse_rejects_relative_uri() {
    assert!(UriTemplate::parse("high_scores/{id}").is_err());
}

#[test]
fn test_parse_static_host_prefix() {
    let template = HostPrefixTemplate::parse("status.").unwrap();
    assert_eq!(
        template.parts().cloned().collect::<Vec<HostPrefixPart>>(),
        vec![HostPrefixPart::Literal("status.".to_string())]
    );
    assert!(!template.has_labels());
}

#[test]
fn test_parse_host_prefix_labels() {
    let template = HostPrefixTemplate::parse("{region}.data.").unwrap();
    assert_eq!(
        template.parts().cloned().collect::<Vec<HostPrefixPart>>(),
        vec![
            HostPrefixPart::Label("region".to_string()),
            HostPrefixPart::Literal(".data.".to_string()),
        ]
    );
    assert_eq!(template.labels(), vec!["region"]);
}

#[test]
fn test_parse_host_prefix_rejects_unbalanced_braces() {
    assert!(HostPrefixTemplate::parse("{region.data.").is_err());
    assert!(HostPrefixTemplate::parse("region}.data.").is_err());
    assert!(HostPrefixTemplate::parse("{bad name}.").is_err());
}

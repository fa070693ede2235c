use garnet_ruby::writer::RubyWriter;
use pretty_assertions::assert_eq;

#[test]
fn test_write_lines_with_indent() {
    let mut writer = RubyWriter::new();
    writer.open_block("module Stadium", "end");
    writer.open_block("class Client", "end");
    writer.write("attr_reader :config");
    writer.close_block().unwrap();
    writer.close_block().unwrap();
    assert_eq!(
        writer.finish().unwrap(),
        "module Stadium\n  class Client\n    attr_reader :config\n  end\nend\n"
    );
}

#[test]
fn test_template_substitution() {
    let mut writer = RubyWriter::new();
    writer.write_template(
        "def $name(params = {}, options = {})",
        &[("name", "get_high_score")],
    );
    assert_eq!(
        writer.finish().unwrap(),
        "def get_high_score(params = {}, options = {})\n"
    );
}

#[test]
fn test_template_unbound_placeholder_passes_through() {
    let mut writer = RubyWriter::new();
    writer.write_template("logger = Logger.new($stdout)", &[("name", "unused")]);
    assert_eq!(writer.finish().unwrap(), "logger = Logger.new($stdout)\n");
}

#[test]
fn test_close_without_open_is_unbalanced() {
    let mut writer = RubyWriter::new();
    assert!(writer.close_block().is_err());
}

#[test]
fn test_finish_with_open_block_is_unbalanced() {
    let mut writer = RubyWriter::new();
    writer.open_block("module Stadium", "end");
    assert!(writer.finish().is_err());
}

#[test]
fn test_close_all_closes_in_order() {
    let mut writer = RubyWriter::new();
    writer.open_block("module Stadium", "end");
    writer.open_block("[", "]");
    writer.close_all().unwrap();
    assert_eq!(writer.finish().unwrap(), "module Stadium\n  [\n  ]\nend\n");
}

#[test]
fn test_inject_hook_composes_in_place() {
    let mut writer = RubyWriter::new();
    writer.open_block("def self.error_code(http_resp)", "end");
    writer
        .inject(|w| {
            w.write("code = http_resp.headers['X-Error-Code']");
            Ok(())
        })
        .unwrap();
    writer.close_block().unwrap();
    let text = writer.finish().unwrap();
    assert!(text.contains("  code = http_resp.headers['X-Error-Code']\n"));
}

#[test]
fn test_write_inline_builds_a_single_line() {
    let mut writer = RubyWriter::new();
    writer.open_block("module Stadium", "end");
    writer.write_inline("A");
    writer.write_inline(" = ");
    writer.write("1");
    writer.close_block().unwrap();
    assert_eq!(writer.finish().unwrap(), "module Stadium\n  A = 1\nend\n");
}

#[test]
fn test_doc_comment() {
    let mut writer = RubyWriter::new();
    writer.doc_comment("Tracks high scores.\n\nSecond paragraph.");
    assert_eq!(
        writer.finish().unwrap(),
        "# Tracks high scores.\n#\n# Second paragraph.\n"
    );
}

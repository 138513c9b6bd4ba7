use overcheck_common::Diagnostic;
use overcheck_common::Span;
use overcheck_common::diagnostics::{diagnostic_messages, format_message};

use crate::reporter::{Reporter, render_json};

const SHAPES_SOURCE: &str = "@overload\ndef area(r: float) -> float: ...\n";

fn incompatible(file: &str, start: u32, length: u32) -> Diagnostic {
    let message = diagnostic_messages::OVERLOAD_SIGNATURE_NOT_COMPATIBLE;
    Diagnostic::new(
        file.to_string(),
        Span::new(start, length),
        &message,
        format_message(message.message, &["function"]),
    )
}

#[test]
fn test_render_with_snippet() {
    let mut reporter = Reporter::new(false).with_source("shapes.py", SHAPES_SOURCE);

    let output = reporter.render(&[incompatible("shapes.py", 14, 4)]);

    let expected = "shapes.py:2:5 - warning OVL1002: Signature of this @overload-decorated \
                    function is not compatible with the implementation\n    \
                    2   def area(r: float) -> float: ...\n            ~~~~\n";
    assert_eq!(output, expected);
}

#[test]
fn test_render_without_source_falls_back_to_file_name() {
    let mut reporter = Reporter::new(false);
    let message = diagnostic_messages::OVERLOAD_IMPLEMENTATION_MISSING;
    let diagnostic = Diagnostic::new(
        "does/not/exist.py".to_string(),
        Span::new(3, 1),
        &message,
        format_message(message.message, &["methods"]),
    );

    let output = reporter.render(&[diagnostic]);
    assert_eq!(
        output,
        "does/not/exist.py - warning OVL1001: A series of @overload-decorated methods \
         should always be followed by an implementation that is not @overload-ed\n"
    );
}

#[test]
fn test_render_keeps_diagnostic_order() {
    let mut reporter = Reporter::new(false).with_source("shapes.py", SHAPES_SOURCE);

    let output = reporter.render(&[
        incompatible("shapes.py", 14, 4),
        incompatible("shapes.py", 0, 1),
    ]);

    let locations: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("shapes.py:"))
        .map(|line| line.split(' ').next().unwrap_or_default())
        .collect();
    assert_eq!(locations, vec!["shapes.py:2:5", "shapes.py:1:1"]);
}

#[test]
fn test_render_json() {
    let json = render_json(&[incompatible("shapes.py", 14, 4)]).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    let first = &value[0];
    assert_eq!(first["file"], "shapes.py");
    assert_eq!(first["start"], 14);
    assert_eq!(first["length"], 4);
    assert_eq!(first["code"], 1002);
    assert_eq!(first["category"], "warning");
    assert!(
        first["messageText"]
            .as_str()
            .is_some_and(|text| text.starts_with("Signature of this"))
    );
}

#[test]
fn test_render_json_empty() {
    assert_eq!(render_json(&[]).expect("serialize"), "[]");
}

#[test]
fn test_relative_source_resolved_against_base_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::create_dir_all(dir.path().join("pkg")).expect("create pkg");
    std::fs::write(dir.path().join("pkg/shapes.py"), SHAPES_SOURCE).expect("write source");

    let mut reporter = Reporter::new(false).with_base_dir(dir.path());
    let output = reporter.render(&[incompatible("pkg/shapes.py", 14, 4)]);

    assert!(output.starts_with("pkg/shapes.py:2:5 - warning OVL1002:"));
    assert!(output.contains("def area(r: float) -> float: ..."));
}

mod common;

use std::fs;

use common::{number, repeat, SequenceBuilder};
use seqn_core::{load_dictionary, load_tree};
use seqn_fprime::adaptation::{Adaptation, INPUT_FORMAT_NAME, OUTPUT_FORMAT_NAME};
use seqn_protocol::diagnostic::{Diagnostic, EditorView, Severity};
use seqn_protocol::tree::NodeKind;
use seqn_rules::{MISSING_TIME_TAG_MESSAGE, UNSUPPORTED_TIME_TAG_MESSAGE};

const DICTIONARY: &str = r#"
header:
  missionName: demo
  version: "1.0"
fswCommands:
  - stem: demo_SET_POINTS
    arguments:
      - name: points
        arg_type: repeat
        repeat:
          arguments:
            - name: x
              arg_type: float
            - name: y
              arg_type: float
"#;

#[test]
fn descriptor_names_its_formats() {
    let adaptation = Adaptation::fprime();
    assert_eq!(adaptation.input_format.name(), INPUT_FORMAT_NAME);
    assert_eq!(adaptation.output_format.len(), 1);
    assert_eq!(adaptation.output_format[0].name(), OUTPUT_FORMAT_NAME);
}

#[test]
fn input_linter_reports_time_tag_problems() {
    let (tree, source) = SequenceBuilder::new()
        .command(Some((NodeKind::TimeRelative, "R1")), "demo_OK", &[], None)
        .command(None, "demo_UNTIMED", &[], None)
        .command(Some((NodeKind::TimeComplete, "C")), "demo_LATER", &[], None)
        .build();
    let adaptation = Adaptation::fprime();
    let linter = adaptation.input_format.linter().expect("input linter");

    let existing = Diagnostic::new(0, 2, Severity::Info, "from the parser");
    let diagnostics = linter.lint(
        vec![existing.clone()],
        None,
        &EditorView::new(&source),
        tree.top_node(),
    );

    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics[0], existing);
    assert_eq!(diagnostics[1].message, MISSING_TIME_TAG_MESSAGE);
    assert_eq!(&source[diagnostics[1].from..diagnostics[1].to], "demo_UNTIMED");
    assert_eq!(diagnostics[2].message, UNSUPPORTED_TIME_TAG_MESSAGE);
    assert_eq!(&source[diagnostics[2].from..diagnostics[2].to], "C");
    assert!(diagnostics[1..].iter().all(Diagnostic::is_error));
}

#[test]
fn output_linter_drops_incoming_diagnostics() {
    let (tree, source) = SequenceBuilder::new()
        .command(None, "demo_UNTIMED", &[], None)
        .build();
    let adaptation = Adaptation::fprime();
    let output = adaptation.output(OUTPUT_FORMAT_NAME).expect("output format");

    let existing = vec![Diagnostic::error(0, 1, "from the input linter")];
    let diagnostics = output.linter().lint(
        existing,
        None,
        &EditorView::new(&source),
        tree.top_node(),
    );
    assert!(diagnostics.is_empty());
}

#[tokio::test]
async fn converts_files_loaded_from_disk() {
    let (tree, source) = SequenceBuilder::new()
        .comment("# points")
        .command(
            Some((NodeKind::TimeAbsolute, "A2024-001T00:00:00")),
            "demo_SET_POINTS",
            &[repeat(vec![number("1"), number("2"), number("3"), number("4")])],
            None,
        )
        .build();

    let dir = tempfile::tempdir().unwrap();
    let tree_path = dir.path().join("points.json");
    let dictionary_path = dir.path().join("dictionary.yaml");
    fs::write(&tree_path, serde_json::to_string(&tree).unwrap()).unwrap();
    fs::write(&dictionary_path, DICTIONARY).unwrap();

    let tree = load_tree(&tree_path).unwrap();
    let dictionary = load_dictionary(&dictionary_path).unwrap();
    assert_eq!(dictionary.argument("demo_SET_POINTS", 0).and_then(|arg| arg.arity()), Some(2));

    let adaptation = Adaptation::fprime();
    let output = adaptation.output(OUTPUT_FORMAT_NAME).unwrap();
    let text = output
        .to_output_format(&tree, &source, Some(&dictionary), "points")
        .await;
    assert_eq!(text, ";points\nA2024-001T00:00:00 demo.SET_POINTS [1,2,3,4]");
}

const METADATA_SOURCE: &str = "@METADATA \"owner\" \"ops\"\nR1 demo_NOOP";

const METADATA_TREE: &str = r#"{"kind": "Sequence", "from": 0, "to": 36, "children": [
    {"kind": "Metadata", "from": 0, "to": 23, "children": [
        {"kind": "MetaEntry", "from": 0, "to": 23, "children": [
            {"kind": "Key", "from": 10, "to": 17, "children": [
                {"kind": "String", "from": 10, "to": 17}
            ]},
            {"kind": "Value", "from": 18, "to": 23, "children": [
                {"kind": "String", "from": 18, "to": 23}
            ]}
        ]}
    ]},
    {"kind": "Commands", "from": 24, "to": 36, "children": [
        {"kind": "Command", "from": 24, "to": 36, "children": [
            {"kind": "TimeTag", "from": 24, "to": 26, "children": [
                {"kind": "TimeRelative", "from": 24, "to": 26}
            ]},
            {"kind": "Stem", "from": 27, "to": 36}
        ]}
    ]}
]}"#;

#[tokio::test]
async fn metadata_loads_and_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let tree_path = dir.path().join("metadata.json");
    fs::write(&tree_path, METADATA_TREE).unwrap();
    let tree = load_tree(&tree_path).unwrap();

    let adaptation = Adaptation::fprime();
    let output = adaptation.output(OUTPUT_FORMAT_NAME).unwrap();
    let text = output
        .to_output_format(&tree, METADATA_SOURCE, None, "metadata")
        .await;
    assert_eq!(text, "R00:00:01 demo.NOOP ");
}

#[tokio::test]
async fn round_trip_is_textual_only() {
    let adaptation = Adaptation::fprime();
    let seqn = adaptation
        .input_format
        .to_input_format("R00:00:01 cmdDisp.CMD_NO_OP_STRING \"a.b\" ; ok")
        .await;
    assert_eq!(seqn, "R00:00:01 cmdDisp_CMD_NO_OP_STRING \"a_b\" # ok");
}

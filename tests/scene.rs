//! End-to-end tests over the fixture documents.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use vecscene::render::{render_document, trace_commands, PathDataWriter};
use vecscene::{load_document, validate_document, DrawCommand, SceneError, Shape, StyleValue};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_logo_tree() {
    let document = load_document(&fixture("logo.svg")).unwrap();

    assert_eq!(document.title.as_deref(), Some("Logo"));
    assert_eq!(document.groups.len(), 2);
    assert_eq!(document.group_count(), 3);

    let outline = &document.groups[0];
    assert_eq!(outline.id.as_deref(), Some("outline"));
    assert_eq!(outline.stroke.as_deref(), Some("#000000"));
    assert_eq!(outline.stroke_width, 2);
    assert_eq!(outline.fill.as_deref(), Some("none"));
    assert_eq!(outline.fill_rule.as_deref(), Some("evenodd"));
    assert_eq!(outline.transform_source.as_deref(), Some("translate(4,4)"));
    assert!(outline.transform.is_identity());

    let ids: Vec<Option<&str>> = outline.children.iter().map(Shape::id).collect();
    assert_eq!(ids, vec![Some("frame"), Some("mark")]);

    let empty = &document.groups[1];
    assert_eq!(empty.id.as_deref(), Some("empty"));
    assert!(empty.children.is_empty());
}

#[test]
fn test_logo_paths() {
    let document = load_document(&fixture("logo.svg")).unwrap();
    let paths = document.paths();

    let ids: Vec<Option<&str>> = paths.iter().map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, vec![Some("frame"), Some("swoosh"), None]);

    let frame = paths[0];
    assert_eq!(frame.segments.len(), 5);
    assert_eq!(frame.segments[4], DrawCommand::ClosePath);
    assert_eq!(frame.style.get("opacity"), Some(&StyleValue::Float(0.75)));
    assert_eq!(frame.style.get_str("stroke-linecap"), Some("round"));

    let swoosh = paths[1];
    assert_eq!(
        swoosh.segments,
        vec![
            DrawCommand::MoveTo {
                absolute: true,
                x: 10.0,
                y: 30.0
            },
            DrawCommand::CubicCurveTo {
                absolute: false,
                c1x: 5.0,
                c1y: -10.0,
                c2x: 15.0,
                c2y: -10.0,
                x: 20.0,
                y: 0.0
            },
            DrawCommand::ArcTo {
                absolute: false,
                rx: 5.0,
                ry: 5.0,
                x_axis_rotation: 0.0,
                large_arc_flag: true,
                sweep_flag: false,
                x: 10.0,
                y: -2.5
            },
        ]
    );

    let unnamed = paths[2];
    assert_eq!(unnamed.segments.len(), 3);
    assert!(matches!(
        unnamed.segments[1],
        DrawCommand::MoveTo { absolute: false, x, y } if x == 5.0 && y == 5.0
    ));
}

#[test]
fn test_swoosh_absolute_path_data() {
    let document = load_document(&fixture("logo.svg")).unwrap();
    let swoosh = document.paths()[1];

    let mut writer = PathDataWriter::new();
    trace_commands(&mut writer, &swoosh.segments);

    assert_eq!(writer.to_path_data(), "M10 30 C15 20 25 20 30 30 A5 5 0 1 0 40 27.5");
}

#[test]
fn test_render_whole_document() {
    let document = load_document(&fixture("logo.svg")).unwrap();

    let mut writer = PathDataWriter::new();
    render_document(&mut writer, &document);

    // frame (5) + swoosh (3) + unnamed (move, line, close)
    assert_eq!(writer.commands().len(), 11);
}

#[test]
fn test_logo_lints() {
    let document = load_document(&fixture("logo.svg")).unwrap();
    let result = validate_document(&document);

    assert_eq!(result.error_count(), 0);
    assert_eq!(result.warning_count(), 1);
    let warning = result.iter().next().unwrap();
    assert_eq!(warning.message, "group 'empty' has no children");
}

#[test]
fn test_broken_reports_element_chain() {
    let err = load_document(&fixture("broken.svg")).unwrap_err();

    match &err {
        SceneError::Element { tag, id, source } => {
            assert_eq!(tag, "g");
            assert_eq!(id.as_deref(), Some("layer"));
            assert!(matches!(
                source.as_ref(),
                SceneError::Element { tag, id, .. } if tag == "path" && id.as_deref() == Some("bad")
            ));
        }
        other => panic!("expected element error, got {other:?}"),
    }

    assert!(matches!(
        err.root_cause(),
        SceneError::UnsupportedCommand { letter: 'H' }
    ));
}

#[test]
fn test_missing_file() {
    let err = load_document(&fixture("missing.svg")).unwrap_err();
    assert!(matches!(err, SceneError::Io { .. }));
}

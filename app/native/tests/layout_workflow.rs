//! End-to-end tests for the widget layout set and configuration loading.
//!
//! These drive a dashboard through the same steps the CLI takes: load a
//! configuration, load a layout, apply edits and save it again.

use std::io::Write;

use dashgrid_lib::config::{CompactType, ConfigError, load_config_from_path, parse_config};
use dashgrid_lib::grid::{
    Breakpoint, CellMetrics, GridPosition, WidgetKind, find_overlapping_pairs,
};
use dashgrid_lib::layout::{
    GestureKind, GestureOutcome, LayoutError, Widget, WidgetLayout, evaluate_gesture,
};

fn pos(x: i32, y: i32, w: i32, h: i32) -> GridPosition { GridPosition::new(x, y, w, h) }

const CONFIG: &str = r#"{
    // Narrow test grid
    "grid": { "cols": 4, "rowHeight": 100, "gap": 10 },
    "compactType": "vertical",
    /* Column counts per breakpoint */
    "breakpoints": { "desktop": 4, "tablet": 3, "mobile": 2 }
}"#;

#[test]
fn test_config_file_drives_layout_edits() {
    let mut file = tempfile::Builder::new().suffix(".jsonc").tempfile().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let (config, path) = load_config_from_path(file.path()).unwrap();
    assert_eq!(path, file.path());
    assert_eq!(config.grid.cols, 4);

    let grid = config.grid_for_width(1200.0);
    let mut layout = WidgetLayout::new();

    let mut add = |id: &str, kind: WidgetKind, x: i32| {
        layout.add_widget(Widget::of_kind(id, kind, x, 0), &grid).unwrap()
    };

    assert_eq!(add("calendar", WidgetKind::Calendar, 0), pos(0, 0, 2, 2));
    // Requested spot is taken, so the widget is relocated next to the calendar.
    assert_eq!(add("todo", WidgetKind::TodoList, 0), pos(2, 0, 2, 2));
    // Clamped into the grid, then relocated below the first row.
    assert_eq!(add("kpi", WidgetKind::KpiMetrics, 3), pos(0, 2, 2, 2));

    assert!(find_overlapping_pairs(&layout.positions()).is_empty());
    assert!(layout.diagnose(&grid).is_clean());
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".jsonc").tempfile().unwrap();
    write!(file, r#"{{ "grid": {{ "cols": 0 }} }}"#).unwrap();

    let err = load_config_from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_breakpoint_switch_then_compact() {
    let config = parse_config(CONFIG).unwrap();
    let desktop = config.grid_for_width(1200.0);
    let mobile = config.grid.for_breakpoint(Breakpoint::Mobile, &config.breakpoints);
    assert_eq!(mobile.cols, 2);

    let mut layout = WidgetLayout::new();
    layout.add_widget(Widget::new("a", pos(0, 0, 2, 1)), &desktop).unwrap();
    layout.add_widget(Widget::new("b", pos(2, 0, 2, 1)), &desktop).unwrap();

    // Re-flowing for a narrower grid: clamp every widget, then compact. `b`
    // is clamped onto `a` and pushes it down.
    for id in ["a", "b"] {
        let position = layout.get(id).unwrap().position;
        layout.move_widget_with_push(id, position, &mobile).unwrap();
    }
    layout.compact(&mobile, CompactType::Vertical);

    assert_eq!(layout.get("b").unwrap().position, pos(0, 0, 2, 1));
    assert_eq!(layout.get("a").unwrap().position, pos(0, 1, 2, 1));
    assert!(layout.diagnose(&mobile).is_clean());
}

#[test]
fn test_rejected_move_leaves_layout_untouched() {
    let config = parse_config(CONFIG).unwrap();
    let grid = config.grid;

    let mut layout = WidgetLayout::from_widgets(vec![
        Widget::new("a", pos(0, 0, 2, 2)),
        Widget::new("b", pos(2, 0, 2, 2)),
    ])
    .unwrap();
    let before = layout.clone();

    let err = layout.move_widget("a", pos(1, 0, 2, 2), &grid).unwrap_err();
    assert!(matches!(err, LayoutError::Collision { ref id, .. } if id == "a"));
    assert_eq!(layout, before);
}

#[test]
fn test_static_widget_is_never_pushed() {
    let config = parse_config(CONFIG).unwrap();
    let grid = config.grid;

    let mut layout = WidgetLayout::from_widgets(vec![
        Widget::new("header", pos(0, 0, 4, 1)).pinned(),
        Widget::new("a", pos(0, 1, 2, 2)),
    ])
    .unwrap();

    let resolved = layout.move_widget_with_push("a", pos(0, 0, 2, 2), &grid).unwrap();

    assert!(resolved);
    assert_eq!(layout.get("header").unwrap().position, pos(0, 0, 4, 1));
    assert_eq!(layout.get("a").unwrap().position, pos(0, 1, 2, 2));
}

#[test]
fn test_drag_gesture_then_commit() {
    let config = parse_config(CONFIG).unwrap();
    let grid = config.grid.clone();
    // 4 columns of 100px with 10px gaps.
    let metrics = CellMetrics::from_container(430.0, &grid);

    let layout = WidgetLayout::from_widgets(vec![
        Widget::new("a", pos(0, 0, 1, 1)),
        Widget::new("b", pos(2, 0, 1, 1)),
    ])
    .unwrap();
    let origin = layout.get("a").unwrap().position;
    let others: Vec<GridPosition> = vec![layout.get("b").unwrap().position];

    let drag = |dx: f64| {
        evaluate_gesture(GestureKind::Move, &origin, dx, 0.0, &metrics, &others, &grid)
    };

    // Just over half a cell pitch to the right snaps one column.
    assert_eq!(drag(60.0), GestureOutcome::Valid(pos(1, 0, 1, 1)));

    // Two pitches lands on `b`.
    assert!(!drag(220.0).is_valid());
    assert_eq!(drag(220.0).position(), pos(2, 0, 1, 1));
}

#[test]
fn test_layout_json_survives_save_and_load() {
    let config = parse_config(CONFIG).unwrap();
    let mut layout = WidgetLayout::new();
    layout
        .add_widget(Widget::of_kind("tax", WidgetKind::TaxDeadline, 0, 0), &config.grid)
        .unwrap();
    layout.add_widget(Widget::new("notes", pos(2, 0, 2, 3)).pinned(), &config.grid).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    std::fs::write(&path, layout.to_json().unwrap()).unwrap();

    let loaded = WidgetLayout::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, layout);
    assert!(loaded.get("notes").unwrap().is_static);
    assert_eq!(loaded.get("tax").unwrap().kind, WidgetKind::TaxDeadline);
}

#[test]
fn test_resize_with_push_keeps_layout_clean() {
    let config = parse_config(CONFIG).unwrap();
    let grid = config.grid;

    let mut layout = WidgetLayout::from_widgets(vec![
        Widget::new("chart", pos(0, 0, 2, 1)),
        Widget::new("notes", pos(0, 1, 2, 1)),
        Widget::new("todo", pos(0, 2, 4, 1)),
    ])
    .unwrap();

    assert!(layout.resize_widget_with_push("chart", pos(0, 0, 2, 2), &grid).unwrap());

    assert_eq!(layout.get("notes").unwrap().position, pos(0, 2, 2, 1));
    assert_eq!(layout.get("todo").unwrap().position, pos(0, 3, 4, 1));
    assert!(layout.diagnose(&grid).is_clean());
}

//! Layout file commands.
//!
//! Each command reads a layout JSON file, runs one engine operation against
//! it and either prints the result or writes it back with `--write`.

use std::fs;
use std::path::Path;

use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::types::{LayoutArgs, compact_axis};
use crate::cli::output;
use crate::config::DashgridConfig;
use crate::error::DashgridError;
use crate::layout::{LayoutError, LayoutReport, WidgetLayout};

/// Maximum characters shown for a widget id in tables.
const ID_COLUMN_WIDTH: usize = 24;

// ============================================================================
// File Helpers
// ============================================================================

/// Reads and parses a layout file.
fn read_layout(path: &Path) -> Result<WidgetLayout, DashgridError> {
    let source = fs::read_to_string(path).map_err(|err| {
        DashgridError::IoError(format!("Failed to read {}: {err}", path.display()))
    })?;
    let layout = WidgetLayout::from_json(&source)?;
    tracing::debug!(path = %path.display(), widgets = layout.len(), "layout loaded");
    Ok(layout)
}

/// Writes the layout back to `path`, or prints it when `write` is false.
fn emit_layout(layout: &WidgetLayout, path: &Path, write: bool) -> Result<(), DashgridError> {
    let json = layout.to_json()?;

    if write {
        fs::write(path, format!("{json}\n")).map_err(|err| {
            DashgridError::IoError(format!("Failed to write {}: {err}", path.display()))
        })?;
        println!(
            "{} {} widgets to {}",
            "Wrote".green().bold(),
            layout.len(),
            path.display()
        );
    } else {
        println!("{json}");
    }

    Ok(())
}

fn warn_unresolved(resolved: bool) {
    if !resolved {
        eprintln!(
            "{} some collisions could not be resolved within the step limit",
            "warning:".yellow().bold()
        );
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Prints the first free spot for a new widget.
pub fn place(
    args: &LayoutArgs,
    config: &DashgridConfig,
    width: i32,
    height: i32,
    json: bool,
) -> Result<(), DashgridError> {
    let layout = read_layout(&args.file)?;
    let grid = args.grid(config);
    let position = layout.find_space(width, height, &grid);

    if json {
        output::print_highlighted_json(&serde_json::to_value(position)?);
    } else {
        println!("{} {position}", "Free space:".bold());
    }

    Ok(())
}

/// Compacts the layout along the configured (or requested) axis.
pub fn compact(
    args: &LayoutArgs,
    config: &DashgridConfig,
    horizontal: bool,
    write: bool,
) -> Result<(), DashgridError> {
    let mut layout = read_layout(&args.file)?;
    let grid = args.grid(config);
    let axis = compact_axis(horizontal, config.compact_type);

    let moved = layout.compact(&grid, axis);
    tracing::info!(moved, ?axis, "compacted layout");

    emit_layout(&layout, &args.file, write)
}

/// Reports overlapping and out-of-bounds widgets.
///
/// Fails with `CheckFailed` when any problem is found, so the exit code can
/// be used in scripts.
pub fn check(args: &LayoutArgs, config: &DashgridConfig, json: bool) -> Result<(), DashgridError> {
    let layout = read_layout(&args.file)?;
    let grid = args.grid(config);
    let report = layout.diagnose(&grid);

    if json {
        output::print_highlighted_json(&serde_json::to_value(&report)?);
    } else {
        print_check_table(&layout, &report);
    }

    if report.is_clean() {
        return Ok(());
    }

    Err(DashgridError::CheckFailed(format!(
        "{} overlapping pairs, {} widgets out of bounds",
        report.overlaps.len(),
        report.out_of_bounds.len()
    )))
}

fn print_check_table(layout: &WidgetLayout, report: &LayoutReport) {
    #[derive(Tabled)]
    struct WidgetRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Kind")]
        kind: &'static str,
        #[tabled(rename = "Position")]
        position: String,
        #[tabled(rename = "Static")]
        is_static: String,
        #[tabled(rename = "In Bounds")]
        in_bounds: String,
        #[tabled(rename = "Overlaps")]
        overlaps: String,
    }

    let rows: Vec<WidgetRow> = layout
        .widgets()
        .iter()
        .map(|widget| {
            let overlaps: Vec<&str> = report
                .overlaps
                .iter()
                .filter_map(|(a, b)| {
                    if *a == widget.id {
                        Some(b.as_str())
                    } else if *b == widget.id {
                        Some(a.as_str())
                    } else {
                        None
                    }
                })
                .collect();

            WidgetRow {
                id: output::truncate(&widget.id, ID_COLUMN_WIDTH),
                kind: widget.kind.as_str(),
                position: widget.position.to_string(),
                is_static: output::format_bool(widget.is_static),
                in_bounds: output::format_bool(!report.out_of_bounds.contains(&widget.id)),
                overlaps: if overlaps.is_empty() {
                    "-".dimmed().to_string()
                } else {
                    overlaps.join(", ").red().to_string()
                },
            }
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..5)).with(Alignment::center()))
        .to_string();

    println!("{}", format!("Widgets ({})", layout.len()).bold());
    println!("{table}");

    if report.is_clean() {
        println!("{}", "No problems found".green());
    }
}

/// Swaps the origins of two widgets.
pub fn swap(
    args: &LayoutArgs,
    config: &DashgridConfig,
    first: &str,
    second: &str,
    write: bool,
) -> Result<(), DashgridError> {
    let mut layout = read_layout(&args.file)?;
    let grid = args.grid(config);

    let resolved = layout.swap_widgets(first, second, &grid)?;
    warn_unresolved(resolved);

    emit_layout(&layout, &args.file, write)
}

/// Target of a `move` command.
#[derive(Debug, Clone, Copy)]
pub struct MoveTarget {
    pub x: i32,
    pub y: i32,
    pub push: bool,
}

/// Moves a widget, keeping its size.
///
/// Without `push` the move is rejected when it would overlap another widget
/// and the grid prevents collisions. With `push`, overlapped widgets are
/// moved down instead.
pub fn move_widget(
    args: &LayoutArgs,
    config: &DashgridConfig,
    id: &str,
    target: MoveTarget,
    write: bool,
) -> Result<(), DashgridError> {
    let mut layout = read_layout(&args.file)?;
    let grid = args.grid(config);

    let current = layout
        .get(id)
        .map(|widget| widget.position)
        .ok_or_else(|| LayoutError::UnknownWidget(id.to_string()))?;
    let position = current.with_origin(target.x, target.y);

    if target.push {
        let resolved = layout.move_widget_with_push(id, position, &grid)?;
        warn_unresolved(resolved);
    } else {
        layout.move_widget(id, position, &grid)?;
    }

    emit_layout(&layout, &args.file, write)
}

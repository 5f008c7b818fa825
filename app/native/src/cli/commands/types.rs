//! Shared types for CLI commands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::{CompactType, DashgridConfig, GridConfig};
use crate::grid::Breakpoint;

/// Breakpoint selector for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliBreakpoint {
    /// Wide screens (9 columns by default).
    Desktop,
    /// Medium screens (6 columns by default).
    Tablet,
    /// Narrow screens (2 columns by default).
    Mobile,
}

impl From<CliBreakpoint> for Breakpoint {
    fn from(value: CliBreakpoint) -> Self {
        match value {
            CliBreakpoint::Desktop => Self::Desktop,
            CliBreakpoint::Tablet => Self::Tablet,
            CliBreakpoint::Mobile => Self::Mobile,
        }
    }
}

/// Arguments shared by every command that operates on a layout file.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Path to the layout JSON file.
    #[arg(long, short, value_name = "LAYOUT")]
    pub file: PathBuf,

    /// Breakpoint whose column count is used.
    ///
    /// Without this flag the grid section of the configuration is used as-is.
    #[arg(long, short, value_enum)]
    pub breakpoint: Option<CliBreakpoint>,
}

impl LayoutArgs {
    /// Resolves the grid for this command from the loaded configuration.
    #[must_use]
    pub fn grid(&self, config: &DashgridConfig) -> GridConfig {
        self.breakpoint.map_or_else(
            || config.grid.clone(),
            |bp| config.grid.for_breakpoint(bp.into(), &config.breakpoints),
        )
    }
}

/// Picks the compaction axis, letting `--horizontal` override the config.
#[must_use]
pub const fn compact_axis(horizontal: bool, configured: CompactType) -> CompactType {
    if horizontal { CompactType::Horizontal } else { configured }
}

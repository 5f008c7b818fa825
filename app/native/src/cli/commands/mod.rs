//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! submodules:
//!
//! - `layout` - Commands operating on a layout file
//! - `types` - Shared types used across commands

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config::{self, DashgridConfig};
use crate::error::DashgridError;
use crate::schema;

pub mod layout;
pub mod types;

pub use types::{CliBreakpoint, LayoutArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dashgrid CLI - Grid layout engine for dashboard widgets.
#[derive(Parser, Debug)]
#[command(name = "dashgrid")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Find a free spot for a new widget.
    ///
    /// Scans the grid row by row and prints the first position where a
    /// widget of the given size fits without overlapping anything.
    #[command(after_long_help = r#"Examples:
  dashgrid place -f layout.json --width 2 --height 2
  dashgrid place -f layout.json --width 3 --height 1 --breakpoint tablet --json"#)]
    Place {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Widget width in columns.
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
        width: i32,

        /// Widget height in rows.
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
        height: i32,

        /// Output in JSON format.
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Pull every widget toward the top (or left) of the grid.
    ///
    /// Widget order is preserved. Prints the compacted layout, or writes it
    /// back to the file with --write.
    Compact {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Compact toward the left edge instead of the top.
        #[arg(long)]
        horizontal: bool,

        /// Write the result back to the layout file.
        #[arg(long, short)]
        write: bool,
    },

    /// Report overlapping and out-of-bounds widgets.
    ///
    /// Exits with a non-zero status when any problem is found.
    Check {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Output in JSON format instead of table format.
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Move a widget to a new origin, keeping its size.
    Move {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Id of the widget to move.
        id: String,

        /// Target column.
        #[arg(long, allow_negative_numbers = true)]
        x: i32,

        /// Target row.
        #[arg(long, allow_negative_numbers = true)]
        y: i32,

        /// Push overlapped widgets down instead of rejecting the move.
        #[arg(long, short)]
        push: bool,

        /// Write the result back to the layout file.
        #[arg(long, short)]
        write: bool,
    },

    /// Exchange the positions of two widgets.
    Swap {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Id of the first widget.
        first: String,

        /// Id of the second widget.
        second: String,

        /// Write the result back to the layout file.
        #[arg(long, short)]
        write: bool,
    },

    /// Output Dashgrid configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Dashgrid configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(dashgrid completions --shell zsh)"
    ///   dashgrid completions --shell fish > ~/.config/fish/completions/dashgrid.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    /// Loads the configuration for this invocation.
    ///
    /// An explicit `--config` file must exist and be valid. Without one, the
    /// default search paths are tried and defaults are used as a fallback.
    fn load_config(&self) -> Result<DashgridConfig, DashgridError> {
        match self.config_path() {
            Some(path) => {
                if !path.exists() {
                    return Err(DashgridError::ConfigError(format!(
                        "Configuration file not found: {}",
                        path.display()
                    )));
                }
                let (config, _) = config::load_config_from_path(&path)?;
                Ok(config)
            }
            None => Ok(config::load_or_default(None).0),
        }
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), DashgridError> {
        match &self.command {
            Commands::Place { layout: args, width, height, json } => {
                let config = self.load_config()?;
                layout::place(args, &config, *width, *height, *json)
            }

            Commands::Compact { layout: args, horizontal, write } => {
                let config = self.load_config()?;
                layout::compact(args, &config, *horizontal, *write)
            }

            Commands::Check { layout: args, json } => {
                let config = self.load_config()?;
                layout::check(args, &config, *json)
            }

            Commands::Move { layout: args, id, x, y, push, write } => {
                let config = self.load_config()?;
                let target = layout::MoveTarget { x: *x, y: *y, push: *push };
                layout::move_widget(args, &config, id, target, *write)
            }

            Commands::Swap { layout: args, first, second, write } => {
                let config = self.load_config()?;
                layout::swap(args, &config, first, second, *write)
            }

            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "dashgrid", &mut io::stdout());
    }
}

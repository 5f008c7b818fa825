#![allow(clippy::multiple_crate_versions)]

//! Dashgrid - grid layout engine for dashboard widgets.
//!
//! This binary is a thin wrapper around the library CLI. Every subcommand
//! reads a layout file, runs one engine operation and prints or writes the
//! result.

fn main() {
    if let Err(err) = dashgrid_lib::cli::run() {
        eprintln!("dashgrid: {err}");
        std::process::exit(1);
    }
}

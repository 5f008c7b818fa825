//! Dashgrid - a pure grid layout engine for dashboard widgets.
//!
//! The library is split into three layers:
//!
//! - [`grid`]: stateless geometric primitives (collision, bounds, free space,
//!   compaction, pixel conversion)
//! - [`layout`]: a widget set keyed by id that applies those primitives
//! - [`config`]: grid configuration loaded from JSONC files
//!
//! The [`cli`] module exposes the same operations against layout files.

pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod schema;

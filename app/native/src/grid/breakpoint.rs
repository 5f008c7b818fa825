//! Responsive breakpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum container width, in pixels, for the desktop breakpoint.
pub const DESKTOP_MIN_WIDTH: f64 = 1100.0;

/// Minimum container width, in pixels, for the tablet breakpoint.
pub const TABLET_MIN_WIDTH: f64 = 768.0;

/// Container width class. Each breakpoint has its own column count and its
/// own stored layout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    /// All breakpoints, widest first.
    pub const ALL: [Self; 3] = [Self::Desktop, Self::Tablet, Self::Mobile];

    /// Picks the breakpoint for a container width in pixels.
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }

    /// Built-in column count for this breakpoint.
    #[must_use]
    pub const fn default_cols(self) -> u32 {
        match self {
            Self::Desktop => 9,
            Self::Tablet => 6,
            Self::Mobile => 2,
        }
    }

    /// Lowercase name, as used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

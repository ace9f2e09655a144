// IconGen - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// The icon set and palette are fixed here and nowhere else.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "IconGen";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Palette
// =============================================================================

/// Canvas background and cut-out colour, `#4CAF50`.
pub const BACKGROUND_COLOR: [u8; 3] = [0x4C, 0xAF, 0x50];

/// Ring colour (white).
pub const FOREGROUND_COLOR: [u8; 3] = [0xFF, 0xFF, 0xFF];

// =============================================================================
// Geometry
// =============================================================================

/// Outer disc inset is `size / MARGIN_DIVISOR` pixels on every side.
pub const MARGIN_DIVISOR: u32 = 6;

/// Ring thickness is `size / RING_THICKNESS_DIVISOR` pixels; the inner disc
/// is inset by `margin + thickness`.
pub const RING_THICKNESS_DIVISOR: u32 = 8;

/// Hard upper bound on the side length of a single icon.
///
/// A 8192 x 8192 RGB canvas is 192 MiB, which is already far beyond any
/// real icon. Larger requests are rejected before allocation.
pub const MAX_ICON_SIZE: u32 = 8_192;

// =============================================================================
// Output
// =============================================================================

/// Directory the icons are written to when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// The fixed icon set, in generation order: (file name, side length in px).
pub const ICON_SET: &[(&str, u32)] = &[
    ("icon16.png", 16),
    ("icon48.png", 48),
    ("icon128.png", 128),
];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width, a portrait phone-like column.
pub const DEFAULT_WINDOW_WIDTH: u32 = 480;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 860;

/// Minimum window width; below this the header and cards stop fitting.
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Largest window dimension accepted from the config file.
pub const MAX_WINDOW_DIMENSION: u32 = 8192;

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window dimensions
//! - **Logging**: Default log filter

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 480;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 240;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default log filter when neither `RUST_LOG` nor the config sets one.
///
/// Translation fallbacks are logged at `debug`, so they stay quiet unless
/// asked for.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};

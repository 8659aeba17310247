// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_convert
//!
//! Convert color text between hex notation and decimal RGB notation.
//!
//! | Input pattern      | Example            | Output              |
//! | ------------------ | ------------------ | ------------------- |
//! | `#RGB`             | `#1AF`             | `rgb(17, 170, 255)` |
//! | `#RRGGBB`          | `#1a2b3c`          | `rgb(26, 43, 60)`   |
//! | `rgb(r, g, b)`     | `rgb(26, 43, 60)`  | `#1A2B3C`           |
//! | bare triplet       | `21, 31, 41`       | `#151F29`           |
//!
//! The formats are tried in a fixed order (hex, then `rgb(..)`, then a bare triplet) and
//! the first one that matches wins. Input that matches none of them simply produces no
//! result.
//!
//! ```
//! use r3bl_color_convert::convert;
//!
//! let result = convert("#1AF").unwrap();
//! assert_eq!(result.output, "rgb(17, 170, 255)");
//!
//! let result = convert("21，31，41").unwrap();
//! assert_eq!(result.output, "#151F29");
//!
//! assert!(convert("#12").is_none());
//! ```
//!
//! The core is free of any UI or clipboard dependency. Hosts hand a
//! [`ConversionResult`] to a [`ClipboardService`] to copy it, see
//! [`copy_result_to_clipboard`].

// Enable strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Connect to source file.
pub mod clipboard;
pub mod color;
pub mod common;
pub mod decl_macros;
pub mod log;

// Re-export.
pub use clipboard::*;
pub use color::*;
pub use common::*;

/// Log every dispatch decision made by [`convert`]. Nothing is written unless a
/// subscriber is installed, see [`log::try_initialize_logging_global`].
pub const DEBUG_COLOR_CONVERT: bool = true;

/// Flip this to `true` to log every copy to the clipboard.
pub const DEBUG_COLOR_CONVERT_COPY_PASTE: bool = true;

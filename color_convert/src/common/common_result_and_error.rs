// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`ColorConvertError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Errors that a host of the converter may choose to surface.
///
/// The parsers themselves never produce these. A malformed candidate just doesn't match
/// and the next format is tried. Only [`crate::try_convert`] turns "nothing matched" into
/// [`ColorConvertError::NoMatch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ColorConvertError {
    #[error("No color format recognized in {input:?}")]
    #[diagnostic(
        code(r3bl_color_convert::no_match),
        help("Try #RGB, #RRGGBB, rgb(r, g, b), or three numbers like 21, 31, 41")
    )]
    NoMatch { input: String },

    #[error("Could not copy to the clipboard: {message}")]
    #[diagnostic(code(r3bl_color_convert::clipboard))]
    Clipboard { message: String },
}

impl ColorConvertError {
    pub fn new_no_match_result<T>(input: &str) -> CommonResult<T> {
        Err(miette::Report::new(ColorConvertError::NoMatch {
            input: input.to_string(),
        }))
    }
}

// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

use crate::{ColorConvertError, CommonResult, ConversionResult,
            DEBUG_COLOR_CONVERT_COPY_PASTE};

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Where the copy text of a [`ConversionResult`] goes. Copy only, nothing is ever read
/// back. Implemented by [`crate::SystemClipboard`] and by
/// [`crate::clipboard_test_fixtures::TestClipboard`] for dependency injection. The
/// converter itself never touches a clipboard.
pub trait ClipboardService {
    /// # Errors
    ///
    /// Returns an error if the content could not be placed on the clipboard.
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()>;
}

/// Put the [`ConversionResult::copy_text`] on the clipboard.
///
/// # Errors
///
/// Returns [`ColorConvertError::Clipboard`] if the clipboard service fails.
pub fn copy_result_to_clipboard(
    result: &ConversionResult,
    clipboard_service_provider: &mut impl ClipboardService,
) -> CommonResult<()> {
    copy_results_to_clipboard(&[result], clipboard_service_provider)
}

/// Put the [`ConversionResult::copy_text`] of each result on the clipboard, one per
/// line. The clipboard is not touched if `results` is empty.
///
/// # Errors
///
/// Returns [`ColorConvertError::Clipboard`] if the clipboard service fails.
pub fn copy_results_to_clipboard(
    results: &[&ConversionResult],
    clipboard_service_provider: &mut impl ClipboardService,
) -> CommonResult<()> {
    if results.is_empty() {
        return Ok(());
    }

    let content = results
        .iter()
        .map(|it| it.copy_text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    if let Err(error) =
        clipboard_service_provider.try_to_put_content_into_clipboard(content.clone())
    {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "📋📋📋 Failed to copy the converted color to clipboard",
            copied = %content,
            error = %error,
        );
        return Err(miette::Report::new(ColorConvertError::Clipboard {
            message: error.to_string(),
        }));
    }

    DEBUG_COLOR_CONVERT_COPY_PASTE.then(|| {
        tracing::debug!(
            message = "📋📋📋 Converted color was copied to clipboard",
            count = results.len(),
            copied = %content,
        );
    });

    Ok(())
}

// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

use super::{ClipboardResult, ClipboardService};
use crate::throws;

/// The OS clipboard. On X11 the content is kept alive by a forked process, so it is
/// still there after `hexrgb` exits. A new context is opened for every copy, since the
/// binary copies at most once per run.
#[derive(Debug)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        throws!({
            ClipboardContext::new()?.set_contents(content)?;
        })
    }
}

/// Stand-ins for [`SystemClipboard`] that work w/out a display server.
pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    /// Holds whatever was copied last, so a test can inspect [`TestClipboard::content`].
    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            content: String,
        ) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::assert_eq2;

        #[test]
        fn test_last_copy_wins() {
            let mut clipboard = TestClipboard::default();
            clipboard
                .try_to_put_content_into_clipboard("#000000".to_string())
                .unwrap();
            clipboard
                .try_to_put_content_into_clipboard("rgb(1, 2, 3)".to_string())
                .unwrap();
            assert_eq2!(clipboard.content, "rgb(1, 2, 3)");
        }
    }
}

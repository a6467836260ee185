// src/clipboard/mod.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard error: {0}")]
    Backend(#[from] arboard::Error),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard. It is opened on first use, so a session without a
/// display only fails when something is actually copied.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard.set_text(text.to_owned())?;
        }
        Ok(())
    }
}

/// Copies `text`, logging a failure instead of returning it.
pub fn copy_text(clipboard: &mut dyn Clipboard, text: &str) -> bool {
    match clipboard.set_text(text) {
        Ok(()) => {
            log::info!("Copied {} characters to the clipboard", text.chars().count());
            true
        }
        Err(e) => {
            log::warn!("Failed to copy to clipboard: {}", e);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records what was copied, or fails every call.
    #[derive(Default)]
    pub(crate) struct FakeClipboard {
        pub contents: Option<String>,
        pub broken: bool,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.broken {
                return Err(ClipboardError::Backend(arboard::Error::ClipboardNotSupported));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_text_stores_contents() {
        let mut clipboard = FakeClipboard::default();
        assert!(copy_text(&mut clipboard, "Abcdefgh123!"));
        assert_eq!(clipboard.contents.as_deref(), Some("Abcdefgh123!"));
    }

    #[test]
    fn test_copy_failure_is_not_fatal() {
        let mut clipboard = FakeClipboard { broken: true, ..Default::default() };
        assert!(!copy_text(&mut clipboard, "Abcdefgh123!"));
        assert_eq!(clipboard.contents, None);
    }
}

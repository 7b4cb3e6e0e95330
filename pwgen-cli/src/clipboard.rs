use std::io::Write;

use log::{info, warn};

pub static COPIED_MESSAGE: &str = "Copied to clipboard!";
pub static MANUAL_COPY_MESSAGE: &str =
    "Could not automatically copy. Please copy the text manually.";

#[derive(Debug, PartialEq, Eq)]
pub enum ClipboardError {
    Unavailable(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Unavailable(msg) => {
                f.write_fmt(std::format_args!("Clipboard unavailable: {}", msg))
            }
        };
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(value: arboard::Error) -> Self {
        Self::Unavailable(value.to_string())
    }
}

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, opened on first use and kept open so the
/// contents stay owned by this process while it runs.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }

        if let Some(clipboard) = self.inner.as_mut() {
            clipboard.set_text(text)?;
        }

        Ok(())
    }
}

/// Copies `text`, writing either a confirmation or the manual copy
/// instruction to `out`. A clipboard failure is never an error here.
pub fn copy_or_warn<C, W>(clipboard: &mut C, text: &str, out: &mut W) -> std::io::Result<bool>
where
    C: ClipboardSink + ?Sized,
    W: Write + ?Sized,
{
    match clipboard.set_text(text) {
        Ok(()) => {
            info!("copied password to clipboard");
            writeln!(out, "{}", COPIED_MESSAGE)?;
            Ok(true)
        }
        Err(error) => {
            warn!("{}", error);
            writeln!(out, "{}", MANUAL_COPY_MESSAGE)?;
            Ok(false)
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::{copy_or_warn, ClipboardError, ClipboardSink, COPIED_MESSAGE, MANUAL_COPY_MESSAGE};

    #[derive(Default)]
    pub struct FakeClipboard {
        pub contents: Option<String>,
        pub broken: bool,
    }

    impl ClipboardSink for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.broken {
                return Err(ClipboardError::Unavailable("no display".to_string()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn copy_success() {
        let mut clipboard = FakeClipboard::default();
        let mut out = Vec::new();

        let copied = copy_or_warn(&mut clipboard, "hunter42!A", &mut out).unwrap();
        assert!(copied);
        assert_eq!(clipboard.contents.as_deref(), Some("hunter42!A"));
        assert_eq!(String::from_utf8(out).unwrap().trim(), COPIED_MESSAGE);
    }

    #[test]
    fn copy_unavailable_degrades() {
        let mut clipboard = FakeClipboard {
            contents: None,
            broken: true,
        };
        let mut out = Vec::new();

        let copied = copy_or_warn(&mut clipboard, "hunter42!A", &mut out).unwrap();
        assert!(!copied);
        assert!(clipboard.contents.is_none());
        assert_eq!(String::from_utf8(out).unwrap().trim(), MANUAL_COPY_MESSAGE);
    }
}

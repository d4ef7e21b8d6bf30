//! Clipboard and notification collaborators, and the tab-separated clipboard format.

use std::sync::{Arc, Mutex, RwLock};

use serde::Serialize;

pub trait Clipboard: Send + Sync {
    /// Returns `false` when the text could not be written.
    fn write_text(&self, text: &str) -> bool;
    fn read_text(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<T: Clipboard + ?Sized> Clipboard for Arc<T> {
    fn write_text(&self, text: &str) -> bool {
        (**self).write_text(text)
    }

    fn read_text(&self) -> Option<String> {
        (**self).read_text()
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Process-local clipboard. `unavailable()` builds one that fails every operation.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: RwLock<Option<String>>,
    available: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            text: RwLock::new(None),
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> bool {
        if !self.available {
            return false;
        }
        match self.text.write() {
            Ok(mut slot) => {
                *slot = Some(text.to_string());
                true
            }
            Err(_) => false,
        }
    }

    fn read_text(&self) -> Option<String> {
        if !self.available {
            return None;
        }
        self.text.read().ok()?.clone()
    }
}

/// Records notifications instead of showing them.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    received: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut received) = self.received.lock() {
            received.push(notification);
        }
    }
}

/// Join rows as tab-separated text, one line per row without a trailing newline.
///
/// Fields are written as is: there is no quoting, so a field holding a tab or a newline
/// does not survive a round trip.
pub fn to_tsv(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split clipboard text into rows of fields on newlines and tabs.
///
/// `\r\n` line endings and one trailing line break are accepted. Quotes carry no meaning.
pub fn parse_tsv(text: &str) -> Vec<Vec<String>> {
    let text = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            line.split('\t').map(str::to_string).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_tsv_layout() {
        let rows = grid(&[&["a", "b"], &["", "c"]]);
        assert_eq!(to_tsv(&rows), "a\tb\n\tc");
        assert_eq!(parse_tsv("a\tb\n\tc"), rows);
        assert_eq!(parse_tsv("a\tb\r\n\tc\r\n"), rows);
        assert!(parse_tsv("").is_empty());
    }

    #[test]
    fn test_tsv_keeps_blank_rows() {
        let rows = grid(&[&["a"], &[""], &["c"]]);
        assert_eq!(to_tsv(&rows), "a\n\nc");
        assert_eq!(parse_tsv("a\n\nc\n"), rows);
    }

    #[test]
    fn test_tsv_quotes_are_plain_text() {
        let rows = grid(&[&["say \"hi\"", "x"]]);
        assert_eq!(to_tsv(&rows), "say \"hi\"\tx");
        assert_eq!(parse_tsv("say \"hi\"\tx"), rows);

        assert_eq!(
            parse_tsv("\"abc\tdef\nghi\tjkl"),
            grid(&[&["\"abc", "def"], &["ghi", "jkl"]])
        );
        assert_eq!(
            parse_tsv("\"quoted\" text\tz"),
            grid(&[&["\"quoted\" text", "z"]])
        );
    }

    #[test]
    fn test_unavailable_clipboard() {
        let clipboard = MemoryClipboard::unavailable();
        assert!(!clipboard.write_text("x"));
        assert_eq!(clipboard.read_text(), None);

        let clipboard = MemoryClipboard::new();
        assert!(clipboard.write_text("x"));
        assert_eq!(clipboard.read_text().as_deref(), Some("x"));
    }
}

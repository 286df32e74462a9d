//! Utility functions for the interactive UI

use super::messages::MessageType;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthChar;

/// Get style for message type
pub fn get_message_style(message_type: MessageType) -> Style {
    match message_type {
        MessageType::Info => Style::default().fg(Color::Cyan),
        MessageType::Success => Style::default().fg(Color::Green),
        MessageType::Warning => Style::default().fg(Color::Yellow),
        MessageType::Error => Style::default().fg(Color::Red),
    }
}

/// Truncate a string to a display width, appending "..." when it is cut
pub fn truncate_str(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut fits = true;
    let mut out = String::new();

    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            fits = false;
            break;
        }
        width += w;
        out.push(c);
    }

    if fits {
        return out;
    }
    if max_width <= 3 {
        return "...".to_string();
    }

    // Re-truncate leaving room for the ellipsis.
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 3 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("very long string", 10), "very lo...");
        assert_eq!(truncate_str("exact", 5), "exact");
        assert_eq!(truncate_str("tiny", 2), "...");
    }

    #[test]
    fn test_truncate_counts_display_width() {
        // Wide characters count double.
        assert_eq!(truncate_str("日本語テスト", 6), "日...");
        assert_eq!(truncate_str("日本語", 6), "日本語");
    }
}

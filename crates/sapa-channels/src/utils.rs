//! Shared utilities for channel implementations.

/// Split a long message into chunks that respect a platform's size limit (bytes).
///
/// Slice boundaries always land on UTF-8 char boundaries, and a newline
/// boundary inside the window is preferred.
pub fn split_message(text: &str, max_len: usize) -> Vec<&str> {
    if text.len() <= max_len {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let end = floor_char_boundary(text, (start + max_len).min(text.len()));
        // A single char wider than `max_len` still has to go somewhere.
        let end = if end <= start {
            start + text[start..].chars().next().map_or(1, char::len_utf8)
        } else {
            end
        };
        let break_at = if end < text.len() {
            text[start..end]
                .rfind('\n')
                .map(|i| start + i + 1)
                .unwrap_or(end)
        } else {
            end
        };
        chunks.push(&text[start..break_at]);
        start = break_at;
    }

    chunks
}

/// Largest char boundary `<= index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Truncate to at most `max_chars` characters, appending `...` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

//! Display-width aware text helpers for header labels and content bodies.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|&ch| {
            used += char_width(ch);
            used <= budget
        })
        .collect();
    out.push('…');
    out
}

/// Word-wrap `s` into lines no wider than `max_width`.
///
/// Runs of whitespace collapse to single spaces, explicit newlines are kept,
/// and words wider than a line are split by character. A zero width yields
/// no lines at all.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in s.split('\n') {
        let mut line = String::new();
        let mut width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let mut pieces = wrap_chars(word, max_width);
                // Last piece continues the current line.
                line = pieces.pop().unwrap_or_default();
                width = display_width(&line);
                lines.extend(pieces);
                continue;
            }

            let gap = usize::from(!line.is_empty());
            if width + gap + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                width = 0;
            } else if gap == 1 {
                line.push(' ');
                width += 1;
            }
            line.push_str(word);
            width += word_width;
        }

        if !line.is_empty() || paragraph.trim().is_empty() {
            lines.push(line);
        }
    }

    // Trailing blank lines from indentation-only source lines carry nothing.
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Split `s` into chunks no wider than `max_width`, ignoring word boundaries.
pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let w = char_width(ch);
        if w > 0 && width + w > max_width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            width = 0;
        }
        line.push(ch);
        width += w;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

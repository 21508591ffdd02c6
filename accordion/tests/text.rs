use accordion::text::{display_width, truncate_to_width, wrap_chars, wrap_words};
use accordion::Content;

// ============================================================================
// Width
// ============================================================================

#[test]
fn test_display_width_counts_wide_chars_twice() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("아이템"), 6);
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 0), "");
    assert_eq!(truncate_to_width("아이템", 4), "아…");
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn test_wrap_words_basic() {
    assert_eq!(wrap_words("hello world", 5), vec!["hello", "world"]);
    assert_eq!(wrap_words("hello world", 11), vec!["hello world"]);
}

#[test]
fn test_wrap_words_collapses_indentation() {
    let body = "first line\n    indented second line\n        ";
    assert_eq!(
        wrap_words(body, 40),
        vec!["first line", "indented second line"]
    );
}

#[test]
fn test_wrap_words_keeps_blank_lines_between_paragraphs() {
    assert_eq!(wrap_words("a\n\nb", 10), vec!["a", "", "b"]);
}

#[test]
fn test_wrap_words_breaks_long_words() {
    assert_eq!(wrap_words("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
}

#[test]
fn test_wrap_zero_width() {
    assert!(wrap_words("anything", 0).is_empty());
    assert!(wrap_chars("anything", 0).is_empty());
}

#[test]
fn test_wrap_chars_respects_wide_chars() {
    assert_eq!(wrap_chars("아이템", 4), vec!["아이", "템"]);
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_content_height_follows_width() {
    let content = Content::new("one two three four");
    assert_eq!(content.height(100), 1);
    assert_eq!(content.height(13), 2);
    assert_eq!(content.height(0), 0);
    assert_eq!(Content::new("").height(10), 0);
}

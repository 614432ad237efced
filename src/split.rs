//! Head/tail splitting of the source text.
//!
//! The split is character based (Unicode scalar values). Grapheme clusters
//! such as emoji sequences or combining marks can end up on both sides.

/// A text split into a truncatable head and a tail that is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailSplit<'a> {
    pub head: &'a str,
    pub tail: &'a str,
}

impl<'a> TailSplit<'a> {
    /// Splits `text` so the tail holds its last `tail_length` characters.
    ///
    /// A `tail_length` of zero yields an empty tail; a `tail_length` at or
    /// past the character count yields an empty head.
    pub fn new(text: &'a str, tail_length: usize) -> Self {
        let at = tail_start(text, tail_length);
        let (head, tail) = text.split_at(at);
        Self { head, tail }
    }

    /// Returns true if there is nothing to truncate.
    pub fn head_is_empty(&self) -> bool {
        self.head.is_empty()
    }
}

/// Byte offset where the last `tail_length` characters of `text` begin.
pub fn tail_start(text: &str, tail_length: usize) -> usize {
    if tail_length == 0 {
        return text.len();
    }

    text.char_indices()
        .rev()
        .nth(tail_length - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_example() {
        let split = TailSplit::new("I don't love ellipsis", 13);
        assert_eq!(split.head, "I don't ");
        assert_eq!(split.tail, "love ellipsis");
    }

    #[test]
    fn test_zero_tail_leaves_everything_in_head() {
        let split = TailSplit::new("abcdef", 0);
        assert_eq!(split.head, "abcdef");
        assert_eq!(split.tail, "");
    }

    #[test]
    fn test_tail_longer_than_text() {
        let split = TailSplit::new("abc", 3);
        assert!(split.head_is_empty());
        assert_eq!(split.tail, "abc");

        let split = TailSplit::new("abc", 100);
        assert!(split.head_is_empty());
        assert_eq!(split.tail, "abc");
    }

    #[test]
    fn test_empty_text() {
        let split = TailSplit::new("", 5);
        assert_eq!(split.head, "");
        assert_eq!(split.tail, "");
    }

    #[test]
    fn test_multibyte_characters() {
        // Counts chars, not bytes
        let split = TailSplit::new("größe.txt", 5);
        assert_eq!(split.head, "größ");
        assert_eq!(split.tail, "e.txt");

        let split = TailSplit::new("日本語テキスト", 2);
        assert_eq!(split.head, "日本語テキ");
        assert_eq!(split.tail, "スト");
    }

    #[test]
    fn test_head_plus_tail_is_text() {
        let text = "The text-overflow property specifies how overflowed content is signaled.";
        for tail_length in 0..=text.chars().count() + 2 {
            let split = TailSplit::new(text, tail_length);
            assert_eq!(format!("{}{}", split.head, split.tail), text);
            assert_eq!(split.tail.chars().count(), tail_length.min(text.chars().count()));
        }
    }
}

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchInputState {
    pub text: String,
    /// Cursor position in chars, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl UiState for SearchInputState {}

impl SearchInputState {
    /// Text before and after the cursor, for rendering.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(byte_offset(&self.text, self.cursor))
    }
}

/// Byte offset of the char at `index`, or `text.len()` past the end.
pub(super) fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

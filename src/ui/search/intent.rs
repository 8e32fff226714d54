use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInputIntent {
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    MoveLeft,
    MoveRight,
    Home,
    End,
    Clear,
}

impl Intent for SearchInputIntent {}

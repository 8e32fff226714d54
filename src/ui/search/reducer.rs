use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchInputIntent;
use crate::ui::search::state::{byte_offset, SearchInputState};

pub struct SearchInputReducer;

impl Reducer for SearchInputReducer {
    type State = SearchInputState;
    type Intent = SearchInputIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let SearchInputState { mut text, cursor } = state;
        let len = text.chars().count();
        let cursor = cursor.min(len);

        match intent {
            SearchInputIntent::Insert(ch) => {
                text.insert(byte_offset(&text, cursor), ch);
                SearchInputState {
                    text,
                    cursor: cursor + 1,
                }
            }
            SearchInputIntent::Backspace if cursor > 0 => {
                text.remove(byte_offset(&text, cursor - 1));
                SearchInputState {
                    text,
                    cursor: cursor - 1,
                }
            }
            SearchInputIntent::Delete if cursor < len => {
                text.remove(byte_offset(&text, cursor));
                SearchInputState { text, cursor }
            }
            SearchInputIntent::Backspace | SearchInputIntent::Delete => {
                SearchInputState { text, cursor }
            }
            SearchInputIntent::MoveLeft => SearchInputState {
                text,
                cursor: cursor.saturating_sub(1),
            },
            SearchInputIntent::MoveRight => SearchInputState {
                text,
                cursor: (cursor + 1).min(len),
            },
            SearchInputIntent::Home => SearchInputState { text, cursor: 0 },
            SearchInputIntent::End => SearchInputState { text, cursor: len },
            SearchInputIntent::Clear => {
                text.clear();
                SearchInputState { text, cursor: 0 }
            }
        }
    }
}

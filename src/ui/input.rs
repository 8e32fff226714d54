use crate::ui::app::App;
use crate::ui::search::SearchInputIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: isize = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.on_search_input(SearchInputIntent::Clear);
        return;
    }

    match key.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE),
        KeyCode::PageDown => app.move_selection(PAGE),
        KeyCode::Left => app.on_search_input(SearchInputIntent::MoveLeft),
        KeyCode::Right => app.on_search_input(SearchInputIntent::MoveRight),
        KeyCode::Home => app.on_search_input(SearchInputIntent::Home),
        KeyCode::End => app.on_search_input(SearchInputIntent::End),
        KeyCode::Backspace => app.on_search_input(SearchInputIntent::Backspace),
        KeyCode::Delete => app.on_search_input(SearchInputIntent::Delete),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.on_search_input(SearchInputIntent::Insert(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

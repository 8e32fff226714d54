mod common;

use common::{coordinator, ms, orders, settle, Call, Reply, ScriptedSource};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use order_search::config::ResultPolicy;
use order_search::model::LoadingState;
use order_search::ui::app::App;
use order_search::ui::input::handle_key;
use order_search::ui::mvi::Reducer;
use order_search::ui::search::{SearchInputIntent, SearchInputReducer, SearchInputState};

fn typed(text: &str) -> SearchInputState {
    SearchInputReducer::reduce_all(
        SearchInputState::default(),
        text.chars().map(SearchInputIntent::Insert),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn insert_appends_and_moves_cursor() {
    let state = typed("abc");
    assert_eq!(state.text, "abc");
    assert_eq!(state.cursor, 3);
}

#[test]
fn insert_in_the_middle() {
    let state = SearchInputReducer::reduce(typed("ac"), SearchInputIntent::MoveLeft);
    let state = SearchInputReducer::reduce(state, SearchInputIntent::Insert('b'));
    assert_eq!(state.text, "abc");
    assert_eq!(state.cursor, 2);
}

#[test]
fn backspace_at_start_is_noop() {
    let state = SearchInputReducer::reduce(typed("ab"), SearchInputIntent::Home);
    let state = SearchInputReducer::reduce(state, SearchInputIntent::Backspace);
    assert_eq!(state.text, "ab");
    assert_eq!(state.cursor, 0);
}

#[test]
fn delete_removes_char_under_cursor() {
    let state = SearchInputReducer::reduce(typed("abc"), SearchInputIntent::Home);
    let state = SearchInputReducer::reduce(state, SearchInputIntent::Delete);
    assert_eq!(state.text, "bc");
    assert_eq!(state.cursor, 0);
}

#[test]
fn delete_at_end_is_noop() {
    let state = SearchInputReducer::reduce(typed("abc"), SearchInputIntent::Delete);
    assert_eq!(state.text, "abc");
}

#[test]
fn multibyte_text_is_edited_by_char() {
    let state = typed("héé");
    let state = SearchInputReducer::reduce(state, SearchInputIntent::Backspace);
    assert_eq!(state.text, "hé");
    assert_eq!(state.cursor, 2);
    let state = SearchInputReducer::reduce(state, SearchInputIntent::MoveLeft);
    assert_eq!(state.split_at_cursor(), ("h", "é"));
}

#[test]
fn cursor_movement_is_clamped() {
    let state = SearchInputReducer::reduce(typed("ab"), SearchInputIntent::MoveRight);
    assert_eq!(state.cursor, 2);
    let state = SearchInputReducer::reduce_all(
        state,
        [SearchInputIntent::Home, SearchInputIntent::MoveLeft],
    );
    assert_eq!(state.cursor, 0);
    let state = SearchInputReducer::reduce(state, SearchInputIntent::End);
    assert_eq!(state.cursor, 2);
}

#[test]
fn clear_empties_text() {
    let state = SearchInputReducer::reduce(typed("abc"), SearchInputIntent::Clear);
    assert_eq!(state, SearchInputState::default());
}

#[tokio::test(start_paused = true)]
async fn typing_forwards_only_text_changes() {
    let source = ScriptedSource::new();
    let mut app = App::new(coordinator(&source, ResultPolicy::LastWriteWins));

    app.on_search_input(SearchInputIntent::Insert('a'));
    app.on_search_input(SearchInputIntent::MoveLeft);
    settle(ms(600)).await;
    assert_eq!(source.calls(), vec![Call::Search("a".to_string())]);

    // Cursor movement alone must not restart the search.
    app.on_search_input(SearchInputIntent::Home);
    settle(ms(600)).await;
    assert_eq!(source.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn clearing_the_query_reloads_all_orders() {
    let source = ScriptedSource::new();
    source.on_all(Reply::ok(orders(&[1, 2])));
    let mut app = App::new(coordinator(&source, ResultPolicy::LastWriteWins));

    app.on_search_input(SearchInputIntent::Insert('z'));
    settle(ms(600)).await;
    app.on_search_input(SearchInputIntent::Backspace);
    settle(ms(600)).await;

    assert_eq!(
        source.calls(),
        vec![Call::Search("z".to_string()), Call::All]
    );
}

#[tokio::test(start_paused = true)]
async fn keys_drive_search_and_quit() {
    let source = ScriptedSource::new();
    source.on_search("ab", Reply::ok(orders(&[8])));
    let mut app = App::new(coordinator(&source, ResultPolicy::LastWriteWins));

    handle_key(&mut app, key(KeyCode::Char('a')));
    handle_key(&mut app, key(KeyCode::Char('b')));
    assert_eq!(app.search().text, "ab");
    settle(ms(600)).await;
    assert_eq!(source.calls(), vec![Call::Search("ab".to_string())]);

    handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(app.search().text, "");

    assert!(!app.should_quit());
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn ctrl_r_retries_a_failed_search() {
    let source = ScriptedSource::new();
    source.on_all(Reply::ok(orders(&[1, 2])));
    source.on_search("x", Reply::err());
    let mut app = App::new(coordinator(&source, ResultPolicy::LastWriteWins));

    app.on_view_ready();
    settle(ms(10)).await;
    handle_key(&mut app, key(KeyCode::Char('x')));
    settle(ms(600)).await;
    assert_eq!(app.coordinator().status(), Some(LoadingState::Error));

    source.on_search("x", Reply::ok(orders(&[2])));
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
    settle(ms(600)).await;

    assert_eq!(
        source.calls(),
        vec![
            Call::All,
            Call::Search("x".to_string()),
            Call::Search("x".to_string()),
        ]
    );
    assert_eq!(app.coordinator().status(), Some(LoadingState::Loaded));
    assert_eq!(app.coordinator().orders(), Some(orders(&[2])));
    assert_eq!(app.search().text, "x");
}

#[tokio::test(start_paused = true)]
async fn ctrl_r_with_empty_query_reloads_all_orders() {
    let source = ScriptedSource::new();
    source.on_all(Reply::err());
    let mut app = App::new(coordinator(&source, ResultPolicy::LastWriteWins));

    app.on_view_ready();
    settle(ms(10)).await;
    assert_eq!(app.coordinator().status(), Some(LoadingState::Error));

    source.on_all(Reply::ok(orders(&[1, 2])));
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
    settle(ms(600)).await;

    assert_eq!(source.calls(), vec![Call::All, Call::All]);
    assert_eq!(app.coordinator().status(), Some(LoadingState::Loaded));
    assert_eq!(app.coordinator().orders(), Some(orders(&[1, 2])));
}

#[tokio::test(start_paused = true)]
async fn app_mirrors_published_values() {
    let source = ScriptedSource::new();
    source.on_all(Reply::ok(orders(&[1, 2, 3])));
    let coordinator = coordinator(&source, ResultPolicy::LastWriteWins);
    let status_rx = coordinator.subscribe_status();
    let orders_rx = coordinator.subscribe_orders();
    let mut app = App::new(coordinator);

    app.on_view_ready();
    settle(ms(10)).await;
    app.on_status(*status_rx.borrow());
    app.on_orders(orders_rx.borrow().clone());

    assert_eq!(app.status(), Some(LoadingState::Loaded));
    assert_eq!(app.orders(), orders(&[1, 2, 3]).as_slice());
    assert!(app.visibility().list);

    app.move_selection(10);
    assert_eq!(app.selection(), 2);
    app.move_selection(-1);
    assert_eq!(app.selection(), 1);

    app.on_orders(Some(orders(&[4])));
    assert_eq!(app.selection(), 0);
}

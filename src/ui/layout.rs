use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const SEARCH_HEIGHT: u16 = 3;

/// Splits the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    (header, body, footer)
}

/// Splits the body into the search box and the list below it.
pub fn search_and_list(body: Rect) -> (Rect, Rect) {
    let [search, list] =
        Layout::vertical([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(0)]).areas(body);
    (search, list)
}

/// A `height`-row band vertically centered in `area`.
pub fn centered_band(height: u16, area: Rect) -> Rect {
    let [_, band, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    band
}

use crate::model::Order;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_band, layout_regions, search_and_list};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let settings = app.coordinator().settings();
    let header_widget = Header::new(
        app.status(),
        app.orders().len(),
        settings.debounce.as_millis(),
        settings.policy,
    );
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let visibility = app.visibility();
    if visibility.search_input || visibility.list {
        let (search_area, list_area) = search_and_list(body);
        if visibility.search_input {
            draw_search(frame, app, search_area);
        }
        if visibility.list {
            draw_list(frame, app, list_area);
        }
    } else if visibility.error {
        draw_message(
            frame,
            body,
            vec![
                Line::styled(
                    "Failed to load orders",
                    Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    "Keep typing to search again, or press Ctrl+R to retry",
                    Style::default().fg(MUTED_TEXT),
                ),
            ],
        );
    } else if visibility.progress {
        let spinner = SPINNER[app.spinner_frame() % SPINNER.len()];
        draw_message(
            frame,
            body,
            vec![Line::styled(
                format!("{} Loading orders…", spinner),
                Style::default().fg(ACCENT),
            )],
        );
    }

    frame.render_widget(Footer::widget(footer), footer);
}

fn draw_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (before, after) = app.search().split_at_cursor();
    let text_style = Style::default().fg(HEADER_TEXT);
    let line = Line::from(vec![
        Span::styled(" ", text_style),
        Span::styled(before.to_string(), text_style),
        Span::styled(after.to_string(), text_style),
    ]);
    let input = Paragraph::new(line).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(input, area);

    if area.width > 2 && area.height > 2 {
        frame.set_cursor_position((cursor_x(area, before.chars().count()), area.y + 1));
    }
}

/// Column of the input cursor after `typed` characters, clamped inside the box.
fn cursor_x(area: Rect, typed: usize) -> u16 {
    let offset = u16::try_from(typed).unwrap_or(u16::MAX).saturating_add(2);
    area.x.saturating_add(offset.min(area.width.saturating_sub(2)))
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if app.orders().is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No orders match your search",
            Style::default().fg(MUTED_TEXT),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app.orders().iter().map(order_row).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn order_row(order: &Order) -> ListItem<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted_style = Style::default().fg(MUTED_TEXT);
    ListItem::new(Line::from(vec![
        Span::styled(format!("#{:<6}", order.id), muted_style),
        Span::styled(format!("{:<20}", order.customer), text_style),
        Span::styled(format!("{:<30}", order.product), text_style),
        Span::styled(format!("x{:<3}", order.quantity), muted_style),
        Span::styled(format!("${:>10}", order.total_display()), text_style),
    ]))
}

fn draw_message(frame: &mut Frame<'_>, body: Rect, lines: Vec<Line<'static>>) {
    let band = centered_band(lines.len() as u16, body);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), band);
}

use crate::config::ResultPolicy;
use crate::model::LoadingState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: screen name, status badge, visible count, search settings.
pub struct Header {
    status: Option<LoadingState>,
    shown: usize,
    debounce_ms: u128,
    policy: ResultPolicy,
}

impl Header {
    pub fn new(
        status: Option<LoadingState>,
        shown: usize,
        debounce_ms: u128,
        policy: ResultPolicy,
    ) -> Self {
        Self {
            status,
            shown,
            debounce_ms,
            policy,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let muted_style = Style::default().fg(MUTED_TEXT);

        let (badge, color) = match self.status {
            Some(LoadingState::Loaded) => ("●", STATUS_OK),
            Some(LoadingState::Loading) => ("●", STATUS_PENDING),
            Some(LoadingState::Error) => ("●", STATUS_ERROR),
            None => ("○", MUTED_TEXT),
        };
        let label = self.status.map_or("Idle", |status| status.label());
        let policy = match self.policy {
            ResultPolicy::LastWriteWins => "last-write-wins",
            ResultPolicy::LatestRequest => "latest-request",
        };

        let line = Line::from(vec![
            Span::styled("  Orders", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(badge, Style::default().fg(color)),
            Span::styled(format!(" {}", label), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} shown", self.shown), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("debounce {}ms, {}", self.debounce_ms, policy),
                muted_style,
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

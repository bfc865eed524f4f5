use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::page::SubmissionState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_ERROR, STATUS_OK,
};

pub struct Header<'a> {
    endpoint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }

    pub fn widget(&self, submission: &SubmissionState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let dot_color = status_color(submission);

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Sentiment Analysis",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(dot_color)),
            Span::styled(format!(" {}", submission.label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint_host(self.endpoint), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_color(submission: &SubmissionState) -> Color {
    match submission {
        SubmissionState::InFlight | SubmissionState::Validating { .. } => STATUS_BUSY,
        SubmissionState::Failed { .. } => STATUS_ERROR,
        SubmissionState::Idle | SubmissionState::Succeeded(_) => STATUS_OK,
    }
}

/// Host part of the endpoint, or the raw string if it does not parse.
fn endpoint_host(endpoint: &str) -> String {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| endpoint.to_string())
}

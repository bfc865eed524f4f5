//! Rendering for the analysis page.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::analysis::AnalysisResult;
use crate::ui::layout::page_regions;
use crate::ui::presentation::{map_sentiment, SentimentPresentation};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, INPUT_BORDER, SKELETON, STATUS_ERROR, STATUS_OK,
    SUMMARY_TEXT,
};

use super::state::AnalysisPageState;

const PLACEHOLDER: &str = "Enter a sentence or paragraph...";

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the input card and, below it, the loading skeleton or the result.
pub fn render_page(frame: &mut Frame, area: Rect, state: &AnalysisPageState, animation_tick: u8) {
    let (input_area, result_area) = page_regions(area);
    frame.render_widget(Clear, area);

    render_input(frame, input_area, state);

    if state.is_loading() {
        render_skeleton(frame, result_area, animation_tick);
    } else if let Some(result) = state.result() {
        let presentation = map_sentiment(result.sentiment());
        render_result(frame, result_area, result, &presentation);
    }
}

fn render_input(frame: &mut Frame, area: Rect, state: &AnalysisPageState) {
    let error = state.validation_message();
    let border_color = if error.is_some() {
        STATUS_ERROR
    } else {
        INPUT_BORDER
    };

    let block = Block::default()
        .title(Span::styled(" Text ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (text_area, error_area) = match error {
        Some(_) if inner.height > 1 => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);
            (parts[0], Some(parts[1]))
        }
        _ => (inner, None),
    };

    frame.render_widget(
        Paragraph::new(input_lines(&state.text)).wrap(Wrap { trim: false }),
        text_area,
    );

    if let (Some(area), Some(message)) = (error_area, error) {
        let line = Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(STATUS_ERROR)),
            Span::styled(
                message,
                Style::default()
                    .fg(STATUS_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Text lines with a caret on the last one, or the placeholder when empty.
fn input_lines(text: &str) -> Vec<Line<'static>> {
    let caret = Span::styled("▏", Style::default().fg(ACCENT));
    if text.is_empty() {
        return vec![Line::from(vec![
            caret,
            Span::styled(
                PLACEHOLDER,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        ])];
    }

    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines: Vec<Line<'static>> = text
        .split('\n')
        .map(|line| Line::from(Span::styled(line.replace('\t', "    "), text_style)))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.push_span(caret);
    }
    lines
}

fn render_skeleton(frame: &mut Frame, area: Rect, animation_tick: u8) {
    if area.height < 3 {
        return;
    }
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(format!(" {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Analysis ", Style::default().fg(HEADER_TEXT)),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let bar_style = Style::default().fg(SKELETON);
    let lines: Vec<Line> = [width / 4, width, width * 3 / 4]
        .into_iter()
        .flat_map(|len| {
            [
                Line::from(Span::styled("█".repeat(len.max(1)), bar_style)),
                Line::from(""),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_result(
    frame: &mut Frame,
    area: Rect,
    result: &AnalysisResult,
    presentation: &SentimentPresentation,
) {
    if area.height < 3 {
        return;
    }
    let (top, bottom) = presentation.gradient;
    let block = Block::default()
        .title(Span::styled(
            " ✨ Analysis Result ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(presentation.border).bg(top))
        .style(Style::default().bg(top));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let heading = Style::default()
        .fg(SUMMARY_TEXT)
        .add_modifier(Modifier::BOLD);
    let sentiment_lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", presentation.icon.glyph()),
                Style::default().fg(presentation.icon_color),
            ),
            Span::styled("Sentiment Analysis", heading),
        ]),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", result.sentiment().unwrap_or("Unknown")),
                Style::default()
                    .fg(presentation.color)
                    .bg(presentation.background)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(sentiment_lines).style(Style::default().bg(top)),
        parts[0],
    );

    let summary_lines = vec![
        Line::from(vec![
            Span::styled(" 📄 ", Style::default().fg(ACCENT)),
            Span::styled("Summary", heading),
        ]),
        Line::from(Span::styled(
            format!(" {}", result.summary()),
            Style::default().fg(SUMMARY_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(summary_lines)
            .style(Style::default().bg(bottom))
            .wrap(Wrap { trim: false }),
        parts[1],
    );
}

//! Toast overlay in the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::notify::{Notification, NotificationStyle, ToastQueue};
use crate::ui::layout::top_right_rect;
use crate::ui::theme::{
    HEADER_TEXT, STATUS_OK, TOAST_DESTRUCTIVE_BG, TOAST_INFO_BG, TOAST_INFO_TEXT,
};

const TOAST_WIDTH: u16 = 44;

/// Stack visible toasts downward from the top-right corner, newest last.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    let mut y_offset = 0u16;
    for notification in toasts.visible() {
        let height = toast_height(notification);
        let slot = Rect {
            y: area.y + y_offset,
            height: area.height.saturating_sub(y_offset),
            ..area
        };
        let rect = top_right_rect(slot, TOAST_WIDTH, height);
        if rect.height < 3 {
            break;
        }
        render_toast(frame, rect, notification);
        y_offset = y_offset.saturating_add(rect.height);
    }
}

fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification) {
    let (fg, bg, border) = toast_colors(notification.style);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().fg(fg).bg(bg));

    let lines = vec![
        Line::from(Span::styled(
            notification.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(notification.description.clone()),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Text, fill and border colors.
fn toast_colors(style: NotificationStyle) -> (Color, Color, Color) {
    match style {
        NotificationStyle::Informational => (TOAST_INFO_TEXT, TOAST_INFO_BG, STATUS_OK),
        NotificationStyle::Destructive => (HEADER_TEXT, TOAST_DESTRUCTIVE_BG, TOAST_DESTRUCTIVE_BG),
    }
}

/// Borders plus title plus the description wrapped to the toast width.
fn toast_height(notification: &Notification) -> u16 {
    let inner_width = TOAST_WIDTH.saturating_sub(2).max(1) as usize;
    let description_lines = notification.description.chars().count().div_ceil(inner_width);
    (2 + 1 + description_lines.max(1)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    #[test]
    fn height_grows_with_description() {
        assert_eq!(toast_height(&Notification::analysis_failed("short")), 4);
        assert_eq!(toast_height(&Notification::analysis_failed("x".repeat(50))), 5);
    }

    #[test]
    fn destructive_toast_is_red() {
        let (_, bg, _) = toast_colors(NotificationStyle::Destructive);
        assert_eq!(bg, TOAST_DESTRUCTIVE_BG);
    }

    #[test]
    fn renders_title_and_description() {
        let mut queue = ToastQueue::new(2, Duration::from_secs(5));
        queue.push(Notification::analysis_failed("Network down"));

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| render_toasts(frame, frame.area(), &queue))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Analysis Failed"));
        assert!(text.contains("Network down"));
    }
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the input card and the result area below it.
pub fn page_regions(body: Rect) -> (Rect, Rect) {
    let input_height = (body.height / 2).clamp(5.min(body.height), 12);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(input_height), Constraint::Min(0)])
        .split(body);
    (parts[0], parts[1])
}

/// A `width` x `height` box in the top-right corner of `area`, one cell in.
pub fn top_right_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(1));
    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1.min(area.height),
        width,
        height,
    }
}

use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::page::render_page;
use crate::ui::toast::render_toasts;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.controller().state();

    frame.render_widget(Header::new(app.endpoint()).widget(&state.submission), header);
    render_page(frame, body, state, app.animation_tick());
    frame.render_widget(Footer::new().widget(footer), footer);

    render_toasts(frame, body, app.controller().toasts());
}

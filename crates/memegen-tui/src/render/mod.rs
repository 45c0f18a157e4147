//! Main render/view function (View in TEA pattern)


use memegen_app::AppState;
use memegen_core::FormFocus;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it. The palette comes from
/// the root element's classes.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let p = palette::for_root(&state.root);

    frame.render_widget(Block::default().style(Style::default().bg(p.background)), area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(p, state.dark_mode())
            .status(state.generation_status(), state.spinner_frame),
        areas.header,
    );

    frame.render_widget(widgets::MemeForm::new(state, p), areas.form);

    frame.render_widget(
        widgets::ResultsGrid::new(&state.memes, p)
            .selected(state.selected_meme)
            .focused(state.focus == FormFocus::Results)
            .loading(state.loading),
        areas.results,
    );

    frame.render_widget(
        widgets::Footer::new(p, state.focus).notice(state.notice.as_deref()),
        areas.footer,
    );
}

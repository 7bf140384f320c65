//! ratatui screens for the interactive dashboard.

mod dashboard;
mod detail;

use crate::app::{App, Screen};
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Dashboard(state) => dashboard::render(frame, state),
        Screen::Detail(state) => detail::render(frame, state),
    }
}

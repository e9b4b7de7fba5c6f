//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::routes::Route;
use crate::ui::core::{AppController, Focus};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hints for the screen and focus at hand
    pub fn hint(app: &AppController) -> &'static str {
        match app.focus() {
            Focus::Search => "Type to filter • Enter/Esc: done",
            Focus::Description => "Ctrl+S: save • Ctrl+D: discard",
            Focus::Login => "Tab: next field • Enter: log in • Ctrl+C: quit",
            Focus::Main => match app.route() {
                Route::Repository(_) => {
                    "y: copy • p: pull cmd • m/Enter: manifest • e: edit description • h: back • ?: help • q: quit"
                }
                _ => "Ctrl+K: search • y: copy • p: pull cmd • Enter: open • r: refresh • ?: help • q: quit",
            },
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &AppController) {
        let (text, color) = if app.is_loading() {
            (app.messages().loading.to_string(), Color::Yellow)
        } else if let Some(error) = app.load_error() {
            (error.to_string(), Color::Red)
        } else if app.pending_tasks() > 0 {
            (format!("{} • {} running", Self::hint(app), app.pending_tasks()), Color::Gray)
        } else {
            (Self::hint(app).to_string(), Color::Gray)
        };

        let status_bar = Paragraph::new(text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}

//! Login form

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::core::{AppController, LoginField};
use crate::ui::layout::LayoutManager;

/// Login form component
pub struct LoginFormView;

impl LoginFormView {
    /// Render the login form centered in `area`
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &AppController) {
        let form = app.login_form();
        let dialog = LayoutManager::centered_rect_lines(50, 10, area);
        f.render_widget(Clear, dialog);
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title(" Log in ")
                .title_alignment(Alignment::Center),
            dialog,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Length(2)])
            .split(dialog);

        let field_style = |field: LoginField| {
            if form.field == field && !form.submitting {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };

        let username = Paragraph::new(form.username.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_style(LoginField::Username))
                .title(" Username "),
        );
        f.render_widget(username, rows[0]);

        let password = Paragraph::new(form.masked_password()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_style(LoginField::Password))
                .title(" Password "),
        );
        f.render_widget(password, rows[1]);

        let (message, color) = if form.submitting {
            (app.messages().loading, Color::Yellow)
        } else if let Some(error) = form.error {
            (error, Color::Red)
        } else {
            ("", Color::Gray)
        };
        let status = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));
        f.render_widget(status, rows[2]);
    }
}

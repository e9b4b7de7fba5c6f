//! Header with the current location and registry counters

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::routes::Route;
use crate::ui::core::AppController;

/// Header component
pub struct Header;

impl Header {
    /// Render the header
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &AppController) {
        let messages = app.messages();
        let mut spans = vec![Span::styled(
            app.route().path(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];

        if matches!(app.route(), Route::Dashboard | Route::Repositories) {
            let stats = app.stats();
            spans.push(Span::raw("   "));
            spans.push(Span::raw(format!("Repositories: {}", stats.repository_count())));
            spans.push(Span::raw("   "));
            spans.push(Span::raw(format!("Tags: {}", stats.total_tags())));
            spans.push(Span::raw("   "));
            spans.push(Span::raw(format!("Size: {}", stats.total_size(messages))));
            if let Some(age) = stats.age(messages) {
                spans.push(Span::styled(format!("   ({age})"), Style::default().fg(Color::DarkGray)));
            }
        }

        let header = Paragraph::new(Line::from(spans)).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.config().server.base_url))
                .title_alignment(Alignment::Center),
        );

        f.render_widget(header, area);
    }
}

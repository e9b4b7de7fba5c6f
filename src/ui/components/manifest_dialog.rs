//! Manifest modal

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::manifest::ManifestContent;
use crate::utils::format::format_bytes;
use crate::ui::core::AppController;
use crate::ui::layout::LayoutManager;

/// Manifest dialog component
pub struct ManifestDialog;

impl ManifestDialog {
    /// Render the manifest dialog
    pub fn render(f: &mut Frame, app: &AppController) {
        let Some(view) = app.manifest() else {
            return;
        };

        let color = match view.content {
            ManifestContent::Loading => Color::Yellow,
            ManifestContent::Loaded(_) => Color::White,
            ManifestContent::Failed(_) => Color::Red,
        };

        let title = match view.image_size() {
            Some(size) => format!(" {} ({}) ", view.title(), format_bytes(size)),
            None => format!(" {} ", view.title()),
        };

        let area = LayoutManager::centered_rect(80, 80, f.area());
        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(view.body(app.messages()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .title_bottom(" Esc: close "),
            )
            .style(Style::default().fg(color));
        f.render_widget(paragraph, area);
    }
}

//! Toast overlay

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::notifier::{ToastKind, ToastPhase};
use crate::ui::core::AppController;
use crate::ui::layout::LayoutManager;

/// Toast component
pub struct ToastView;

impl ToastView {
    /// Render the live toast in the top-right corner, if one is shown
    pub fn render(f: &mut Frame, app: &AppController) {
        let Some(toast) = app.toast().filter(|t| t.is_shown()) else {
            return;
        };

        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        };
        let mut style = Style::default().fg(color);
        if toast.phase == ToastPhase::Hiding {
            style = style.add_modifier(Modifier::DIM);
        }

        let area = LayoutManager::toast_area(f.area());
        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(toast.text)
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::core::AppController;
use crate::ui::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the key bindings registered in the keymap
    pub fn render(f: &mut Frame, app: &AppController) {
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(f.area().width, f.area().height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, f.area());
        f.render_widget(Clear, help_area);

        let lines: Vec<Line> = app
            .keymap()
            .bindings()
            .into_iter()
            .map(|(chord, command)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<12}", chord.display()),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(command.label()),
                ])
            })
            .collect();

        let help = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keys ")
                    .title_alignment(Alignment::Center),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(help, help_area);
    }
}

//! Repository page: tags and the description panel

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::description::{DescriptionEditor, EditorMode};
use crate::ui::core::AppController;
use crate::ui::layout::LayoutManager;

/// Repository detail component
pub struct RepositoryDetail;

impl RepositoryDetail {
    /// Render the repository page
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &AppController) {
        let chunks = LayoutManager::detail_layout(area);
        Self::render_tags(f, chunks[0], app);
        Self::render_description(f, chunks[1], app.editor());
    }

    fn render_tags(f: &mut Frame, area: ratatui::layout::Rect, app: &AppController) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Tags ({}) ", app.tags().len()))
            .title_alignment(Alignment::Center);

        if app.tags().is_empty() {
            let text = if app.is_loading() { app.messages().loading } else { "No tags" };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = app.tags().iter().map(|tag| ListItem::new(tag.as_str())).collect();
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default().with_selected(Some(app.selected()));
        f.render_stateful_widget(list, area, &mut state);
    }

    fn render_description(f: &mut Frame, area: ratatui::layout::Rect, editor: Option<&DescriptionEditor>) {
        let Some(editor) = editor else {
            let empty = Paragraph::new("No description available")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" Description "));
            f.render_widget(empty, area);
            return;
        };

        let (title, text, border) = match editor.mode() {
            EditorMode::Display => {
                let text = if editor.rendered().is_empty() {
                    "(empty, press e to write one)".to_string()
                } else {
                    editor.rendered().to_string()
                };
                (" Description ".to_string(), text, Style::default())
            }
            EditorMode::Editing => {
                let mut text = editor.buffer().unwrap_or_default().to_string();
                let title = if editor.is_saving() {
                    " Description (saving...) ".to_string()
                } else {
                    text.push('▏');
                    " Description (editing) ".to_string()
                };
                (title, text, Style::default().fg(Color::Cyan))
            }
        };

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}

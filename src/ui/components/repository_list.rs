//! Repository list with its search box

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::core::AppController;
use crate::ui::layout::LayoutManager;

/// Repository list component
pub struct RepositoryList;

impl RepositoryList {
    /// Render the search box and the filtered list
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &AppController) {
        let chunks = LayoutManager::list_layout(area);
        Self::render_search(f, chunks[0], app);

        let repositories = app.visible_repositories();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Repositories ({}) ", repositories.len()))
            .title_alignment(Alignment::Center);

        if repositories.is_empty() {
            let text = if app.is_loading() {
                app.messages().loading
            } else if app.search().query().is_empty() {
                "No repositories"
            } else {
                "No repositories match"
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = repositories
            .iter()
            .map(|repo| {
                ListItem::new(Line::from(vec![
                    Span::raw(repo.name.clone()),
                    Span::styled(
                        format!("  {} tags", repo.tag_count),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default().with_selected(Some(app.selected()));
        f.render_stateful_widget(list, chunks[1], &mut state);
    }

    fn render_search(f: &mut Frame, area: ratatui::layout::Rect, app: &AppController) {
        let focused = app.is_search_focused();
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut text = app.search().query().to_string();
        if focused {
            text.push('▏');
        }

        let search = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" Search (Ctrl+K) "),
        );
        f.render_widget(search, area);
    }
}

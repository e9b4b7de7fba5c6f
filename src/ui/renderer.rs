//! Main UI rendering and coordination

use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::components::{
    Header, HelpPanel, LoginFormView, ManifestDialog, RepositoryDetail, RepositoryList, StatusBar, ToastView,
};
use super::core::{Action, AppController, EventHandler, EventType};
use super::layout::LayoutManager;
use crate::backend::RegistryApi;
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::routes::Route;

/// Run the console until the user quits
pub async fn run_app(config: Config, api: Arc<dyn RegistryApi>) -> Result<()> {
    // Terminal initialization
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppController::new(config, api, Arc::new(SystemClipboard));
    app.start();

    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    res
}

async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut AppController) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|f| render_ui(f, app))?;

        match events.next_event().await? {
            EventType::Key(key) => app.handle_key(&key),
            EventType::FocusGained => app.dispatch(Action::RefreshStats),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => {}
        }
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Draw one frame from controller state
pub fn render_ui(f: &mut ratatui::Frame, app: &AppController) {
    let chunks = LayoutManager::main_layout(f.area());

    Header::render(f, chunks[0], app);
    match app.route() {
        Route::Dashboard | Route::Repositories => RepositoryList::render(f, chunks[1], app),
        Route::Repository(_) => RepositoryDetail::render(f, chunks[1], app),
        Route::Login => LoginFormView::render(f, chunks[1], app),
        Route::Unknown(path) => {
            let text = ratatui::widgets::Paragraph::new(format!("Nothing at {path}"))
                .alignment(ratatui::layout::Alignment::Center);
            f.render_widget(text, chunks[1]);
        }
    }
    StatusBar::render(f, chunks[2], app);

    // Overlays, topmost last
    ManifestDialog::render(f, app);
    if app.is_help_visible() {
        HelpPanel::render(f, app);
    }
    ToastView::render(f, app);
}

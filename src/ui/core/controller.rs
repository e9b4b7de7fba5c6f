//! Application controller.
//!
//! [`AppController`] owns all console state. Key presses are resolved
//! through the [`Keymap`] into an [`Action`], and [`AppController::dispatch`]
//! routes every action to its handler. Registry calls run on the
//! [`TaskManager`] and come back as actions over its channel, so state is
//! only ever mutated by the task that owns the controller.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::actions::Action;
use super::keymap::{Command, KeyChord, Keymap};
use super::task_manager::TaskManager;
use crate::backend::{RegistryApi, RepositorySummary, SessionRequest};
use crate::clipboard::{ClipboardBackend, ClipboardService};
use crate::config::Config;
use crate::constants::{REPOSITORIES_PATH, ROOT_PATH};
use crate::description::{DescriptionEditor, EditorMode, MarkdownRenderer, TerminalRenderer};
use crate::manifest::{fetch_manifest, ManifestView};
use crate::messages::Messages;
use crate::notifier::{Notifier, Toast, ToastTiming};
use crate::routes::Route;
use crate::search::SearchFilter;
use crate::session::{LoginError, Navigator, SessionActions};
use crate::stats::StatsPanel;

const REFRESH_STATS_TASK: &str = "Refresh stats";

/// Where typed characters go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Main,
    Search,
    Description,
    Login,
}

/// Redirects by queueing a navigation action
pub struct ActionNavigator {
    sender: mpsc::UnboundedSender<Action>,
}

impl ActionNavigator {
    pub fn new(sender: mpsc::UnboundedSender<Action>) -> Self {
        Self { sender }
    }
}

impl Navigator for ActionNavigator {
    fn redirect(&self, location: &str) {
        if self.sender.send(Action::Navigate(location.to_string())).is_err() {
            log::warn!("Dropped redirect to {location}: controller is gone");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Login screen input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    password: String,
    pub field: LoginField,
    pub error: Option<&'static str>,
    pub submitting: bool,
}

impl LoginForm {
    pub fn input(&mut self, c: char) {
        if self.submitting {
            return;
        }
        match self.field {
            LoginField::Username => self.username.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        match self.field {
            LoginField::Username => self.username.pop(),
            LoginField::Password => self.password.pop(),
        };
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }

    /// Hand the credentials to one request; the password is not kept
    fn take_request(&mut self) -> SessionRequest {
        SessionRequest::new(self.username.clone(), std::mem::take(&mut self.password))
    }

    fn finish(&mut self, result: Result<(), LoginError>, messages: &Messages) {
        self.submitting = false;
        self.error = result.err().map(|err| err.user_message(messages));
    }
}

pub struct AppController {
    config: Config,
    messages: &'static Messages,
    api: Arc<dyn RegistryApi>,
    notifier: Notifier,
    clipboard: ClipboardService,
    session: SessionActions,
    renderer: Arc<dyn MarkdownRenderer>,
    keymap: Keymap,
    tasks: TaskManager,
    actions: mpsc::UnboundedReceiver<Action>,

    location: String,
    route: Route,
    stats: StatsPanel,
    repositories: Vec<RepositorySummary>,
    tags: Vec<String>,
    loading: bool,
    load_error: Option<String>,
    selected: usize,
    search: SearchFilter,
    search_focused: bool,
    editor: Option<DescriptionEditor>,
    manifest: Option<ManifestView>,
    show_help: bool,
    login: LoginForm,
    last_refresh: Instant,
    should_quit: bool,
}

impl AppController {
    pub fn new(config: Config, api: Arc<dyn RegistryApi>, clipboard: Arc<dyn ClipboardBackend>) -> Self {
        let messages = Messages::for_language(config.ui.language);
        let notifier = Notifier::new(ToastTiming::from(&config.notifications));
        let (tasks, actions) = TaskManager::new();
        let navigator = Arc::new(ActionNavigator::new(tasks.sender()));
        let session = SessionActions::new(Arc::clone(&api), notifier.clone(), navigator, messages);
        let clipboard = ClipboardService::new(clipboard, notifier.clone(), messages);

        Self {
            config,
            messages,
            api,
            notifier,
            clipboard,
            session,
            renderer: Arc::new(TerminalRenderer),
            keymap: Keymap::default(),
            tasks,
            actions,
            location: ROOT_PATH.to_string(),
            route: Route::Dashboard,
            stats: StatsPanel::default(),
            repositories: Vec::new(),
            tags: Vec::new(),
            loading: false,
            load_error: None,
            selected: 0,
            search: SearchFilter::default(),
            search_focused: false,
            editor: None,
            manifest: None,
            show_help: false,
            login: LoginForm::default(),
            last_refresh: Instant::now(),
            should_quit: false,
        }
    }

    /// Open the configured start location
    pub fn start(&mut self) {
        let start = self.config.ui.start_path.clone();
        self.dispatch(Action::Navigate(start));
    }

    // ---- accessors for rendering ----

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn toast(&self) -> Option<Toast> {
        self.notifier.current()
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn stats(&self) -> &StatsPanel {
        &self.stats
    }

    pub fn repositories(&self) -> &[RepositorySummary] {
        &self.repositories
    }

    /// Repositories that pass the search filter
    pub fn visible_repositories(&self) -> Vec<&RepositorySummary> {
        self.search
            .visible_indices(&self.repositories)
            .into_iter()
            .filter_map(|index| self.repositories.get(index))
            .collect()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn search(&self) -> &SearchFilter {
        &self.search
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn editor(&self) -> Option<&DescriptionEditor> {
        self.editor.as_ref()
    }

    pub fn manifest(&self) -> Option<&ManifestView> {
        self.manifest.as_ref()
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.task_count()
    }

    pub fn focus(&self) -> Focus {
        if self.manifest.is_some() || self.show_help {
            return Focus::Main;
        }
        if self.editor.as_ref().map(DescriptionEditor::mode) == Some(EditorMode::Editing) {
            return Focus::Description;
        }
        if self.search_focused {
            return Focus::Search;
        }
        if self.route == Route::Login {
            return Focus::Login;
        }
        Focus::Main
    }

    // ---- input ----

    /// Translate a key press into the action it triggers on this screen
    pub fn action_for_key(&self, key: &KeyEvent) -> Action {
        let chord = KeyChord::from(key);
        let focus = self.focus();

        if let Some(command) = self.keymap.resolve(&chord, focus != Focus::Main) {
            return self.command_action(command);
        }

        let typed = chord.is_plain_char();
        match focus {
            Focus::Search => match (typed, chord.code) {
                (Some(c), _) => Action::SearchInput(c),
                (_, KeyCode::Backspace) => Action::SearchBackspace,
                (_, KeyCode::Enter) => Action::SubmitSearch,
                (_, KeyCode::Down) => Action::SelectNext,
                (_, KeyCode::Up) => Action::SelectPrevious,
                _ => Action::None,
            },
            Focus::Description => match (typed, chord.code) {
                (Some(c), _) => Action::DescriptionInput(c),
                (_, KeyCode::Enter) => Action::DescriptionNewline,
                (_, KeyCode::Backspace) => Action::DescriptionBackspace,
                _ => Action::None,
            },
            Focus::Login => match (typed, chord.code) {
                (Some(c), _) => Action::LoginInput(c),
                (_, KeyCode::Backspace) => Action::LoginBackspace,
                (_, KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down) => Action::LoginNextField,
                (_, KeyCode::Enter) => Action::SubmitLogin,
                _ => Action::None,
            },
            Focus::Main => Action::None,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        let action = self.action_for_key(key);
        self.dispatch(action);
    }

    fn command_action(&self, command: Command) -> Action {
        match command {
            Command::Quit => Action::Quit,
            Command::CloseModals => Action::CloseModals,
            Command::FocusSearch => Action::FocusSearch,
            Command::Logout => Action::Logout,
            Command::CopySelected => Action::CopySelected,
            Command::CopyPullCommand => match self.selected_pull_target() {
                Some((repository, tag)) => Action::CopyPullCommand { repository, tag },
                None => Action::None,
            },
            Command::ShowManifest => Action::ShowSelectedManifest,
            Command::EditDescription => Action::EditDescription,
            Command::SaveDescription => Action::SaveDescription,
            Command::CancelDescription => Action::CancelDescription,
            Command::RefreshStats => Action::RefreshStats,
            Command::NextItem => Action::SelectNext,
            Command::PreviousItem => Action::SelectPrevious,
            Command::Open => Action::OpenSelected,
            Command::Back => Action::Back,
            Command::ToggleHelp => Action::ToggleHelp,
        }
    }

    // ---- dispatcher ----

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Navigate(location) => self.navigate(location),
            Action::SelectNext => self.move_selection(true),
            Action::SelectPrevious => self.move_selection(false),
            Action::OpenSelected => self.open_selected(),
            Action::Back => self.back(),

            Action::CopySelected => {
                if let Some(text) = self.selected_copy_text() {
                    self.copy(text);
                }
            }
            Action::CopyText(text) => self.copy(text),
            Action::CopyPullCommand { repository, tag } => self.copy_pull_command(repository, tag),

            Action::CloseModals => self.close_modals(),
            Action::ShowManifest { repository, tag } => self.show_manifest(repository, tag),
            Action::ShowSelectedManifest => {
                if let Some((repository, tag)) = self.selected_tag() {
                    self.show_manifest(repository, tag);
                }
            }
            Action::ToggleHelp => self.show_help = !self.show_help,

            Action::FocusSearch => self.focus_search(),
            Action::SearchInput(c) => {
                self.search.push(c);
                self.clamp_selection();
            }
            Action::SearchBackspace => {
                self.search.pop();
                self.clamp_selection();
            }
            Action::SubmitSearch => self.search_focused = false,

            Action::EditDescription => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.edit();
                }
            }
            Action::DescriptionInput(c) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.insert_char(c);
                }
            }
            Action::DescriptionNewline => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.insert_newline();
                }
            }
            Action::DescriptionBackspace => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.backspace();
                }
            }
            Action::SaveDescription => self.save_description(),
            Action::CancelDescription => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.cancel();
                }
            }

            Action::LoginInput(c) => self.login.input(c),
            Action::LoginBackspace => self.login.backspace(),
            Action::LoginNextField => self.login.next_field(),
            Action::SubmitLogin => self.submit_login(),
            Action::Logout => self.logout(),

            Action::RefreshStats => self.refresh_stats(),
            Action::StatsLoaded(stats) => self.stats.set(stats),
            Action::RepositoriesLoaded(result) => {
                if !self.route.has_search() {
                    return;
                }
                self.loading = false;
                match result {
                    Ok(repositories) => {
                        self.repositories = repositories;
                        self.load_error = None;
                        self.clamp_selection();
                    }
                    Err(err) => {
                        log::error!("Failed to load repositories: {err}");
                        self.load_error = Some(format!("{}: {err}", self.messages.load_failed));
                    }
                }
            }
            Action::RepositoryLoaded {
                repository,
                tags,
                description,
            } => self.repository_loaded(repository, tags, description),
            Action::ManifestLoaded {
                repository,
                tag,
                content,
            } => {
                if let Some(view) = self.manifest.as_mut() {
                    if !view.resolve(&repository, &tag, content) {
                        log::debug!("Ignoring stale manifest for {repository}:{tag}");
                    }
                }
            }
            Action::DescriptionSaved { request, result } => match self.editor.as_mut() {
                Some(editor) if editor.repository() == request.repository => {
                    // The editor reports the outcome through a toast
                    let _ = editor.finish_save(request, result);
                }
                _ => log::debug!("Save of {} finished after leaving the page", request.repository),
            },
            Action::LoginFinished(result) => self.login.finish(result, self.messages),

            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    /// Dispatch every action that background tasks have queued so far
    pub fn drain_actions(&mut self) {
        while let Ok(action) = self.actions.try_recv() {
            self.dispatch(action);
        }
    }

    /// Periodic housekeeping from the UI loop
    pub fn tick(&mut self) {
        self.drain_actions();
        self.tasks.cleanup_finished_tasks();

        let server = &self.config.server;
        if server.auto_refresh && self.last_refresh.elapsed() >= server.refresh_interval() {
            self.refresh_stats();
        }
    }

    // ---- handlers ----

    fn navigate(&mut self, location: String) {
        let route = Route::parse(&location);
        log::info!("Navigating to {route}");

        self.location = location;
        self.route = route.clone();
        self.editor = None;
        self.manifest = None;
        self.show_help = false;
        self.search = SearchFilter::default();
        self.search_focused = false;
        self.selected = 0;
        self.tags.clear();
        self.load_error = None;
        self.loading = false;
        self.login = LoginForm::default();

        match route {
            Route::Dashboard | Route::Repositories => {
                self.refresh_stats();
                self.load_repositories();
            }
            Route::Repository(name) => self.load_repository(name),
            Route::Login | Route::Unknown(_) => {}
        }
    }

    fn load_repositories(&mut self) {
        self.loading = true;
        let api = Arc::clone(&self.api);
        self.tasks.spawn("Load repositories", async move {
            Action::RepositoriesLoaded(api.list_repositories().await)
        });
    }

    fn load_repository(&mut self, repository: String) {
        self.loading = true;
        let api = Arc::clone(&self.api);
        self.tasks.spawn(format!("Load {repository}"), async move {
            let (tags, description) = tokio::join!(api.list_tags(&repository), api.description(&repository));
            Action::RepositoryLoaded {
                repository,
                tags,
                description,
            }
        });
    }

    fn repository_loaded(
        &mut self,
        repository: String,
        tags: crate::backend::ApiResult<crate::backend::TagList>,
        description: crate::backend::ApiResult<String>,
    ) {
        if self.route != Route::Repository(repository.clone()) {
            log::debug!("Ignoring stale data for {repository}");
            return;
        }
        self.loading = false;

        match tags {
            Ok(list) => {
                self.tags = list.tags;
                self.clamp_selection();
            }
            Err(err) => {
                log::error!("Failed to load tags of {repository}: {err}");
                self.load_error = Some(format!("{}: {err}", self.messages.load_failed));
            }
        }

        let initial_raw = match description {
            Ok(raw) => Some(raw),
            Err(err) => {
                log::warn!("No description for {repository}: {err}");
                None
            }
        };
        self.editor = DescriptionEditor::attach(
            &self.location,
            initial_raw,
            Arc::clone(&self.renderer),
            self.notifier.clone(),
            self.messages,
        );
    }

    fn list_len(&self) -> usize {
        match self.route {
            Route::Dashboard | Route::Repositories => self.search.visible_indices(&self.repositories).len(),
            Route::Repository(_) => self.tags.len(),
            _ => 0,
        }
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.list_len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    fn clamp_selection(&mut self) {
        let len = self.list_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn selected_repository(&self) -> Option<&RepositorySummary> {
        self.visible_repositories().get(self.selected).copied()
    }

    /// `(repository, tag)` of the highlighted tag on a detail screen
    fn selected_tag(&self) -> Option<(String, String)> {
        match &self.route {
            Route::Repository(name) => self.tags.get(self.selected).map(|tag| (name.clone(), tag.clone())),
            _ => None,
        }
    }

    /// Text behind the copy marker of the highlighted item
    fn selected_copy_text(&self) -> Option<String> {
        match &self.route {
            Route::Dashboard | Route::Repositories => self.selected_repository().map(|repo| repo.name.clone()),
            Route::Repository(_) => self.selected_tag().map(|(repository, tag)| format!("{repository}:{tag}")),
            _ => None,
        }
    }

    fn selected_pull_target(&self) -> Option<(String, Option<String>)> {
        match &self.route {
            Route::Dashboard | Route::Repositories => self.selected_repository().map(|repo| (repo.name.clone(), None)),
            Route::Repository(_) => self.selected_tag().map(|(repository, tag)| (repository, Some(tag))),
            _ => None,
        }
    }

    fn open_selected(&mut self) {
        match self.route {
            Route::Dashboard | Route::Repositories => {
                if let Some(repo) = self.selected_repository() {
                    let location = format!("{REPOSITORIES_PATH}/{}", repo.name);
                    self.navigate(location);
                }
            }
            Route::Repository(_) => {
                if let Some((repository, tag)) = self.selected_tag() {
                    self.show_manifest(repository, tag);
                }
            }
            _ => {}
        }
    }

    fn back(&mut self) {
        match self.route {
            Route::Repository(_) => self.navigate(REPOSITORIES_PATH.to_string()),
            Route::Repositories | Route::Login | Route::Unknown(_) => self.navigate(ROOT_PATH.to_string()),
            Route::Dashboard => {}
        }
    }

    fn copy(&mut self, text: String) {
        let clipboard = self.clipboard.clone();
        self.tasks.spawn("Copy to clipboard", async move {
            // Failures are already shown as a toast and logged
            let _ = clipboard.copy(&text).await;
            Action::None
        });
    }

    fn copy_pull_command(&mut self, repository: String, tag: Option<String>) {
        let clipboard = self.clipboard.clone();
        let host = self.config.server.pull_host();
        let port = self.config.server.registry_port;
        self.tasks.spawn("Copy pull command", async move {
            // Failures are already shown as a toast and logged
            let _ = clipboard
                .copy_pull_command(&host, port, &repository, tag.as_deref())
                .await;
            Action::None
        });
    }

    fn close_modals(&mut self) {
        self.manifest = None;
        self.show_help = false;
        self.search_focused = false;
    }

    fn focus_search(&mut self) {
        if self.route.has_search() {
            self.manifest = None;
            self.show_help = false;
            self.search_focused = true;
        }
    }

    fn show_manifest(&mut self, repository: String, tag: String) {
        self.manifest = Some(ManifestView::loading(&repository, &tag));
        let api = Arc::clone(&self.api);
        let messages = self.messages;
        self.tasks.spawn(format!("Load manifest {repository}:{tag}"), async move {
            let content = fetch_manifest(api.as_ref(), &repository, &tag, messages).await;
            Action::ManifestLoaded {
                repository,
                tag,
                content,
            }
        });
    }

    fn save_description(&mut self) {
        let Some(request) = self.editor.as_mut().and_then(DescriptionEditor::begin_save) else {
            return;
        };
        let api = Arc::clone(&self.api);
        self.tasks
            .spawn(format!("Save description of {}", request.repository), async move {
                let result = api.update_description(&request.repository, &request.content).await;
                Action::DescriptionSaved { request, result }
            });
    }

    fn submit_login(&mut self) {
        if self.route != Route::Login || self.login.submitting {
            return;
        }
        let request = self.login.take_request();
        self.login.submitting = true;
        self.login.error = None;

        let session = self.session.clone();
        self.tasks.spawn("Log in", async move {
            Action::LoginFinished(session.login(request).await)
        });
    }

    fn logout(&mut self) {
        let session = self.session.clone();
        self.tasks.spawn("Log out", async move {
            // A failed logout shows an error toast and stays put
            let _ = session.logout().await;
            Action::None
        });
    }

    fn refresh_stats(&mut self) {
        if !self.route.has_search() || self.tasks.is_running(REFRESH_STATS_TASK) {
            return;
        }
        self.last_refresh = Instant::now();
        let api = Arc::clone(&self.api);
        self.tasks.spawn(REFRESH_STATS_TASK, async move {
            match api.stats().await {
                Ok(stats) => Action::StatsLoaded(stats),
                Err(err) => {
                    log::error!("Failed to refresh stats: {err}");
                    Action::None
                }
            }
        });
    }
}

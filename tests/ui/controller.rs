use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regconsole::config::Config;
use regconsole::description::EditorMode;
use regconsole::manifest::ManifestContent;
use regconsole::notifier::ToastKind;
use regconsole::routes::Route;
use regconsole::ui::core::{Action, AppController, Focus};

use crate::support::{settle, status, FakeRegistry, MemoryClipboard};

struct Harness {
    app: AppController,
    registry: Arc<FakeRegistry>,
    clipboard: Arc<MemoryClipboard>,
}

impl Harness {
    fn new(registry: FakeRegistry) -> Self {
        Self::with_clipboard(registry, MemoryClipboard::default())
    }

    fn with_clipboard(registry: FakeRegistry, clipboard: MemoryClipboard) -> Self {
        let registry = Arc::new(registry);
        let clipboard = Arc::new(clipboard);
        let app = AppController::new(Config::default(), registry.clone(), clipboard.clone());
        Self {
            app,
            registry,
            clipboard,
        }
    }

    async fn open(&mut self, location: &str) {
        self.app.dispatch(Action::Navigate(location.to_string()));
        settle(&mut self.app).await;
    }

    fn key(&mut self, code: KeyCode) {
        self.app.handle_key(&KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(&mut self, c: char) {
        self.app.handle_key(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    fn count(&self, call: &str) -> usize {
        self.registry.calls().iter().filter(|c| *c == call).count()
    }
}

#[tokio::test]
async fn test_start_loads_dashboard() {
    let mut h = Harness::new(FakeRegistry::default());
    h.app.start();
    settle(&mut h.app).await;

    assert_eq!(h.app.route(), &Route::Dashboard);
    assert_eq!(h.app.stats().repository_count(), 3);
    assert_eq!(h.app.stats().total_size(h.app.messages()), "12.5 MB");
    assert_eq!(h.app.visible_repositories().len(), 3);
    assert!(!h.app.is_loading());
}

#[tokio::test]
async fn test_repository_load_failure_is_inline() {
    let mut h = Harness::new(FakeRegistry {
        repositories: Err(status(500, "")),
        ..FakeRegistry::default()
    });
    h.open("/repositories").await;

    assert_eq!(h.app.load_error(), Some("Failed to load: HTTP 500"));
    assert!(h.app.toast().is_none());
}

#[tokio::test]
async fn test_ctrl_k_focuses_search_and_filters() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/").await;

    h.ctrl('k');
    assert_eq!(h.app.focus(), Focus::Search);

    // Letters go to the search box, not to the keymap
    h.type_text("NG");
    assert!(!h.app.should_quit());
    let names: Vec<_> = h.app.visible_repositories().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["nginx"]);

    h.key(KeyCode::Esc);
    assert_eq!(h.app.focus(), Focus::Main);
    assert_eq!(h.app.search().query(), "NG");
}

#[tokio::test]
async fn test_ctrl_k_ignored_without_search_field() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/repositories/nginx").await;

    h.ctrl('k');
    assert_eq!(h.app.focus(), Focus::Main);
    assert!(!h.app.is_search_focused());
}

#[tokio::test]
async fn test_escape_closes_manifest() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/repositories/nginx").await;

    h.key(KeyCode::Char('m'));
    assert_eq!(h.app.manifest().unwrap().content, ManifestContent::Loading);
    settle(&mut h.app).await;

    let view = h.app.manifest().unwrap();
    assert_eq!(view.title(), "nginx:1.25");
    match &view.content {
        ManifestContent::Loaded(text) => assert!(text.contains("\n  \"schemaVersion\": 2,")),
        other => panic!("unexpected manifest content: {other:?}"),
    }

    h.key(KeyCode::Esc);
    assert!(h.app.manifest().is_none());
}

#[tokio::test]
async fn test_manifest_failure_message() {
    let mut h = Harness::new(FakeRegistry {
        manifest: Err(status(404, "")),
        ..FakeRegistry::default()
    });
    h.open("/repositories/nginx").await;

    h.key(KeyCode::Enter);
    settle(&mut h.app).await;

    assert_eq!(
        h.app.manifest().unwrap().content,
        ManifestContent::Failed("Failed to load: HTTP 404".to_string())
    );
}

#[tokio::test]
async fn test_later_manifest_wins() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/repositories/nginx").await;

    h.app.dispatch(Action::ShowManifest {
        repository: "nginx".to_string(),
        tag: "1.25".to_string(),
    });
    h.app.dispatch(Action::ShowManifest {
        repository: "nginx".to_string(),
        tag: "latest".to_string(),
    });
    settle(&mut h.app).await;

    let view = h.app.manifest().unwrap();
    assert_eq!(view.tag, "latest");
    assert!(matches!(view.content, ManifestContent::Loaded(_)));
}

#[tokio::test]
async fn test_copy_selected_repository() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/").await;

    h.key(KeyCode::Char('j'));
    h.key(KeyCode::Char('y'));
    settle(&mut h.app).await;

    assert_eq!(h.clipboard.last().as_deref(), Some("nginx"));
    let toast = h.app.toast().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.text, "Copied to clipboard");
}

#[tokio::test]
async fn test_copy_failure_toast() {
    let mut h = Harness::with_clipboard(FakeRegistry::default(), MemoryClipboard::failing());
    h.open("/").await;

    h.key(KeyCode::Char('y'));
    settle(&mut h.app).await;

    let toast = h.app.toast().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.text, "Copy failed, please copy manually");
}

#[tokio::test]
async fn test_copy_pull_command_for_tag() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/repositories/nginx").await;

    h.key(KeyCode::Down);
    h.key(KeyCode::Char('p'));
    settle(&mut h.app).await;

    assert_eq!(
        h.clipboard.last().as_deref(),
        Some("docker pull localhost:7000/nginx:latest")
    );
    assert_eq!(h.app.toast().unwrap().text, "Pull command copied: latest");
}

#[tokio::test]
async fn test_ctrl_l_logs_out() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/repositories/nginx").await;

    h.ctrl('l');
    settle(&mut h.app).await;

    assert_eq!(h.count("logout"), 1);
    assert_eq!(h.app.location(), "/");
    assert_eq!(h.app.route(), &Route::Dashboard);
}

#[tokio::test]
async fn test_logout_failure_stays() {
    let mut h = Harness::new(FakeRegistry {
        logout_result: Err(status(500, "")),
        ..FakeRegistry::default()
    });
    h.open("/repositories/nginx").await;

    h.ctrl('l');
    settle(&mut h.app).await;

    assert_eq!(h.app.location(), "/repositories/nginx");
    assert_eq!(h.app.toast().unwrap().text, "Logout failed");
}

#[tokio::test]
async fn test_edit_and_save_description() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/repositories/nginx").await;
    assert_eq!(h.app.editor().unwrap().mode(), EditorMode::Display);

    h.key(KeyCode::Char('e'));
    assert_eq!(h.app.focus(), Focus::Description);

    // Typing 'q' while editing must not quit
    h.type_text(" q");
    assert!(!h.app.should_quit());

    h.ctrl('s');
    assert!(h.app.editor().unwrap().is_saving());
    settle(&mut h.app).await;

    let editor = h.app.editor().unwrap();
    assert_eq!(editor.mode(), EditorMode::Display);
    assert_eq!(editor.raw(), "# Nginx\n\nWeb server q");
    assert_eq!(
        h.registry.saved(),
        vec![("nginx".to_string(), "# Nginx\n\nWeb server q".to_string())]
    );
    assert_eq!(h.app.toast().unwrap().text, "Description saved");
}

#[tokio::test]
async fn test_failed_save_keeps_editing() {
    let mut h = Harness::new(FakeRegistry {
        save_result: Err(status(500, "")),
        ..FakeRegistry::default()
    });
    h.open("/repositories/nginx").await;

    h.key(KeyCode::Char('e'));
    h.type_text("!");
    h.ctrl('s');
    settle(&mut h.app).await;

    let editor = h.app.editor().unwrap();
    assert_eq!(editor.mode(), EditorMode::Editing);
    assert_eq!(editor.raw(), "# Nginx\n\nWeb server");
    assert_eq!(editor.buffer(), Some("# Nginx\n\nWeb server!"));
    assert_eq!(h.app.toast().unwrap().kind, ToastKind::Error);

    h.ctrl('d');
    assert_eq!(h.app.editor().unwrap().mode(), EditorMode::Display);
}

#[tokio::test(start_paused = true)]
async fn test_late_save_leaves_new_draft_alone() {
    let mut h = Harness::new(FakeRegistry {
        save_delay: Some(Duration::from_secs(5)),
        ..FakeRegistry::default()
    });
    h.open("/repositories/nginx").await;

    h.key(KeyCode::Char('e'));
    h.type_text("!");
    h.ctrl('s');

    // Leave and reopen the page while the save is still in flight
    h.app.dispatch(Action::Navigate("/repositories".to_string()));
    h.app.dispatch(Action::Navigate("/repositories/nginx".to_string()));
    for _ in 0..50 {
        if h.app.editor().is_some() {
            break;
        }
        tokio::task::yield_now().await;
        h.app.drain_actions();
    }
    h.key(KeyCode::Char('e'));
    h.type_text(" draft");

    settle(&mut h.app).await;

    assert_eq!(
        h.registry.saved(),
        vec![("nginx".to_string(), "# Nginx\n\nWeb server!".to_string())]
    );
    let editor = h.app.editor().unwrap();
    assert_eq!(editor.mode(), EditorMode::Editing);
    assert_eq!(editor.buffer(), Some("# Nginx\n\nWeb server draft"));
    assert_eq!(editor.raw(), "# Nginx\n\nWeb server");
}

#[tokio::test]
async fn test_no_editor_without_description() {
    let mut h = Harness::new(FakeRegistry {
        description: Err(status(401, "Unauthorized")),
        ..FakeRegistry::default()
    });
    h.open("/repositories/nginx").await;

    assert!(h.app.editor().is_none());
    h.key(KeyCode::Char('e'));
    assert_eq!(h.app.focus(), Focus::Main);
    assert_eq!(h.app.tags().to_vec(), vec!["1.25", "latest"]);
}

#[tokio::test]
async fn test_login_flow() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/login").await;
    assert_eq!(h.app.focus(), Focus::Login);

    h.type_text("alice");
    h.key(KeyCode::Tab);
    h.type_text("secret");
    h.key(KeyCode::Enter);
    settle(&mut h.app).await;

    assert_eq!(h.count("login:alice"), 1);
    assert_eq!(h.app.route(), &Route::Dashboard);
}

#[tokio::test]
async fn test_login_rejected_shows_message() {
    let mut h = Harness::new(FakeRegistry {
        login_result: Err(status(401, "")),
        ..FakeRegistry::default()
    });
    h.open("/login").await;

    h.type_text("alice");
    h.key(KeyCode::Tab);
    h.type_text("wrong");
    h.key(KeyCode::Enter);
    settle(&mut h.app).await;

    assert_eq!(h.app.route(), &Route::Login);
    assert_eq!(h.app.login_form().error, Some("Invalid username or password"));
    assert!(!h.app.login_form().submitting);
}

#[tokio::test]
async fn test_refresh_stats_on_demand() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/").await;
    assert_eq!(h.count("stats"), 1);

    h.key(KeyCode::Char('r'));
    settle(&mut h.app).await;
    assert_eq!(h.count("stats"), 2);
}

#[tokio::test]
async fn test_back_and_open_navigation() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/repositories").await;

    h.key(KeyCode::Down);
    h.key(KeyCode::Enter);
    settle(&mut h.app).await;
    assert_eq!(h.app.route(), &Route::Repository("nginx".to_string()));

    h.key(KeyCode::Char('h'));
    settle(&mut h.app).await;
    assert_eq!(h.app.route(), &Route::Repositories);
}

#[tokio::test]
async fn test_quit() {
    let mut h = Harness::new(FakeRegistry::default());
    h.open("/").await;

    h.key(KeyCode::Char('q'));
    assert!(h.app.should_quit());
}

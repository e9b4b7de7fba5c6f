#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use regconsole::backend::{ApiError, ApiResult, RegistryApi, RegistryStats, RepositorySummary, SessionRequest, TagList};
use regconsole::clipboard::{ClipboardBackend, ClipboardError};
use regconsole::session::Navigator;
use regconsole::ui::core::AppController;

pub fn status(code: u16, body: &str) -> ApiError {
    ApiError::Status {
        status: code,
        body: body.to_string(),
    }
}

pub fn repo(name: &str, tag_count: u64) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        tag_count,
    }
}

/// Run background tasks until none is left and every queued action is applied
pub async fn settle(app: &mut AppController) {
    loop {
        app.tick();
        if app.pending_tasks() == 0 {
            app.drain_actions();
            if app.pending_tasks() == 0 {
                break;
            }
            continue;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Scripted registry manager
pub struct FakeRegistry {
    pub stats: ApiResult<RegistryStats>,
    pub repositories: ApiResult<Vec<RepositorySummary>>,
    pub tags: Vec<String>,
    pub description: ApiResult<String>,
    pub manifest: ApiResult<String>,
    pub save_result: ApiResult<()>,
    pub login_result: ApiResult<()>,
    pub logout_result: ApiResult<()>,
    /// How long a description save takes to answer
    pub save_delay: Option<Duration>,
    pub calls: Mutex<Vec<String>>,
    pub saved: Mutex<Vec<(String, String)>>,
}

impl Default for FakeRegistry {
    fn default() -> Self {
        Self {
            stats: Ok(RegistryStats {
                repository_count: 3,
                total_tags: 7,
                total_size: "12.5 MB".to_string(),
            }),
            repositories: Ok(vec![repo("alpine", 2), repo("nginx", 4), repo("redis", 1)]),
            tags: vec!["1.25".to_string(), "latest".to_string()],
            description: Ok("# Nginx\n\nWeb server".to_string()),
            manifest: Ok(r#"{"schemaVersion":2,"config":{"size":1469}}"#.to_string()),
            save_result: Ok(()),
            login_result: Ok(()),
            logout_result: Ok(()),
            save_delay: None,
            calls: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
        }
    }
}

impl FakeRegistry {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn saved(&self) -> Vec<(String, String)> {
        self.saved.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl RegistryApi for FakeRegistry {
    async fn stats(&self) -> ApiResult<RegistryStats> {
        self.record("stats");
        self.stats.clone()
    }

    async fn list_repositories(&self) -> ApiResult<Vec<RepositorySummary>> {
        self.record("repositories");
        self.repositories.clone()
    }

    async fn list_tags(&self, repository: &str) -> ApiResult<TagList> {
        self.record(format!("tags:{repository}"));
        Ok(TagList {
            name: repository.to_string(),
            tags: self.tags.clone(),
        })
    }

    async fn manifest(&self, repository: &str, tag: &str) -> ApiResult<String> {
        self.record(format!("manifest:{repository}:{tag}"));
        self.manifest.clone()
    }

    async fn description(&self, repository: &str) -> ApiResult<String> {
        self.record(format!("description:{repository}"));
        self.description.clone()
    }

    async fn update_description(&self, repository: &str, raw: &str) -> ApiResult<()> {
        self.record(format!("save:{repository}"));
        if let Some(delay) = self.save_delay {
            tokio::time::sleep(delay).await;
        }
        self.saved
            .lock()
            .unwrap()
            .push((repository.to_string(), raw.to_string()));
        self.save_result.clone()
    }

    async fn login(&self, request: SessionRequest) -> ApiResult<()> {
        self.record(format!("login:{}", request.username));
        self.login_result.clone()
    }

    async fn logout(&self) -> ApiResult<()> {
        self.record("logout");
        self.logout_result.clone()
    }
}

/// Clipboard that keeps everything written to it
#[derive(Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Navigator that remembers redirects
#[derive(Default)]
pub struct RecordingNavigator {
    locations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn locations(&self) -> Vec<String> {
        self.locations.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, location: &str) {
        self.locations.lock().unwrap().push(location.to_string());
    }
}

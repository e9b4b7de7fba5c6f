//! System clipboard access with toast feedback.

use std::sync::Arc;

use crate::constants::DEFAULT_TAG;
use crate::messages::Messages;
use crate::notifier::Notifier;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Something that can hold text for the user to paste elsewhere
pub trait ClipboardBackend: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard through `arboard`.
///
/// A fresh handle is opened per write; on X11 the contents stay available
/// only while some handle is alive, which arboard takes care of.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Build the `docker pull` command shown for a tag
pub fn pull_command(host: &str, port: u16, repository: &str, tag: Option<&str>) -> String {
    let tag = tag.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TAG);
    format!("docker pull {host}:{port}/{repository}:{tag}")
}

#[derive(Clone)]
pub struct ClipboardService {
    backend: Arc<dyn ClipboardBackend>,
    notifier: Notifier,
    messages: &'static Messages,
}

impl ClipboardService {
    pub fn new(backend: Arc<dyn ClipboardBackend>, notifier: Notifier, messages: &'static Messages) -> Self {
        Self {
            backend,
            notifier,
            messages,
        }
    }

    /// Copy `text` and report the outcome as a toast.
    ///
    /// The platform call runs on the blocking pool; the returned future
    /// resolves once the clipboard accepted or refused the text.
    pub async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let backend = Arc::clone(&self.backend);
        let owned = text.to_string();
        let result = tokio::task::spawn_blocking(move || backend.set_text(&owned))
            .await
            .unwrap_or_else(|e| Err(ClipboardError::Write(e.to_string())));

        match &result {
            Ok(()) => self.notifier.success(self.messages.copied),
            Err(e) => {
                log::error!("Failed to copy text: {e}");
                self.notifier.error(self.messages.copy_failed);
            }
        }
        result
    }

    /// Copy the pull command for `repository:tag`
    pub async fn copy_pull_command(
        &self,
        host: &str,
        port: u16,
        repository: &str,
        tag: Option<&str>,
    ) -> Result<(), ClipboardError> {
        let command = pull_command(host, port, repository, tag);
        self.copy(&command).await?;
        let tag = tag.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TAG);
        self.notifier
            .success(format!("{}: {}", self.messages.pull_command_copied, tag));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Language;
    use crate::notifier::ToastKind;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Mutex<Option<String>>,
        deny: bool,
    }

    impl ClipboardBackend for MemoryClipboard {
        fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.deny {
                return Err(ClipboardError::Unavailable("permission denied".into()));
            }
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    fn service(backend: Arc<MemoryClipboard>) -> (ClipboardService, Notifier) {
        let notifier = Notifier::default();
        let service = ClipboardService::new(backend, notifier.clone(), Messages::for_language(Language::En));
        (service, notifier)
    }

    #[test]
    fn test_pull_command_format() {
        assert_eq!(
            pull_command("registry.local", 7000, "library/nginx", Some("1.25")),
            "docker pull registry.local:7000/library/nginx:1.25"
        );
        assert_eq!(
            pull_command("registry.local", 7000, "alpine", None),
            "docker pull registry.local:7000/alpine:latest"
        );
    }

    #[tokio::test]
    async fn test_copy_success_notifies() {
        let backend = Arc::new(MemoryClipboard::default());
        let (service, notifier) = service(Arc::clone(&backend));

        service.copy("sha256:abc").await.unwrap();

        assert_eq!(backend.contents.lock().unwrap().as_deref(), Some("sha256:abc"));
        let toast = notifier.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.text, "Copied to clipboard");
    }

    #[tokio::test]
    async fn test_copy_failure_notifies_error() {
        let backend = Arc::new(MemoryClipboard {
            deny: true,
            ..Default::default()
        });
        let (service, notifier) = service(backend);

        assert!(service.copy("text").await.is_err());
        let toast = notifier.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.text, "Copy failed, please copy manually");
    }

    #[tokio::test]
    async fn test_copy_pull_command_reports_tag() {
        let backend = Arc::new(MemoryClipboard::default());
        let (service, notifier) = service(Arc::clone(&backend));

        service
            .copy_pull_command("localhost", 7000, "redis", Some("7"))
            .await
            .unwrap();

        assert_eq!(
            backend.contents.lock().unwrap().as_deref(),
            Some("docker pull localhost:7000/redis:7")
        );
        assert_eq!(notifier.current().unwrap().text, "Pull command copied: 7");
    }
}

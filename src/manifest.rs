//! Manifest viewer modal.

use crate::backend::{ApiError, RegistryApi};
use crate::messages::Messages;
use crate::utils::format::pretty_manifest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestContent {
    Loading,
    /// Pretty printed when the body was JSON, verbatim otherwise
    Loaded(String),
    Failed(String),
}

/// State of the manifest modal for one `repository:tag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestView {
    pub repository: String,
    pub tag: String,
    pub content: ManifestContent,
}

impl ManifestView {
    pub fn loading(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            tag: tag.into(),
            content: ManifestContent::Loading,
        }
    }

    pub fn title(&self) -> String {
        format!("{}:{}", self.repository, self.tag)
    }

    /// Text for the modal body
    pub fn body<'a>(&'a self, messages: &'a Messages) -> &'a str {
        match &self.content {
            ManifestContent::Loading => messages.loading,
            ManifestContent::Loaded(text) | ManifestContent::Failed(text) => text,
        }
    }

    /// Sum of config and layer sizes declared by a loaded v2 manifest
    pub fn image_size(&self) -> Option<u64> {
        let ManifestContent::Loaded(text) = &self.content else {
            return None;
        };
        let manifest: serde_json::Value = serde_json::from_str(text).ok()?;
        let config = manifest["config"]["size"].as_u64().unwrap_or(0);
        // Sizes come from the server; an overflowing total is shown as unknown
        manifest["layers"]
            .as_array()?
            .iter()
            .filter_map(|layer| layer["size"].as_u64())
            .try_fold(config, u64::checked_add)
    }

    /// Apply a fetch result, unless the modal has moved on to another manifest
    pub fn resolve(&mut self, repository: &str, tag: &str, content: ManifestContent) -> bool {
        if self.repository != repository || self.tag != tag {
            return false;
        }
        self.content = content;
        true
    }
}

/// Turn a fetch result into modal content
pub fn manifest_content(result: Result<String, ApiError>, messages: &Messages) -> ManifestContent {
    match result {
        Ok(body) => ManifestContent::Loaded(pretty_manifest(&body)),
        Err(err) => {
            log::error!("Failed to load manifest: {err}");
            ManifestContent::Failed(format!("{}: {err}", messages.load_failed))
        }
    }
}

/// Fetch and format the manifest of `repository:tag`
pub async fn fetch_manifest(
    api: &dyn RegistryApi,
    repository: &str,
    tag: &str,
    messages: &Messages,
) -> ManifestContent {
    manifest_content(api.manifest(repository, tag).await, messages)
}

//! Repository description editor.
//!
//! The editor toggles between showing the rendered description and editing
//! its Markdown source. Saving sends the edit buffer to the registry manager;
//! only a successful save replaces the committed source.
//!
//! ```text
//!   Display --edit--> Editing --cancel--------------> Display (raw kept)
//!                        |----save ok---------------> Display (raw = buffer)
//!                        `----save failed-----------> Editing (raw kept)
//! ```

pub mod render;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub use render::{HtmlRenderer, MarkdownRenderer, TerminalRenderer};

use crate::backend::{ApiError, ApiResult, RegistryApi};
use crate::messages::Messages;
use crate::notifier::Notifier;
use crate::routes::repository_name;

/// Visible mode of the description panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Display,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EditState {
    Display,
    Editing { buffer: String, saving: bool },
}

static NEXT_EDITOR_ID: AtomicU64 = AtomicU64::new(1);

/// A save that has been started and awaits the server's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub repository: String,
    pub content: String,
    editor_id: u64,
}

pub struct DescriptionEditor {
    id: u64,
    repository: String,
    raw: String,
    rendered: String,
    state: EditState,
    renderer: Arc<dyn MarkdownRenderer>,
    notifier: Notifier,
    messages: &'static Messages,
}

impl DescriptionEditor {
    /// Attach an editor to the page at `location`.
    ///
    /// Returns `None`, leaving the page without an editor, unless the
    /// location is a repository detail path and a description was loaded
    /// with the page (an empty one counts).
    pub fn attach(
        location: &str,
        initial_raw: Option<String>,
        renderer: Arc<dyn MarkdownRenderer>,
        notifier: Notifier,
        messages: &'static Messages,
    ) -> Option<Self> {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let repository = repository_name(path)?;
        let raw = initial_raw?;
        let rendered = renderer.render(&raw);
        Some(Self {
            id: NEXT_EDITOR_ID.fetch_add(1, Ordering::Relaxed),
            repository,
            raw,
            rendered,
            state: EditState::Display,
            renderer,
            notifier,
            messages,
        })
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Last committed Markdown source
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Render of [`Self::raw`]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn mode(&self) -> EditorMode {
        match self.state {
            EditState::Display => EditorMode::Display,
            EditState::Editing { .. } => EditorMode::Editing,
        }
    }

    /// Edit buffer; `None` outside of editing
    pub fn buffer(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { buffer, .. } => Some(buffer),
            EditState::Display => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.state, EditState::Editing { saving: true, .. })
    }

    /// Start editing with the committed source in the buffer
    pub fn edit(&mut self) -> bool {
        if self.state != EditState::Display {
            return false;
        }
        self.state = EditState::Editing {
            buffer: self.raw.clone(),
            saving: false,
        };
        true
    }

    /// Drop the buffer and show the committed description again
    pub fn cancel(&mut self) -> bool {
        match self.state {
            EditState::Editing { saving: false, .. } => {
                self.state = EditState::Display;
                self.rendered = self.renderer.render(&self.raw);
                true
            }
            _ => false,
        }
    }

    fn editable_buffer(&mut self) -> Option<&mut String> {
        match &mut self.state {
            EditState::Editing { buffer, saving: false } => Some(buffer),
            _ => None,
        }
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let Some(buffer) = self.editable_buffer() {
            *buffer = text.into();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(buffer) = self.editable_buffer() {
            buffer.push(c);
        }
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = self.editable_buffer() {
            buffer.pop();
        }
    }

    /// Mark a save as in flight and hand out what must be sent.
    ///
    /// Returns `None` when not editing or while another save is pending;
    /// the buffer is frozen until [`Self::finish_save`].
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        match &mut self.state {
            EditState::Editing { buffer, saving } if !*saving => {
                *saving = true;
                Some(SaveRequest {
                    repository: self.repository.clone(),
                    content: buffer.clone(),
                    editor_id: self.id,
                })
            }
            _ => None,
        }
    }

    /// Apply the server's answer to a save started by [`Self::begin_save`].
    ///
    /// Answers to saves this editor did not start, or that arrive while no
    /// save is pending, leave the editor untouched.
    pub fn finish_save(&mut self, request: SaveRequest, result: ApiResult<()>) -> ApiResult<()> {
        if request.editor_id != self.id || !self.is_saving() {
            log::debug!("Ignoring stale save result for {}", request.repository);
            return result;
        }
        match &result {
            Ok(()) => {
                log::info!("Saved description of {}", request.repository);
                self.raw = request.content;
                self.rendered = self.renderer.render(&self.raw);
                self.state = EditState::Display;
                self.notifier.success(self.messages.description_saved);
            }
            Err(err) => {
                log::error!("Failed to save description of {}: {err}", request.repository);
                if let EditState::Editing { saving, .. } = &mut self.state {
                    *saving = false;
                }
                self.notifier.error(self.failure_text(err));
            }
        }
        result
    }

    fn failure_text(&self, err: &ApiError) -> String {
        err.server_message()
            .unwrap_or_else(|| self.messages.description_save_failed.to_string())
    }

    /// Send the buffer and wait for the outcome
    pub async fn save(&mut self, api: &dyn RegistryApi) -> ApiResult<()> {
        let Some(request) = self.begin_save() else {
            return Ok(());
        };
        let result = api.update_description(&request.repository, &request.content).await;
        self.finish_save(request, result)
    }
}

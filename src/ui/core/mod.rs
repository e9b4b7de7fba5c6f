//! Core UI machinery for the console.
//!
//! - [`actions`] - everything that can happen, as one enum
//! - [`keymap`] - key chords registered at startup
//! - [`controller`] - state owner and action dispatcher
//! - [`event_handler`] - terminal event polling
//! - [`task_manager`] - background registry calls reporting back as actions

pub mod actions;
pub mod controller;
pub mod event_handler;
pub mod keymap;
pub mod task_manager;

pub use actions::Action;
pub use controller::{ActionNavigator, AppController, Focus, LoginField, LoginForm};
pub use event_handler::{EventHandler, EventType};
pub use keymap::{Command, KeyChord, Keymap};
pub use task_manager::{TaskId, TaskManager};

//! Terminal UI for the registry console.
//!
//! Rendering is a pure function of [`core::AppController`] state; all input
//! goes through the controller's keymap and dispatcher.

pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use layout::LayoutManager;
pub use renderer::run_app;

//! regconsole - a terminal console for Docker registry manager instances
//!
//! The console browses repositories and tags, shows manifests, copies pull
//! commands, edits repository descriptions and manages the login session of
//! a registry manager web service. The client-side behaviors live in
//! rendering-agnostic modules; [`ui`] drives them from a Ratatui terminal.
//!
//! # Modules
//!
//! * [`backend`] - registry manager HTTP API
//! * [`notifier`] - transient toast notifications
//! * [`clipboard`] - clipboard writes with feedback
//! * [`description`] - repository description editor
//! * [`session`] - login and logout
//! * [`manifest`], [`stats`], [`search`], [`routes`] - page behaviors
//! * [`config`], [`logger`], [`messages`] - application plumbing
//! * [`ui`] - terminal user interface

/// Registry manager API client
pub mod backend;

/// Clipboard service and pull command helper
pub mod clipboard;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Markdown description editor
pub mod description;

/// File logging setup
pub mod logger;

/// Manifest viewer state
pub mod manifest;

/// Localized user-facing texts
pub mod messages;

/// Toast notifications
pub mod notifier;

/// Location parsing
pub mod routes;

/// Repository list filtering
pub mod search;

/// Login and logout flows
pub mod session;

/// Registry counters
pub mod stats;

/// Terminal user interface components and rendering
pub mod ui;

/// Formatting helpers for sizes, times and manifests
pub mod utils;

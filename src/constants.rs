//! Constants used throughout the application
//!
//! This module centralizes default values, endpoint paths and layout sizes
//! so that the configuration, the API client and the UI agree on them.

// Connection defaults
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_API_BASE: &str = "/api";
/// Port shown in `docker pull` commands
pub const DEFAULT_REGISTRY_PORT: u16 = 7000;
/// Stats refresh interval in seconds (auto-refresh itself is off by default)
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 86_400;

// Toast timings in milliseconds
pub const TOAST_SHOW_DELAY_MS: u64 = 100;
pub const TOAST_DISPLAY_MS: u64 = 3000;
pub const TOAST_FADE_MS: u64 = 300;

// Registry wire details
pub const MANIFEST_V2_MEDIA_TYPE: &str = "application/vnd.docker.distribution.manifest.v2+json";
pub const DEFAULT_TAG: &str = "latest";
pub const USER_AGENT: &str = concat!("regconsole/", env!("CARGO_PKG_VERSION"));

// Locations
pub const ROOT_PATH: &str = "/";
pub const REPOSITORIES_PATH: &str = "/repositories";
pub const LOGIN_PATH: &str = "/login";

// Files
pub const CONFIG_FILE_NAME: &str = "regconsole.toml";
pub const APP_DIR_NAME: &str = "regconsole";
pub const LOG_FILE_NAME: &str = "regconsole.log";

// UI Layout Constants
/// Width of the toast box in columns
pub const TOAST_WIDTH: u16 = 44;
/// Height of the toast box in lines (borders included)
pub const TOAST_HEIGHT: u16 = 3;
/// Lines reserved for the header with the stats counters
pub const HEADER_HEIGHT: u16 = 3;

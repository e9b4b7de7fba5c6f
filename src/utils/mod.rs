//! Utility modules for regconsole.
//!
//! - [`datetime`] - Relative time strings ("3 minutes ago")
//! - [`format`] - Byte sizes and manifest pretty printing

pub mod datetime;
pub mod format;

//! Summary counters shown in the header.

use chrono::{DateTime, Utc};

use crate::backend::RegistryStats;
use crate::messages::Messages;
use crate::utils::datetime::format_relative_time;

/// Last known registry stats; refreshes are best effort
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsPanel {
    stats: Option<RegistryStats>,
    updated_at: Option<DateTime<Utc>>,
}

impl StatsPanel {
    pub fn stats(&self) -> Option<&RegistryStats> {
        self.stats.as_ref()
    }

    pub fn set(&mut self, stats: RegistryStats) {
        self.set_at(stats, Utc::now());
    }

    pub fn set_at(&mut self, stats: RegistryStats, at: DateTime<Utc>) {
        self.stats = Some(stats);
        self.updated_at = Some(at);
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// "5 minutes ago" style age of the counters, if any were loaded
    pub fn age(&self, messages: &Messages) -> Option<String> {
        self.updated_at.map(|at| format_relative_time(&at, messages))
    }

    pub fn repository_count(&self) -> u64 {
        self.stats.as_ref().map_or(0, |s| s.repository_count)
    }

    pub fn total_tags(&self) -> u64 {
        self.stats.as_ref().map_or(0, |s| s.total_tags)
    }

    pub fn total_size<'a>(&'a self, messages: &'a Messages) -> &'a str {
        match &self.stats {
            Some(stats) if !stats.total_size.is_empty() => &stats.total_size,
            _ => messages.not_available,
        }
    }
}

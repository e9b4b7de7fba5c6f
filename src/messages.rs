//! User-facing message catalog.
//!
//! Every string shown to the user goes through [`Messages`] so the console
//! speaks the configured [`Language`].

use serde::{Deserialize, Serialize};

/// Display language of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

/// Unit of a relative time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

/// Localized texts for toasts, inline errors and relative times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub pull_command_copied: &'static str,
    pub description_saved: &'static str,
    pub description_save_failed: &'static str,
    pub invalid_credentials: &'static str,
    pub login_failed: &'static str,
    pub login_network_error: &'static str,
    pub login_missing_fields: &'static str,
    pub logout_failed: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub not_available: &'static str,
    pub just_now: &'static str,
    pub minute_ago: &'static str,
    pub minutes_ago: &'static str,
    pub hour_ago: &'static str,
    pub hours_ago: &'static str,
    pub day_ago: &'static str,
    pub days_ago: &'static str,
}

const EN: Messages = Messages {
    copied: "Copied to clipboard",
    copy_failed: "Copy failed, please copy manually",
    pull_command_copied: "Pull command copied",
    description_saved: "Description saved",
    description_save_failed: "Failed to save description",
    invalid_credentials: "Invalid username or password",
    login_failed: "Login failed, please try again later",
    login_network_error: "Network error, please try again",
    login_missing_fields: "Please enter username and password",
    logout_failed: "Logout failed",
    loading: "Loading...",
    load_failed: "Failed to load",
    not_available: "N/A",
    just_now: "just now",
    minute_ago: "minute ago",
    minutes_ago: "minutes ago",
    hour_ago: "hour ago",
    hours_ago: "hours ago",
    day_ago: "day ago",
    days_ago: "days ago",
};

const ZH: Messages = Messages {
    copied: "已复制到剪贴板",
    copy_failed: "复制失败，请手动复制",
    pull_command_copied: "拉取命令已复制",
    description_saved: "说明已保存",
    description_save_failed: "保存说明失败",
    invalid_credentials: "用户名或密码错误",
    login_failed: "登录失败，请稍后重试",
    login_network_error: "网络错误，请重试",
    login_missing_fields: "请输入用户名和密码",
    logout_failed: "退出登录失败",
    loading: "加载中...",
    load_failed: "加载失败",
    not_available: "N/A",
    just_now: "刚刚",
    minute_ago: "分钟前",
    minutes_ago: "分钟前",
    hour_ago: "小时前",
    hours_ago: "小时前",
    day_ago: "天前",
    days_ago: "天前",
};

impl Messages {
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }

    /// Format an amount of time units ("1 minute ago", "3 分钟前")
    pub fn ago(&self, amount: i64, unit: TimeUnit) -> String {
        let label = match (unit, amount == 1) {
            (TimeUnit::Minute, true) => self.minute_ago,
            (TimeUnit::Minute, false) => self.minutes_ago,
            (TimeUnit::Hour, true) => self.hour_ago,
            (TimeUnit::Hour, false) => self.hours_ago,
            (TimeUnit::Day, true) => self.day_ago,
            (TimeUnit::Day, false) => self.days_ago,
        };
        format!("{amount} {label}")
    }
}

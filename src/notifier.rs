//! Transient toast notifications.
//!
//! A toast goes `Pending` → `Visible` → `Hiding` → removed on a fixed
//! schedule measured from its creation. Only one toast is ever live: a new
//! notification clears the previous one and aborts its timers before
//! scheduling its own.

use crate::config::NotificationConfig;
use chrono::{DateTime, Local};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Kind of toast (determines color and icon)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted, not shown yet
    Pending,
    Visible,
    /// Fading out, removal follows
    Hiding,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Local>,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn is_shown(&self) -> bool {
        self.phase != ToastPhase::Pending
    }
}

/// Toast schedule, all offsets measured from creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub show_delay: Duration,
    pub display: Duration,
    pub fade: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self::from(&NotificationConfig::default())
    }
}

impl From<&NotificationConfig> for ToastTiming {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            show_delay: Duration::from_millis(config.show_delay_ms),
            display: Duration::from_millis(config.display_ms),
            fade: Duration::from_millis(config.fade_ms),
        }
    }
}

#[derive(Default)]
struct NotifierState {
    toasts: Vec<Toast>,
    timer: Option<JoinHandle<()>>,
    next_id: u64,
}

/// Shared handle to the toast surface. Cloning is cheap.
#[derive(Clone, Default)]
pub struct Notifier {
    state: Arc<Mutex<NotifierState>>,
    timing: ToastTiming,
}

fn lock(state: &Mutex<NotifierState>) -> MutexGuard<'_, NotifierState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Notifier {
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            state: Arc::default(),
            timing,
        }
    }

    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Error);
    }

    /// Replace whatever is on screen with a new toast.
    ///
    /// Must be called from within a tokio runtime for the toast to advance
    /// through its lifecycle.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let text = message.into();
        let mut state = lock(&self.state);

        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.toasts.clear();

        let id = state.next_id;
        state.next_id += 1;
        log::debug!("toast #{id} ({kind:?}): {text}");
        state.toasts.push(Toast {
            id,
            text,
            kind,
            created_at: Local::now(),
            phase: ToastPhase::Pending,
        });

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let shared = Arc::clone(&self.state);
                let timing = self.timing;
                state.timer = Some(runtime.spawn(run_lifecycle(shared, id, timing)));
            }
            Err(_) => log::warn!("toast #{id} created outside a runtime; it will not be dismissed"),
        }
    }

    /// The live toast, if any
    pub fn current(&self) -> Option<Toast> {
        lock(&self.state).toasts.last().cloned()
    }

    /// Every toast currently in the surface
    pub fn toasts(&self) -> Vec<Toast> {
        lock(&self.state).toasts.clone()
    }

    pub fn clear(&self) {
        let mut state = lock(&self.state);
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.toasts.clear();
    }
}

async fn run_lifecycle(state: Arc<Mutex<NotifierState>>, id: u64, timing: ToastTiming) {
    let created = Instant::now();

    tokio::time::sleep_until(created + timing.show_delay).await;
    set_phase(&state, id, ToastPhase::Visible);

    tokio::time::sleep_until(created + timing.display).await;
    set_phase(&state, id, ToastPhase::Hiding);

    tokio::time::sleep_until(created + timing.display + timing.fade).await;
    let mut state = lock(&state);
    state.toasts.retain(|toast| toast.id != id);
    if state.toasts.is_empty() {
        state.timer = None;
    }
}

fn set_phase(state: &Mutex<NotifierState>, id: u64, phase: ToastPhase) {
    if let Some(toast) = lock(state).toasts.iter_mut().find(|toast| toast.id == id) {
        toast.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_lifecycle() {
        let notifier = Notifier::default();
        notifier.success("Copied to clipboard");

        let toast = notifier.current().unwrap();
        assert_eq!(toast.phase, ToastPhase::Pending);
        assert_eq!(toast.kind, ToastKind::Success);

        advance(150).await;
        assert_eq!(notifier.current().unwrap().phase, ToastPhase::Visible);

        advance(2900).await; // t = 3050
        assert_eq!(notifier.current().unwrap().phase, ToastPhase::Hiding);

        advance(300).await; // t = 3350
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_toast_replaces_previous() {
        let notifier = Notifier::default();
        notifier.success("first");
        notifier.error("second");
        notifier.error("third");

        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].text, "third");
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replaced_toast_timers_do_not_fire() {
        let notifier = Notifier::default();
        notifier.success("old");
        advance(2900).await;
        notifier.success("new");

        // The old toast would start hiding at t = 3000 and vanish at t = 3300.
        advance(500).await;
        let toast = notifier.current().unwrap();
        assert_eq!(toast.text, "new");
        assert_eq!(toast.phase, ToastPhase::Visible);
    }

    #[test]
    fn test_notify_without_runtime_keeps_toast() {
        let notifier = Notifier::default();
        notifier.error("offline");
        assert_eq!(notifier.current().unwrap().phase, ToastPhase::Pending);
    }

    #[test]
    fn test_timing_from_config() {
        let config = NotificationConfig {
            show_delay_ms: 50,
            display_ms: 1000,
            fade_ms: 200,
        };
        let timing = ToastTiming::from(&config);
        assert_eq!(timing.show_delay, Duration::from_millis(50));
        assert_eq!(timing.display + timing.fade, Duration::from_millis(1200));
    }
}

//! Toast notifications.
//!
//! At most one toast is on screen. Showing a new one replaces the current
//! one, and an expiry timer only removes the toast it was started for.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
        }
    }

    /// Background gradient of the toast
    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Info => "linear-gradient(45deg, #2196F3, #64B5F6)",
            NotificationKind::Success => "linear-gradient(45deg, #4CAF50, #81C784)",
            NotificationKind::Warning => "linear-gradient(45deg, #FF9800, #FFB74D)",
        }
    }

    /// Unknown kinds fall back to `Info`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            _ => NotificationKind::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: u32,
}

/// Where the single visible toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted off-screen, about to slide in
    Entering,
    Shown,
    /// Sliding out, removed after the exit animation
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub notification: Notification,
    pub phase: ToastPhase,
}

/// Single-slot toast state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    next_id: u64,
    current: Option<ActiveToast>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever is showing and returns the id of the new toast.
    pub fn show(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u32,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(ActiveToast {
            notification: Notification {
                id,
                title: title.into(),
                message: message.into(),
                kind,
                duration_ms,
            },
            phase: ToastPhase::Entering,
        });
        id
    }

    pub fn current(&self) -> Option<&ActiveToast> {
        self.current.as_ref()
    }

    /// Moves toast `id` to `Shown`. Stale ids are ignored.
    pub fn reveal(&mut self, id: u64) -> bool {
        self.set_phase(id, ToastPhase::Shown)
    }

    /// Starts the exit animation of toast `id`. Stale ids are ignored.
    pub fn begin_leave(&mut self, id: u64) -> bool {
        self.set_phase(id, ToastPhase::Leaving)
    }

    /// Removes toast `id` if it is still the current one.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.is_current(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.current
            .as_ref()
            .map(|t| t.notification.id == id)
            .unwrap_or(false)
    }

    fn set_phase(&mut self, id: u64, phase: ToastPhase) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.notification.id == id => {
                toast.phase = phase;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_current_toast() {
        let mut slot = ToastSlot::new();
        let first = slot.show("Location", "Call us", NotificationKind::Info, 6000);
        let second = slot.show("Order", "Call us", NotificationKind::Success, 6000);

        assert_ne!(first, second);
        let current = slot.current().unwrap();
        assert_eq!(current.notification.id, second);
        assert_eq!(current.notification.title, "Order");
        assert_eq!(current.phase, ToastPhase::Entering);
    }

    #[test]
    fn test_stale_timer_does_not_remove_newer_toast() {
        let mut slot = ToastSlot::new();
        let first = slot.show("A", "a", NotificationKind::Info, 6000);
        let second = slot.show("B", "b", NotificationKind::Info, 6000);

        assert!(!slot.begin_leave(first));
        assert!(!slot.remove(first));
        assert!(slot.is_current(second));
    }

    #[test]
    fn test_lifecycle() {
        let mut slot = ToastSlot::new();
        let id = slot.show("A", "a", NotificationKind::Warning, 3000);
        assert!(slot.reveal(id));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Shown);
        assert!(slot.begin_leave(id));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Leaving);
        assert!(slot.remove(id));
        assert!(slot.current().is_none());
        assert!(!slot.remove(id));
    }

    #[test]
    fn test_unknown_kind_falls_back_to_info() {
        assert_eq!(NotificationKind::from_str("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from_str("error"), NotificationKind::Info);
    }
}

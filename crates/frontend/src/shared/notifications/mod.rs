//! Toast notifications.
//!
//! `NotificationService` owns the single toast slot; `NotificationHost`
//! renders it and must be mounted once (the shell does this).

use crate::layout::global_context::site_config;
use contracts::shared::notification::{NotificationKind, ToastPhase, ToastSlot};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Delay before a freshly mounted toast slides in
const ENTER_DELAY_MS: u32 = 100;

#[derive(Clone, Copy)]
pub struct NotificationService {
    slot: RwSignal<ToastSlot>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::new()),
        }
    }

    /// Shows a toast for the configured default duration.
    pub fn show(&self, title: &str, message: &str, kind: NotificationKind) -> u64 {
        self.show_for(title, message, kind, site_config().timing.notification_ms)
    }

    /// Replaces any visible toast with a new one and schedules its
    /// slide-in, expiry and removal.
    pub fn show_for(
        &self,
        title: &str,
        message: &str,
        kind: NotificationKind,
        duration_ms: u32,
    ) -> u64 {
        let mut id = 0;
        self.slot.update(|slot| {
            id = slot.show(title, message, kind, duration_ms);
        });
        log::debug!("toast #{} [{}] {}", id, kind.as_str(), title);

        let slot = self.slot;
        let exit_ms = site_config().timing.toast_exit_ms;
        spawn_local(async move {
            TimeoutFuture::new(ENTER_DELAY_MS).await;
            if !update_if_current(slot, id, |s| s.reveal(id)) {
                return;
            }
            TimeoutFuture::new(duration_ms).await;
            if !update_if_current(slot, id, |s| s.begin_leave(id)) {
                return;
            }
            TimeoutFuture::new(exit_ms).await;
            update_if_current(slot, id, |s| s.remove(id));
        });
        id
    }

    /// Close button: removes the toast immediately.
    pub fn dismiss(&self, id: u64) {
        update_if_current(self.slot, id, |s| s.remove(id));
    }

    pub fn location_info(&self) {
        self.show(
            "📍 Location Info",
            &site_config().location_message(),
            NotificationKind::Info,
        );
    }

    pub fn order_info(&self) {
        self.show(
            "🛒 Order Now",
            &site_config().order_message(),
            NotificationKind::Success,
        );
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `f` only while toast `id` is still on screen; a newer toast
/// makes every pending step of an older one a no-op.
fn update_if_current(
    slot: RwSignal<ToastSlot>,
    id: u64,
    f: impl FnOnce(&mut ToastSlot) -> bool,
) -> bool {
    let current = slot
        .try_with_untracked(|s| s.is_current(id))
        .unwrap_or(false);
    if !current {
        return false;
    }
    let mut changed = false;
    slot.update(|s| changed = f(s));
    changed
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    // Re-mount only when a different toast takes the slot so that phase
    // changes animate through the CSS transition.
    let current_id = Memo::new(move |_| {
        svc.slot
            .with(|slot| slot.current().map(|t| t.notification.id))
    });

    move || {
        let id = current_id.get()?;
        let toast = svc.slot.with_untracked(|slot| slot.current().cloned())?;
        let kind = toast.notification.kind;
        let transform = move || {
            let phase = svc.slot.with(|slot| {
                slot.current()
                    .filter(|t| t.notification.id == id)
                    .map(|t| t.phase)
            });
            match phase {
                Some(ToastPhase::Shown) => "translateX(0)",
                _ => "translateX(100%)",
            }
        };
        Some(view! {
            <div
                class=format!("notification {}", kind.as_str())
                role="status"
                style:background=kind.background()
                style:transform=transform
            >
                <div class="notification__body">
                    <div class="notification__text">
                        <h4 class="notification__title">{toast.notification.title}</h4>
                        <p class="notification__message">{toast.notification.message}</p>
                    </div>
                    <button
                        class="notification__close"
                        aria-label="Close"
                        on:click=move |_| svc.dismiss(id)
                    >
                        "×"
                    </button>
                </div>
            </div>
        })
    }
}

pub mod footer;
pub mod global_context;
pub mod header;
pub mod modal_service;

pub use modal_service::{ModalContent, ModalHost, ModalService};

use crate::domain::a001_menu_item::ui::list::SEARCH_INPUT_ID;
use crate::shared::dom::{add_body_class, closest, event_target_element, focus_input};
use crate::shared::notifications::NotificationHost;
use crate::shared::scroll_effects::{install_scroll_effects, reveal_in_view};
use crate::shared::smooth_scroll::scroll_to_anchor;
use contracts::shared::nav::{shortcut_for, Shortcut};
use footer::Footer;
use global_context::SiteContext;
use header::Header;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Page frame shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |   Header (nav, hamburger, cart count)    |
/// +------------------------------------------+
/// |              page content                |
/// +------------------------------------------+
/// |   Footer (hours, phone)                  |
/// +------------------------------------------+
///   ModalHost, NotificationHost (overlays)
/// ```
///
/// Mounted once inside the router: window listeners (scroll, keyboard) are
/// registered here and nowhere else.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext not found");
    let modal = use_context::<ModalService>().expect("ModalService not found");
    let location = use_location();

    let on_features_page =
        Signal::derive(move || location.pathname.get().starts_with("/features"));
    install_scroll_effects(ctx, on_features_page);
    request_animation_frame(|| add_body_class("loaded"));

    // New page: collapse the mobile menu and reveal what is already visible
    Effect::new(move |_| {
        let path = location.pathname.get();
        log::debug!("route: {}", path);
        ctx.close_nav();
        request_animation_frame(reveal_in_view);
    });

    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        match shortcut_for(&ev.key(), ev.ctrl_key()) {
            Some(Shortcut::CloseOverlays) => {
                modal.close();
                ctx.close_nav();
            }
            Some(Shortcut::FocusSearch) => {
                if focus_input(SEARCH_INPUT_ID) {
                    ev.prevent_default();
                }
            }
            None => {}
        }
    });

    // One delegated handler for in-page anchors and outside-the-menu clicks
    let on_click = move |ev: MouseEvent| {
        let Some(target) = event_target_element(&ev) else {
            return;
        };
        if closest(&target, ".header").is_none() {
            ctx.close_nav();
        }
        if let Some(href) = closest(&target, "a[href^='#']").and_then(|a| a.get_attribute("href")) {
            ev.prevent_default();
            ctx.close_nav();
            scroll_to_anchor(&href);
        }
    };

    view! {
        <div class="site" on:click=on_click>
            <Header />
            <main class="site-main">
                {children()}
            </main>
            <Footer />
            <ModalHost />
            <NotificationHost />
        </div>
    }
}

//! Scroll-driven effects: reveal-on-scroll, hero parallax and the header
//! look. Elements opt in through `data-reveal` and `data-parallax`.

use crate::layout::global_context::{site_config, SiteContext};
use crate::shared::dom::{query_all, scroll_y, set_transform, viewport_height};
use contracts::shared::scroll::{parallax_offset, should_reveal};
use leptos::prelude::*;

pub const REVEALED_CLASS: &str = "is-revealed";

/// Reveals every pending `[data-reveal]` element that has entered the
/// viewport. Already revealed elements stay revealed.
pub fn reveal_in_view() {
    let offset = site_config().scroll.reveal_offset_px;
    let height = viewport_height();
    for element in query_all("[data-reveal]") {
        if element.class_list().contains(REVEALED_CLASS) {
            continue;
        }
        let top = element.get_bounding_client_rect().top();
        if should_reveal(top, height, offset) {
            let _ = element.class_list().add_1(REVEALED_CLASS);
        }
    }
}

pub fn apply_parallax(scroll_top: f64) {
    let rate = site_config().scroll.parallax_rate;
    let transform = format!("translateY({}px)", parallax_offset(scroll_top, rate));
    for element in query_all("[data-parallax]") {
        set_transform(&element, &transform);
    }
}

/// Registers the window scroll listener. At most one evaluation runs per
/// animation frame. Call once; the listener lives as long as the page.
pub fn install_scroll_effects(ctx: SiteContext, auto_hide_header: Signal<bool>) {
    let ticking = StoredValue::new(false);

    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        if ticking.get_value() {
            return;
        }
        ticking.set_value(true);
        request_animation_frame(move || {
            let top = scroll_y();
            ctx.on_scroll(top, auto_hide_header.get_untracked());
            reveal_in_view();
            apply_parallax(top);
            ticking.set_value(false);
        });
    });

    // first paint: reveal whatever is already on screen
    request_animation_frame(reveal_in_view);
}

use crate::layout::global_context::site_config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How often the open/closed badge is re-evaluated
const RECHECK_MS: u32 = 60_000;

#[derive(Clone, Copy, Debug, PartialEq)]
enum StoreStatus {
    Open,
    Closed,
}

impl StoreStatus {
    fn now() -> Self {
        let time = chrono::Local::now().time();
        if site_config().hours.is_open_at(time) {
            StoreStatus::Open
        } else {
            StoreStatus::Closed
        }
    }

    fn display_text(&self) -> &'static str {
        match self {
            StoreStatus::Open => "Open now",
            StoreStatus::Closed => "Closed now",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            StoreStatus::Open => "status-open",
            StoreStatus::Closed => "status-closed",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = site_config();
    let status = RwSignal::new(StoreStatus::now());

    // the footer lives for the whole session, so this loop does too
    spawn_local(async move {
        loop {
            TimeoutFuture::new(RECHECK_MS).await;
            if status.try_set(StoreStatus::now()).is_some() {
                break;
            }
        }
    });

    view! {
        <footer class="footer" id="contact-footer">
            <div class="footer__brand">{config.contact.store_name.clone()}</div>
            <div class="footer__hours">
                {icon("clock")}
                <span>{config.hours.display()}</span>
                <span class=move || status.get().css_class()>
                    {move || status.get().display_text()}
                </span>
            </div>
            <div class="footer__phone">
                {icon("phone")}
                <a href=format!("tel:{}", config.contact.phone)>{config.contact.phone.clone()}</a>
            </div>
        </footer>
    }
}

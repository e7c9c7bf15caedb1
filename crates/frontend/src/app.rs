use crate::layout::global_context::SiteContext;
use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use crate::shared::cart::CartService;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Page-wide UI state (mobile nav, header appearance)
    provide_context(SiteContext::new());

    // Single modal slot shared by the video and gallery dialogs
    provide_context(ModalService::new());

    provide_context(CartService::new());
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}

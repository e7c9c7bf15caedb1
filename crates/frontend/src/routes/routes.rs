use crate::layout::Shell;
use crate::pages::features::FeaturesPage;
use crate::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"Page not found"</h2>
            <a href="/">"Back to the menu"</a>
        </section>
    }
}

/// The shell is mounted once around the router outlet so its window
/// listeners live for the whole session.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/features") view=FeaturesPage />
                </Routes>
            </Shell>
        </Router>
    }
}

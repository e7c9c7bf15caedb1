use crate::layout::global_context::{site_config, SiteContext};
use crate::shared::cart::CartService;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Header links per page. In-page `#` anchors scroll smoothly; the rest
/// navigate.
fn nav_links(path: &str) -> Vec<(&'static str, &'static str)> {
    if path.starts_with("/features") {
        vec![
            ("/", "Home"),
            ("#features", "Features"),
            ("#videos", "Videos"),
            ("#gallery", "Gallery"),
        ]
    } else {
        vec![
            ("#home", "Home"),
            ("#menu", "Menu"),
            ("#about", "About"),
            ("#contact", "Contact"),
            ("/features", "Features"),
        ]
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext not found");
    let cart = use_context::<CartService>().expect("CartService not found");
    let location = use_location();

    let is_open = move || ctx.is_nav_open();

    view! {
        <header
            class="header"
            class:header--solid=move || ctx.header.get().solid
            class:header--hidden=move || ctx.header.get().hidden
        >
            <nav class="navbar">
                <a class="nav-logo" href="/">
                    "🍃 " {site_config().contact.store_name.clone()}
                </a>
                <ul class="nav-menu" id="navMenu" class:active=is_open>
                    {move || {
                        nav_links(&location.pathname.get())
                            .into_iter()
                            .map(|(href, label)| view! {
                                <li><a class="nav-link" href=href>{label}</a></li>
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <span class="nav-cart" title="Items in cart">
                    {icon("cart")}
                    <span class="nav-cart__count">{move || cart.count()}</span>
                </span>
                <button
                    class="hamburger"
                    id="hamburger"
                    aria-label="Toggle navigation"
                    aria-expanded=move || is_open().to_string()
                    class:active=is_open
                    on:click=move |_| ctx.toggle_nav()
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_links_are_in_page_anchors() {
        let links = nav_links("/");
        assert!(links.iter().any(|(href, _)| *href == "#menu"));
        assert!(links.iter().any(|(href, _)| *href == "/features"));
    }

    #[test]
    fn test_features_links_lead_home() {
        let links = nav_links("/features");
        assert_eq!(links[0], ("/", "Home"));
        assert!(!links.iter().any(|(href, _)| *href == "#menu"));
    }
}

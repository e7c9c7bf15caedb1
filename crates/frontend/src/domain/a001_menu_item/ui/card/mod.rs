//! Menu card: title, price, description and the "Add to Cart" button.
//!
//! The card body is a Thaw [`Card`] with the `card-appear` animation; the
//! wrapper carries `data-category` and the filter's show/hide state.

use crate::domain::a001_menu_item::ui::list::state::MenuListState;
use crate::layout::global_context::site_config;
use crate::shared::cart::CartService;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_menu_item::MenuItem;
use contracts::shared::notification::NotificationKind;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use thaw::Card;

/// Cascade step between neighbouring cards, capped so long menus do not lag
const STAGGER_MS: usize = 60;
const STAGGER_MAX_MS: usize = 480;

#[component]
pub fn MenuCard(item: MenuItem, state: MenuListState) -> impl IntoView {
    let id = item.id;
    let visible = move || state.is_visible(id);
    let delay_ms = (id.value() * STAGGER_MS).min(STAGGER_MAX_MS);
    let card_style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <div
            class="menu-card"
            class:hidden=move || !visible()
            style:display=move || if visible() { "block" } else { "none" }
            data-category=item.category.clone()
            data-reveal=""
        >
            <Card attr:style=card_style>
                <div class="menu-card__image">{item.icon.clone().unwrap_or_default()}</div>
                {item.badge.clone().map(|badge| view! { <span class="menu-card__badge">{badge}</span> })}
                <div class="menu-card__content">
                    <h3>{item.title.clone()}</h3>
                    <p class="menu-card__description">{item.description.clone()}</p>
                    <div class="menu-card__footer">
                        <span class="price">{item.price.clone()}</span>
                        <AddToCartButton title=item.title.clone() price=item.price.clone() />
                    </div>
                </div>
            </Card>
        </div>
    }
}

/// Adds the dish to the cart, flashes "Added!" and raises a toast with the
/// new item count.
#[component]
fn AddToCartButton(title: String, price: String) -> impl IntoView {
    let cart = use_context::<CartService>().expect("CartService not found");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found");

    let added = RwSignal::new(false);
    // Only the latest click may reset the label
    let clicks = StoredValue::new(0u32);

    let on_click = move |_| {
        let count = cart.add(&title, &price);
        log::info!("added '{}' ({}) to cart, {} item(s)", title, price, count);

        let timing = site_config().timing;
        notifications.show_for(
            "Item Added to Cart!",
            &format!("Total items: {}", count),
            NotificationKind::Success,
            timing.cart_toast_ms,
        );

        added.set(true);
        let mut click = 0;
        clicks.update_value(|c| {
            *c += 1;
            click = *c;
        });
        spawn_local(async move {
            TimeoutFuture::new(timing.add_to_cart_reset_ms).await;
            if clicks.try_get_value() == Some(click) {
                let _ = added.try_set(false);
            }
        });
    };

    view! {
        <button
            class="add-to-cart"
            class:add-to-cart--added=move || added.get()
            on:click=on_click
        >
            {move || if added.get() { "Added!" } else { "Add to Cart" }}
        </button>
    }
}

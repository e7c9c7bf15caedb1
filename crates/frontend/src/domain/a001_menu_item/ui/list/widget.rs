use super::state::{create_state, MenuListState};
use super::SEARCH_INPUT_ID;
use crate::domain::a001_menu_item::ui::card::MenuCard;
use crate::layout::global_context::menu_catalog;
use crate::shared::dom::{closest, event_target_element};
use crate::shared::icons::icon;
use contracts::enums::menu_category::{MenuCategory, ALL_CATEGORIES};
use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;

/// Menu section: category buttons, search box and the card grid.
#[component]
pub fn MenuSection() -> impl IntoView {
    let state = create_state();

    let cards = menu_catalog()
        .items()
        .iter()
        .cloned()
        .map(|item| view! { <MenuCard item=item state=state /> })
        .collect::<Vec<_>>();

    view! {
        <section class="menu" id="menu">
            <div class="container">
                <h2 class="section-title" data-reveal="">"Our Menu"</h2>
                <SearchBar state=state />
                <FilterBar state=state />
                <div class="menu-grid">{cards}</div>
                <Show when=move || state.visible_count() == 0>
                    <p class="menu-empty">"No items match your search."</p>
                </Show>
                <p class="menu-count">
                    {move || format!("Showing {} of {} items", state.visible_count(), state.total_count())}
                </p>
            </div>
        </section>
    }
}

/// Category buttons. One delegated click handler reads `data-category`
/// from whichever button was hit.
#[component]
fn FilterBar(state: MenuListState) -> impl IntoView {
    let controls = std::iter::once((ALL_CATEGORIES, "All"))
        .chain(
            MenuCategory::all()
                .into_iter()
                .map(|c| (c.code(), c.display_name())),
        )
        .map(|(code, label)| {
            view! {
                <button
                    class="filter-btn"
                    class:active=move || state.is_active(code)
                    data-category=code
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let on_click = move |ev: MouseEvent| {
        let category = event_target_element(&ev)
            .and_then(|el| closest(&el, ".filter-btn"))
            .and_then(|button| button.get_attribute("data-category"));
        if let Some(category) = category {
            state.select_category(&category);
        }
    };

    view! {
        <div class="menu-filters" role="toolbar" on:click=on_click>
            {controls}
        </div>
    }
}

#[component]
fn SearchBar(state: MenuListState) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            state.submit();
        }
    };

    view! {
        <div class="search-container">
            <input
                type="text"
                id=SEARCH_INPUT_ID
                class="search-input"
                placeholder="Search our menu... (Ctrl+K)"
                autocomplete="off"
                prop:value=move || state.search_text.get()
                on:input=move |ev| state.input(event_target_value(&ev))
                on:keydown=on_keydown
                on:dblclick=move |_| state.clear()
            />
            <Show when=move || !state.search_text.get().is_empty()>
                <button class="search-clear" title="Clear search" on:click=move |_| state.clear()>
                    {icon("x")}
                </button>
            </Show>
            <button class="search-btn" aria-label="Search" on:click=move |_| state.submit()>
                {icon("search")}
            </button>
        </div>
    }
}

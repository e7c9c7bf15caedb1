mod stat_counter;

use crate::layout::global_context::site_config;
use crate::layout::{ModalContent, ModalService};
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use contracts::shared::video::VideoKind;
use leptos::ev;
use leptos::prelude::*;
use stat_counter::StatCounter;

/// Static gallery tiles: (icon, title, caption)
const GALLERY: &[(&str, &str, &str)] = &[
    ("🧋", "Signature Milk Tea", "Brown sugar pearls, slow-cooked every morning"),
    ("🍓", "Strawberry Fruit Tea", "Fresh berries shaken over jasmine green tea"),
    ("☕", "Morning Coffee", "Single-origin espresso pulled to order"),
    ("🥟", "Snack Corner", "Crispy bites made fresh in our kitchen"),
    ("🏪", "Our Store", "A bright corner for friends and study sessions"),
    ("👩‍🍳", "Behind the Counter", "Our team preparing the day's toppings"),
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let timing = site_config().timing;

    view! {
        <section class="features-hero" id="features-home">
            <div class="features-hero__background" data-parallax=""></div>
            <div class="features-hero__content">
                <h1 class="hero-title">"Discover Our Features"</h1>
                <p class="hero-subtitle">"Everything that makes each cup special"</p>
                <div class="hero-stats">
                    <StatCounter target="48" label="Menu Drinks" timing=timing />
                    <StatCounter target="12" label="Years Brewing" timing=timing />
                    <StatCounter target="500+" label="Happy Customers Daily" timing=timing />
                    <StatCounter target="4.9★" label="Average Rating" timing=timing />
                </div>
            </div>
        </section>

        <FeatureGrid />
        <VideoSection />
        <GallerySection />

        <section class="cta" id="visit">
            <div class="container" data-reveal="">
                <h2>"Ready to Visit?"</h2>
                <p>"Come by the store or give us a call to order ahead."</p>
                <div class="cta-buttons">
                    <button class="btn btn-primary" on:click=move |_| notifications.location_info()>
                        "Find Our Location"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| notifications.order_info()>
                        "Order Ahead"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureGrid() -> impl IntoView {
    let features = [
        ("🍃", "Premium Tea Leaves", "Loose-leaf teas sourced from small farms."),
        ("🧊", "Custom Sweetness", "Choose your sugar and ice level for every drink."),
        ("⚡", "Quick Service", "Most drinks are ready in under five minutes."),
        ("🌱", "Eco Packaging", "Compostable cups and paper straws."),
    ];

    view! {
        <section class="features-grid" id="features">
            <div class="container">
                <h2 class="section-title" data-reveal="">"Why Choose Us"</h2>
                <div class="grid">
                    {features
                        .into_iter()
                        .map(|(emoji, title, text)| {
                            view! {
                                <div class="feature-card" data-reveal="">
                                    <div class="feature-card__icon">{emoji}</div>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn VideoSection() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        <section class="videos" id="videos">
            <div class="container">
                <h2 class="section-title" data-reveal="">"Watch Our Story"</h2>
                <div class="video-grid">
                    {VideoKind::all()
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <div class="video-card" data-reveal="">
                                    <button
                                        class="video-card__play"
                                        aria-label=format!("Play {}", kind.title())
                                        on:click=move |_| modal.play_video(kind.code())
                                    >
                                        {icon("play")}
                                    </button>
                                    <h3>{kind.title()}</h3>
                                    <p>{kind.description()}</p>
                                    <span class="video-card__duration">{kind.duration()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn GallerySection() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let open = move |(icon, title, caption): (&'static str, &'static str, &'static str)| {
        modal.open(ModalContent::Gallery {
            title,
            caption,
            icon,
        });
    };

    view! {
        <section class="gallery" id="gallery">
            <div class="container">
                <h2 class="section-title" data-reveal="">"Gallery"</h2>
                <div class="gallery-grid">
                    {GALLERY
                        .iter()
                        .copied()
                        .map(|tile| {
                            let (emoji, title, caption) = tile;
                            let on_key = move |ev: ev::KeyboardEvent| {
                                let key = ev.key();
                                if key == "Enter" || key == " " {
                                    ev.prevent_default();
                                    open(tile);
                                }
                            };
                            view! {
                                <div
                                    class="gallery-item"
                                    tabindex="0"
                                    role="button"
                                    data-reveal=""
                                    on:click=move |_| open(tile)
                                    on:keydown=on_key
                                >
                                    <div class="placeholder-image">{emoji}</div>
                                    <div class="item-info">
                                        <h4>{title}</h4>
                                        <p>{caption}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

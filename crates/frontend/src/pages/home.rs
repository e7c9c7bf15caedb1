use crate::domain::a001_menu_item::ui::list::MenuSection;
use crate::layout::global_context::site_config;
use crate::shared::dom::alert;
use crate::shared::smooth_scroll::scroll_to_section;
use leptos::prelude::*;

/// Landing page: hero, menu, about, hours and contact.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = site_config();

    let view_menu = move |_| {
        scroll_to_section("menu");
    };

    // Ordering is by phone only
    let order_now = move |_| {
        alert(&format!(
            "Thank you for your interest! Please call us at {} to place your order or visit our store during operating hours ({}).",
            config.contact.phone,
            config.hours.display()
        ));
    };

    view! {
        <section class="hero" id="home">
            <div class="hero-content">
                <h1 class="hero-title">{config.contact.store_name.clone()}</h1>
                <p class="hero-subtitle">"Fresh milk tea, fruit tea and snacks made to order"</p>
                <div class="hero-buttons">
                    <button class="btn btn-primary" on:click=view_menu>"View Menu"</button>
                    <button class="btn btn-secondary" on:click=order_now>"Order Now"</button>
                </div>
            </div>
        </section>

        <MenuSection />

        <section class="about" id="about">
            <div class="container">
                <h2 class="section-title" data-reveal="">"About Us"</h2>
                <div class="about-text" data-reveal="">
                    <p>
                        "We started as a small stall with one recipe for brown sugar milk tea. "
                        "Today we brew every cup from loose-leaf tea and fresh fruit."
                    </p>
                </div>
                <div class="features">
                    <div class="feature" data-reveal="">
                        <h3>"🍃 Fresh Ingredients"</h3>
                        <p>"Loose-leaf tea, real fruit, no powders."</p>
                    </div>
                    <div class="feature" data-reveal="">
                        <h3>"🧋 Made to Order"</h3>
                        <p>"Sweetness and ice adjusted to your taste."</p>
                    </div>
                    <div class="feature" data-reveal="">
                        <h3>"💚 Local Favourite"</h3>
                        <p>"Serving the neighbourhood every day."</p>
                    </div>
                </div>
            </div>
        </section>

        <section class="hours" id="hours">
            <div class="container">
                <div class="hours-info" data-reveal="">
                    <h2>"Opening Hours"</h2>
                    <p>{format!("Monday - Sunday: {}", config.hours.display())}</p>
                </div>
            </div>
        </section>

        <section class="contact" id="contact">
            <div class="container">
                <h2 class="section-title" data-reveal="">"Contact Us"</h2>
                <div class="contact-item" data-reveal="">
                    <h4>"📞 Phone"</h4>
                    <p>{config.contact.phone.clone()}</p>
                </div>
                <div class="contact-item" data-reveal="">
                    <h4>"🕙 Hours"</h4>
                    <p>{config.hours.display()}</p>
                </div>
                <div class="contact-item" data-reveal="">
                    <h4>"✨ See more"</h4>
                    <p><a href="/features">"Discover our features"</a></p>
                </div>
            </div>
        </section>
    }
}

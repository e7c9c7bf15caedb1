use contracts::shared::config::TimingConfig;
use contracts::shared::scroll::CounterAnimation;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Hero statistic that counts up from zero once mounted. Targets that are
/// not plain numbers are shown as is.
#[component]
pub fn StatCounter(
    target: &'static str,
    label: &'static str,
    timing: TimingConfig,
) -> impl IntoView {
    let text = RwSignal::new(target.to_string());

    if let Some(mut counter) =
        CounterAnimation::parse(target, timing.counter_duration_ms, timing.counter_tick_ms)
    {
        text.set("0".to_string());
        let tick_ms = timing.counter_tick_ms;
        spawn_local(async move {
            loop {
                TimeoutFuture::new(tick_ms).await;
                let (next, done) = counter.tick();
                // Page navigated away
                if text.try_set(next).is_some() {
                    break;
                }
                if done {
                    break;
                }
            }
        });
    }

    view! {
        <div class="stat">
            <span class="stat__number">{move || text.get()}</span>
            <span class="stat__label">{label}</span>
        </div>
    }
}

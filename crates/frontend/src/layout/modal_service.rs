use crate::layout::global_context::site_config;
use crate::shared::dom::set_body_scroll_locked;
use crate::shared::modal::Modal;
use contracts::shared::video::VideoKind;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Delay between mounting the overlay and starting its fade-in
const FADE_IN_DELAY_MS: u32 = 10;

/// What the single modal slot is showing
#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    Video(VideoKind),
    Gallery {
        title: &'static str,
        caption: &'static str,
        icon: &'static str,
    },
}

/// Centralized modal state: one modal at a time, body scroll locked while
/// it is open.
#[derive(Clone, Copy)]
pub struct ModalService {
    content: RwSignal<Option<ModalContent>>,
    shown: RwSignal<bool>,
    generation: StoredValue<u64>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(None),
            shown: RwSignal::new(false),
            generation: StoredValue::new(0),
        }
    }

    pub fn open(&self, content: ModalContent) {
        log::debug!("modal open: {:?}", content);
        let generation = self.bump();
        self.content.set(Some(content));
        self.shown.set(false);
        set_body_scroll_locked(true);

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(FADE_IN_DELAY_MS).await;
            if svc.generation.get_value() == generation {
                svc.shown.set(true);
            }
        });
    }

    /// Opens the placeholder player for `code`. Unknown codes are ignored.
    pub fn play_video(&self, code: &str) {
        match VideoKind::from_code(code) {
            Some(kind) => self.open(ModalContent::Video(kind)),
            None => log::warn!("unknown video '{}'", code),
        }
    }

    /// Fades out, then unmounts and restores page scrolling. Reopening
    /// during the fade cancels the pending unmount.
    pub fn close(&self) {
        if !self.is_open() {
            return;
        }
        log::debug!("modal close");
        let generation = self.bump();
        self.shown.set(false);

        let svc = *self;
        let fade_ms = site_config().timing.modal_fade_ms;
        spawn_local(async move {
            TimeoutFuture::new(fade_ms).await;
            if svc.generation.get_value() == generation {
                svc.content.set(None);
                set_body_scroll_locked(false);
            }
        });
    }

    pub fn is_open(&self) -> bool {
        self.content.with_untracked(|c| c.is_some())
    }

    fn bump(&self) -> u64 {
        let mut generation = 0;
        self.generation.update_value(|g| {
            *g += 1;
            generation = *g;
        });
        generation
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal slot. Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalService>().expect("ModalService not provided in context");
    let on_close = Callback::new(move |_| svc.close());
    let shown = Signal::derive(move || svc.shown.get());

    move || {
        svc.content.get().map(|content| match content {
            ModalContent::Video(kind) => view! {
                <Modal on_close=on_close shown=shown modal_class="modal--video">
                    <VideoPlaceholder kind=kind on_close=on_close />
                </Modal>
            }
            .into_any(),
            ModalContent::Gallery {
                title,
                caption,
                icon,
            } => view! {
                <Modal on_close=on_close shown=shown modal_class="modal--gallery">
                    <div class="gallery-item gallery-item--expanded">
                        <div class="placeholder-image">{icon}</div>
                        <div class="item-info">
                            <h4>{title}</h4>
                            <p>{caption}</p>
                        </div>
                    </div>
                </Modal>
            }
            .into_any(),
        })
    }
}

/// Stand-in for real playback
#[component]
fn VideoPlaceholder(kind: VideoKind, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="video-player">
            <h3 class="video-player__title">{kind.title()}</h3>
            <p class="video-player__description">{kind.description()}</p>
            <div class="video-player__screen">
                <p>{format!("🎬 Duration: {}", kind.duration())}</p>
                <p>"In a real implementation, the actual video would play here."</p>
                <p class="video-player__note">
                    "This is a demo showcasing the video modal functionality."
                </p>
            </div>
            <button class="btn btn-primary" on:click=move |_| on_close.run(())>
                "Close Video"
            </button>
        </div>
    }
}

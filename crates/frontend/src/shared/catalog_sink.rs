use contracts::shared::catalog_filter::{VisibilityProjection, VisibilitySink};
use leptos::prelude::*;

/// Publishes filter results into signals the menu cards and filter buttons
/// render from.
#[derive(Clone, Copy)]
pub struct SignalSink {
    pub visibility: RwSignal<VisibilityProjection>,
    pub active_control: RwSignal<Option<String>>,
}

impl SignalSink {
    pub fn new(item_count: usize) -> Self {
        Self {
            visibility: RwSignal::new(VisibilityProjection::all_visible(item_count)),
            active_control: RwSignal::new(None),
        }
    }
}

impl VisibilitySink for SignalSink {
    fn apply(&mut self, projection: &VisibilityProjection) {
        self.visibility.set(projection.clone());
    }

    fn active_control_changed(&mut self, active: Option<&str>) {
        let active = active.map(str::to_owned);
        if self.active_control.get_untracked() != active {
            self.active_control.set(active);
        }
    }
}

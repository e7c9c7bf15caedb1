use contracts::shared::cart::Cart;
use leptos::prelude::*;

/// Page-lifetime cart, provided through context
#[derive(Clone, Copy)]
pub struct CartService {
    cart: RwSignal<Cart>,
}

impl CartService {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
        }
    }

    /// Appends a line and returns the new item count.
    pub fn add(&self, name: &str, price: &str) -> usize {
        let mut count = 0;
        self.cart.update(|cart| {
            count = cart.add(name, price);
        });
        self.cart.with_untracked(|cart| {
            log::debug!(
                "cart contents: {}",
                serde_json::to_string(cart.entries()).unwrap_or_default()
            );
        });
        count
    }

    pub fn count(&self) -> usize {
        self.cart.with(|cart| cart.len())
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}

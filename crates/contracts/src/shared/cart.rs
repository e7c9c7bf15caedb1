use serde::{Deserialize, Serialize};

/// Line added by an "Add to Cart" click
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub name: String,
    pub price: String,
}

/// In-memory cart stub. Append-only, lives as long as the page; only the
/// count is ever shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line and returns the new item count. The same dish added
    /// twice is two lines.
    pub fn add(&mut self, name: impl Into<String>, price: impl Into<String>) -> usize {
        self.entries.push(CartEntry {
            name: name.into(),
            price: price.into(),
        });
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_without_dedup() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.add("Milk Tea", "$3.00"), 1);
        assert_eq!(cart.add("Milk Tea", "$3.00"), 2);
        assert_eq!(cart.add("Spring Roll", "$5.00"), 3);

        let names: Vec<_> = cart.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Milk Tea", "Milk Tea", "Spring Roll"]);
        assert_eq!(cart.len(), 3);
    }
}

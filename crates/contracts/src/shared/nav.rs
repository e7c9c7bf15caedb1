//! Mobile navigation and keyboard shortcuts.

/// Hamburger menu open/closed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Link click, outside click, Escape.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// `"#menu"` -> `Some("menu")`. Bare `"#"` and non-anchor hrefs yield `None`.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document Y to scroll to so the target lands just below the fixed header.
pub fn anchor_scroll_top(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    (element_top + page_y_offset - header_offset).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: close the mobile menu and any open modal
    CloseOverlays,
    /// Ctrl+K: focus the menu search box
    FocusSearch,
}

pub fn shortcut_for(key: &str, ctrl: bool) -> Option<Shortcut> {
    match key {
        "Escape" => Some(Shortcut::CloseOverlays),
        "k" | "K" if ctrl => Some(Shortcut::FocusSearch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = NavMenu::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_anchor_target_id() {
        assert_eq!(anchor_target_id("#menu"), Some("menu"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("features.html"), None);
    }

    #[test]
    fn test_anchor_scroll_top_subtracts_header() {
        assert_eq!(anchor_scroll_top(400.0, 1000.0, 80.0), 1320.0);
        assert_eq!(anchor_scroll_top(10.0, 0.0, 80.0), 0.0);
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(shortcut_for("Escape", false), Some(Shortcut::CloseOverlays));
        assert_eq!(shortcut_for("k", true), Some(Shortcut::FocusSearch));
        assert_eq!(shortcut_for("k", false), None);
        assert_eq!(shortcut_for("Enter", true), None);
    }
}

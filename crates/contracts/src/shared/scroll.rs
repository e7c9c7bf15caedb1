//! Scroll-driven visual state: reveal-on-scroll, header appearance,
//! parallax and the hero stat counters.

use super::config::ScrollConfig;

/// True once the element's top edge has come `offset_px` above the bottom
/// of the viewport.
pub fn should_reveal(element_top: f64, viewport_height: f64, offset_px: f64) -> bool {
    element_top < viewport_height - offset_px
}

pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderAppearance {
    /// Opaque blurred background instead of the hero gradient
    pub solid: bool,
    /// Slid up out of view
    pub hidden: bool,
}

/// Tracks scroll direction for the auto-hiding header
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderScroll {
    last_scroll_top: f64,
    auto_hide: bool,
}

impl HeaderScroll {
    /// `auto_hide` enables hide-on-scroll-down (features page only).
    pub fn new(auto_hide: bool) -> Self {
        Self {
            last_scroll_top: 0.0,
            auto_hide,
        }
    }

    pub fn set_auto_hide(&mut self, auto_hide: bool) {
        self.auto_hide = auto_hide;
    }

    pub fn update(&mut self, scroll_top: f64, config: &ScrollConfig) -> HeaderAppearance {
        let solid = scroll_top > config.header_solid_after_px;
        let hidden = self.auto_hide
            && scroll_top > self.last_scroll_top
            && scroll_top > config.header_hide_after_px;
        self.last_scroll_top = scroll_top;
        HeaderAppearance { solid, hidden }
    }
}

/// Count-up animation for a hero stat such as `"15"`.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target_text: String,
    end: f64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    /// `None` when `target_text` is not a plain number (`"4.9★"`, `"500+"`),
    /// in which case the text is left as is.
    pub fn parse(target_text: &str, duration_ms: u32, tick_ms: u32) -> Option<Self> {
        let end: f64 = target_text.trim().parse().ok()?;
        let ticks = (duration_ms as f64 / tick_ms.max(1) as f64).max(1.0);
        Some(Self {
            target_text: target_text.to_string(),
            end: end.trunc(),
            increment: end.trunc() / ticks,
            current: 0.0,
        })
    }

    /// Advances one tick. Returns the text to display and whether the
    /// animation has finished.
    pub fn tick(&mut self) -> (String, bool) {
        self.current += self.increment;
        if self.current >= self.end {
            (self.target_text.clone(), true)
        } else {
            (format!("{}", self.current.floor() as i64), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_threshold() {
        assert!(should_reveal(600.0, 800.0, 150.0));
        assert!(!should_reveal(650.0, 800.0, 150.0));
        assert!(should_reveal(-20.0, 800.0, 150.0));
    }

    #[test]
    fn test_parallax_moves_against_scroll() {
        assert_eq!(parallax_offset(200.0, -0.5), -100.0);
    }

    #[test]
    fn test_header_turns_solid_after_threshold() {
        let config = ScrollConfig::default();
        let mut header = HeaderScroll::new(false);
        assert!(!header.update(50.0, &config).solid);
        assert!(header.update(150.0, &config).solid);
        assert!(!header.update(900.0, &config).hidden);
    }

    #[test]
    fn test_header_auto_hides_on_scroll_down() {
        let config = ScrollConfig::default();
        let mut header = HeaderScroll::new(true);
        assert!(!header.update(150.0, &config).hidden);
        assert!(header.update(300.0, &config).hidden);
        // scrolling back up shows it again
        assert!(!header.update(250.0, &config).hidden);
    }

    #[test]
    fn test_counter_counts_up_to_target() {
        let mut counter = CounterAnimation::parse("48", 2000, 16).unwrap();
        let (first, done) = counter.tick();
        assert_eq!(first, "0");
        assert!(!done);

        let mut ticks = 1;
        let last = loop {
            let (text, done) = counter.tick();
            ticks += 1;
            if done {
                break text;
            }
        };
        assert_eq!(last, "48");
        assert!((125..=126).contains(&ticks));
    }

    #[test]
    fn test_counter_skips_non_numeric_targets() {
        assert!(CounterAnimation::parse("500+", 2000, 16).is_none());
        assert!(CounterAnimation::parse("", 2000, 16).is_none());
    }
}

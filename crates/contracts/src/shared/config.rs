use super::catalog_filter::SearchPolicy;
use super::hours::OpeningHours;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid site configuration: {field} must be greater than zero")]
    NonPositive { field: &'static str },
}

/// Tunables of the site, read from `site.toml`
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    pub hours: OpeningHours,
    pub search: SearchPolicy,
    pub scroll: ScrollConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub phone: String,
    pub store_name: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "09123456789".to_string(),
            store_name: "Taste From The Greens".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    pub reveal_offset_px: f64,
    pub header_solid_after_px: f64,
    pub header_hide_after_px: f64,
    pub anchor_offset_px: f64,
    pub parallax_rate: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            reveal_offset_px: 150.0,
            header_solid_after_px: 100.0,
            header_hide_after_px: 200.0,
            anchor_offset_px: 80.0,
            parallax_rate: -0.5,
        }
    }
}

/// Durations in milliseconds
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub notification_ms: u32,
    pub cart_toast_ms: u32,
    pub toast_exit_ms: u32,
    pub add_to_cart_reset_ms: u32,
    pub modal_fade_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            notification_ms: 6000,
            cart_toast_ms: 3000,
            toast_exit_ms: 400,
            add_to_cart_reset_ms: 2000,
            modal_fade_ms: 300,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[contact]
phone = "09123456789"
store_name = "Taste From The Greens"

[hours]
opens = "10:00:00"
closes = "21:00:00"

[search]
min_live_query_len = 3

[scroll]
reveal_offset_px = 150.0
header_solid_after_px = 100.0
header_hide_after_px = 200.0
anchor_offset_px = 80.0
parallax_rate = -0.5

[timing]
notification_ms = 6000
cart_toast_ms = 3000
toast_exit_ms = 400
add_to_cart_reset_ms = 2000
modal_fade_ms = 300
counter_duration_ms = 2000
counter_tick_ms = 16
"#;

impl SiteConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Phone-ordering notice shown by the "Order Now" buttons
    pub fn order_message(&self) -> String {
        format!(
            "Ready to order? Call us at {} or visit our store during operating hours ({}).",
            self.contact.phone,
            self.hours.display()
        )
    }

    pub fn location_message(&self) -> String {
        format!(
            "We have multiple locations! Call us at {} to find the nearest branch to you.",
            self.contact.phone
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.counter_tick_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "timing.counter_tick_ms",
            });
        }
        if self.timing.notification_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "timing.notification_ms",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.search.min_live_query_len, 3);
        assert_eq!(config.hours.display(), "10:00 AM - 9:00 PM");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [search]
            min_live_query_len = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.search.min_live_query_len, 1);
        assert_eq!(config.scroll, ScrollConfig::default());
        assert_eq!(config.contact.phone, "09123456789");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(matches!(
            SiteConfig::from_toml_str("[search\nmin_live_query_len = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        let result = SiteConfig::from_toml_str("[timing]\ncounter_tick_ms = 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::NonPositive {
                field: "timing.counter_tick_ms"
            })
        ));
    }

    #[test]
    fn test_order_message_mentions_phone_and_hours() {
        let config = SiteConfig::default();
        let message = config.order_message();
        assert!(message.contains("09123456789"));
        assert!(message.contains("10:00 AM - 9:00 PM"));
    }
}

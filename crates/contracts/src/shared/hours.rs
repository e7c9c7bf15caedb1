use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Daily opening window of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub opens: NaiveTime,
    pub closes: NaiveTime,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            opens: NaiveTime::from_hms_opt(10, 0, 0).expect("10:00 is a valid time"),
            closes: NaiveTime::from_hms_opt(21, 0, 0).expect("21:00 is a valid time"),
        }
    }
}

impl OpeningHours {
    pub fn new(opens: NaiveTime, closes: NaiveTime) -> Self {
        Self { opens, closes }
    }

    /// Open on `[opens, closes)`. A window that wraps past midnight
    /// (`closes <= opens`) is treated as overnight.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        if self.opens < self.closes {
            time >= self.opens && time < self.closes
        } else {
            time >= self.opens || time < self.closes
        }
    }

    /// `"10:00 AM - 9:00 PM"`
    pub fn display(&self) -> String {
        format!("{} - {}", format_12h(self.opens), format_12h(self.closes))
    }
}

fn format_12h(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if pm { "PM" } else { "AM" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_hours() {
        let hours = OpeningHours::default();
        assert_eq!(hours.display(), "10:00 AM - 9:00 PM");
        assert!(!hours.is_open_at(t(9, 59)));
        assert!(hours.is_open_at(t(10, 0)));
        assert!(hours.is_open_at(t(20, 59)));
        assert!(!hours.is_open_at(t(21, 0)));
    }

    #[test]
    fn test_overnight_window() {
        let hours = OpeningHours::new(t(18, 0), t(2, 0));
        assert!(hours.is_open_at(t(23, 30)));
        assert!(hours.is_open_at(t(1, 0)));
        assert!(!hours.is_open_at(t(12, 0)));
        assert_eq!(hours.display(), "6:00 PM - 2:00 AM");
    }
}

//! Wall-clock access for timestamps and the menu bar clock.

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        return js_sys::Date::now() as u64;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Calendar fields for one instant; local time in the browser, UTC elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// `0` is Sunday.
    pub weekday: u32,
    /// `0` is January.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        Self::at(now_ms())
    }

    pub fn at(timestamp_ms: u64) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms as f64));
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use chrono::{DateTime, Datelike, Timelike, Utc};

            let date = i64::try_from(timestamp_ms)
                .ok()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .unwrap_or_default();
            Self {
                weekday: date.weekday().num_days_from_sunday(),
                month: date.month0(),
                day: date.day(),
                hour: date.hour(),
                minute: date.minute(),
            }
        }
    }

    /// `9:05 AM` style time.
    pub fn time_label(&self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        format!("{hour}:{:02} {suffix}", self.minute)
    }

    /// `Sat, Oct 18` style date.
    pub fn date_label(&self) -> String {
        let weekday = WEEKDAYS.get(self.weekday as usize).copied().unwrap_or("");
        let month = MONTHS.get(self.month as usize).copied().unwrap_or("");
        format!("{weekday}, {month} {}", self.day)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            weekday: 6,
            month: 9,
            day: 18,
            hour,
            minute,
        }
    }

    #[test]
    fn time_label_uses_twelve_hour_clock() {
        assert_eq!(at(0, 5).time_label(), "12:05 AM");
        assert_eq!(at(9, 30).time_label(), "9:30 AM");
        assert_eq!(at(12, 0).time_label(), "12:00 PM");
        assert_eq!(at(23, 59).time_label(), "11:59 PM");
    }

    #[test]
    fn date_label_names_weekday_and_month() {
        assert_eq!(at(8, 0).date_label(), "Sat, Oct 18");
    }

    #[test]
    fn timestamps_resolve_to_utc_calendar_fields() {
        let epoch = ClockSnapshot::at(0);
        assert_eq!(epoch.date_label(), "Thu, Jan 1");
        assert_eq!(epoch.time_label(), "12:00 AM");

        let billennium = ClockSnapshot::at(1_000_000_000_000);
        assert_eq!(billennium.date_label(), "Sun, Sep 9");
        assert_eq!(billennium.time_label(), "1:46 AM");
    }

    #[test]
    fn leap_day_resolves_to_february_twenty_ninth() {
        let leap_day = ClockSnapshot::at(1_709_210_040_000);
        assert_eq!(leap_day.date_label(), "Thu, Feb 29");
        assert_eq!(leap_day.time_label(), "12:34 PM");
    }
}

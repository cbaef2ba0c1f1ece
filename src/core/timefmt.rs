use chrono::{DateTime, Utc};

use super::config::FormatConfig;

/// Renders a clock reading for message `time` / session `last_message_time`.
pub fn format_time(config: &FormatConfig, instant: DateTime<Utc>) -> String {
    instant.format(&config.time_format).to_string()
}

/// Renders a clock reading for the session `date` field.
pub fn format_date(config: &FormatConfig, instant: DateTime<Utc>) -> String {
    instant.format(&config.date_format).to_string()
}

/// Renders the calendar-date key used for history grouping.
pub fn format_group_date(config: &FormatConfig, instant: DateTime<Utc>) -> String {
    instant.format(&config.group_date_format).to_string()
}

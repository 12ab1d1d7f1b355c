use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

use cricconnect_types::api::MessageResponse;
use cricconnect_types::models::ChatMessage;

/// Relative label shown next to a chat message: "Just now", "5m ago",
/// "3h ago", or the wall-clock time in `tz` once a day has passed.
pub fn formatted_time<Tz>(timestamp: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let secs = (now - timestamp).num_seconds();

    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3_600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3_600)
    } else {
        timestamp.with_timezone(tz).format("%I:%M %p").to_string()
    }
}

pub fn to_response(message: ChatMessage, now: DateTime<Utc>) -> MessageResponse {
    let formatted_time = formatted_time(message.timestamp, now, &Local);
    MessageResponse { message, formatted_time }
}

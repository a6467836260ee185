// src/utils/format.rs
use chrono::{DateTime, Utc};

use crate::i18n::Translator;

// Format a duration for display
pub fn format_time_ago(translator: &dyn Translator, time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(time);

    let seconds = duration.num_seconds().max(0);

    let (key, count) = if seconds < 60 {
        ("time.secondsAgo", seconds)
    } else if seconds < 3600 {
        ("time.minutesAgo", duration.num_minutes())
    } else if seconds < 86400 {
        ("time.hoursAgo", duration.num_hours())
    } else if seconds < 2592000 {
        ("time.daysAgo", duration.num_days())
    } else if seconds < 31536000 {
        ("time.monthsAgo", duration.num_days() / 30)
    } else {
        ("time.yearsAgo", duration.num_days() / 365)
    };

    translator.translate(key).replace("{count}", &count.to_string())
}

/// Hide all but the first and last `visible` characters.
pub fn mask_password(password: &str, visible: usize) -> String {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() <= visible * 2 {
        return "•".repeat(chars.len());
    }

    let head: String = chars[..visible].iter().collect();
    let tail: String = chars[chars.len() - visible..].iter().collect();
    format!("{}{}{}", head, "•".repeat(chars.len() - visible * 2), tail)
}

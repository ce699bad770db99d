// src/ports/list_view.rs
use chrono::{DateTime, Duration, Local, Utc};

use crate::constants::PREVIEW_MAX_CHARS;
use crate::domain::Note;

/// Formatting for the note list and editor chrome. Holds no state.
#[derive(Debug, Default)]
pub struct ListPresenter;

impl ListPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Relative date label for a list row: time of day under 24 hours,
    /// abbreviated weekday under 7 days, month/day otherwise.
    pub fn date_label(&self, ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let local = ts.with_timezone(&Local);
        let age = now.signed_duration_since(ts);

        if age < Duration::hours(24) {
            local.format("%-I:%M %p").to_string()
        } else if age < Duration::days(7) {
            local.format("%a").to_string()
        } else {
            local.format("%b %-d").to_string()
        }
    }

    /// One-line content preview: newlines collapsed to spaces, truncated to
    /// 60 characters with an ellipsis.
    pub fn preview(&self, content: &str) -> String {
        let collapsed = content.replace('\n', " ");
        let clean = collapsed.trim();

        if clean.chars().count() > PREVIEW_MAX_CHARS {
            let truncated: String = clean.chars().take(PREVIEW_MAX_CHARS).collect();
            format!("{truncated}...")
        } else {
            clean.to_string()
        }
    }

    /// Full timestamp for the editor header.
    pub fn modified_label(&self, note: &Note) -> String {
        note.last_modified
            .with_timezone(&Local)
            .format("%b %-d, %Y %-I:%M %p")
            .to_string()
    }
}

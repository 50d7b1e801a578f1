use carona_core::constants::TIMESTAMP_DISPLAY_FORMAT;
use carona_core::models::{Message, Route};
use carona_core::store::ConversationSummary;
use chrono::{DateTime, FixedOffset, Local};

use crate::table::render_table;
use crate::{CYAN, DIM, GREEN, RED, RESET, WHITE_BOLD};

/// Local `HH:MM dd/mm/YYYY`.
pub(crate) fn format_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.with_timezone(&Local).format(TIMESTAMP_DISPLAY_FORMAT).to_string()
}

pub(crate) fn print_error_raw(msg: &str) -> String {
    format!("{RED}{msg}{RESET}")
}

pub(crate) fn print_success_raw(msg: &str) -> String {
    format!("{GREEN}{msg}{RESET}")
}

pub(crate) fn print_heading_raw(msg: &str) -> String {
    format!("{WHITE_BOLD}{msg}{RESET}")
}

pub(crate) fn routes_table(routes: &[Route]) -> String {
    let rows: Vec<Vec<String>> = routes
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.owner.clone(),
                r.start.clone(),
                r.end.clone(),
                r.kind.to_string(),
            ]
        })
        .collect();
    render_table(&["ID", "User", "Start", "End", "Ride"], &rows)
}

pub(crate) fn conversations_table(summaries: &[ConversationSummary]) -> String {
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.display_index.to_string(),
                s.counterpart.clone(),
                format_timestamp(&s.last_message_time),
            ]
        })
        .collect();
    render_table(&["ID", "Talking to", "Last message"], &rows)
}

/// `sender (HH:MM dd/mm/YYYY): body`, with the viewer's own lines dimmed
/// differently from the counterpart's.
pub(crate) fn format_transcript_line(message: &Message, viewer: &str) -> String {
    let color = if message.sender == viewer { DIM } else { CYAN };
    format!(
        "{color}{} ({}){RESET}: {}",
        message.sender,
        format_timestamp(&message.sent_at),
        message.body
    )
}

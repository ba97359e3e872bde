//! Schedule request pipeline: stored ref → upstream fetch → formatted reply.

use anyhow::Result;

use super::format::{format_timetable, Period};
use super::messages;
use super::Reply;
use crate::api::TimetableClient;
use crate::storage::SessionStore;
use crate::utils::datetime::moscow_today;

/// Builds the reply for a today/tomorrow/week request.
///
/// An empty formatting result (including a degraded upstream fetch) renders as
/// the empty-schedule message, never as an error.
pub async fn timetable_reply(
    store: &SessionStore,
    api: &TimetableClient,
    user_id: &str,
    period: Period,
) -> Result<Reply> {
    let Some(stored_ref) = store.get(user_id).await? else {
        return Ok(Reply::plain(messages::login_first()));
    };

    let payload = api.fetch_schedule(&stored_ref).await;
    let (text, parse_mode) = format_timetable(&payload, &stored_ref, period, moscow_today());

    if text.trim().is_empty() {
        return Ok(Reply::plain(messages::timetable_empty()));
    }

    Ok(Reply {
        text,
        parse_mode,
        menu: None,
    })
}

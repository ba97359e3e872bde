//! Turns a raw schedule payload into the text the bot sends.
//!
//! Pure functions only: the reference date comes in as a parameter, so the
//! same inputs always render the same output.

use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use teloxide::types::ParseMode;
use teloxide::utils::html::escape;

use crate::api::{ScheduleItem, TimetablePayload};
use crate::utils::datetime::format_date;

/// Requested schedule window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Tomorrow,
    Week,
}

/// Upstream weekday names sometimes carry a trailing week numeral.
static TRAILING_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\d+$").unwrap());

/// Renders a schedule for the given period.
///
/// Returns the display text and its markup kind; an empty text means there is
/// nothing to show and the caller renders the empty-schedule message. The
/// viewer role comes from the stored ref: a trailing `T` marks a teacher, who
/// sees group names instead of teacher names.
pub fn format_timetable(
    payload: &TimetablePayload,
    stored_ref: &str,
    period: Period,
    today: NaiveDate,
) -> (String, Option<ParseMode>) {
    let items = payload.items();
    if items.is_empty() {
        return (String::new(), None);
    }

    let is_teacher = stored_ref.ends_with('T');
    let filtered: Vec<&ScheduleItem> = match period {
        Period::Today => filter_by_date(items, today),
        Period::Tomorrow => filter_by_date(items, today + Duration::days(1)),
        Period::Week => items.iter().collect(),
    };

    if filtered.is_empty() {
        return (String::new(), None);
    }

    let text = match period {
        Period::Week => render_week(&filtered, is_teacher),
        Period::Today => render_day(&filtered, is_teacher, "Сегодня"),
        Period::Tomorrow => render_day(&filtered, is_teacher, "Завтра"),
    };

    (text, Some(ParseMode::Html))
}

fn filter_by_date(items: &[ScheduleItem], date: NaiveDate) -> Vec<&ScheduleItem> {
    let prefix = format_date(date);
    items
        .iter()
        .filter(|item| item.date.starts_with(&prefix))
        .collect()
}

fn render_day(items: &[&ScheduleItem], is_teacher: bool, title: &str) -> String {
    let mut out = format!("<b>{title}</b>");
    for (idx, item) in items.iter().enumerate() {
        out.push_str(if idx == 0 { "\n" } else { "\n\n" });
        out.push_str(&render_item(item, is_teacher, idx + 1));
    }
    out
}

fn render_week(items: &[&ScheduleItem], is_teacher: bool) -> String {
    // Weekday numbers outside 1..=7 are upstream noise and are dropped.
    let mut by_day: BTreeMap<i64, Vec<&ScheduleItem>> = BTreeMap::new();
    for item in items {
        if (1..=7).contains(&item.weekday) {
            by_day.entry(item.weekday).or_default().push(item);
        }
    }

    let mut sections = Vec::new();
    for day_items in by_day.values() {
        let header = clean_weekday_name(&day_items[0].weekday_name);
        let mut section = format!("<b>{}</b>", escape(&header));
        for (idx, item) in day_items.iter().enumerate() {
            section.push_str(if idx == 0 { "\n" } else { "\n\n" });
            section.push_str(&render_item(item, is_teacher, idx + 1));
        }
        sections.push(section);
    }
    sections.join("\n\n")
}

fn render_item(item: &ScheduleItem, is_teacher: bool, number: usize) -> String {
    let glyph = lesson_glyph(&item.discipline);
    let counterparty = if is_teacher { &item.group } else { &item.teacher };

    let time = match (item.starts_at.is_empty(), item.ends_at.is_empty()) {
        (false, false) => format!("{}–{}", item.starts_at, item.ends_at),
        (false, true) => item.starts_at.clone(),
        (true, _) => item.ends_at.clone(),
    };

    let mut lines = vec![
        format!(
            "<b>{number}.</b> {glyph} <b>{}</b>",
            escape(&item.discipline)
        ),
        format!(
            "👤 <b>{}</b>  🕒 <code>{}</code>",
            escape(counterparty),
            escape(&time)
        ),
    ];
    if !item.room.is_empty() {
        lines.push(format!("📍 <i>{}</i>", escape(&item.room)));
    }
    lines.join("\n")
}

/// Glyph by lesson kind, matched on the discipline prefix.
fn lesson_glyph(discipline: &str) -> &'static str {
    let lower = discipline.to_lowercase();
    if lower.starts_with("лек") {
        "🟢"
    } else if lower.starts_with("лаб") {
        "🔵"
    } else if lower.starts_with("пр") {
        "🟠"
    } else {
        "⚪"
    }
}

/// Strips the calendar emoji and the trailing numeral off an upstream weekday
/// caption ("📅 Понедельник 14" becomes "Понедельник").
fn clean_weekday_name(raw: &str) -> String {
    let name = raw.strip_prefix("📅").unwrap_or(raw).trim_start();
    TRAILING_NUMBER.replace(name, "").trim().to_string()
}

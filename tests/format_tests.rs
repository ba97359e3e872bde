use chrono::NaiveDate;
use donstu_timetable_bot::api::{ScheduleItem, TimetableData, TimetablePayload};
use donstu_timetable_bot::bot::format::{format_timetable, Period};
use teloxide::types::ParseMode;

const STUDENT_REF: &str = "T2062";
const TEACHER_REF: &str = "T515T";

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
}

fn class(date: &str, weekday: i64, weekday_name: &str, discipline: &str) -> ScheduleItem {
    ScheduleItem {
        discipline: discipline.to_string(),
        teacher: "Иванов И.И.".to_string(),
        group: "ПИ-21".to_string(),
        starts_at: "08:30".to_string(),
        ends_at: "10:00".to_string(),
        room: "1-220".to_string(),
        date: date.to_string(),
        weekday,
        weekday_name: weekday_name.to_string(),
    }
}

fn payload(items: Vec<ScheduleItem>) -> TimetablePayload {
    TimetablePayload {
        data: TimetableData { rasp: items },
        ..Default::default()
    }
}

#[test]
fn test_today_keeps_only_matching_dates() {
    let payload = payload(vec![
        class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика"),
        class("2024-09-03T00:00:00", 2, "Вторник", "пр. Физика"),
    ]);

    let (text, mode) = format_timetable(&payload, STUDENT_REF, Period::Today, reference_date());

    assert!(text.contains("Математика"));
    assert!(!text.contains("Физика"));
    assert!(text.starts_with("<b>Сегодня</b>"));
    assert_eq!(mode, Some(ParseMode::Html));
}

#[test]
fn test_tomorrow_shifts_the_window_by_one_day() {
    let payload = payload(vec![
        class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика"),
        class("2024-09-03T00:00:00", 2, "Вторник", "пр. Физика"),
    ]);

    let (text, _) = format_timetable(&payload, STUDENT_REF, Period::Tomorrow, reference_date());

    assert!(text.contains("Физика"));
    assert!(!text.contains("Математика"));
    assert!(text.starts_with("<b>Завтра</b>"));
}

#[test]
fn test_week_groups_by_weekday_in_ascending_order() {
    let payload = payload(vec![
        class("2024-09-03T00:00:00", 2, "📅 Вторник 2", "пр. Физика"),
        class("2024-09-02T00:00:00", 1, "📅 Понедельник 2", "лек. Математика"),
        class("2024-09-08T00:00:00", 9, "Без дня", "Мусор"),
    ]);

    let (text, _) = format_timetable(&payload, STUDENT_REF, Period::Week, reference_date());

    let monday = text.find("Понедельник").expect("monday header");
    let tuesday = text.find("Вторник").expect("tuesday header");
    assert!(monday < tuesday, "weekdays must be ordered ascending");
    // Headers are cleaned of the calendar emoji and trailing numeral
    assert!(text.contains("<b>Понедельник</b>"));
    assert!(!text.contains("📅"));
    // Weekday 9 is out of range and dropped
    assert!(!text.contains("Мусор"));
}

#[test]
fn test_week_numbering_restarts_per_day() {
    let payload = payload(vec![
        class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика"),
        class("2024-09-03T00:00:00", 2, "Вторник", "пр. Физика"),
    ]);

    let (text, _) = format_timetable(&payload, STUDENT_REF, Period::Week, reference_date());

    assert_eq!(text.matches("<b>1.</b>").count(), 2);
    assert!(!text.contains("<b>2.</b>"));
}

#[test]
fn test_items_are_numbered_with_separators_between_them() {
    let payload = payload(vec![
        class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика"),
        class("2024-09-02T00:00:00", 1, "Понедельник", "лаб. Информатика"),
    ]);

    let (text, _) = format_timetable(&payload, STUDENT_REF, Period::Today, reference_date());

    assert!(text.contains("<b>1.</b>"));
    assert!(text.contains("<b>2.</b>"));
    assert!(text.contains("\n\n"), "items are separated by a blank line");
    assert!(!text.ends_with('\n'), "no trailing separator");
}

#[test]
fn test_student_sees_teacher_name_and_teacher_sees_group() {
    let payload = payload(vec![class(
        "2024-09-02T00:00:00",
        1,
        "Понедельник",
        "лек. Математика",
    )]);

    let (student_text, _) =
        format_timetable(&payload, STUDENT_REF, Period::Today, reference_date());
    assert!(student_text.contains("Иванов И.И."));
    assert!(!student_text.contains("ПИ-21"));

    let (teacher_text, _) =
        format_timetable(&payload, TEACHER_REF, Period::Today, reference_date());
    assert!(teacher_text.contains("ПИ-21"));
    assert!(!teacher_text.contains("Иванов И.И."));
}

#[test]
fn test_lesson_glyph_follows_discipline_prefix() {
    let payload = payload(vec![
        class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика"),
        class("2024-09-02T00:00:00", 1, "Понедельник", "Лаб. Информатика"),
        class("2024-09-02T00:00:00", 1, "Понедельник", "пр. Физика"),
        class("2024-09-02T00:00:00", 1, "Понедельник", "Физкультура"),
    ]);

    let (text, _) = format_timetable(&payload, STUDENT_REF, Period::Today, reference_date());

    assert!(text.contains("🟢"));
    assert!(text.contains("🔵"));
    assert!(text.contains("🟠"));
    assert!(text.contains("⚪"));
}

#[test]
fn test_time_range_renders_partial_values() {
    let mut with_both = class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика");
    with_both.starts_at = "08:30".to_string();
    with_both.ends_at = "10:00".to_string();
    let (text, _) = format_timetable(
        &payload(vec![with_both]),
        STUDENT_REF,
        Period::Today,
        reference_date(),
    );
    assert!(text.contains("08:30–10:00"));

    let mut only_start = class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика");
    only_start.ends_at = String::new();
    let (text, _) = format_timetable(
        &payload(vec![only_start]),
        STUDENT_REF,
        Period::Today,
        reference_date(),
    );
    assert!(text.contains("<code>08:30</code>"));

    let mut only_end = class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика");
    only_end.starts_at = String::new();
    let (text, _) = format_timetable(
        &payload(vec![only_end]),
        STUDENT_REF,
        Period::Today,
        reference_date(),
    );
    assert!(text.contains("<code>10:00</code>"));
}

#[test]
fn test_room_line_is_omitted_when_empty() {
    let mut item = class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика");
    item.room = String::new();

    let (text, _) = format_timetable(
        &payload(vec![item]),
        STUDENT_REF,
        Period::Today,
        reference_date(),
    );

    assert!(!text.contains("📍"));
}

#[test]
fn test_empty_payload_renders_nothing() {
    let (text, mode) = format_timetable(
        &TimetablePayload::empty(),
        STUDENT_REF,
        Period::Week,
        reference_date(),
    );

    assert!(text.is_empty());
    assert_eq!(mode, None);
}

#[test]
fn test_no_matches_for_the_day_renders_nothing() {
    let payload = payload(vec![class(
        "2024-09-05T00:00:00",
        4,
        "Четверг",
        "лек. Математика",
    )]);

    let (text, mode) = format_timetable(&payload, STUDENT_REF, Period::Today, reference_date());

    assert!(text.is_empty());
    assert_eq!(mode, None);
}

#[test]
fn test_formatting_is_deterministic() {
    let payload = payload(vec![
        class("2024-09-02T00:00:00", 1, "Понедельник", "лек. Математика"),
        class("2024-09-03T00:00:00", 2, "Вторник", "пр. Физика"),
    ]);

    let first = format_timetable(&payload, STUDENT_REF, Period::Week, reference_date());
    let second = format_timetable(&payload, STUDENT_REF, Period::Week, reference_date());

    assert_eq!(first, second);
}

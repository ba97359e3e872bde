//! Wire types of the timetable API and the stored schedule ref.
//!
//! The upstream schedule payload keys its fields in Russian; the serde renames
//! below are the only place those names appear, the rest of the crate works
//! with the mapped field names.

use serde::Deserialize;
use std::fmt;

/// Response of `POST /tokenauth`.
///
/// `state == -1` means wrong credentials; that is a regular outcome the caller
/// has to check, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub state: i64,
    pub data: Option<AuthPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub data: AuthAccount,
}

/// The upstream account the token belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthAccount {
    pub id: i64,
}

/// Response of `GET /UserInfo/Student`.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentInfoResponse {
    pub data: StudentInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentInfo {
    pub group: StudentGroup,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentGroup {
    pub item2: i64,
}

/// Response of `GET /UserInfo/user`.
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherInfoResponse {
    pub data: TeacherInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeacherInfo {
    #[serde(rename = "teacherID")]
    pub teacher_id: i64,
}

/// One class meeting as delivered by `GET /Rasp`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleItem {
    #[serde(rename = "дисциплина", default)]
    pub discipline: String,
    #[serde(rename = "преподаватель", default)]
    pub teacher: String,
    #[serde(rename = "группа", default)]
    pub group: String,
    #[serde(rename = "начало", default)]
    pub starts_at: String,
    #[serde(rename = "конец", default)]
    pub ends_at: String,
    #[serde(rename = "аудитория", default)]
    pub room: String,
    #[serde(rename = "дата", default)]
    pub date: String,
    #[serde(rename = "деньНедели", default)]
    pub weekday: i64,
    #[serde(rename = "день_недели", default)]
    pub weekday_name: String,
}

/// Raw schedule response. Malformed payloads deserialize to an empty item
/// list, so downstream code only ever sees a (possibly empty) list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimetablePayload {
    #[serde(default)]
    pub data: TimetableData,
    #[serde(default)]
    pub state: i64,
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimetableData {
    #[serde(default)]
    pub rasp: Vec<ScheduleItem>,
}

impl TimetablePayload {
    /// The degraded payload returned when a schedule fetch fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.data.rasp
    }
}

/// A persisted schedule binding: institution code, numeric id, and whether the
/// id belongs to a teacher (trailing `T`) or a student group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRef {
    pub institution: char,
    pub id: String,
    pub is_teacher: bool,
}

impl ScheduleRef {
    /// Decodes a stored value of the form `{T|D}{digits}[T]`.
    ///
    /// Provisional markers (a bare institution letter left by an unfinished
    /// login) and anything else without a numeric id do not parse; callers
    /// treat such refs as unroutable.
    pub fn parse(raw: &str) -> Option<Self> {
        let institution = raw.chars().next()?;
        if institution != 'T' && institution != 'D' {
            return None;
        }
        let rest = &raw[1..];
        let (id, is_teacher) = match rest.strip_suffix('T') {
            Some(digits) => (digits, true),
            None => (rest, false),
        };
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            institution,
            id: id.to_string(),
            is_teacher,
        })
    }
}

impl fmt::Display for ScheduleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.institution, self.id)?;
        if self.is_teacher {
            write!(f, "T")?;
        }
        Ok(())
    }
}

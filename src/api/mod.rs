//! HTTP client for the university timetable API.
//!
//! Wraps the four upstream operations: credential exchange, student group
//! lookup, teacher id lookup, and the schedule fetch. The client owns URL
//! construction and institution routing and never touches session state.

pub mod error;
pub mod types;

pub use error::ApiError;
pub use types::{
    AuthResponse, ScheduleItem, ScheduleRef, StudentInfoResponse, TeacherInfoResponse,
    TimetableData, TimetablePayload,
};

use reqwest::header::COOKIE;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

use crate::utils::datetime::{format_date, moscow_today};

/// Base URL for PI DGTU (institution code `T`).
pub const TPI_API_URL: &str = "https://edu-tpi.donstu.ru/api";
/// Base URL for DGTU (institution code `D`).
pub const DGTY_API_URL: &str = "https://edu.donstu.ru/api";

const AUTH_PATH: &str = "/tokenauth";
const STUDENT_INFO_PATH: &str = "/UserInfo/Student";
const TEACHER_INFO_PATH: &str = "/UserInfo/user";
const SCHEDULE_PATH: &str = "/Rasp";

/// Configuration for the timetable client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub tpi_base_url: String,
    pub dgty_base_url: String,
    /// Applied to every request so a hung upstream cannot stall a handler.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            tpi_base_url: TPI_API_URL.to_string(),
            dgty_base_url: DGTY_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: "DGTY-Timetable-Bot/1.0".to_string(),
        }
    }
}

/// Stateless client for both institutions' timetable APIs.
#[derive(Clone)]
pub struct TimetableClient {
    http: Client,
    config: ApiConfig,
}

impl TimetableClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::Network {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { http, config })
    }

    /// Routes an institution code (or any stored value starting with one) to
    /// its base URL. Unknown codes are unroutable.
    pub fn base_url(&self, code: &str) -> Option<&str> {
        if code.starts_with('T') {
            Some(&self.config.tpi_base_url)
        } else if code.starts_with('D') {
            Some(&self.config.dgty_base_url)
        } else {
            None
        }
    }

    fn routed_url(&self, code: &str, path: &str) -> Result<String, ApiError> {
        let base = self.base_url(code).ok_or_else(|| ApiError::UnknownInstitution {
            code: code.to_string(),
        })?;
        Ok(format!("{base}{path}"))
    }

    /// Exchanges credentials for an access token.
    ///
    /// Network and HTTP failures propagate; a `state == -1` body is a normal
    /// wrong-credentials outcome the caller must inspect.
    pub async fn authenticate(
        &self,
        institution: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let url = self.routed_url(institution, AUTH_PATH)?;
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<AuthResponse>().await?)
    }

    /// Resolves the group id a student account belongs to.
    pub async fn student_group_id(
        &self,
        institution: &str,
        access_token: &str,
        account_id: &str,
    ) -> Result<i64, ApiError> {
        let url = self.routed_url(institution, STUDENT_INFO_PATH)?;
        let response = self
            .http
            .get(&url)
            .header(COOKIE, format!("authToken={access_token}"))
            .query(&[("studentID", account_id)])
            .send()
            .await?
            .error_for_status()?;

        let info = response.json::<StudentInfoResponse>().await?;
        Ok(info.data.group.item2)
    }

    /// Resolves the teacher id behind a staff account.
    pub async fn teacher_id(
        &self,
        institution: &str,
        access_token: &str,
        account_id: &str,
    ) -> Result<i64, ApiError> {
        let url = self.routed_url(institution, TEACHER_INFO_PATH)?;
        let response = self
            .http
            .get(&url)
            .header(COOKIE, format!("authToken={access_token}"))
            .query(&[("userID", account_id)])
            .send()
            .await?
            .error_for_status()?;

        let info = response.json::<TeacherInfoResponse>().await?;
        Ok(info.data.teacher_id)
    }

    /// Fetches the schedule bound to a stored ref.
    ///
    /// This is the one degrade-on-failure operation: whatever goes wrong
    /// (unroutable ref, network failure, bad payload), the caller gets an
    /// empty payload and renders it as an empty schedule.
    pub async fn fetch_schedule(&self, raw_ref: &str) -> TimetablePayload {
        match self.try_fetch_schedule(raw_ref).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!("Schedule fetch degraded for ref {raw_ref}: {err}");
                TimetablePayload::empty()
            }
        }
    }

    async fn try_fetch_schedule(&self, raw_ref: &str) -> Result<TimetablePayload, ApiError> {
        let schedule_ref = ScheduleRef::parse(raw_ref).ok_or_else(|| ApiError::UnroutableRef {
            raw: raw_ref.to_string(),
        })?;
        let url = self.routed_url(raw_ref, SCHEDULE_PATH)?;
        let id_param = if schedule_ref.is_teacher {
            "idTeacher"
        } else {
            "idGroup"
        };

        let response = self
            .http
            .get(&url)
            .query(&[
                (id_param, schedule_ref.id.as_str()),
                ("sdate", format_date(moscow_today()).as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<TimetablePayload>().await?)
    }
}

//! Multi-step login dialogue.
//!
//! The flow keeps its state in the session store under three keys scoped by
//! user id: the dialogue state, the captured username, and the chosen
//! institution. They are written and removed together, so a user is either
//! mid-flow (all three present) or idle (none).

use anyhow::Result;
use tracing::error;

use super::messages;
use super::{Menu, Reply};
use crate::api::{ApiError, TimetableClient};
use crate::config::InstitutionSelectionMode;
use crate::storage::SessionStore;
use crate::utils::validation::is_email;

/// Institution used when the flow is configured to skip the explicit choice.
pub const DEFAULT_INSTITUTION: &str = "T";

/// Dialogue position of a user who has started logging in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    WaitingLogin,
    WaitingPassword,
}

impl LoginState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WaitingLogin => "waiting_login",
            Self::WaitingPassword => "waiting_password",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "waiting_login" => Some(Self::WaitingLogin),
            "waiting_password" => Some(Self::WaitingPassword),
            _ => None,
        }
    }
}

fn state_key(user_id: &str) -> String {
    format!("{user_id}:login_state")
}

fn username_key(user_id: &str) -> String {
    format!("{user_id}:login_username")
}

fn university_key(user_id: &str) -> String {
    format!("{user_id}:login_university")
}

/// Starts the login dialogue for a user.
///
/// Depending on configuration this either begins collecting credentials right
/// away (fixed institution) or first asks which institution to log into.
pub async fn begin(
    store: &SessionStore,
    mode: InstitutionSelectionMode,
    user_id: &str,
) -> Result<Reply> {
    match mode {
        InstitutionSelectionMode::DefaultTpi => {
            start_flow(store, user_id, DEFAULT_INSTITUTION).await?;
            Ok(Reply::plain(messages::enter_username()))
        }
        InstitutionSelectionMode::ExplicitChoice => Ok(Reply::plain(messages::choose_university())
            .with_menu(Menu::InstitutionChoice)),
    }
}

/// Handles the inline institution pick: drops any previous binding and opens
/// the credential dialogue for the chosen institution.
pub async fn choose_institution(
    store: &SessionStore,
    user_id: &str,
    institution: &str,
) -> Result<Reply> {
    store.delete(user_id).await?;
    start_flow(store, user_id, institution).await?;
    Ok(Reply::plain(messages::enter_username()))
}

/// Opens the dialogue: provisional institution marker plus the transient keys.
async fn start_flow(store: &SessionStore, user_id: &str, institution: &str) -> Result<()> {
    store
        .set_many(&[
            (user_id.to_string(), institution.to_string()),
            (
                state_key(user_id),
                LoginState::WaitingLogin.as_str().to_string(),
            ),
            (university_key(user_id), institution.to_string()),
        ])
        .await
}

/// Feeds a free-text message into the dialogue.
///
/// Returns `None` when no login flow is active for the user; such messages are
/// ignored by the caller.
pub async fn handle_text(
    store: &SessionStore,
    api: &TimetableClient,
    user_id: &str,
    text: &str,
) -> Result<Option<Reply>> {
    let state = match store.get(&state_key(user_id)).await? {
        Some(raw) => LoginState::parse(&raw),
        None => None,
    };

    match state {
        None => Ok(None),
        Some(LoginState::WaitingLogin) => {
            store
                .set_many(&[
                    (username_key(user_id), text.to_string()),
                    (
                        state_key(user_id),
                        LoginState::WaitingPassword.as_str().to_string(),
                    ),
                ])
                .await?;
            Ok(Some(Reply::plain(messages::enter_password())))
        }
        Some(LoginState::WaitingPassword) => {
            Ok(Some(complete_login(store, api, user_id, text).await?))
        }
    }
}

/// Terminal step: consumes the password and always leaves the flow idle,
/// whatever the outcome.
async fn complete_login(
    store: &SessionStore,
    api: &TimetableClient,
    user_id: &str,
    password: &str,
) -> Result<Reply> {
    let username = store.get(&username_key(user_id)).await?;
    let university = store.get(&university_key(user_id)).await?;

    // The transient keys go away before any network call, so a crash
    // mid-authentication cannot strand a half-finished flow.
    cleanup(store, user_id).await?;

    let (Some(username), Some(university)) = (username, university) else {
        return Ok(Reply::plain(messages::try_later()));
    };

    match authenticate_and_resolve(api, &university, &username, password).await {
        Ok(AuthOutcome::WrongCredentials) => Ok(Reply::plain(messages::wrong_credentials())),
        Ok(AuthOutcome::Resolved(stored_ref)) => {
            store.set(user_id, &stored_ref).await?;
            Ok(Reply::plain(messages::login_complete()).with_menu(Menu::Main))
        }
        Err(err) => {
            error!("Authorization failed for user {user_id}: {err}");
            Ok(Reply::plain(messages::try_later()))
        }
    }
}

enum AuthOutcome {
    WrongCredentials,
    Resolved(String),
}

async fn authenticate_and_resolve(
    api: &TimetableClient,
    university: &str,
    username: &str,
    password: &str,
) -> Result<AuthOutcome, ApiError> {
    let auth = api.authenticate(university, username, password).await?;
    if auth.state == -1 {
        return Ok(AuthOutcome::WrongCredentials);
    }

    let payload = auth.data.ok_or_else(|| ApiError::UnexpectedResponse {
        message: "token response without data".to_string(),
    })?;
    let account_id = payload.data.id.to_string();

    // Student accounts log in with an email, teacher accounts do not.
    let stored_ref = if is_email(username) {
        let group_id = api
            .student_group_id(university, &payload.access_token, &account_id)
            .await?;
        format!("{university}{group_id}")
    } else {
        let teacher_id = api
            .teacher_id(university, &payload.access_token, &account_id)
            .await?;
        format!("{university}{teacher_id}T")
    };

    Ok(AuthOutcome::Resolved(stored_ref))
}

async fn cleanup(store: &SessionStore, user_id: &str) -> Result<()> {
    store
        .delete_many(&[
            state_key(user_id),
            username_key(user_id),
            university_key(user_id),
        ])
        .await
}

/// Drops the user's schedule binding. Logging out while not logged in is a
/// reportable condition, not an error.
pub async fn logout(store: &SessionStore, user_id: &str) -> Result<Reply> {
    if store.get(user_id).await?.is_none() {
        return Ok(Reply::plain(messages::not_authenticated()));
    }

    store.delete(user_id).await?;
    Ok(Reply::plain(messages::logout_complete()).with_menu(Menu::Login))
}

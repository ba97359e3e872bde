//! Chat-facing core: command routing, the login dialogue, and schedule replies.

pub mod commands;
pub mod format;
pub mod handlers;
pub mod keyboards;
pub mod login;
pub mod messages;
pub mod timetable;

use teloxide::types::ParseMode;

use crate::api::TimetableClient;
use crate::config::InstitutionSelectionMode;
use crate::storage::SessionStore;

/// Shared dependencies injected into every handler.
#[derive(Clone)]
pub struct AppContext {
    pub store: SessionStore,
    pub api: TimetableClient,
    pub institution_mode: InstitutionSelectionMode,
}

/// Which reply keyboard to attach to an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    /// The single-button keyboard shown while logged out
    Login,
    /// Today/tomorrow/week/help/logout keyboard shown once logged in
    Main,
    /// Inline institution picker
    InstitutionChoice,
}

/// What the core asks the transport layer to send.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub menu: Option<Menu>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
            menu: None,
        }
    }

    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menu = Some(menu);
        self
    }
}

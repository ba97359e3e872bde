//! Reply and inline keyboards plus their caption constants.
//!
//! Captions double as routing patterns in the message handler, so they live
//! here as constants rather than inline literals.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

pub const BTN_TODAY: &str = "📖 Сегодня";
pub const BTN_TOMORROW: &str = "📖 Завтра";
pub const BTN_WEEK: &str = "📖 Неделя";
pub const BTN_HELP: &str = "ℹ Помощь";
pub const BTN_LOGIN: &str = "🔑 Авторизация";
pub const BTN_LOGOUT: &str = "🚪 Выход";

/// Callback ids of the institution picker.
pub const CB_TPI: &str = "tpi";
pub const CB_DGTY: &str = "dgty";

pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(BTN_TODAY),
            KeyboardButton::new(BTN_TOMORROW),
        ],
        vec![
            KeyboardButton::new(BTN_WEEK),
            KeyboardButton::new(BTN_HELP),
        ],
        vec![KeyboardButton::new(BTN_LOGOUT)],
    ])
    .resize_keyboard(true)
}

pub fn login_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![KeyboardButton::new(BTN_LOGIN)]]).resize_keyboard(true)
}

pub fn institution_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("ПИ ДГТУ", CB_TPI),
        InlineKeyboardButton::callback("ДГТУ", CB_DGTY),
    ]])
}

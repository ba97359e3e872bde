//! User-facing message texts.
//!
//! Kept in one module so handler code reads as flow logic, not copywriting.

use super::keyboards::{BTN_LOGIN, BTN_LOGOUT, BTN_TODAY, BTN_TOMORROW, BTN_WEEK};

pub fn start() -> String {
    format!(
        "Привет! Я показываю расписание занятий ДГТУ и ПИ ДГТУ.\n\n\
         Нажмите «{BTN_LOGIN}», чтобы войти в личный кабинет."
    )
}

pub fn choose_university() -> String {
    "Выберите университет:".to_string()
}

pub fn enter_username() -> String {
    "Введите логин от личного кабинета (студенты — email):".to_string()
}

pub fn enter_password() -> String {
    "Введите пароль:".to_string()
}

pub fn wrong_credentials() -> String {
    "Неверный логин или пароль. Попробуйте ещё раз.".to_string()
}

pub fn try_later() -> String {
    "Не получилось выполнить запрос. Попробуйте позже.".to_string()
}

pub fn login_complete() -> String {
    format!(
        "Вы авторизованы! Выберите период в меню ниже.\n\
         Для выхода нажмите «{BTN_LOGOUT}»."
    )
}

pub fn not_authenticated() -> String {
    "Вы ещё не авторизованы.".to_string()
}

pub fn logout_complete() -> String {
    "Вы вышли из аккаунта.".to_string()
}

pub fn login_first() -> String {
    "Сначала авторизуйтесь, чтобы получить расписание.".to_string()
}

pub fn timetable_empty() -> String {
    "Занятий не найдено.".to_string()
}

pub fn help() -> String {
    format!(
        "«{BTN_TODAY}» — расписание на сегодня\n\
         «{BTN_TOMORROW}» — расписание на завтра\n\
         «{BTN_WEEK}» — расписание на неделю\n\
         «{BTN_LOGOUT}» — выйти из аккаунта"
    )
}

use donstu_timetable_bot::config::{Config, InstitutionSelectionMode, StorageKind};
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("STORAGE_TYPE");
    env::remove_var("DATABASE_URL");
    env::remove_var("HTTP_PORT");
    env::remove_var("INSTITUTION_SELECTION_MODE");
    env::remove_var("TPI_API_URL");
    env::remove_var("DGTY_API_URL");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("STORAGE_TYPE", "sqlite");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("INSTITUTION_SELECTION_MODE", "choice");
    env::set_var("TPI_API_URL", "http://localhost:9001/api");
    env::set_var("DGTY_API_URL", "http://localhost:9002/api");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.storage_kind, StorageKind::Sqlite);
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(
        config.institution_mode,
        InstitutionSelectionMode::ExplicitChoice
    );
    assert_eq!(config.tpi_api_url, "http://localhost:9001/api");
    assert_eq!(config.dgty_api_url, "http://localhost:9002/api");

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.storage_kind, StorageKind::Memory);
    assert_eq!(config.database_url, "sqlite:./data/sessions.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.institution_mode, InstitutionSelectionMode::DefaultTpi);
    assert_eq!(config.tpi_api_url, "https://edu-tpi.donstu.ru/api");
    assert_eq!(config.dgty_api_url, "https://edu.donstu.ru/api");

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_rejects_unknown_storage_type() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "token");
    env::set_var("STORAGE_TYPE", "etcd");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_config_rejects_unknown_institution_mode() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "token");
    env::set_var("INSTITUTION_SELECTION_MODE", "random");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_config_rejects_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "token");
    env::set_var("HTTP_PORT", "not-a-port");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

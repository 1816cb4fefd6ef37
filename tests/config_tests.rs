use course_link_bot::config::{Config, DEFAULT_DATABASE_URL};
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in ["TELEGRAM_BOT_TOKEN", "DATABASE_URL", "AUTH_URL", "HTTP_PORT"] {
        env::remove_var(key);
    }
}

fn set_required() {
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("AUTH_URL", "https://learn.example.com");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.auth_url.as_str(), "https://learn.example.com/");
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();

    let config = Config::from_env().unwrap();

    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.http_port, 3000);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("AUTH_URL", "https://learn.example.com");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_missing_auth_url() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("AUTH_URL must be set"));

    env::set_var("AUTH_URL", "");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("AUTH_URL must be set"));

    clear_env();
}

#[test]
fn test_config_invalid_auth_url() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    for bad in [
        "not a url",
        "learn.example.com",
        "ftp://learn.example.com",
        "mailto:admin@example.com",
    ] {
        env::set_var("AUTH_URL", bad);
        let error_msg = Config::from_env().unwrap_err().to_string();
        assert!(error_msg.contains("Invalid AUTH_URL"), "{bad}: {error_msg}");
    }

    clear_env();
}

#[test]
fn test_config_auth_url_keeps_path() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("AUTH_URL", "  https://learn.example.com/portal  ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.auth_url.path(), "/portal");

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();

    for bad in ["invalid_port", "-1", "65536"] {
        env::set_var("HTTP_PORT", bad);
        let error_msg = Config::from_env().unwrap_err().to_string();
        assert!(error_msg.contains("Invalid HTTP_PORT"));
    }

    env::set_var("HTTP_PORT", "  65535  ");
    assert_eq!(Config::from_env().unwrap().http_port, 65535);

    clear_env();
}

#[test]
fn test_config_empty_database_url_uses_default() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();
    env::set_var("DATABASE_URL", "   ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);

    clear_env();
}

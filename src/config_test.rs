use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Caller must hold `lock_env()` so no other test touches the same vars.
unsafe fn clear_site_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("WEBSITE_DIR");
        std::env::remove_var("RESEND_API_KEY");
        std::env::remove_var("ESTIMATE_TO_EMAIL");
        std::env::remove_var("ESTIMATE_FROM_EMAIL");
        std::env::remove_var("CORS_ALLOW_ANY");
    }
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "FALSE", " Off "] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_defaults() {
    let _guard = lock_env();
    unsafe { clear_site_env() };

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert!(cfg.resend_api_key.is_none());
    assert_eq!(cfg.estimate_to_email, DEFAULT_ESTIMATE_TO_EMAIL);
    assert_eq!(cfg.estimate_from_email, DEFAULT_ESTIMATE_FROM_EMAIL);
}

#[test]
fn from_env_parses_overrides() {
    let _guard = lock_env();
    unsafe {
        clear_site_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("WEBSITE_DIR", "/srv/site");
        std::env::set_var("RESEND_API_KEY", "re_test");
        std::env::set_var("ESTIMATE_TO_EMAIL", "owner@example.com");
        std::env::set_var("ESTIMATE_FROM_EMAIL", "estimates@example.com");
        std::env::set_var("CORS_ALLOW_ANY", "off");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.website_dir, PathBuf::from("/srv/site"));
    assert_eq!(cfg.resend_api_key.as_deref(), Some("re_test"));
    assert_eq!(cfg.estimate_to_email, "owner@example.com");
    assert_eq!(cfg.estimate_from_email, "estimates@example.com");
    assert!(!cfg.cors_allow_any);

    unsafe { clear_site_env() };
}

#[test]
fn from_env_blank_values_fall_back_to_defaults() {
    let _guard = lock_env();
    unsafe {
        clear_site_env();
        std::env::set_var("RESEND_API_KEY", "   ");
        std::env::set_var("ESTIMATE_TO_EMAIL", "");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert!(cfg.resend_api_key.is_none());
    assert_eq!(cfg.estimate_to_email, DEFAULT_ESTIMATE_TO_EMAIL);

    unsafe { clear_site_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    let _guard = lock_env();
    unsafe {
        clear_site_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = SiteConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe { clear_site_env() };
}

#[test]
fn from_env_invalid_cors_flag_errors() {
    let _guard = lock_env();
    unsafe {
        clear_site_env();
        std::env::set_var("CORS_ALLOW_ANY", "sometimes");
    }

    let err = SiteConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("CORS_ALLOW_ANY"));

    unsafe { clear_site_env() };
}

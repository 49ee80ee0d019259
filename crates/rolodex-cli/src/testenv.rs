//! Shared test helpers for environment-variable manipulation.
//!
//! Env vars are process-global; tests that set, remove, or assert on them
//! serialize on [`lock`] so parallel test threads cannot observe each
//! other's guards.

use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Take the process-wide environment lock.
pub fn lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// RAII guard that restores an env var's previous value on drop.
pub struct EnvGuard {
    key: String,
    prev: Option<String>,
}

impl EnvGuard {
    /// Set `key` to `value`, remembering the previous value.
    pub fn set(key: &str, value: &str) -> Self {
        let prev = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self {
            key: key.to_string(),
            prev,
        }
    }

    /// Remove `key`, remembering the previous value.
    pub fn remove(key: &str) -> Self {
        let prev = std::env::var(key).ok();
        unsafe { std::env::remove_var(key) };
        Self {
            key: key.to_string(),
            prev,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            if let Some(ref val) = self.prev {
                std::env::set_var(&self.key, val);
            } else {
                std::env::remove_var(&self.key);
            }
        }
    }
}

//! Scoped environment variable overrides for tests

use std::env;

/// Sets or clears a variable and restores the previous value on drop
///
/// Callers that touch the environment must also be `#[serial]`.
pub(crate) struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &str, value: &str) -> Self {
        let guard = Self::capture(key);
        env::set_var(key, value);
        guard
    }

    pub(crate) fn remove(key: &str) -> Self {
        let guard = Self::capture(key);
        env::remove_var(key);
        guard
    }

    fn capture(key: &str) -> Self {
        Self {
            key: key.to_string(),
            old_value: env::var(key).ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(v) => env::set_var(&self.key, v),
            None => env::remove_var(&self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEY: &str = "DOTNET_GUARD_TEST_ENV_GUARD";

    #[test]
    #[serial]
    fn test_previous_value_is_restored() {
        env::set_var(KEY, "before");
        {
            let _guard = EnvGuard::set(KEY, "during");
            assert_eq!(env::var(KEY).unwrap(), "during");
        }
        assert_eq!(env::var(KEY).unwrap(), "before");

        {
            let _guard = EnvGuard::remove(KEY);
            assert!(env::var(KEY).is_err());
        }
        assert_eq!(env::var(KEY).unwrap(), "before");
        env::remove_var(KEY);
    }

    #[test]
    #[serial]
    fn test_unset_variable_stays_unset() {
        env::remove_var(KEY);
        drop(EnvGuard::set(KEY, "during"));
        assert!(env::var(KEY).is_err());
    }
}

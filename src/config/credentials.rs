// src/config/credentials.rs
use std::fmt;

use super::consts::{LOGIN_PASSWORD_VAR, LOGIN_USERNAME_VAR};
use crate::error::MissingVar;

/// Portal login, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Fails naming the first blank field's variable (username before password).
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, MissingVar> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() {
            return Err(MissingVar(LOGIN_USERNAME_VAR));
        }
        if password.is_empty() {
            return Err(MissingVar(LOGIN_PASSWORD_VAR));
        }
        Ok(Self { username, password })
    }

    /// Process environment. Run `config::load_env` first so `.env` is included.
    pub fn from_env() -> Result<Self, MissingVar> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, MissingVar>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup(LOGIN_USERNAME_VAR).unwrap_or_default();
        let password = lookup(LOGIN_PASSWORD_VAR).unwrap_or_default();
        Self::new(username, password)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_password_names_the_variable() {
        let err = Credentials::from_lookup(|k| (k == LOGIN_USERNAME_VAR).then(|| s!("ops"))).unwrap_err();
        assert_eq!(err, MissingVar(LOGIN_PASSWORD_VAR));
        assert!(err.to_string().starts_with("LOGIN_PASSWORD is not set"));
    }

    #[test]
    fn empty_username_is_missing() {
        let err = Credentials::new("", "secret").unwrap_err();
        assert_eq!(err, MissingVar(LOGIN_USERNAME_VAR));
    }

    #[test]
    fn debug_hides_password() {
        let c = Credentials::new("ops", "hunter2").unwrap();
        let shown = format!("{c:?}");
        assert!(shown.contains("ops"));
        assert!(!shown.contains("hunter2"));
    }
}

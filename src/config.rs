//! Session configuration.
//!
//! One [`Config`] per connection, created once at plugin construction and
//! immutable thereafter. The only validation is the password precondition;
//! everything else about the session is resolved lazily against the
//! connection.

use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Configuration errors, surfaced synchronously at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `password` was missing, not a string, or empty.
    #[error("password must be a non-empty string")]
    InvalidPassword,
}

/// Validated session settings for one connection.
///
/// `password` is the account password sent to the nickname service.
/// `nickname` optionally names the nickname to protect and reclaim; when
/// unset, the connection's own nickname is protected.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Config {
    password: String,
    nickname: Option<String>,
}

impl Config {
    /// Build a config from parts, enforcing the password precondition.
    pub fn new(
        password: impl Into<String>,
        nickname: Option<String>,
    ) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::InvalidPassword);
        }
        Ok(Self { password, nickname })
    }

    /// Build a config from an already-parsed configuration mapping.
    ///
    /// Recognized keys: `password` (required non-empty string) and
    /// `nickname` (optional string). No other validation is performed.
    pub fn from_value(value: &toml::Value) -> Result<Self, ConfigError> {
        let password = value
            .get("password")
            .and_then(toml::Value::as_str)
            .ok_or(ConfigError::InvalidPassword)?;
        let nickname = value
            .get("nickname")
            .and_then(toml::Value::as_str)
            .map(str::to_owned);
        Self::new(password, nickname)
    }

    /// The account password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The nickname this session protects.
    ///
    /// An explicitly configured nickname wins; otherwise the connection's
    /// own nickname is protected.
    pub fn desired_nick<'a>(&'a self, connection_nick: &'a str) -> &'a str {
        self.nickname.as_deref().unwrap_or(connection_nick)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = toml::Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("password", &"<redacted>")
            .field("nickname", &self.nickname)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password_passes() {
        let value: toml::Value = toml::from_str(r#"password = "password""#).unwrap();
        let config = Config::from_value(&value).unwrap();
        assert_eq!(config.password(), "password");
    }

    #[test]
    fn test_non_string_password_fails() {
        let value: toml::Value = toml::from_str("password = 1").unwrap();
        let err = Config::from_value(&value).unwrap_err();
        assert_eq!(err.to_string(), "password must be a non-empty string");
    }

    #[test]
    fn test_empty_password_fails() {
        let value: toml::Value = toml::from_str(r#"password = """#).unwrap();
        let err = Config::from_value(&value).unwrap_err();
        assert_eq!(err.to_string(), "password must be a non-empty string");
    }

    #[test]
    fn test_missing_password_fails() {
        let value: toml::Value = toml::from_str(r#"nickname = "Phergie""#).unwrap();
        let err = Config::from_value(&value).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPassword);
    }

    #[test]
    fn test_nickname_is_optional() {
        let value: toml::Value =
            toml::from_str("password = \"password\"\nnickname = \"Guardian\"").unwrap();
        let config = Config::from_value(&value).unwrap();
        assert_eq!(config.desired_nick("Phergie"), "Guardian");
    }

    #[test]
    fn test_desired_nick_falls_back_to_connection() {
        let config = Config::new("password", None).unwrap();
        assert_eq!(config.desired_nick("Phergie"), "Phergie");
    }

    #[test]
    fn test_deserialize_validates() {
        let config: Config = toml::from_str(r#"password = "password""#).unwrap();
        assert_eq!(config.password(), "password");

        let err = toml::from_str::<Config>("password = 1").unwrap_err();
        assert!(
            err.to_string()
                .contains("password must be a non-empty string")
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config::new("hunter2", None).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}

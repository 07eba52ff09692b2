use crate::utils::error::{ExportError, Result};

pub const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";

/// Value of the `Access-Token` header sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(ExportError::MissingCredential {
                var: ACCESS_TOKEN_VAR.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the token through `lookup`, treating unset and empty alike.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Self::new(lookup(ACCESS_TOKEN_VAR).unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

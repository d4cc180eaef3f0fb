use crate::{ConfigError, ConfigErrorResult, MIN_JWT_SECRET_LENGTH};

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Bearer token verification settings.
///
/// Exactly one of `jwt_secret` (HS256) or `jwt_public_key_path` (RS256) must
/// be set.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    /// PEM file, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Expected `aud` claim. Not checked when unset.
    pub audience: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "one of auth.jwt_secret or auth.jwt_public_key_path must be set",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
            )),
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                self.validate_audience()
            }
            (None, Some(key_path)) => {
                if Path::new(key_path).is_absolute() {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative to the config directory",
                    ));
                }
                if key_path.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path cannot contain '..'",
                    ));
                }

                let full_path = config_dir.join(key_path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path {} does not exist",
                        full_path.display()
                    )));
                }
                self.validate_audience()
            }
        }
    }

    fn validate_audience(&self) -> ConfigErrorResult<()> {
        if let Some(audience) = &self.audience
            && audience.trim().is_empty()
        {
            return Err(ConfigError::auth("auth.audience cannot be blank"));
        }
        Ok(())
    }

    /// Signing algorithm implied by the configured key material
    pub fn algorithm(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }

    /// Absolute path of the RS256 public key, if one is configured
    pub fn public_key_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.jwt_public_key_path
            .as_ref()
            .map(|path| config_dir.join(path))
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("jwt_public_key_path", &self.jwt_public_key_path)
            .field("audience", &self.audience)
            .finish()
    }
}

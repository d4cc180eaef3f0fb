//! Token validator construction from configuration

use crate::error::Result as ServerErrorResult;

use todo_auth::{AuthError, JwtValidator};
use todo_config::Config;

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;

/// Build the validator for whichever key material the config carries.
///
/// `Config::validate` guarantees exactly one of secret or public key is set.
pub fn build_jwt_validator(config: &Config) -> ServerErrorResult<JwtValidator> {
    let validator = if let Some(ref secret) = config.auth.jwt_secret {
        info!("JWT: HS256 validation enabled");
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(public_key) = config.read_public_key()? {
        info!("JWT: RS256 validation enabled");
        JwtValidator::with_rs256(&public_key)?
    } else {
        return Err(AuthError::InvalidToken {
            message: "no JWT secret or public key configured".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
        .into());
    };

    Ok(match config.auth.audience {
        Some(ref audience) => {
            info!("JWT: audience '{}' required", audience);
            validator.with_audience(audience)
        }
        None => validator,
    })
}

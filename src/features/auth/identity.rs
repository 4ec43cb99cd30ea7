//! Bearer credential → verified identity.
//!
//! Verification is delegated to the external identity provider, either by
//! asking it directly (`Remote`) or by checking the HS256 signature of the
//! access token it issued (`SharedSecret`). Nothing is cached.

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use super::model::AuthenticatedUser;
use crate::core::config::IdentityConfig;
use crate::core::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("No token")]
    MissingCredential,

    #[error("Invalid token: {0}")]
    InvalidCredential(String),

    #[error("Server auth not configured")]
    Misconfigured,

    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::MissingCredential => AppError::Unauthorized("No token".to_string()),
            IdentityError::InvalidCredential(reason) => {
                tracing::debug!("Rejected credential: {}", reason);
                AppError::Unauthorized("Invalid token".to_string())
            }
            IdentityError::Misconfigured => {
                AppError::Misconfigured("Server auth not configured".to_string())
            }
            IdentityError::Unavailable(reason) => {
                AppError::ExternalServiceError(format!("Identity provider unavailable: {}", reason))
            }
        }
    }
}

pub enum IdentityResolver {
    Remote(RemoteVerifier),
    SharedSecret(SharedSecretVerifier),
    Unconfigured,
}

impl IdentityResolver {
    /// Pick the verification mode from configuration.
    ///
    /// Remote verification wins when both modes are configured.
    pub fn from_config(config: &IdentityConfig) -> Result<Self, IdentityError> {
        match (&config.provider_url, &config.service_key, &config.jwt_secret) {
            (Some(url), Some(key), _) => {
                let client = reqwest::Client::builder()
                    .timeout(config.request_timeout)
                    .build()
                    .map_err(|e| IdentityError::Unavailable(e.to_string()))?;
                Ok(Self::Remote(RemoteVerifier {
                    user_url: format!("{}/auth/v1/user", url),
                    service_key: key.clone(),
                    client,
                }))
            }
            (_, _, Some(secret)) => Ok(Self::SharedSecret(SharedSecretVerifier::new(
                secret.as_bytes(),
                &config.jwt_audience,
                config.jwt_leeway.as_secs(),
            ))),
            _ => Ok(Self::Unconfigured),
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::Remote(_) => "remote",
            Self::SharedSecret(_) => "shared_secret",
            Self::Unconfigured => "unconfigured",
        }
    }

    /// Resolve an optional bearer credential into a verified identity.
    pub async fn resolve(&self, token: Option<&str>) -> Result<AuthenticatedUser, IdentityError> {
        if matches!(self, Self::Unconfigured) {
            return Err(IdentityError::Misconfigured);
        }

        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(IdentityError::MissingCredential)?;

        match self {
            Self::Remote(verifier) => verifier.verify(token).await,
            Self::SharedSecret(verifier) => verifier.verify(token),
            Self::Unconfigured => Err(IdentityError::Misconfigured),
        }
    }
}

/// Asks the identity provider who the token belongs to.
pub struct RemoteVerifier {
    user_url: String,
    service_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl RemoteVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, IdentityError> {
        let response = self
            .client
            .get(&self.user_url)
            .header("apikey", &self.service_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(IdentityError::InvalidCredential(format!(
                "provider answered HTTP {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(IdentityError::Unavailable(format!(
                "provider answered HTTP {}",
                status
            )));
        }

        let user: ProviderUser = response
            .json()
            .await
            .map_err(|e| IdentityError::Unavailable(format!("malformed user response: {}", e)))?;

        let id = Uuid::parse_str(&user.id).map_err(|_| {
            IdentityError::Unavailable(format!("provider returned non-UUID user id {}", user.id))
        })?;

        Ok(AuthenticatedUser {
            id,
            email: user.email.unwrap_or_default(),
        })
    }
}

/// Verifies provider-issued HS256 access tokens locally.
pub struct SharedSecretVerifier {
    key: DecodingKey,
    validation: Validation,
}

#[derive(Debug, Deserialize)]
struct AccessClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

impl SharedSecretVerifier {
    pub fn new(secret: &[u8], audience: &str, leeway: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        validation.leeway = leeway;
        validation.validate_nbf = true;

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, IdentityError> {
        let header =
            decode_header(token).map_err(|e| IdentityError::InvalidCredential(e.to_string()))?;
        if header.alg != Algorithm::HS256 {
            return Err(IdentityError::InvalidCredential(format!(
                "unsupported algorithm {:?}",
                header.alg
            )));
        }

        let data = decode::<AccessClaims>(token, &self.key, &self.validation)
            .map_err(|e| IdentityError::InvalidCredential(e.to_string()))?;

        let id = Uuid::parse_str(&data.claims.sub)
            .map_err(|_| IdentityError::InvalidCredential("subject is not a UUID".to_string()))?;

        Ok(AuthenticatedUser {
            id,
            email: data.claims.email.unwrap_or_default(),
        })
    }
}

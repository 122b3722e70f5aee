use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::{AppError, TokenError};

/// Claims del JWT. El sujeto es el username del vendedor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JwtClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Configuración JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::minutes(config.access_token_expire_minutes),
        }
    }
}

/// Token emitido junto con su vencimiento
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Servicio JWT: emisión y verificación sin estado
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn access_token_duration(&self) -> Duration {
        self.config.access_token_duration
    }

    /// Genera un token de acceso para `username`
    pub fn generate_access_token(&self, username: &str) -> Result<IssuedToken, AppError> {
        self.generate_access_token_at(username, Utc::now())
    }

    pub fn generate_access_token_at(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let exp = now + self.config.access_token_duration;

        let claims = JwtClaims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating access token: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_at: timestamp_to_datetime(claims.exp)?,
        })
    }

    /// Valida y decodifica un token contra un instante dado.
    ///
    /// El token es válido mientras `now < exp`; sin tolerancia.
    pub fn validate_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

fn timestamp_to_datetime(ts: i64) -> Result<DateTime<Utc>, AppError> {
    Utc.timestamp_opt(ts, 0)
        .single()
        .ok_or_else(|| AppError::Jwt(format!("Invalid expiry timestamp {}", ts)))
}

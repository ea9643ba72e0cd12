use chrono::Duration;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::middleware::auth::Claims;

/// Signs an HS256 bearer token for `subject`, valid for `ttl`.
pub fn sign_token(subject: Uuid, role: Option<&str>, secret: &str, ttl: Duration) -> Result<String> {
    let exp = (super::time::now() + ttl).timestamp().max(0) as usize;
    let claims = Claims {
        sub: subject.to_string(),
        exp,
        role: role.map(str::to_string),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign token: {}", e)))
}

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Session identity carried by the signed cookie: which user, in which
/// company, under which role. Role checks always read this server-verified
/// payload, never a client-supplied field.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub ten: String,
    pub name: String,
    pub role: String,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i64, company: String, username: String, role: String, ttl_minutes: i64) -> Self {
        Self {
            sub: user_id,
            ten: company,
            name: username,
            role,
            exp: (Utc::now() + Duration::minutes(ttl_minutes)).timestamp(),
        }
    }
}

pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode failed: {e}"))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT decode failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::{decode_token, encode_token, Claims};

    #[test]
    fn token_roundtrip_preserves_identity() {
        let claims = Claims::new(7, "acme".into(), "alice".into(), "owner".into(), 60);
        let token = encode_token(&claims, "secret").unwrap();
        let decoded = decode_token(&token, "secret").unwrap();
        assert_eq!(decoded.sub, 7);
        assert_eq!(decoded.ten, "acme");
        assert_eq!(decoded.name, "alice");
        assert_eq!(decoded.role, "owner");
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let claims = Claims::new(1, "acme".into(), "alice".into(), "user".into(), 60);
        let token = encode_token(&claims, "secret").unwrap();
        assert!(decode_token(&token, "other").is_err());
    }
}

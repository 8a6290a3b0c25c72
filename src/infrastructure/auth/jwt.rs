use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};
use crate::entities::token::Claims;
use crate::repositories::token::TokenServiceRepository;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    session_expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            session_expiration: Duration::hours(config.session_ttl_hours),
        }
    }

    pub fn create_jwt(&self, user_id: &str, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.session_expiration).timestamp() as usize;

        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp() as usize,
            exp,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(
            token,
            &self.keys.decoding,
            &validation
        )
        .map_err(AuthError::from)
    }
}

impl TokenServiceRepository for JwtService {
    fn create_jwt(&self, user_id: &str, email: &str) -> Result<String, AuthError> {
        self.create_jwt(user_id, email)
    }

    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.decode_jwt(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn service_with(secret: &str, ttl_hours: i64) -> JwtService {
        let config = AppConfig {
            jwt_secret: secret.into(),
            session_ttl_hours: ttl_hours,
            ..Default::default()
        };
        JwtService::new(&config)
    }

    #[test]
    fn issue_then_decode_roundtrips() {
        let service = service_with(SECRET, 24);
        let token = service
            .create_jwt("64f0c30e2f8fb814c8f4b6a1", "user@example.com")
            .unwrap();
        let data = service.decode_jwt(&token).unwrap();
        assert_eq!(data.claims.user_id, "64f0c30e2f8fb814c8f4b6a1");
        assert_eq!(data.claims.email, "user@example.com");
        assert_eq!(data.claims.exp - data.claims.iat, 24 * 3600);
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let service = service_with(SECRET, -1);
        let token = service.create_jwt("abc", "user@example.com").unwrap();
        let err = service.decode_jwt(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn tokens_signed_with_another_key_are_rejected() {
        let issuing = service_with(SECRET, 24);
        let verifying = service_with("fedcba9876543210fedcba9876543210", 24);
        let token = issuing.create_jwt("abc", "user@example.com").unwrap();
        let err = verifying.decode_jwt(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn claims_serialize_with_camel_case_keys() {
        let claims = Claims {
            user_id: "abc".into(),
            email: "user@example.com".into(),
            iat: 1,
            exp: 2,
        };
        let value = serde_json::to_value(&claims).unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("user_id").is_none());
    }
}

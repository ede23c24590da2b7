/// Authentication middleware and ownership authorization
///
/// Validates a Bearer JWT (HS256) and stores the resolved principal
/// (username) in request extensions; handlers receive it through the
/// `Principal` extractor. Token issuance happens outside this service --
/// the core only ever consumes the resolved username, never the raw
/// credential beyond signature validation.
pub mod ownership;

use crate::error::AppError;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{
    error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use chrono::Utc;
use futures::future::LocalBoxFuture;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

/// The authenticated actor making a request, identified by username.
/// Inserted into request extensions by `BearerAuth`.
#[derive(Debug, Clone)]
pub struct Principal(pub String);

/// JWT claims consumed by this service
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the principal's username
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Actix middleware that validates `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerAuth {
    decoding_key: Arc<DecodingKey>,
}

impl BearerAuth {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            decoding_key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthService {
            service: Rc::new(service),
            decoding_key: self.decoding_key.clone(),
        }))
    }
}

pub struct BearerAuthService<S> {
    service: Rc<S>,
    decoding_key: Arc<DecodingKey>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let decoding_key = self.decoding_key.clone();

        Box::pin(async move {
            // Rejections become a 401 response here, never a service-level
            // error, so the scope's routes see only authenticated requests.
            match authenticate(&req, &decoding_key) {
                Ok(claims) => {
                    req.extensions_mut().insert(Principal(claims.sub));
                    service.call(req).await.map(|res| res.map_into_left_body())
                }
                Err(err) => {
                    Ok(req.into_response(err.error_response()).map_into_right_body())
                }
            }
        })
    }
}

fn authenticate(req: &ServiceRequest, decoding_key: &DecodingKey) -> Result<Claims, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing Authorization header".into()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("invalid Authorization scheme".into()))?;

    let token_data = decode::<Claims>(token, decoding_key, &Validation::new(Algorithm::HS256))
        .map_err(|_| AppError::Unauthorized("invalid or expired token".into()))?;

    Ok(token_data.claims)
}

impl FromRequest for Principal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Principal>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("Principal missing")),
        )
    }
}

/// Sign a short-lived token for `username`. The service itself never calls
/// this on the request path; it exists for tests and local tooling.
pub fn issue_token(
    secret: &str,
    username: &str,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: username.to_string(),
        iat: now,
        exp: now + ttl_secs,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips() {
        let token = issue_token("secret", "alice", 60).unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"secret"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(data.claims.sub, "alice");
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token("secret", "alice", -120).unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"secret"),
            &Validation::new(Algorithm::HS256),
        );

        assert!(result.is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("secret", "alice", 60).unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other"),
            &Validation::new(Algorithm::HS256),
        );

        assert!(result.is_err());
    }
}

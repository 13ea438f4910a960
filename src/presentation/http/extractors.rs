// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    domain::user::UserId,
};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity asserted by the upstream gateway via the `X-User-Id` header.
/// Token verification happens before requests reach this service; a request
/// without a usable header is rejected with 401 before any handler runs.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| unauthorized("missing X-User-Id header"))?;

        let user_id = header
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| unauthorized("invalid X-User-Id header"))?;

        Ok(Self(AuthenticatedUser { id: user_id }))
    }
}

fn unauthorized(msg: &str) -> HttpError {
    HttpError::from_error(ApplicationError::unauthorized(msg))
}

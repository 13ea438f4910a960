// src/application/dto/identity.rs
use crate::domain::user::UserId;

/// Identity verified by the upstream gateway and attached to the request.
/// Session issuance and verification live outside this service.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: UserId,
}

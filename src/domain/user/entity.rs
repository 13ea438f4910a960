// src/domain/user/entity.rs
use crate::domain::user::value_objects::UserId;

/// Display-side projection of a user, read for comment author resolution.
/// User records themselves are owned by the excluded account CRUD.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
}

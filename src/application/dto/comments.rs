use crate::domain::user::{UserId, UserProfile};
use crate::domain::video::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentAuthorDto {
    pub id: i64,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub author: CommentAuthorDto,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl CommentDto {
    /// Read-side projection: the author's display profile is joined in from
    /// the user store; a missing profile leaves the display fields empty.
    pub fn project(comment: &Comment, profiles: &HashMap<UserId, UserProfile>) -> Self {
        let profile = profiles.get(&comment.author_id);
        Self {
            id: comment.id.into(),
            author: CommentAuthorDto {
                id: comment.author_id.into(),
                username: profile.map(|p| p.username.clone()),
                avatar_url: profile.and_then(|p| p.avatar_url.clone()),
            },
            text: comment.text.as_str().to_owned(),
            created_at: comment.created_at,
        }
    }
}

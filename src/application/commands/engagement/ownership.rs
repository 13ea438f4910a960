// src/application/commands/engagement/ownership.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        user::UserId,
        video::{Comment, specifications::CommentAuthorSpec},
    },
};

pub(super) fn ensure_comment_author(comment: &Comment, user_id: UserId) -> ApplicationResult<()> {
    if CommentAuthorSpec::new(comment, user_id).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "not the author of this comment",
        ))
    }
}

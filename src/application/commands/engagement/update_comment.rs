// src/application/commands/engagement/update_comment.rs
use super::{EngagementCommandService, ownership::ensure_comment_author};
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::video::{CommentId, CommentText, VideoId},
};

pub struct UpdateCommentCommand {
    pub video_id: i64,
    pub comment_id: i64,
    pub text: String,
}

impl EngagementCommandService {
    pub async fn update_comment(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let video_id = VideoId::new(command.video_id)
            .map_err(|_| ApplicationError::not_found("video not found"))?;
        let comment_id = CommentId::new(command.comment_id)
            .map_err(|_| ApplicationError::not_found("comment not found"))?;

        let video = self
            .read_repo
            .find_by_id(video_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;
        let comment = video
            .comments
            .get(comment_id)
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        ensure_comment_author(comment, actor.id)?;

        let text = CommentText::new(command.text)?;
        let updated = self
            .engagement_repo
            .update_comment_text(video_id, comment_id, text)
            .await?;

        let profiles = self
            .profile_repo
            .find_by_ids(&[updated.author_id])
            .await?
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();

        Ok(CommentDto::project(&updated, &profiles))
    }
}

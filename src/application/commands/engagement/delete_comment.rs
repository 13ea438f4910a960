// src/application/commands/engagement/delete_comment.rs
use super::{EngagementCommandService, ownership::ensure_comment_author};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::video::{CommentId, VideoId},
};

pub struct DeleteCommentCommand {
    pub video_id: i64,
    pub comment_id: i64,
}

impl EngagementCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
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

        self.engagement_repo
            .delete_comment(video_id, comment_id)
            .await?;
        Ok(())
    }
}

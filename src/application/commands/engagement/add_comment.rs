// src/application/commands/engagement/add_comment.rs
use super::EngagementCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::video::{CommentText, NewComment, VideoId},
};

pub struct AddCommentCommand {
    pub video_id: i64,
    pub text: String,
}

impl EngagementCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        // Text is validated before the video is resolved.
        let text = CommentText::new(command.text)?;
        let id = VideoId::new(command.video_id)
            .map_err(|_| ApplicationError::not_found("video not found"))?;
        let video = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;

        let comment = self
            .engagement_repo
            .insert_comment(
                video.id,
                NewComment {
                    author_id: actor.id,
                    text,
                    created_at: self.clock.now(),
                },
            )
            .await?;

        let profiles = self
            .profile_repo
            .find_by_ids(&[comment.author_id])
            .await?
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();

        Ok(CommentDto::project(&comment, &profiles))
    }
}

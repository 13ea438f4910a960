// src/application/commands/engagement/react.rs
use super::EngagementCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReactionTotalsDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::video::{ReactionKind, VideoId},
};

pub struct ToggleReactionCommand {
    pub video_id: i64,
}

impl EngagementCommandService {
    /// Toggle the actor's like on a video. Any authenticated identity may
    /// react; there is no ownership check on this path.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleReactionCommand,
    ) -> ApplicationResult<ReactionTotalsDto> {
        self.toggle(actor, command, ReactionKind::Like).await
    }

    /// Mirror of `toggle_like` for dislikes.
    pub async fn toggle_dislike(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleReactionCommand,
    ) -> ApplicationResult<ReactionTotalsDto> {
        self.toggle(actor, command, ReactionKind::Dislike).await
    }

    async fn toggle(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleReactionCommand,
        kind: ReactionKind,
    ) -> ApplicationResult<ReactionTotalsDto> {
        let id = VideoId::new(command.video_id)
            .map_err(|_| ApplicationError::not_found("video not found"))?;
        let video = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;

        let transition = video.reaction_state(actor.id).toggle(kind);
        let totals = self
            .engagement_repo
            .apply_reaction(id, actor.id, &transition)
            .await?;

        Ok(totals.into())
    }
}

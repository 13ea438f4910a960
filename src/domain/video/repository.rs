use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use crate::domain::video::comments::{Comment, NewComment};
use crate::domain::video::entity::Video;
use crate::domain::video::reaction::{ReactionTotals, ReactionTransition};
use crate::domain::video::value_objects::{CommentId, CommentText, VideoId};
use async_trait::async_trait;

#[async_trait]
pub trait VideoReadRepository: Send + Sync {
    /// Load the full aggregate: metadata, counters, reaction sets and the
    /// ordered comment arena.
    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<Video>>;
}

/// Write-side of the aggregate. Every operation is atomic and scoped to a
/// single video; none of them rewrites the aggregate wholesale.
#[async_trait]
pub trait VideoEngagementRepository: Send + Sync {
    /// Increment the view counter by exactly one. Returns the new total.
    async fn record_view(&self, id: VideoId) -> DomainResult<i64>;

    /// Execute a reaction toggle as a conditional write predicated on
    /// `transition.prior`. Fails with `Conflict` if a concurrent toggle won.
    /// Returns the updated counter pair.
    async fn apply_reaction(
        &self,
        id: VideoId,
        user_id: UserId,
        transition: &ReactionTransition,
    ) -> DomainResult<ReactionTotals>;

    /// Append a comment, allocating its id. Returns the stored comment.
    async fn insert_comment(&self, video_id: VideoId, comment: NewComment)
    -> DomainResult<Comment>;

    /// Overwrite a comment's text in place. Fails with `Conflict` if the
    /// comment vanished after the caller's checks.
    async fn update_comment_text(
        &self,
        video_id: VideoId,
        id: CommentId,
        text: CommentText,
    ) -> DomainResult<Comment>;

    /// Remove a comment permanently.
    async fn delete_comment(&self, video_id: VideoId, id: CommentId) -> DomainResult<()>;
}

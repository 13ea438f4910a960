// src/infrastructure/repositories/postgres_video.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::domain::video::{
    Comment, CommentArena, CommentId, CommentText, NewComment, ReactionKind, ReactionTotals,
    ReactionTransition, Video, VideoEngagementRepository, VideoId, VideoReadRepository,
};
use crate::domain::video::value_objects::ChannelId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashSet;

#[derive(Clone)]
pub struct PostgresVideoReadRepository {
    pool: PgPool,
}

impl PostgresVideoReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresVideoEngagementRepository {
    pool: PgPool,
}

impl PostgresVideoEngagementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VideoRow {
    id: i64,
    channel_id: i64,
    uploader_id: i64,
    title: String,
    description: String,
    video_url: String,
    thumbnail_url: String,
    category: String,
    views: i64,
    likes: i64,
    dislikes: i64,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ReactionRow {
    user_id: i64,
    kind: String,
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    author_id: i64,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            text: CommentText::new(row.body)?,
            created_at: row.created_at,
        })
    }
}

const COMMENT_RETURNING: &str =
    "RETURNING id, author_id, body, created_at";

#[async_trait]
impl VideoReadRepository for PostgresVideoReadRepository {
    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<Video>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        // Counters and sets are read in one snapshot so the loaded-state
        // invariants can actually be asserted.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, VideoRow>(
            "SELECT id, channel_id, uploader_id, title, description, video_url, thumbnail_url,
                    category, views, likes, dislikes, created_at
             FROM videos WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            tx.commit().await.map_err(map_sqlx)?;
            return Ok(None);
        };

        let reactions = sqlx::query_as::<_, ReactionRow>(
            "SELECT user_id, kind FROM video_reactions WHERE video_id = $1",
        )
        .bind(i64::from(id))
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let comment_rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, author_id, body, created_at
             FROM video_comments WHERE video_id = $1
             ORDER BY created_at, id",
        )
        .bind(i64::from(id))
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        let mut liked_by = HashSet::new();
        let mut disliked_by = HashSet::new();
        for reaction in reactions {
            let user_id = UserId::new(reaction.user_id)?;
            match reaction.kind.parse::<ReactionKind>()? {
                ReactionKind::Like => liked_by.insert(user_id),
                ReactionKind::Dislike => disliked_by.insert(user_id),
            };
        }

        let comments = comment_rows
            .into_iter()
            .map(Comment::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let video = Video {
            id: VideoId::new(row.id)?,
            channel_id: ChannelId::new(row.channel_id)?,
            uploader_id: UserId::new(row.uploader_id)?,
            title: row.title,
            description: row.description,
            video_url: row.video_url,
            thumbnail_url: row.thumbnail_url,
            category: row.category,
            views: row.views,
            likes: row.likes,
            dislikes: row.dislikes,
            liked_by,
            disliked_by,
            comments: CommentArena::from_ordered(comments)?,
            created_at: row.created_at,
        };
        video.validate_loaded()?;

        Ok(Some(video))
    }
}

#[async_trait]
impl VideoEngagementRepository for PostgresVideoEngagementRepository {
    async fn record_view(&self, id: VideoId) -> DomainResult<i64> {
        let views: Option<i64> =
            sqlx::query_scalar("UPDATE videos SET views = views + 1 WHERE id = $1 RETURNING views")
                .bind(i64::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        views.ok_or_else(|| DomainError::NotFound("video not found".into()))
    }

    async fn apply_reaction(
        &self,
        id: VideoId,
        user_id: UserId,
        transition: &ReactionTransition,
    ) -> DomainResult<ReactionTotals> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // The reaction row mutation is predicated on the state the caller
        // derived; zero affected rows means a concurrent toggle won.
        let affected = match (transition.prior.as_kind(), transition.next.as_kind()) {
            (None, None) => {
                return Err(DomainError::Persistence(
                    "no-op reaction transition".into(),
                ));
            }
            (None, Some(next)) => sqlx::query(
                "INSERT INTO video_reactions (video_id, user_id, kind)
                 VALUES ($1, $2, $3)
                 ON CONFLICT (video_id, user_id) DO NOTHING",
            )
            .bind(i64::from(id))
            .bind(i64::from(user_id))
            .bind(next.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected(),
            (Some(prior), None) => sqlx::query(
                "DELETE FROM video_reactions
                 WHERE video_id = $1 AND user_id = $2 AND kind = $3",
            )
            .bind(i64::from(id))
            .bind(i64::from(user_id))
            .bind(prior.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected(),
            (Some(prior), Some(next)) => sqlx::query(
                "UPDATE video_reactions SET kind = $3, reacted_at = now()
                 WHERE video_id = $1 AND user_id = $2 AND kind = $4",
            )
            .bind(i64::from(id))
            .bind(i64::from(user_id))
            .bind(next.as_str())
            .bind(prior.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected(),
        };

        if affected != 1 {
            return Err(DomainError::Conflict(
                "reaction changed concurrently, please retry".into(),
            ));
        }

        // Counters move in the same transaction, so likes == |likedBy| and
        // dislikes == |dislikedBy| hold at every commit point.
        let totals = sqlx::query_as::<_, (i64, i64)>(
            "UPDATE videos SET likes = likes + $2, dislikes = dislikes + $3
             WHERE id = $1
             RETURNING likes, dislikes",
        )
        .bind(i64::from(id))
        .bind(transition.likes_delta)
        .bind(transition.dislikes_delta)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let Some((likes, dislikes)) = totals else {
            return Err(DomainError::NotFound("video not found".into()));
        };

        tx.commit().await.map_err(map_sqlx)?;

        Ok(ReactionTotals { likes, dislikes })
    }

    async fn insert_comment(
        &self,
        video_id: VideoId,
        comment: NewComment,
    ) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO video_comments (video_id, author_id, body, created_at)
             VALUES ($1, $2, $3, $4)
             {COMMENT_RETURNING}"
        ))
        .bind(i64::from(video_id))
        .bind(i64::from(comment.author_id))
        .bind(comment.text.as_str())
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update_comment_text(
        &self,
        video_id: VideoId,
        id: CommentId,
        text: CommentText,
    ) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE video_comments SET body = $3
             WHERE id = $1 AND video_id = $2
             {COMMENT_RETURNING}"
        ))
        .bind(i64::from(id))
        .bind(i64::from(video_id))
        .bind(text.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row
            .ok_or_else(|| DomainError::Conflict("comment update conflict, please retry".into()))?;

        Comment::try_from(row)
    }

    async fn delete_comment(&self, video_id: VideoId, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM video_comments WHERE id = $1 AND video_id = $2")
            .bind(i64::from(id))
            .bind(i64::from(video_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

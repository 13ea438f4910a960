use crate::application::dto::comments::CommentDto;
use crate::domain::user::{UserId, UserProfile};
use crate::domain::video::{ReactionTotals, Video};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoDto {
    pub id: i64,
    pub channel_id: i64,
    pub uploader_id: i64,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub category: String,
    pub views: i64,
    pub likes: i64,
    pub dislikes: i64,
    pub liked_by: Vec<i64>,
    pub disliked_by: Vec<i64>,
    pub comments: Vec<CommentDto>,
    pub created_at: DateTime<Utc>,
}

impl VideoDto {
    pub fn project(video: Video, profiles: &HashMap<UserId, UserProfile>) -> Self {
        let mut liked_by: Vec<i64> = video.liked_by.iter().copied().map(i64::from).collect();
        let mut disliked_by: Vec<i64> = video.disliked_by.iter().copied().map(i64::from).collect();
        // Sets have no inherent order; sort for a stable wire shape.
        liked_by.sort_unstable();
        disliked_by.sort_unstable();

        let comments = video
            .comments
            .iter()
            .map(|comment| CommentDto::project(comment, profiles))
            .collect();

        Self {
            id: video.id.into(),
            channel_id: video.channel_id.into(),
            uploader_id: video.uploader_id.into(),
            title: video.title,
            description: video.description,
            video_url: video.video_url,
            thumbnail_url: video.thumbnail_url,
            category: video.category,
            views: video.views,
            likes: video.likes,
            dislikes: video.dislikes,
            liked_by,
            disliked_by,
            comments,
            created_at: video.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ReactionTotalsDto {
    pub likes: i64,
    pub dislikes: i64,
}

impl From<ReactionTotals> for ReactionTotalsDto {
    fn from(totals: ReactionTotals) -> Self {
        Self {
            likes: totals.likes,
            dislikes: totals.dislikes,
        }
    }
}

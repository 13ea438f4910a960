// src/infrastructure/repositories/memory.rs
//
// In-memory repositories for service-level and end-to-end tests. They
// enforce the same conditional-write contract as the Postgres
// implementations so Conflict paths can be exercised without a database.
use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, UserProfile, UserProfileRepository};
use crate::domain::video::{
    Comment, CommentArena, CommentId, CommentText, NewComment, ReactionTotals, ReactionTransition,
    Video, VideoEngagementRepository, VideoId, VideoReadRepository,
};
use crate::domain::video::value_objects::ChannelId;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

pub struct InMemoryVideoStore {
    videos: Mutex<HashMap<VideoId, Video>>,
    profiles: Mutex<HashMap<UserId, UserProfile>>,
    next_comment_id: AtomicI64,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self {
            videos: Mutex::new(HashMap::new()),
            profiles: Mutex::new(HashMap::new()),
            next_comment_id: AtomicI64::new(1),
        }
    }

    pub fn insert_video(&self, video: Video) {
        self.videos.lock().unwrap().insert(video.id, video);
    }

    pub fn insert_profile(&self, profile: UserProfile) {
        self.profiles.lock().unwrap().insert(profile.id, profile);
    }

    pub fn video(&self, id: VideoId) -> Option<Video> {
        self.videos.lock().unwrap().get(&id).cloned()
    }
}

impl Default for InMemoryVideoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoReadRepository for InMemoryVideoStore {
    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<Video>> {
        Ok(self.videos.lock().unwrap().get(&id).cloned())
    }
}

#[async_trait]
impl VideoEngagementRepository for InMemoryVideoStore {
    async fn record_view(&self, id: VideoId) -> DomainResult<i64> {
        let mut videos = self.videos.lock().unwrap();
        let video = videos
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("video not found".into()))?;
        video.record_view();
        Ok(video.views)
    }

    async fn apply_reaction(
        &self,
        id: VideoId,
        user_id: UserId,
        transition: &ReactionTransition,
    ) -> DomainResult<ReactionTotals> {
        let mut videos = self.videos.lock().unwrap();
        let video = videos
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("video not found".into()))?;

        if video.reaction_state(user_id) != transition.prior {
            return Err(DomainError::Conflict(
                "reaction changed concurrently, please retry".into(),
            ));
        }

        video.apply_reaction(user_id, transition);
        Ok(video.reaction_totals())
    }

    async fn insert_comment(
        &self,
        video_id: VideoId,
        comment: NewComment,
    ) -> DomainResult<Comment> {
        let mut videos = self.videos.lock().unwrap();
        let video = videos
            .get_mut(&video_id)
            .ok_or_else(|| DomainError::NotFound("video not found".into()))?;

        let id = CommentId::new(self.next_comment_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Comment {
            id,
            author_id: comment.author_id,
            text: comment.text,
            created_at: comment.created_at,
        };
        video.comments.push(stored.clone())?;
        Ok(stored)
    }

    async fn update_comment_text(
        &self,
        video_id: VideoId,
        id: CommentId,
        text: CommentText,
    ) -> DomainResult<Comment> {
        let mut videos = self.videos.lock().unwrap();
        let video = videos
            .get_mut(&video_id)
            .ok_or_else(|| DomainError::NotFound("video not found".into()))?;

        video
            .comments
            .update_text(id, text)
            .cloned()
            .ok_or_else(|| DomainError::Conflict("comment update conflict, please retry".into()))
    }

    async fn delete_comment(&self, video_id: VideoId, id: CommentId) -> DomainResult<()> {
        let mut videos = self.videos.lock().unwrap();
        let video = videos
            .get_mut(&video_id)
            .ok_or_else(|| DomainError::NotFound("video not found".into()))?;

        if !video.comments.remove(id) {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserProfileRepository for InMemoryVideoStore {
    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<UserProfile>> {
        let profiles = self.profiles.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| profiles.get(id).cloned())
            .collect())
    }
}

pub struct FixedClock {
    pub now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self {
            now: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

pub fn sample_video(id: i64) -> Video {
    Video {
        id: VideoId::new(id).unwrap(),
        channel_id: ChannelId::new(1).unwrap(),
        uploader_id: UserId::new(1).unwrap(),
        title: format!("video {id}"),
        description: String::new(),
        video_url: format!("https://videos.example/{id}.mp4"),
        thumbnail_url: format!("https://videos.example/{id}.jpg"),
        category: "Other".into(),
        views: 0,
        likes: 0,
        dislikes: 0,
        liked_by: HashSet::new(),
        disliked_by: HashSet::new(),
        comments: CommentArena::default(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
    }
}

pub fn sample_profile(id: i64, username: &str) -> UserProfile {
    UserProfile {
        id: UserId::new(id).unwrap(),
        username: username.to_owned(),
        avatar_url: None,
    }
}

use super::VideoQueryService;
use crate::{
    application::{
        dto::VideoDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{user::UserId, video::VideoId},
};
use std::collections::HashSet;

pub struct GetVideoByIdQuery {
    pub id: i64,
}

impl VideoQueryService {
    /// Fetch the full video projection. Every successful fetch counts as a
    /// view, with no per-viewer or per-session deduplication.
    pub async fn get_video_by_id(&self, query: GetVideoByIdQuery) -> ApplicationResult<VideoDto> {
        let id = VideoId::new(query.id)
            .map_err(|_| ApplicationError::not_found("video not found"))?;
        let mut video = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;

        // Atomic increment; the projection reflects the view being recorded.
        video.views = self.engagement_repo.record_view(id).await?;

        let author_ids: Vec<UserId> = video
            .comments
            .iter()
            .map(|comment| comment.author_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let profiles = self
            .profile_repo
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();

        Ok(VideoDto::project(video, &profiles))
    }
}

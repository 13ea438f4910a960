use std::sync::Arc;

use crate::domain::{
    user::UserProfileRepository,
    video::{VideoEngagementRepository, VideoReadRepository},
};

pub struct VideoQueryService {
    pub(super) read_repo: Arc<dyn VideoReadRepository>,
    pub(super) engagement_repo: Arc<dyn VideoEngagementRepository>,
    pub(super) profile_repo: Arc<dyn UserProfileRepository>,
}

impl VideoQueryService {
    pub fn new(
        read_repo: Arc<dyn VideoReadRepository>,
        engagement_repo: Arc<dyn VideoEngagementRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
    ) -> Self {
        Self {
            read_repo,
            engagement_repo,
            profile_repo,
        }
    }
}

// src/application/commands/engagement/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        user::UserProfileRepository,
        video::{VideoEngagementRepository, VideoReadRepository},
    },
};

pub struct EngagementCommandService {
    pub(super) read_repo: Arc<dyn VideoReadRepository>,
    pub(super) engagement_repo: Arc<dyn VideoEngagementRepository>,
    pub(super) profile_repo: Arc<dyn UserProfileRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl EngagementCommandService {
    pub fn new(
        read_repo: Arc<dyn VideoReadRepository>,
        engagement_repo: Arc<dyn VideoEngagementRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            engagement_repo,
            profile_repo,
            clock,
        }
    }
}

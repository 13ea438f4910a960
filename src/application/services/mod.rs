// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::engagement::EngagementCommandService, ports::time::Clock,
        queries::videos::VideoQueryService,
    },
    domain::{
        user::UserProfileRepository,
        video::{VideoEngagementRepository, VideoReadRepository},
    },
};

pub struct ApplicationServices {
    pub engagement_commands: Arc<EngagementCommandService>,
    pub video_queries: Arc<VideoQueryService>,
}

impl ApplicationServices {
    pub fn new(
        video_read_repo: Arc<dyn VideoReadRepository>,
        video_engagement_repo: Arc<dyn VideoEngagementRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let engagement_commands = Arc::new(EngagementCommandService::new(
            Arc::clone(&video_read_repo),
            Arc::clone(&video_engagement_repo),
            Arc::clone(&profile_repo),
            Arc::clone(&clock),
        ));

        let video_queries = Arc::new(VideoQueryService::new(
            Arc::clone(&video_read_repo),
            Arc::clone(&video_engagement_repo),
            Arc::clone(&profile_repo),
        ));

        Self {
            engagement_commands,
            video_queries,
        }
    }
}

// src/domain/video/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::domain::video::comments::CommentArena;
use crate::domain::video::reaction::{ReactionState, ReactionTotals, ReactionTransition};
use crate::domain::video::value_objects::{ChannelId, VideoId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// The video aggregate: metadata, engagement counters, the two reaction
/// sets and the owned comment arena. One video is one consistency unit.
#[derive(Debug, Clone)]
pub struct Video {
    pub id: VideoId,
    pub channel_id: ChannelId,
    pub uploader_id: UserId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub category: String,
    pub views: i64,
    pub likes: i64,
    pub dislikes: i64,
    pub liked_by: HashSet<UserId>,
    pub disliked_by: HashSet<UserId>,
    pub comments: CommentArena,
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Loaded-state invariants: the reaction sets are disjoint and each
    /// counter equals the size of its set. A store that violates these is
    /// corrupt; surfacing that beats silently repairing it.
    pub fn validate_loaded(&self) -> DomainResult<()> {
        if self.views < 0 {
            return Err(DomainError::Persistence(format!(
                "negative view counter for video {}",
                i64::from(self.id)
            )));
        }
        if let Some(user) = self.liked_by.intersection(&self.disliked_by).next() {
            return Err(DomainError::Persistence(format!(
                "user {} is in both reaction sets of video {}",
                i64::from(*user),
                i64::from(self.id)
            )));
        }
        if self.likes != self.liked_by.len() as i64 || self.dislikes != self.disliked_by.len() as i64
        {
            return Err(DomainError::Persistence(format!(
                "reaction counters disagree with reaction sets for video {}",
                i64::from(self.id)
            )));
        }
        Ok(())
    }

    /// The acting user's reaction state, derived from set membership.
    pub fn reaction_state(&self, user_id: UserId) -> ReactionState {
        if self.liked_by.contains(&user_id) {
            ReactionState::Liked
        } else if self.disliked_by.contains(&user_id) {
            ReactionState::Disliked
        } else {
            ReactionState::Neutral
        }
    }

    /// Apply a toggle transition for `user_id` to the in-memory aggregate,
    /// keeping sets and counters in lockstep.
    pub fn apply_reaction(&mut self, user_id: UserId, transition: &ReactionTransition) {
        match transition.prior {
            ReactionState::Liked => {
                self.liked_by.remove(&user_id);
            }
            ReactionState::Disliked => {
                self.disliked_by.remove(&user_id);
            }
            ReactionState::Neutral => {}
        }
        match transition.next {
            ReactionState::Liked => {
                self.liked_by.insert(user_id);
            }
            ReactionState::Disliked => {
                self.disliked_by.insert(user_id);
            }
            ReactionState::Neutral => {}
        }
        self.likes += transition.likes_delta;
        self.dislikes += transition.dislikes_delta;
    }

    pub fn record_view(&mut self) {
        self.views += 1;
    }

    pub fn reaction_totals(&self) -> ReactionTotals {
        ReactionTotals {
            likes: self.likes,
            dislikes: self.dislikes,
        }
    }
}

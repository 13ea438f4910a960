pub mod comments;
pub mod entity;
pub mod reaction;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use comments::{Comment, CommentArena, NewComment};
pub use entity::Video;
pub use reaction::{ReactionKind, ReactionState, ReactionTotals, ReactionTransition};
pub use repository::{VideoEngagementRepository, VideoReadRepository};
pub use value_objects::{ChannelId, CommentId, CommentText, VideoId};

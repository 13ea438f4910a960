pub mod comments;
pub mod identity;
pub mod videos;

pub use comments::{CommentAuthorDto, CommentDto};
pub use identity::AuthenticatedUser;
pub use videos::{ReactionTotalsDto, VideoDto};

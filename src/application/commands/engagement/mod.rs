mod add_comment;
mod delete_comment;
mod ownership;
mod react;
mod service;
mod update_comment;

pub use add_comment::AddCommentCommand;
pub use delete_comment::DeleteCommentCommand;
pub use react::ToggleReactionCommand;
pub use service::EngagementCommandService;
pub use update_comment::UpdateCommentCommand;

mod error;
pub mod memory;
pub mod postgres_user;
pub mod postgres_video;

pub use postgres_user::PostgresUserProfileRepository;
pub use postgres_video::{PostgresVideoEngagementRepository, PostgresVideoReadRepository};

pub(crate) use error::map_sqlx;

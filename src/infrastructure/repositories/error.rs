use crate::domain::errors::DomainError;

const CNT_COMMENT_VIDEO: &str = "video_comments_video_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "video_comments_author_id_fkey";
const CNT_REACTION_VIDEO: &str = "video_reactions_video_id_fkey";
const CNT_REACTION_USER: &str = "video_reactions_user_id_fkey";
const CNT_COMMENT_BODY_LENGTH: &str = "video_comments_body_length_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_COMMENT_VIDEO | CNT_REACTION_VIDEO => {
                        DomainError::NotFound("video not found".into())
                    }
                    CNT_COMMENT_AUTHOR | CNT_REACTION_USER => {
                        DomainError::NotFound("user not found".into())
                    }
                    CNT_COMMENT_BODY_LENGTH => {
                        DomainError::Validation("comment text is out of bounds".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

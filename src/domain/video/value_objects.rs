use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_COMMENT_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoId(pub i64);

impl VideoId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("video id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<VideoId> for i64 {
    fn from(value: VideoId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub i64);

impl ChannelId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("channel id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ChannelId> for i64 {
    fn from(value: ChannelId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

/// Comment body. Trimmed on construction; never empty, bounded length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("comment text is required".into()));
        }
        if trimmed.chars().count() > MAX_COMMENT_CHARS {
            return Err(DomainError::Validation(format!(
                "comment cannot exceed {MAX_COMMENT_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CommentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_text_is_trimmed() {
        let text = CommentText::new("  nice video  ").unwrap();
        assert_eq!(text.as_str(), "nice video");
    }

    #[test]
    fn whitespace_only_comment_is_rejected() {
        assert!(CommentText::new("   ").is_err());
        assert!(CommentText::new("").is_err());
    }

    #[test]
    fn comment_text_length_is_bounded() {
        let at_limit = "a".repeat(MAX_COMMENT_CHARS);
        assert!(CommentText::new(at_limit).is_ok());

        let over_limit = "a".repeat(MAX_COMMENT_CHARS + 1);
        assert!(CommentText::new(over_limit).is_err());
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(VideoId::new(0).is_err());
        assert!(CommentId::new(-3).is_err());
        assert!(ChannelId::new(1).is_ok());
    }
}

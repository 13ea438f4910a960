// src/domain/video/comments.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::domain::video::value_objects::{CommentId, CommentText};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub text: CommentText,
    // Immutable once set; edits overwrite text in place.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub author_id: UserId,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
}

/// The ordered comment collection owned by one video. Ids are unique within
/// the arena and insertion order is preserved; access is by id or ordered
/// iteration only.
#[derive(Debug, Clone, Default)]
pub struct CommentArena {
    comments: Vec<Comment>,
}

impl CommentArena {
    pub fn from_ordered(comments: Vec<Comment>) -> DomainResult<Self> {
        let mut arena = Self::default();
        for comment in comments {
            arena.push(comment)?;
        }
        Ok(arena)
    }

    /// Append a comment to the end of the sequence.
    pub fn push(&mut self, comment: Comment) -> DomainResult<()> {
        if self.get(comment.id).is_some() {
            return Err(DomainError::Conflict(format!(
                "duplicate comment id {}",
                i64::from(comment.id)
            )));
        }
        self.comments.push(comment);
        Ok(())
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    /// Overwrite a comment's text in place, preserving its id, author and
    /// original timestamp. Returns the updated comment.
    pub fn update_text(&mut self, id: CommentId, text: CommentText) -> Option<&Comment> {
        let comment = self.comments.iter_mut().find(|comment| comment.id == id)?;
        comment.text = text;
        Some(comment)
    }

    /// Remove a comment, keeping the relative order of the remainder.
    pub fn remove(&mut self, id: CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|comment| comment.id != id);
        self.comments.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_comment(id: i64, author: i64, text: &str) -> Comment {
        Comment {
            id: CommentId::new(id).unwrap(),
            author_id: UserId::new(author).unwrap(),
            text: CommentText::new(text).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut arena = CommentArena::default();
        arena.push(sample_comment(1, 1, "first")).unwrap();
        arena.push(sample_comment(2, 2, "second")).unwrap();
        arena.push(sample_comment(3, 1, "third")).unwrap();

        let order: Vec<i64> = arena.iter().map(|c| i64::from(c.id)).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut arena = CommentArena::default();
        arena.push(sample_comment(7, 1, "a")).unwrap();
        assert!(arena.push(sample_comment(7, 2, "b")).is_err());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn update_text_keeps_author_and_timestamp() {
        let mut arena = CommentArena::default();
        let original = sample_comment(1, 4, "draft");
        let created_at = original.created_at;
        arena.push(original).unwrap();

        let updated = arena
            .update_text(CommentId::new(1).unwrap(), CommentText::new("final").unwrap())
            .unwrap();
        assert_eq!(updated.text.as_str(), "final");
        assert_eq!(updated.author_id, UserId::new(4).unwrap());
        assert_eq!(updated.created_at, created_at);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut arena = CommentArena::default();
        for id in 1..=4 {
            arena.push(sample_comment(id, 1, "text")).unwrap();
        }

        assert!(arena.remove(CommentId::new(2).unwrap()));
        let order: Vec<i64> = arena.iter().map(|c| i64::from(c.id)).collect();
        assert_eq!(order, vec![1, 3, 4]);

        assert!(!arena.remove(CommentId::new(2).unwrap()));
    }
}

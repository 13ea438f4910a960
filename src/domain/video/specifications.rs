use crate::domain::user::UserId;
use crate::domain::video::comments::Comment;

/// The one ownership predicate for comment mutation: only the author may
/// edit or delete a comment.
pub struct CommentAuthorSpec<'a> {
    comment: &'a Comment,
    user_id: UserId,
}

impl<'a> CommentAuthorSpec<'a> {
    pub fn new(comment: &'a Comment, user_id: UserId) -> Self {
        Self { comment, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.comment.author_id == self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::value_objects::{CommentId, CommentText};
    use chrono::Utc;

    #[test]
    fn only_the_author_satisfies_the_spec() {
        let comment = Comment {
            id: CommentId::new(1).unwrap(),
            author_id: UserId::new(10).unwrap(),
            text: CommentText::new("mine").unwrap(),
            created_at: Utc::now(),
        };

        assert!(CommentAuthorSpec::new(&comment, UserId::new(10).unwrap()).is_satisfied());
        assert!(!CommentAuthorSpec::new(&comment, UserId::new(11).unwrap()).is_satisfied());
    }
}

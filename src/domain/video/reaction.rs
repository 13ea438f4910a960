// src/domain/video/reaction.rs
//
// The like/dislike state machine. A user's reaction to a video is one of
// three states, derived from membership in the two reaction sets; the two
// sets are always disjoint. Toggling is pure: it produces a transition that
// repositories apply as a conditional write.
use crate::domain::errors::{DomainError, DomainResult};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        match value {
            "like" => Ok(ReactionKind::Like),
            "dislike" => Ok(ReactionKind::Dislike),
            other => Err(DomainError::Persistence(format!(
                "unknown reaction kind: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionState {
    Neutral,
    Liked,
    Disliked,
}

impl ReactionState {
    /// The reaction this state stores, if any.
    pub fn as_kind(self) -> Option<ReactionKind> {
        match self {
            ReactionState::Neutral => None,
            ReactionState::Liked => Some(ReactionKind::Like),
            ReactionState::Disliked => Some(ReactionKind::Dislike),
        }
    }

    /// Toggle this state with the given action.
    ///
    /// Transition table: Neutral --like--> Liked, Liked --like--> Neutral,
    /// Disliked --like--> Liked, and symmetric for dislike.
    pub fn toggle(self, kind: ReactionKind) -> ReactionTransition {
        let (next, likes_delta, dislikes_delta) = match (self, kind) {
            (ReactionState::Neutral, ReactionKind::Like) => (ReactionState::Liked, 1, 0),
            (ReactionState::Liked, ReactionKind::Like) => (ReactionState::Neutral, -1, 0),
            (ReactionState::Disliked, ReactionKind::Like) => (ReactionState::Liked, 1, -1),
            (ReactionState::Neutral, ReactionKind::Dislike) => (ReactionState::Disliked, 0, 1),
            (ReactionState::Disliked, ReactionKind::Dislike) => (ReactionState::Neutral, 0, -1),
            (ReactionState::Liked, ReactionKind::Dislike) => (ReactionState::Disliked, -1, 1),
        };

        ReactionTransition {
            prior: self,
            next,
            likes_delta,
            dislikes_delta,
        }
    }
}

/// One step of the state machine, with the counter adjustments it implies.
/// `prior` is the precondition a conditional write is predicated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTransition {
    pub prior: ReactionState,
    pub next: ReactionState,
    pub likes_delta: i64,
    pub dislikes_delta: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTotals {
    pub likes: i64,
    pub dislikes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_transition_table() {
        let cases = [
            (
                ReactionState::Neutral,
                ReactionKind::Like,
                ReactionState::Liked,
                1,
                0,
            ),
            (
                ReactionState::Liked,
                ReactionKind::Like,
                ReactionState::Neutral,
                -1,
                0,
            ),
            (
                ReactionState::Disliked,
                ReactionKind::Like,
                ReactionState::Liked,
                1,
                -1,
            ),
            (
                ReactionState::Neutral,
                ReactionKind::Dislike,
                ReactionState::Disliked,
                0,
                1,
            ),
            (
                ReactionState::Disliked,
                ReactionKind::Dislike,
                ReactionState::Neutral,
                0,
                -1,
            ),
            (
                ReactionState::Liked,
                ReactionKind::Dislike,
                ReactionState::Disliked,
                -1,
                1,
            ),
        ];

        for (prior, kind, next, likes_delta, dislikes_delta) in cases {
            let transition = prior.toggle(kind);
            assert_eq!(transition.prior, prior);
            assert_eq!(transition.next, next);
            assert_eq!(transition.likes_delta, likes_delta);
            assert_eq!(transition.dislikes_delta, dislikes_delta);
        }
    }

    #[test]
    fn toggling_twice_is_a_no_op_on_counters() {
        for kind in [ReactionKind::Like, ReactionKind::Dislike] {
            let first = ReactionState::Neutral.toggle(kind);
            let second = first.next.toggle(kind);
            assert_eq!(second.next, ReactionState::Neutral);
            assert_eq!(first.likes_delta + second.likes_delta, 0);
            assert_eq!(first.dislikes_delta + second.dislikes_delta, 0);
        }
    }

    #[test]
    fn kind_round_trips_through_storage_form() {
        for kind in [ReactionKind::Like, ReactionKind::Dislike] {
            assert_eq!(kind.as_str().parse::<ReactionKind>().unwrap(), kind);
        }
        assert!("meh".parse::<ReactionKind>().is_err());
    }
}

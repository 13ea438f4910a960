// src/application/queries/videos/tests.rs
use super::*;
use crate::application::commands::engagement::{
    AddCommentCommand, EngagementCommandService, ToggleReactionCommand, UpdateCommentCommand,
};
use crate::application::dto::AuthenticatedUser;
use crate::application::error::ApplicationError;
use crate::domain::user::UserId;
use crate::infrastructure::repositories::memory::{
    FixedClock, InMemoryVideoStore, sample_profile, sample_video,
};
use std::sync::Arc;

fn actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
    }
}

fn services_with_store() -> (
    Arc<InMemoryVideoStore>,
    VideoQueryService,
    EngagementCommandService,
) {
    let store = Arc::new(InMemoryVideoStore::new());
    let queries = VideoQueryService::new(store.clone(), store.clone(), store.clone());
    let commands = EngagementCommandService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(FixedClock::new()),
    );
    (store, queries, commands)
}

#[tokio::test]
async fn every_fetch_counts_as_a_view() {
    let (store, queries, _) = services_with_store();
    store.insert_video(sample_video(1));

    for expected in 1..=3 {
        let dto = queries
            .get_video_by_id(GetVideoByIdQuery { id: 1 })
            .await
            .unwrap();
        assert_eq!(dto.views, expected);
    }
}

#[tokio::test]
async fn fetching_an_unknown_video_is_not_found() {
    let (_, queries, _) = services_with_store();

    let err = queries
        .get_video_by_id(GetVideoByIdQuery { id: 5 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn projection_resolves_comment_authors() {
    let (store, queries, commands) = services_with_store();
    store.insert_video(sample_video(1));
    store.insert_profile(sample_profile(3, "alice"));

    commands
        .add_comment(
            &actor(3),
            AddCommentCommand {
                video_id: 1,
                text: "hello".into(),
            },
        )
        .await
        .unwrap();
    commands
        .add_comment(
            &actor(4),
            AddCommentCommand {
                video_id: 1,
                text: "unknown author".into(),
            },
        )
        .await
        .unwrap();

    let dto = queries
        .get_video_by_id(GetVideoByIdQuery { id: 1 })
        .await
        .unwrap();

    assert_eq!(dto.comments.len(), 2);
    assert_eq!(dto.comments[0].author.username.as_deref(), Some("alice"));
    // A vanished profile still yields the comment, just without display data.
    assert_eq!(dto.comments[1].author.id, 4);
    assert_eq!(dto.comments[1].author.username, None);
}

// The end-to-end walk from the engagement rules: three fetches, a dislike
// flipped to a like, a comment, and a rejected edit by a non-author.
#[tokio::test]
async fn engagement_walkthrough() {
    let (store, queries, commands) = services_with_store();
    store.insert_video(sample_video(1));
    store.insert_profile(sample_profile(3, "alice"));
    let user_a = actor(3);
    let user_b = actor(4);

    for expected in 1..=3 {
        let dto = queries
            .get_video_by_id(GetVideoByIdQuery { id: 1 })
            .await
            .unwrap();
        assert_eq!(dto.views, expected);
    }

    let disliked = commands
        .toggle_dislike(&user_a, ToggleReactionCommand { video_id: 1 })
        .await
        .unwrap();
    assert_eq!(disliked.dislikes, 1);

    let liked = commands
        .toggle_like(&user_a, ToggleReactionCommand { video_id: 1 })
        .await
        .unwrap();
    assert_eq!(liked.likes, 1);
    assert_eq!(liked.dislikes, 0);

    let comment = commands
        .add_comment(
            &user_a,
            AddCommentCommand {
                video_id: 1,
                text: "nice".into(),
            },
        )
        .await
        .unwrap();

    let err = commands
        .update_comment(
            &user_b,
            UpdateCommentCommand {
                video_id: 1,
                comment_id: comment.id,
                text: "edited".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let dto = queries
        .get_video_by_id(GetVideoByIdQuery { id: 1 })
        .await
        .unwrap();
    assert_eq!(dto.views, 4);
    assert_eq!(dto.likes, 1);
    assert_eq!(dto.dislikes, 0);
    assert_eq!(dto.liked_by, vec![3]);
    assert!(dto.disliked_by.is_empty());
    assert_eq!(dto.comments.len(), 1);
    assert_eq!(dto.comments[0].text, "nice");

    let video = store
        .video(crate::domain::video::VideoId::new(1).unwrap())
        .unwrap();
    video.validate_loaded().unwrap();
}

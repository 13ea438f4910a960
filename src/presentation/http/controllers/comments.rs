// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::engagement::{AddCommentCommand, DeleteCommentCommand, UpdateCommentCommand},
    dto::CommentDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/videos/{id}/comments",
    params(("id" = i64, Path, description = "Video id")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Created comment with its author resolved.", body = CommentDto),
        (status = 400, description = "Empty or oversized comment text.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid identity header.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Video not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = AddCommentCommand {
        video_id: id,
        text: payload.text,
    };

    let comment = state
        .services
        .engagement_commands
        .add_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    put,
    path = "/api/v1/videos/{id}/comments/{comment_id}",
    params(
        ("id" = i64, Path, description = "Video id"),
        ("comment_id" = i64, Path, description = "Comment id")
    ),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Updated comment; id, author and timestamp are unchanged.", body = CommentDto),
        (status = 400, description = "Empty or oversized comment text.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid identity header.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Acting user is not the comment author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Video or comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((id, comment_id)): Path<(i64, i64)>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    let command = UpdateCommentCommand {
        video_id: id,
        comment_id,
        text: payload.text,
    };

    state
        .services
        .engagement_commands
        .update_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/videos/{id}/comments/{comment_id}",
    params(
        ("id" = i64, Path, description = "Video id"),
        ("comment_id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment removed permanently.", body = StatusResponse),
        (status = 401, description = "Missing or invalid identity header.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Acting user is not the comment author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Video or comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((id, comment_id)): Path<(i64, i64)>,
) -> HttpResult<Json<StatusResponse>> {
    let command = DeleteCommentCommand {
        video_id: id,
        comment_id,
    };

    state
        .services
        .engagement_commands
        .delete_comment(&user, command)
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

// src/presentation/http/controllers/videos.rs
use crate::application::{
    commands::engagement::ToggleReactionCommand,
    dto::{ReactionTotalsDto, VideoDto},
    queries::videos::GetVideoByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/videos/{id}",
    params(("id" = i64, Path, description = "Video id")),
    responses(
        (status = 200, description = "Video with resolved comment authors. Every fetch counts as a view.", body = VideoDto),
        (status = 404, description = "Video not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Videos"
)]
pub async fn get_video(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<VideoDto>> {
    state
        .services
        .video_queries
        .get_video_by_id(GetVideoByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/videos/{id}/like",
    params(("id" = i64, Path, description = "Video id")),
    responses(
        (status = 200, description = "Updated reaction totals.", body = ReactionTotalsDto),
        (status = 401, description = "Missing or invalid identity header.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Video not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "A concurrent reaction won; retry.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Videos"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ReactionTotalsDto>> {
    state
        .services
        .engagement_commands
        .toggle_like(&user, ToggleReactionCommand { video_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/videos/{id}/dislike",
    params(("id" = i64, Path, description = "Video id")),
    responses(
        (status = 200, description = "Updated reaction totals.", body = ReactionTotalsDto),
        (status = 401, description = "Missing or invalid identity header.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Video not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "A concurrent reaction won; retry.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Videos"
)]
pub async fn toggle_dislike(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ReactionTotalsDto>> {
    state
        .services
        .engagement_commands
        .toggle_dislike(&user, ToggleReactionCommand { video_id: id })
        .await
        .into_http()
        .map(Json)
}

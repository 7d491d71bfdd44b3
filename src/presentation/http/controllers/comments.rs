// src/presentation/http/controllers/comments.rs
use crate::application::{commands::comments::SubmitCommentCommand, dto::CommentDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitCommentRequest {
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Anonymous submissions are rejected with 403 inside the command service;
/// the extractor stays optional so the service sees "no user" explicitly.
pub async fn submit_comment(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(article_id): Path<i64>,
    Json(payload): Json<SubmitCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = SubmitCommentCommand {
        article_id,
        parent_id: payload.parent_id,
        content: payload.content,
    };

    let comment = state
        .services
        .comment_commands
        .submit_comment(actor.0.as_ref(), command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(comment)))
}

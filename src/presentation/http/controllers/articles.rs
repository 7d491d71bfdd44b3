// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AddTagsCommand, CreateArticleCommand, SetPublishStateCommand, UpdateArticleCommand,
    },
    dto::{ArchiveGroupDto, ArticleDto, TagDto},
    queries::articles::{ArticleLookup, GetArticleQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub publish: bool,
    #[serde(default)]
    pub comments_moderated: bool,
    #[serde(default)]
    pub external_post_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub publish: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub publish: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddTagsRequest {
    pub tags: Vec<String>,
}

pub async fn archive(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArchiveGroupDto>>> {
    state
        .services
        .article_queries
        .archive()
        .await
        .into_http()
        .map(Json)
}

fn canonical_location(id: i64, slug: &str) -> String {
    format!("/api/v1/articles/{id}/{slug}")
}

async fn lookup_article(
    state: &HttpState,
    actor: Option<&crate::application::dto::AuthenticatedUser>,
    id: i64,
    slug: Option<String>,
) -> HttpResult<Response> {
    let lookup = state
        .services
        .article_queries
        .get_article(actor, GetArticleQuery { id, slug })
        .await
        .into_http()?;

    Ok(match lookup {
        ArticleLookup::Found(view) => Json(*view).into_response(),
        ArticleLookup::MovedTo { id, slug } => {
            Redirect::permanent(&canonical_location(id, &slug)).into_response()
        }
    })
}

/// Identifier-only links 301 to the canonical `/{id}/{slug}` location.
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    lookup_article(&state, actor.0.as_ref(), id, None).await
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((id, slug)): Path<(i64, String)>,
) -> HttpResult<Response> {
    lookup_article(&state, actor.0.as_ref(), id, Some(slug)).await
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
        publish: payload.publish,
        comments_moderated: payload.comments_moderated,
        external_post_id: payload.external_post_id,
        tags: payload.tags,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        body: payload.body,
        publish: payload.publish,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = SetPublishStateCommand {
        id,
        publish: payload.publish,
    };

    state
        .services
        .article_commands
        .set_publish_state(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn add_tags(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<AddTagsRequest>,
) -> HttpResult<Json<Vec<TagDto>>> {
    let command = AddTagsCommand {
        article_id: id,
        tags: payload.tags,
    };

    state
        .services
        .article_commands
        .add_tags(&user, command)
        .await
        .into_http()
        .map(Json)
}

// src/presentation/http/controllers/search.rs
use crate::application::{dto::ArticleDto, queries::articles::SearchArticlesQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub phrase: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            phrase: params.phrase,
            tags: params.tags,
        })
        .await
        .into_http()
        .map(Json)
}

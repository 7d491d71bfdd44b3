// src/presentation/http/controllers/tags.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use std::collections::BTreeMap;

pub async fn tag_cloud(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<BTreeMap<String, u64>>> {
    state
        .services
        .tag_queries
        .cloud()
        .await
        .into_http()
        .map(Json)
}

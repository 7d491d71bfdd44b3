// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, auth, comments, search, tags};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, post, put},
};
use serde::Serialize;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::profile))
        .route(
            "/api/v1/articles",
            get(articles::archive).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article_by_id).put(articles::update_article),
        )
        .route("/api/v1/articles/{id}/{slug}", get(articles::get_article))
        .route(
            "/api/v1/articles/{id}/publish",
            post(articles::set_publish_state),
        )
        .route("/api/v1/articles/{id}/tags", post(articles::add_tags))
        .route(
            "/api/v1/articles/{id}/comments",
            post(comments::submit_comment),
        )
        .route("/api/v1/search", get(search::search_articles))
        .route("/api/v1/tags", get(tags::tag_cloud))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new()),
        )
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;

use quill_core::application::commands::articles::{ArticleCommandService, CreateArticleCommand};
use quill_core::application::commands::comments::CommentCommandService;
use quill_core::application::dto::{ArticleDto, ArticleViewDto, AuthenticatedUser};
use quill_core::application::queries::articles::{
    ArticleLookup, ArticleQueryService, GetArticleQuery,
};
use quill_core::application::queries::tags::TagQueryService;
use quill_core::domain::article::services::ArticleSlugService;
use quill_core::domain::user::{Role, UserId};
use quill_core::infrastructure::util::DefaultSlugGenerator;

use self::mocks::{InMemoryArticleRepo, InMemoryCommentRepo, InMemoryTagRepo, SteppingClock};

pub static BASE_TIME: Lazy<chrono::DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2013, 1, 1, 12, 0, 0).unwrap());

/// Build an acting user with the default capabilities of the given role.
pub fn actor(id: i64, role: Role) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: format!("user-{id}"),
        role,
        capabilities: role.default_capabilities(),
        issued_at: *BASE_TIME,
        expires_at: *BASE_TIME + chrono::Duration::hours(1),
    }
}

/// Shared in-memory wiring for service-level tests: one article store, one
/// comment store, one tag store, and a deterministic stepping clock.
pub struct TestHarness {
    pub articles: Arc<InMemoryArticleRepo>,
    pub comments: Arc<InMemoryCommentRepo>,
    pub tags: Arc<InMemoryTagRepo>,
    pub clock: Arc<SteppingClock>,
    pub article_commands: ArticleCommandService,
    pub comment_commands: CommentCommandService,
    pub article_queries: ArticleQueryService,
    pub tag_queries: TagQueryService,
}

impl TestHarness {
    pub fn new(max_comment_depth: u32) -> Self {
        let articles = Arc::new(InMemoryArticleRepo::default());
        let comments = Arc::new(InMemoryCommentRepo::default());
        let tags = Arc::new(InMemoryTagRepo::default());
        let clock = Arc::new(SteppingClock::new(*BASE_TIME));

        let slug_service = Arc::new(ArticleSlugService::new(
            articles.clone(),
            Arc::new(DefaultSlugGenerator),
        ));

        let article_commands = ArticleCommandService::new(
            articles.clone(),
            articles.clone(),
            tags.clone(),
            slug_service,
            clock.clone(),
        );
        let comment_commands = CommentCommandService::new(
            comments.clone(),
            articles.clone(),
            clock.clone(),
            max_comment_depth,
        );
        let article_queries =
            ArticleQueryService::new(articles.clone(), comments.clone(), tags.clone());
        let tag_queries = TagQueryService::new(tags.clone());

        Self {
            articles,
            comments,
            tags,
            clock,
            article_commands,
            comment_commands,
            article_queries,
            tag_queries,
        }
    }

    /// Publish an article through the command service with defaults filled
    /// in; the stepping clock gives each call a later creation time.
    pub async fn publish_article(
        &self,
        author: &AuthenticatedUser,
        title: &str,
        body: &str,
        tags: &[&str],
    ) -> ArticleDto {
        self.article_commands
            .create_article(
                author,
                CreateArticleCommand {
                    title: title.into(),
                    body: body.into(),
                    publish: true,
                    comments_moderated: false,
                    external_post_id: None,
                    tags: tags.iter().map(ToString::to_string).collect(),
                },
            )
            .await
            .expect("article creation should succeed")
    }

    /// Same as `publish_article` but leaves the article as a draft.
    pub async fn draft_article(
        &self,
        author: &AuthenticatedUser,
        title: &str,
        body: &str,
    ) -> ArticleDto {
        self.article_commands
            .create_article(
                author,
                CreateArticleCommand {
                    title: title.into(),
                    body: body.into(),
                    publish: false,
                    comments_moderated: false,
                    external_post_id: None,
                    tags: Vec::new(),
                },
            )
            .await
            .expect("draft creation should succeed")
    }

    /// Resolve the canonical article view, failing the test on a redirect.
    pub async fn canonical_view(
        &self,
        actor: Option<&AuthenticatedUser>,
        article: &ArticleDto,
    ) -> ArticleViewDto {
        match self
            .article_queries
            .get_article(
                actor,
                GetArticleQuery {
                    id: article.id,
                    slug: Some(article.slug.clone()),
                },
            )
            .await
            .expect("article view should resolve")
        {
            ArticleLookup::Found(view) => *view,
            ArticleLookup::MovedTo { .. } => panic!("expected the canonical slug to resolve"),
        }
    }
}

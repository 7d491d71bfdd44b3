use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleViewDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId},
        comment::threading,
    },
};

pub struct GetArticleQuery {
    pub id: i64,
    /// Slug as it appeared in the request path, if any.
    pub slug: Option<String>,
}

/// Outcome of an article lookup: either the full view, or the canonical
/// location the caller should be redirected to when the requested slug was
/// missing or stale.
pub enum ArticleLookup {
    Found(Box<ArticleViewDto>),
    MovedTo { id: i64, slug: String },
}

impl ArticleQueryService {
    pub async fn get_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleLookup> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.ensure_actor_can_view_unpublished(actor, &article)?;

        if query.slug.as_deref() != Some(article.slug.as_str()) {
            return Ok(ArticleLookup::MovedTo {
                id: article.id.into(),
                slug: article.slug.into(),
            });
        }

        let tags = self.tag_repo.for_article(article.id).await?;
        let comments = self.comment_repo.list_for_article(article.id).await?;
        let comment_count = self.comment_repo.count_for_article(article.id).await?;
        let threaded = threading::thread(comments)?;

        Ok(ArticleLookup::Found(Box::new(ArticleViewDto {
            article: article.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            comments: threaded.into_iter().map(Into::into).collect(),
            comment_count,
        })))
    }

    pub(super) fn ensure_actor_can_view_unpublished(
        &self,
        actor: Option<&AuthenticatedUser>,
        article: &Article,
    ) -> ApplicationResult<()> {
        if article.is_visible_to_public() {
            return Ok(());
        }

        let actor = actor.ok_or_else(|| ApplicationError::not_found("article not found"))?;
        if !actor.has_capability("articles", "view:drafts") && actor.id != article.author_id {
            return Err(ApplicationError::not_found("article not found"));
        }

        Ok(())
    }
}

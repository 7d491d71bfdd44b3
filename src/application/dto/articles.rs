use crate::application::dto::{CommentDto, TagDto};
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub comments_moderated: bool,
    pub external_post_id: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            body: article.body.into(),
            published: article.published,
            published_at: article.published_at,
            comments_moderated: article.comments_moderated,
            external_post_id: article.external_post_id,
            author_id: article.author_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// One month of the archive listing: published articles sharing a creation
/// (year, month), newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveGroupDto {
    pub year: i32,
    pub month: u32,
    pub articles: Vec<ArticleDto>,
}

/// The single-article page: the article plus its ordered tags and threaded
/// comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleViewDto {
    pub article: ArticleDto,
    pub tags: Vec<TagDto>,
    pub comments: Vec<CommentDto>,
    pub comment_count: u64,
}

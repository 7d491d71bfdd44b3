// src/domain/tag/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::tag::value_objects::{TagContent, TagId};
use chrono::{DateTime, Utc};

/// A free-text label on an article. The same content may appear on many
/// articles; occurrences are counted literally, never deduplicated.
#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub article_id: ArticleId,
    pub content: TagContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub article_id: ArticleId,
    pub content: TagContent,
    pub created_at: DateTime<Utc>,
}

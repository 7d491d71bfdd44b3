use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{NewTag, Tag};
use async_trait::async_trait;

/// One row of the tag cloud: a tag content string and how many times it
/// occurs across the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub content: String,
    pub count: u64,
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    /// Tags of one article in creation order.
    async fn for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>>;
    /// Every tag in the corpus; the search engine intersects over these.
    async fn list_all(&self) -> DomainResult<Vec<Tag>>;
    /// Occurrence count per distinct content string, for the tag cloud.
    async fn group_by_content(&self) -> DomainResult<Vec<TagCount>>;
}

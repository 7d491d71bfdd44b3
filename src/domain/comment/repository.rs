use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Comments of one article in creation order (ascending time, then id).
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64>;
    /// Whether the author already left a comment with identical content on
    /// the article. Read-then-write: callers must tolerate the race with a
    /// concurrent identical submission.
    async fn exists_duplicate(
        &self,
        article_id: ArticleId,
        author_id: UserId,
        content: &CommentContent,
    ) -> DomainResult<bool>;
}

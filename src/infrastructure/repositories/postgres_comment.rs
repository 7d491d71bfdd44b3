// src/infrastructure/repositories/postgres_comment.rs
use super::error::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentContent, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    parent_id: Option<i64>,
    content: String,
    is_moderated: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            parent_id: row.parent_id.map(CommentId::new).transpose()?,
            content: CommentContent::new(row.content)?,
            is_moderated: row.is_moderated,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author_id,
            parent_id,
            content,
            is_moderated,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, author_id, parent_id, content, is_moderated, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, article_id, author_id, parent_id, content, is_moderated, created_at",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(author_id))
        .bind(parent_id.map(i64::from))
        .bind(content.as_str())
        .bind(is_moderated)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, author_id, parent_id, content, is_moderated, created_at
             FROM comments WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, author_id, parent_id, content, is_moderated, created_at
             FROM comments WHERE article_id = $1
             ORDER BY created_at ASC, id ASC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE article_id = $1")
                .bind(i64::from(article_id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(count.try_into().unwrap_or_default())
    }

    async fn exists_duplicate(
        &self,
        article_id: ArticleId,
        author_id: UserId,
        content: &CommentContent,
    ) -> DomainResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM comments
                 WHERE article_id = $1 AND author_id = $2 AND content = $3
             )",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(author_id))
        .bind(content.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(exists)
    }
}

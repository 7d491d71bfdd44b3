// src/infrastructure/repositories/postgres_tag.rs
use super::error::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{NewTag, Tag, TagContent, TagCount, TagId, TagRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    article_id: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            content: TagContent::new(row.content)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let NewTag {
            article_id,
            content,
            created_at,
        } = tag;

        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (article_id, content, created_at)
             VALUES ($1, $2, $3)
             RETURNING id, article_id, content, created_at",
        )
        .bind(i64::from(article_id))
        .bind(content.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, article_id, content, created_at
             FROM tags WHERE article_id = $1
             ORDER BY created_at ASC, id ASC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, article_id, content, created_at FROM tags ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn group_by_content(&self) -> DomainResult<Vec<TagCount>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT content, COUNT(*) FROM tags GROUP BY content ORDER BY content ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(content, count)| TagCount {
                content,
                count: count.try_into().unwrap_or_default(),
            })
            .collect())
    }
}

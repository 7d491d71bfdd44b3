// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A threaded reply attached to an article. Comments are immutable once
/// created; the parent, when present, belongs to the same article.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub content: CommentContent,
    pub is_moderated: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub content: CommentContent,
    pub is_moderated: bool,
    pub created_at: DateTime<Utc>,
}

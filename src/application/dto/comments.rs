use crate::domain::comment::{Comment, ThreadedComment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub author_id: i64,
    pub parent_id: Option<i64>,
    pub content: String,
    /// 1-based nesting level; roots are 1.
    pub depth: u32,
    pub is_moderated: bool,
    pub created_at: DateTime<Utc>,
}

impl CommentDto {
    fn from_comment(comment: Comment, depth: u32) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author_id: comment.author_id.into(),
            parent_id: comment.parent_id.map(Into::into),
            content: comment.content.into(),
            depth,
            is_moderated: comment.is_moderated,
            created_at: comment.created_at,
        }
    }
}

impl From<ThreadedComment> for CommentDto {
    fn from(entry: ThreadedComment) -> Self {
        Self::from_comment(entry.comment, entry.depth)
    }
}

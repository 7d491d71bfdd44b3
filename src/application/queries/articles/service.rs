use std::sync::Arc;

use crate::domain::{
    article::ArticleReadRepository, comment::CommentRepository, tag::TagRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        tag_repo: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            tag_repo,
        }
    }
}

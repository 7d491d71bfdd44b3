// src/application/commands/comments/submit.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        comment::{Comment, CommentContent, CommentId, NewComment, ThreadedComment},
    },
};

pub struct SubmitCommentCommand {
    pub article_id: i64,
    pub parent_id: Option<i64>,
    pub content: String,
}

impl CommentCommandService {
    /// Validate and persist one comment. Checks run in order: the actor must
    /// be an authenticated commenter, the article must exist (and be visible
    /// to the actor), the parent must belong to the same article, the
    /// resulting depth must stay within the configured maximum, and the
    /// author must not repeat content they already posted on this article.
    pub async fn submit_comment(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: SubmitCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let actor = actor
            .ok_or_else(|| ApplicationError::forbidden("you must be logged in to comment"))?;
        if !actor.has_capability("comments", "create") {
            return Err(ApplicationError::forbidden(
                "missing capability comments:create",
            ));
        }

        let article = self.find_visible_article(actor, command.article_id).await?;
        let content = CommentContent::new(command.content)?;

        let parent = match command.parent_id {
            Some(parent_id) => Some(self.resolve_parent(&article, parent_id).await?),
            None => None,
        };

        let depth = match &parent {
            Some(parent) => self.depth_via_parent_chain(parent).await? + 1,
            None => 1,
        };
        if depth > self.max_depth {
            return Err(ApplicationError::forbidden(format!(
                "comments can't go deeper than {} levels",
                self.max_depth
            )));
        }

        if self
            .comment_repo
            .exists_duplicate(article.id, actor.id, &content)
            .await?
        {
            return Err(ApplicationError::conflict("such comment is a duplicate"));
        }

        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id: article.id,
                author_id: actor.id,
                parent_id: parent.map(|parent| parent.id),
                content,
                is_moderated: article.comments_moderated,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(ThreadedComment { comment, depth }.into())
    }

    async fn find_visible_article(
        &self,
        actor: &AuthenticatedUser,
        article_id: i64,
    ) -> ApplicationResult<Article> {
        let id = crate::domain::article::ArticleId::new(article_id)?;
        let article = self
            .article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article.is_visible_to_public()
            && article.author_id != actor.id
            && !actor.has_capability("articles", "view:drafts")
        {
            return Err(ApplicationError::not_found("article not found"));
        }

        Ok(article)
    }

    async fn resolve_parent(
        &self,
        article: &Article,
        parent_id: i64,
    ) -> ApplicationResult<Comment> {
        let parent_id = CommentId::new(parent_id)?;
        let parent = self
            .comment_repo
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| ApplicationError::validation("parent comment does not exist"))?;

        if parent.article_id != article.id {
            return Err(ApplicationError::validation(
                "parent comment belongs to a different article",
            ));
        }

        Ok(parent)
    }

    /// Depth of the parent via an explicit walk over stored parent ids. The
    /// loop is bounded by the configured maximum, so a chain that is already
    /// deeper than allowed (or corrupted) stops early instead of looping.
    async fn depth_via_parent_chain(&self, parent: &Comment) -> ApplicationResult<u32> {
        let mut depth: u32 = 1;
        let mut current = parent.clone();

        while let Some(parent_id) = current.parent_id {
            depth += 1;
            if depth > self.max_depth {
                return Ok(depth);
            }
            current = self
                .comment_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| {
                    ApplicationError::validation("comment parent chain is broken")
                })?;
        }

        Ok(depth)
    }
}

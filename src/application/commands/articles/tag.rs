// src/application/commands/articles/tag.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, specifications::CanEditArticleSpec},
        tag::{NewTag, TagContent},
    },
};

pub struct AddTagsCommand {
    pub article_id: i64,
    pub tags: Vec<String>,
}

impl ArticleCommandService {
    /// Append tags to an existing article; tags are otherwise immutable.
    pub async fn add_tags(
        &self,
        actor: &AuthenticatedUser,
        command: AddTagsCommand,
    ) -> ApplicationResult<Vec<TagDto>> {
        let id = ArticleId::new(command.article_id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let edit_spec = CanEditArticleSpec::new(&actor.capabilities, &article, actor.id);
        if !edit_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to tag article",
            ));
        }

        let contents = command
            .tags
            .into_iter()
            .map(TagContent::new)
            .collect::<Result<Vec<_>, _>>()?;

        let now = self.clock.now();
        let mut created = Vec::with_capacity(contents.len());
        for content in contents {
            let tag = self
                .tag_repo
                .insert(NewTag {
                    article_id: id,
                    content,
                    created_at: now,
                })
                .await?;
            created.push(tag.into());
        }

        Ok(created)
    }
}

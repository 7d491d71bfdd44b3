// src/application/commands/articles/create.rs
use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        tag::{NewTag, TagContent},
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub publish: bool,
    pub comments_moderated: bool,
    pub external_post_id: Option<String>,
    pub tags: Vec<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let tags = command
            .tags
            .into_iter()
            .map(TagContent::new)
            .collect::<Result<Vec<_>, _>>()?;
        let now = self.clock.now();

        let slug = self.slug_service.generate_unique_slug(&title, None).await?;

        let new_article = NewArticle {
            title,
            slug,
            body,
            published: command.publish,
            published_at: if command.publish { Some(now) } else { None },
            comments_moderated: command.comments_moderated,
            external_post_id: command.external_post_id,
            author_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        for content in tags {
            self.tag_repo
                .insert(NewTag {
                    article_id: created.id,
                    content,
                    created_at: now,
                })
                .await?;
        }

        Ok(created.into())
    }
}

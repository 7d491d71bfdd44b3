use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Capability, UserId};

/// Articles are mutated only by their author, or by a holder of the
/// `articles:update:any` capability.
pub struct CanEditArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanEditArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_capability("articles", "update:any")
            || (self.has_capability("articles", "update:own")
                && self.article.author_id == self.user_id)
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleBody, ArticleId, ArticleSlug, ArticleTitle,
    };
    use crate::domain::user::Role;
    use chrono::Utc;

    fn article_by(author: i64) -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            body: ArticleBody::new("body").unwrap(),
            published: true,
            published_at: Some(Utc::now()),
            comments_moderated: false,
            external_post_id: None,
            author_id: UserId::new(author).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn author_may_edit_own_article() {
        let caps = Role::Author.default_capabilities();
        let article = article_by(7);
        assert!(CanEditArticleSpec::new(&caps, &article, UserId::new(7).unwrap()).is_satisfied());
        assert!(!CanEditArticleSpec::new(&caps, &article, UserId::new(8).unwrap()).is_satisfied());
    }

    #[test]
    fn admin_may_edit_any_article() {
        let caps = Role::Admin.default_capabilities();
        let article = article_by(7);
        assert!(CanEditArticleSpec::new(&caps, &article, UserId::new(1).unwrap()).is_satisfied());
    }

    #[test]
    fn reader_may_edit_nothing() {
        let caps = Role::Reader.default_capabilities();
        let article = article_by(7);
        assert!(!CanEditArticleSpec::new(&caps, &article, UserId::new(7).unwrap()).is_satisfied());
    }
}

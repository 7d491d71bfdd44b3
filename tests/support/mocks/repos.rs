// tests/support/mocks/repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use quill_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate, ArticleWriteRepository,
    NewArticle,
};
use quill_core::domain::comment::{Comment, CommentContent, CommentId, CommentRepository, NewComment};
use quill_core::domain::errors::{DomainError, DomainResult};
use quill_core::domain::tag::{NewTag, Tag, TagContent, TagCount, TagId, TagRepository};
use quill_core::domain::user::{NewUser, User, UserId, UserRepository, Username};

/* -------------------------------- articles -------------------------------- */

#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepo {
    fn sorted(&self, include_drafts: bool) -> Vec<Article> {
        let mut articles: Vec<Article> = self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|article| include_drafts || article.published)
            .cloned()
            .collect();
        articles.sort_by_key(|article| (article.created_at, i64::from(article.id)));
        articles
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        let id = ArticleId::new(store.len() as i64 + 1)?;
        let stored = Article {
            id,
            title: article.title,
            slug: article.slug,
            body: article.body,
            published: article.published,
            published_at: article.published_at,
            comments_moderated: article.comments_moderated,
            external_post_id: article.external_post_id,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        store.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        let article = store
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if article.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(state) = update.publish_state {
            article.published = state.published;
            article.published_at = state.published_at;
        }
        article.updated_at = update.updated_at;

        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.slug == *slug)
            .cloned())
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Article>> {
        Ok(self.sorted(include_drafts))
    }
}

/* -------------------------------- comments -------------------------------- */

#[derive(Default)]
pub struct InMemoryCommentRepo {
    inner: Mutex<Vec<Comment>>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut store = self.inner.lock().unwrap();
        let id = CommentId::new(store.len() as i64 + 1)?;
        let stored = Comment {
            id,
            article_id: comment.article_id,
            author_id: comment.author_id,
            parent_id: comment.parent_id,
            content: comment.content,
            is_moderated: comment.is_moderated,
            created_at: comment.created_at,
        };
        store.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|comment| comment.id == id)
            .cloned())
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| (comment.created_at, i64::from(comment.id)));
        Ok(comments)
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .count() as u64)
    }

    async fn exists_duplicate(
        &self,
        article_id: ArticleId,
        author_id: UserId,
        content: &CommentContent,
    ) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().iter().any(|comment| {
            comment.article_id == article_id
                && comment.author_id == author_id
                && comment.content == *content
        }))
    }
}

/* ---------------------------------- tags ---------------------------------- */

#[derive(Default)]
pub struct InMemoryTagRepo {
    inner: Mutex<Vec<Tag>>,
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut store = self.inner.lock().unwrap();
        let id = TagId::new(store.len() as i64 + 1)?;
        let stored = Tag {
            id,
            article_id: tag.article_id,
            content: tag.content,
            created_at: tag.created_at,
        };
        store.push(stored.clone());
        Ok(stored)
    }

    async fn for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let mut tags: Vec<Tag> = self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|tag| tag.article_id == article_id)
            .cloned()
            .collect();
        tags.sort_by_key(|tag| (tag.created_at, i64::from(tag.id)));
        Ok(tags)
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let mut tags = self.inner.lock().unwrap().clone();
        tags.sort_by_key(|tag| i64::from(tag.id));
        Ok(tags)
    }

    async fn group_by_content(&self) -> DomainResult<Vec<TagCount>> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for tag in self.inner.lock().unwrap().iter() {
            *counts.entry(tag.content.as_str().to_owned()).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(content, count)| TagCount { content, count })
            .collect())
    }
}

/* ---------------------------------- users ---------------------------------- */

#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut store = self.inner.lock().unwrap();
        if store
            .iter()
            .any(|user| user.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let id = UserId::new(store.len() as i64 + 1)?;
        let stored = User {
            id,
            username: new_user.username,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        store.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username.as_str() == username.as_str())
            .cloned())
    }
}

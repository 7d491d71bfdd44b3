use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use regex::RegexBuilder;
use std::collections::{HashMap, HashSet};

pub struct SearchArticlesQuery {
    /// Free-text pattern, evaluated as a case-insensitive regular expression
    /// against title or body.
    pub phrase: Option<String>,
    /// Comma-separated tag list; an article must carry every requested tag.
    pub tags: Option<String>,
}

impl ArticleQueryService {
    /// Search published articles. Both criteria must hold when both are
    /// given; with neither, the result is empty rather than the whole
    /// corpus. Ordering follows article insertion order, unranked.
    ///
    /// Predicates are composed here over plain rows instead of being pushed
    /// into SQL, so the matching semantics live in one place.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let phrase = query
            .phrase
            .as_deref()
            .map(str::trim)
            .filter(|phrase| !phrase.is_empty());
        let requested_tags = split_tags(query.tags.as_deref());

        if phrase.is_none() && requested_tags.is_empty() {
            return Ok(Vec::new());
        }

        let matcher = phrase
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|err| {
                        ApplicationError::validation(format!("invalid search pattern: {err}"))
                    })
            })
            .transpose()?;

        let mut articles = self.read_repo.list(false).await?;

        if !requested_tags.is_empty() {
            let tags_by_article = self.tags_by_article().await?;
            articles.retain(|article| {
                tags_by_article
                    .get(&i64::from(article.id))
                    .is_some_and(|contents| {
                        requested_tags
                            .iter()
                            .all(|requested| contents.contains(requested.as_str()))
                    })
            });
        }

        if let Some(matcher) = &matcher {
            articles.retain(|article| {
                matcher.is_match(article.title.as_str()) || matcher.is_match(article.body.as_str())
            });
        }

        Ok(articles.into_iter().map(Into::into).collect())
    }

    async fn tags_by_article(&self) -> ApplicationResult<HashMap<i64, HashSet<String>>> {
        let mut by_article: HashMap<i64, HashSet<String>> = HashMap::new();
        for tag in self.tag_repo.list_all().await? {
            by_article
                .entry(tag.article_id.into())
                .or_default()
                .insert(tag.content.into());
        }
        Ok(by_article)
    }
}

fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map_or_else(Vec::new, |value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::split_tags;

    #[test]
    fn tags_are_split_and_trimmed() {
        assert_eq!(split_tags(Some("eggs, cheese")), vec!["eggs", "cheese"]);
        assert_eq!(split_tags(Some(" spam ")), vec!["spam"]);
        assert!(split_tags(Some("")).is_empty());
        assert!(split_tags(None).is_empty());
    }
}

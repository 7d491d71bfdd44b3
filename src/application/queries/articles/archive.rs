use super::ArticleQueryService;
use crate::application::{
    dto::{ArchiveGroupDto, ArticleDto},
    error::ApplicationResult,
};
use chrono::Datelike;

impl ArticleQueryService {
    /// Published articles grouped by (year, month) of creation, most recent
    /// group first, newest article first within a group. An empty corpus
    /// yields an empty archive.
    pub async fn archive(&self) -> ApplicationResult<Vec<ArchiveGroupDto>> {
        let articles = self.read_repo.list(false).await?;

        let mut groups: Vec<ArchiveGroupDto> = Vec::new();
        for article in articles.into_iter().rev() {
            let (year, month) = (article.created_at.year(), article.created_at.month());
            let dto: ArticleDto = article.into();
            match groups.last_mut() {
                Some(group) if group.year == year && group.month == month => {
                    group.articles.push(dto);
                }
                _ => groups.push(ArchiveGroupDto {
                    year,
                    month,
                    articles: vec![dto],
                }),
            }
        }

        Ok(groups)
    }
}

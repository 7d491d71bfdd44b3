use super::TagQueryService;
use crate::application::error::ApplicationResult;
use std::collections::BTreeMap;

impl TagQueryService {
    /// The tag cloud: every distinct tag content mapped to its literal
    /// occurrence count across the corpus.
    pub async fn cloud(&self) -> ApplicationResult<BTreeMap<String, u64>> {
        let counts = self.tag_repo.group_by_content().await?;
        Ok(counts
            .into_iter()
            .map(|entry| (entry.content, entry.count))
            .collect())
    }
}

use std::collections::BTreeSet;

use super::ArticleQueryService;
use crate::application::error::ApplicationResult;

impl ArticleQueryService {
    /// Unique tags across published articles, sorted.
    pub async fn list_tags(&self) -> ApplicationResult<Vec<String>> {
        let tags = self.read_repo.list_published_tags().await?;
        let unique: BTreeSet<String> = tags.into_iter().collect();
        Ok(unique.into_iter().collect())
    }
}

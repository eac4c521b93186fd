use super::ArticleQueryService;
use crate::application::error::ApplicationResult;

impl ArticleQueryService {
    /// Slugs of every published article, e.g. for sitemap generation.
    pub async fn list_slugs(&self) -> ApplicationResult<Vec<String>> {
        let slugs = self.read_repo.list_published_slugs().await?;
        Ok(slugs.into_iter().map(String::from).collect())
    }
}

use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, PaginatedResult},
        error::ApplicationResult,
    },
    domain::article::{ArticleListFilter, PageRequest},
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub tag: Option<String>,
    pub featured_only: bool,
}

impl ArticleQueryService {
    pub async fn list_published_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleSummaryDto>> {
        let page = PageRequest::new(query.page, query.page_size);
        let filter = ArticleListFilter::new(query.tag, query.featured_only);

        let (records, total) = self.read_repo.list_published(&filter, page).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(PaginatedResult::new(
            items,
            total,
            page.page(),
            page.page_size(),
        ))
    }
}

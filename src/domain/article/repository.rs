use crate::domain::article::entity::Article;
use crate::domain::article::listing::{ArticleListFilter, PageRequest};
use crate::domain::article::value_objects::{ArticleSlug, ViewCount};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_published_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Returns the requested page and the total number of matching articles.
    async fn list_published(
        &self,
        filter: &ArticleListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)>;
    async fn list_published_tags(&self) -> DomainResult<Vec<String>>;
    async fn list_published_slugs(&self) -> DomainResult<Vec<ArticleSlug>>;
}

#[async_trait]
pub trait ArticleViewRepository: Send + Sync {
    /// Atomically adds one view to the article with `slug`. Returns `None`
    /// when no such article exists, in which case nothing is written.
    async fn increment_view_count(&self, slug: &ArticleSlug) -> DomainResult<Option<ViewCount>>;
}

// tests/support/mocks/article_repos.rs
use std::collections::HashMap;
use std::sync::Mutex;

use article_views::domain::article::{
    Article, ArticleListFilter, ArticleReadRepository, ArticleSlug, ArticleViewRepository,
    PageRequest, ViewCount,
};
use article_views::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

/* -------------------------------- in-memory store -------------------------------- */

/// Same predicate as the `WHERE` clause built by the Postgres read repository.
pub fn in_public_listing(article: &Article, filter: &ArticleListFilter) -> bool {
    if !article.published {
        return false;
    }
    if let Some(tag) = filter.tag.as_deref() {
        if !article.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    !filter.featured_only || article.featured
}

/// Article table kept in a map keyed by slug. Increments take the lock, so
/// they are atomic like the single UPDATE statement in Postgres.
#[derive(Default)]
pub struct InMemoryArticleStore {
    inner: Mutex<HashMap<String, Article>>,
}

impl InMemoryArticleStore {
    pub fn new(articles: impl IntoIterator<Item = Article>) -> Self {
        let map = articles
            .into_iter()
            .map(|a| (a.slug.as_str().to_string(), a))
            .collect();
        Self {
            inner: Mutex::new(map),
        }
    }

    pub fn view_count(&self, slug: &str) -> Option<i64> {
        let map = self.inner.lock().unwrap();
        map.get(slug).map(|a| a.view_count.get())
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.inner.lock().unwrap().contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    fn published_sorted(&self, filter: &ArticleListFilter) -> Vec<Article> {
        let map = self.inner.lock().unwrap();
        let mut items: Vec<Article> = map
            .values()
            .filter(|a| in_public_listing(a, filter))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        items
    }
}

#[async_trait]
impl ArticleViewRepository for InMemoryArticleStore {
    async fn increment_view_count(&self, slug: &ArticleSlug) -> DomainResult<Option<ViewCount>> {
        let mut map = self.inner.lock().unwrap();
        match map.get_mut(slug.as_str()) {
            Some(article) => {
                let next = article
                    .view_count
                    .get()
                    .checked_add(1)
                    .ok_or_else(|| DomainError::Validation("view count overflow".into()))?;
                article.view_count = ViewCount::new(next)?;
                Ok(Some(article.view_count))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_published_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(slug.as_str()).filter(|a| a.published).cloned())
    }

    async fn list_published(
        &self,
        filter: &ArticleListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let all = self.published_sorted(filter);
        let total = u64::try_from(all.len()).unwrap();
        let items = all
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap())
            .take(usize::try_from(page.page_size()).unwrap())
            .collect();
        Ok((items, total))
    }

    async fn list_published_tags(&self) -> DomainResult<Vec<String>> {
        let all = self.published_sorted(&ArticleListFilter::default());
        Ok(all.into_iter().flat_map(|a| a.tags).collect())
    }

    async fn list_published_slugs(&self) -> DomainResult<Vec<ArticleSlug>> {
        let all = self.published_sorted(&ArticleListFilter::default());
        Ok(all.into_iter().map(|a| a.slug).collect())
    }
}

/* -------------------------------- failing store -------------------------------- */

/// Store whose every call fails as if the database were unreachable.
pub struct FailingArticleStore;

pub const FAILING_STORE_DETAIL: &str = "connection refused: db.internal:5432";

fn unreachable_db() -> DomainError {
    DomainError::Persistence(FAILING_STORE_DETAIL.into())
}

#[async_trait]
impl ArticleViewRepository for FailingArticleStore {
    async fn increment_view_count(&self, _slug: &ArticleSlug) -> DomainResult<Option<ViewCount>> {
        Err(unreachable_db())
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleStore {
    async fn find_published_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Err(unreachable_db())
    }

    async fn list_published(
        &self,
        _filter: &ArticleListFilter,
        _page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        Err(unreachable_db())
    }

    async fn list_published_tags(&self) -> DomainResult<Vec<String>> {
        Err(unreachable_db())
    }

    async fn list_published_slugs(&self) -> DomainResult<Vec<ArticleSlug>> {
        Err(unreachable_db())
    }
}


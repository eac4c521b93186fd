/// Optional narrowing applied to the public article listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListFilter {
    pub tag: Option<String>,
    /// Restrict the listing to featured articles. There is no way to ask for
    /// non-featured articles only.
    pub featured_only: bool,
}

impl ArticleListFilter {
    pub fn new(tag: Option<String>, featured_only: bool) -> Self {
        let tag = tag
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self { tag, featured_only }
    }
}

/// One-based page selection. Zero values fall back to the defaults and the
/// page size is capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const MAX_PAGE_SIZE: u32 = 100;

    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let page_size = page_size
            .filter(|s| *s > 0)
            .unwrap_or(Self::DEFAULT_PAGE_SIZE)
            .min(Self::MAX_PAGE_SIZE);
        Self { page, page_size }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

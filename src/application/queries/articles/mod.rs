mod get_by_slug;
mod list;
mod service;
mod slugs;
mod tags;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;

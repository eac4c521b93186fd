pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::Article;
pub use listing::{ArticleListFilter, PageRequest};
pub use repository::{ArticleReadRepository, ArticleViewRepository};
pub use value_objects::{ArticleId, ArticleSlug, ArticleTitle, ViewCount};

// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle, ViewCount};
use chrono::{DateTime, Utc};

/// One row of the `articles` table. Only published articles are ever
/// returned by the read side; the view counter accepts drafts too.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub cover_image_position: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub view_count: ViewCount,
    pub reading_time: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

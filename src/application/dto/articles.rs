use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Full public representation of a published article.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub cover_image_position: Option<String>,
    pub featured: bool,
    pub view_count: i64,
    pub reading_time: Option<i32>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            content: article.content,
            author: article.author,
            tags: article.tags,
            cover_image: article.cover_image,
            cover_image_position: article.cover_image_position,
            featured: article.featured,
            view_count: article.view_count.into(),
            reading_time: article.reading_time,
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
        }
    }
}

/// Listing entry; same as [`ArticleDto`] without the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub author: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub cover_image_position: Option<String>,
    pub featured: bool,
    pub view_count: i64,
    pub reading_time: Option<i32>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            author: article.author,
            tags: article.tags,
            cover_image: article.cover_image,
            cover_image_position: article.cover_image_position,
            featured: article.featured,
            view_count: article.view_count.into(),
            reading_time: article.reading_time,
            published_at: article.published_at,
        }
    }
}

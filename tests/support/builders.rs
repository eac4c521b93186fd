// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use article_views::domain::article::*;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    slug: String,
    title: String,
    content: String,
    tags: Vec<String>,
    published: bool,
    featured: bool,
    view_count: i64,
    published_at: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: 1,
            title: format!("Article {slug}"),
            slug,
            content: "# Heading\n\nBody text.".into(),
            tags: Vec::new(),
            published: true,
            featured: false,
            view_count: 0,
            published_at: Some(fixed_now()),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self.published_at = None;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn views(mut self, count: i64) -> Self {
        self.view_count = count;
        self
    }

    /// Published `days` after the fixed test epoch.
    pub fn published_days_after_epoch(mut self, days: i64) -> Self {
        self.published = true;
        self.published_at = Some(fixed_now() + Duration::days(days));
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            excerpt: Some("Body text.".into()),
            content: self.content,
            author: "Test Author".into(),
            tags: self.tags,
            cover_image: None,
            cover_image_position: Some("50% 50%".into()),
            published: self.published,
            featured: self.featured,
            view_count: ViewCount::new(self.view_count).unwrap(),
            reading_time: Some(1),
            created_at: fixed_now(),
            updated_at: fixed_now(),
            published_at: self.published_at,
        }
    }
}

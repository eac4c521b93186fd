// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSlug, ArticleTitle,
    ArticleViewRepository, PageRequest, ViewCount,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, slug, title, excerpt, content, author, tags, cover_image, \
     cover_image_position, published, featured, view_count, reading_time, created_at, \
     updated_at, published_at";

#[derive(Clone)]
pub struct PostgresArticleViewRepository {
    pool: PgPool,
}

impl PostgresArticleViewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    excerpt: Option<String>,
    content: String,
    author: String,
    tags: Vec<String>,
    cover_image: Option<String>,
    cover_image_position: Option<String>,
    published: bool,
    featured: bool,
    view_count: i64,
    reading_time: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow)]
struct ArticlePageRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    total_count: i64,
}

/// Stored data the value objects reject is a store fault, not a bad request.
fn malformed_row(err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => {
            DomainError::Persistence(format!("malformed article row: {msg}"))
        }
        other => other,
    }
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id).map_err(malformed_row)?,
            slug: ArticleSlug::new(row.slug).map_err(malformed_row)?,
            title: ArticleTitle::new(row.title).map_err(malformed_row)?,
            excerpt: row.excerpt,
            content: row.content,
            author: row.author,
            tags: row.tags,
            cover_image: row.cover_image,
            cover_image_position: row.cover_image_position,
            published: row.published,
            featured: row.featured,
            view_count: ViewCount::new(row.view_count).map_err(malformed_row)?,
            reading_time: row.reading_time,
            created_at: row.created_at,
            updated_at: row.updated_at,
            published_at: row.published_at,
        })
    }
}

#[async_trait]
impl ArticleViewRepository for PostgresArticleViewRepository {
    async fn increment_view_count(&self, slug: &ArticleSlug) -> DomainResult<Option<ViewCount>> {
        // Single statement: the row lock taken by UPDATE serializes concurrent
        // increments, so none are lost.
        let count = sqlx::query_scalar::<_, i64>(
            "UPDATE articles SET view_count = view_count + 1 WHERE slug = $1 RETURNING view_count",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        count
            .map(ViewCount::new)
            .transpose()
            .map_err(malformed_row)
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleListFilter) {
        builder.push(" WHERE published = TRUE");

        if let Some(tag) = &filter.tag {
            builder.push(" AND ");
            builder.push_bind(tag.clone());
            builder.push(" = ANY(tags)");
        }

        if filter.featured_only {
            builder.push(" AND featured = TRUE");
        }
    }

    async fn count_published(&self, filter: &ArticleListFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::apply_filter(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or(0))
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_published_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1 AND published = TRUE"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_published(
        &self,
        filter: &ArticleListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        // The window count is taken before LIMIT/OFFSET, so page and total
        // come from the same snapshot.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS}, COUNT(*) OVER() AS total_count FROM articles"
        ));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY published_at DESC NULLS LAST, id DESC LIMIT ");
        builder.push_bind(i64::from(page.page_size()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticlePageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total = match rows.first() {
            Some(row) => u64::try_from(row.total_count).unwrap_or(0),
            // Past the last page no row carries the count.
            None if page.offset() > 0 => self.count_published(filter).await?,
            None => 0,
        };

        let articles = rows
            .into_iter()
            .map(|row| Article::try_from(row.article))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total))
    }

    async fn list_published_tags(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT unnest(tags) AS tag FROM articles WHERE published = TRUE ORDER BY tag",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_published_slugs(&self) -> DomainResult<Vec<ArticleSlug>> {
        let slugs = sqlx::query_scalar::<_, String>(
            "SELECT slug FROM articles WHERE published = TRUE
             ORDER BY published_at DESC NULLS LAST, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        slugs
            .into_iter()
            .map(|slug| ArticleSlug::new(slug).map_err(malformed_row))
            .collect()
    }
}

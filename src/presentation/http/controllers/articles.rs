// src/presentation/http/controllers/articles.rs
use crate::application::queries::articles::{GetArticleBySlugQuery, ListArticlesQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::{ArticleListResponse, ArticleResponse, StringListResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

/// Listing query string. Values that do not parse fall back to their
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// One-based page number, defaults to 1.
    #[serde(default, deserialize_with = "lenient_number")]
    pub page: Option<u32>,
    /// Page size, defaults to 10 and is capped at 100.
    #[serde(default, deserialize_with = "lenient_number")]
    pub page_size: Option<u32>,
    pub tag: Option<String>,
    /// Only the literal `true` restricts the listing to featured articles.
    #[serde(default, deserialize_with = "true_flag")]
    #[param(value_type = Option<bool>)]
    pub featured: bool,
}

/// Reads the leading decimal digits of the value, `None` when there are none
/// or they overflow.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(leading_digits))
}

fn leading_digits(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

fn true_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref() == Some("true"))
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = ArticleListResponse),
        (status = 500, description = "Listing failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let page = state
        .services
        .article_queries
        .list_published_articles(ListArticlesQuery {
            page: params.page,
            page_size: params.page_size,
            tag: params.tag,
            featured_only: params.featured,
        })
        .await
        .into_http()?;

    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The published article.", body = ArticleResponse),
        (status = 404, description = "No published article with that slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_published_article(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(|data| Json(ArticleResponse { data }))
}

#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "Unique tags of published articles, sorted.", body = StringListResponse)
    ),
    tag = "Articles"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<StringListResponse>> {
    state
        .services
        .article_queries
        .list_tags()
        .await
        .into_http()
        .map(|data| Json(StringListResponse { data }))
}

#[utoipa::path(
    get,
    path = "/api/slugs",
    responses(
        (status = 200, description = "Slugs of every published article.", body = StringListResponse)
    ),
    tag = "Articles"
)]
pub async fn list_slugs(Extension(state): Extension<HttpState>) -> HttpResult<Json<StringListResponse>> {
    state
        .services
        .article_queries
        .list_slugs()
        .await
        .into_http()
        .map(|data| Json(StringListResponse { data }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_digits_behaves_like_a_lenient_integer_parse() {
        assert_eq!(leading_digits("3"), Some(3));
        assert_eq!(leading_digits(" 12abc"), Some(12));
        assert_eq!(leading_digits("abc"), None);
        assert_eq!(leading_digits("-2"), None);
        assert_eq!(leading_digits(""), None);
        assert_eq!(leading_digits("99999999999"), None);
    }
}

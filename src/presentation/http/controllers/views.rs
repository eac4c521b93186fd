// src/presentation/http/controllers/views.rs
use crate::application::{commands::views::IncrementViewCommand, error::ApplicationError};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const VIEW_FAILURE_MESSAGE: &str = "Failed to increment view count";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewRecordedResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewFailedResponse {
    pub error: String,
}

/// Every failure of the view endpoint, whatever the cause, is reported with
/// the same 500 body. The cause is only logged.
#[derive(Debug)]
pub struct ViewCountError {
    slug: String,
    source: ApplicationError,
}

impl IntoResponse for ViewCountError {
    fn into_response(self) -> Response {
        if self.source.is_internal() {
            tracing::error!(slug = %self.slug, error = %self.source, "error incrementing view count");
        } else {
            tracing::warn!(slug = %self.slug, error = %self.source, "view count not incremented");
        }

        let payload = ViewFailedResponse {
            error: VIEW_FAILURE_MESSAGE.into(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
    }
}

#[utoipa::path(
    post,
    path = "/api/articles/{slug}/view",
    params(("slug" = String, Path, description = "Slug of the article that was viewed")),
    responses(
        (status = 200, description = "View recorded.", body = ViewRecordedResponse),
        (status = 500, description = "The view could not be recorded.", body = ViewFailedResponse)
    ),
    tag = "Views"
)]
pub async fn record_view(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> Result<Json<ViewRecordedResponse>, ViewCountError> {
    state
        .services
        .view_commands
        .increment_view(IncrementViewCommand { slug: slug.clone() })
        .await
        .map_err(|source| ViewCountError { slug, source })?;

    Ok(Json(ViewRecordedResponse { success: true }))
}

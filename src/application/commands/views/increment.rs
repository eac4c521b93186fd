// src/application/commands/views/increment.rs
use super::ViewCounterService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleSlug,
};

pub struct IncrementViewCommand {
    pub slug: String,
}

impl ViewCounterService {
    /// Records one view of the article identified by `command.slug`.
    ///
    /// Every successful call adds exactly one to the stored count; repeated
    /// calls are not collapsed. Failures are returned as-is and never retried.
    pub async fn increment_view(&self, command: IncrementViewCommand) -> ApplicationResult<()> {
        let slug = ArticleSlug::new(command.slug)?;
        let count = self
            .view_repo
            .increment_view_count(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article '{slug}' not found")))?;

        tracing::debug!(slug = %slug, view_count = %count, "view recorded");
        Ok(())
    }
}

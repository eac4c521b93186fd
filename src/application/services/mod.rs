// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::views::ViewCounterService, queries::articles::ArticleQueryService},
    domain::article::{ArticleReadRepository, ArticleViewRepository},
};

pub struct ApplicationServices {
    pub view_commands: Arc<ViewCounterService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        view_repo: Arc<dyn ArticleViewRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        let view_commands = Arc::new(ViewCounterService::new(Arc::clone(&view_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            view_commands,
            article_queries,
        }
    }
}

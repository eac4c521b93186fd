// src/application/commands/views/service.rs
use std::sync::Arc;

use crate::domain::article::ArticleViewRepository;

pub struct ViewCounterService {
    pub(super) view_repo: Arc<dyn ArticleViewRepository>,
}

impl ViewCounterService {
    pub fn new(view_repo: Arc<dyn ArticleViewRepository>) -> Self {
        Self { view_repo }
    }
}

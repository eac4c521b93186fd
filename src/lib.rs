//! Public article read API and view counter backend.
//!
//! Layers follow the usual split: `domain` holds the article model and the
//! repository traits, `application` the services the HTTP layer calls,
//! `infrastructure` the PostgreSQL implementations and `presentation` the
//! axum router.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

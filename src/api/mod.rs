//! HTTP Resource Module
//!
//! Maps verbs and paths onto `ArticleStore` operations and turns the outcome
//! into a status code and body.
//!
//! ## Outcome Mapping
//! - **Value**: 200, or 201 for creation, with the JSON value.
//! - **Absent**: 404 with a fixed message. Delete has no absent case and always answers 204.
//! - **Store error**: logged, then 500 with a generic plain-text body.

pub mod handlers;
pub mod protocol;

use axum::{Extension, Router, routing::get};

use handlers::*;
use protocol::{ENDPOINT_ARTICLE, ENDPOINT_ARTICLES, ENDPOINT_INDEX};

/// Builds the application router over the given store.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route(ENDPOINT_INDEX, get(handle_index))
        .route(
            ENDPOINT_ARTICLES,
            get(handle_list_articles).post(handle_create_article),
        )
        .route(
            ENDPOINT_ARTICLE,
            get(handle_get_article)
                .patch(handle_update_article)
                .delete(handle_delete_article),
        )
        .layer(Extension(store))
}

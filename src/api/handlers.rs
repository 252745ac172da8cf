use super::protocol::{RouteIndex, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};
use crate::store::{ArticlePatch, ArticleStore, NewArticle, StoreError};

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub type SharedStore = Arc<dyn ArticleStore>;

pub async fn handle_index() -> Json<RouteIndex> {
    Json(RouteIndex::default())
}

pub async fn handle_list_articles(Extension(store): Extension<SharedStore>) -> Response {
    match store.find_all().await {
        Ok(articles) => {
            tracing::info!("Listing {} articles", articles.len());
            (StatusCode::OK, Json(articles)).into_response()
        }
        Err(e) => server_error("list articles", e),
    }
}

pub async fn handle_create_article(
    Extension(store): Extension<SharedStore>,
    Json(new): Json<NewArticle>,
) -> Response {
    match store.insert(new).await {
        Ok(article) => {
            tracing::info!("Created article {}", article.id);
            (StatusCode::CREATED, Json(article)).into_response()
        }
        Err(e) => server_error("create article", e),
    }
}

pub async fn handle_get_article(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> Response {
    match store.find_by_id(&id).await {
        Ok(Some(article)) => {
            tracing::info!("Article {} found", id);
            (StatusCode::OK, Json(article)).into_response()
        }
        Ok(None) => {
            tracing::info!("Article {} not found", id);
            // JSON-encoded string, unlike the plain-text 404 from PATCH.
            (StatusCode::NOT_FOUND, Json(NOT_FOUND_MESSAGE)).into_response()
        }
        Err(e) => server_error("read article", e),
    }
}

pub async fn handle_update_article(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
    Json(patch): Json<ArticlePatch>,
) -> Response {
    match store.update_by_id(&id, patch).await {
        Ok(Some(article)) => {
            tracing::info!("Article {} updated", id);
            (StatusCode::OK, Json(article)).into_response()
        }
        Ok(None) => {
            tracing::info!("Article {} not found, hence couldn't be updated", id);
            (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
        }
        Err(e) => server_error("update article", e),
    }
}

pub async fn handle_delete_article(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> Response {
    match store.delete_by_id(&id).await {
        Ok(()) => {
            tracing::info!("Article {} deleted successfully", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => server_error("delete article", e),
    }
}

fn server_error(action: &str, error: StoreError) -> Response {
    tracing::error!("Failed to {}: {}", action, error);
    (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
}

use axum::{
    Json,
    extract::{Extension, Path, Query, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::error::ApiError;
use super::protocol::{CreateLinkRequest, ListParams, UpdateLinkRequest};
use super::validate::validate_url;
use crate::store::{ConcurrentStore, Link};

pub async fn handle_list_links(
    Extension(store): Extension<Arc<ConcurrentStore>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Link>> {
    let links = store.list(params.prefix.as_deref()).await;
    tracing::debug!("Listed {} link(s) (prefix: {:?})", links.len(), params.prefix);
    Json(links)
}

pub async fn handle_get_link(
    Extension(store): Extension<Arc<ConcurrentStore>>,
    Path(alias): Path<String>,
) -> Result<Json<Link>, ApiError> {
    let link = store.get(&alias).await?;
    Ok(Json(link))
}

pub async fn handle_create_link(
    Extension(store): Extension<Arc<ConcurrentStore>>,
    body: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Link>), ApiError> {
    let Json(req) = body?;
    validate_url(&req.url)?;

    let link = store.create(req.alias, req.url).await?;
    tracing::info!("Created link {} -> {}", link.alias, link.url);
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn handle_update_link(
    Extension(store): Extension<Arc<ConcurrentStore>>,
    Path(alias): Path<String>,
    body: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<Json<Link>, ApiError> {
    let Json(req) = body?;
    validate_url(&req.url)?;

    let link = store.update(&alias, req.url).await?;
    tracing::info!("Updated link {} -> {}", link.alias, link.url);
    Ok(Json(link))
}

pub async fn handle_delete_link(
    Extension(store): Extension<Arc<ConcurrentStore>>,
    Path(alias): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.remove(&alias).await?;
    tracing::info!("Deleted link {}", alias);
    Ok(StatusCode::NO_CONTENT)
}

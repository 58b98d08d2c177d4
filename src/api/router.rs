use axum::{
    Router,
    extract::Extension,
    routing::get,
};
use std::sync::Arc;

use super::handlers::*;
use super::protocol::{ENDPOINT_LINK, ENDPOINT_LINKS};
use crate::store::ConcurrentStore;

/// Builds the HTTP router with `store` shared by every handler.
pub fn build_router(store: Arc<ConcurrentStore>) -> Router {
    Router::new()
        .route(
            ENDPOINT_LINKS,
            get(handle_list_links).post(handle_create_link),
        )
        .route(
            ENDPOINT_LINK,
            get(handle_get_link)
                .patch(handle_update_link)
                .delete(handle_delete_link),
        )
        .layer(Extension(store))
}

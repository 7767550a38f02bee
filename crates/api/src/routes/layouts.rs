//! Route definitions for wall and gallery layout computation.

use axum::routing::post;
use axum::Router;

use crate::handlers::layouts;
use crate::state::AppState;

/// Layout routes mounted at `/layouts`.
///
/// ```text
/// POST /walls                -> compute_wall
/// POST /galleries            -> compute_gallery
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/walls", post(layouts::compute_wall))
        .route("/galleries", post(layouts::compute_gallery))
}

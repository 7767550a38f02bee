//! Route definitions for exhibition scene configuration.

use axum::routing::post;
use axum::Router;

use crate::handlers::exhibitions;
use crate::state::AppState;

/// Exhibition routes mounted at `/exhibitions`.
///
/// ```text
/// POST /config               -> build_config
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/config", post(exhibitions::build_config))
}

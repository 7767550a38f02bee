pub mod exhibitions;
pub mod health;
pub mod layouts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /layouts/walls                 compute one wall's placements (POST)
/// /layouts/galleries             compute a template's slot list (POST)
///
/// /exhibitions/config            build the render-ready config (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/layouts", layouts::router())
        .nest("/exhibitions", exhibitions::router())
}

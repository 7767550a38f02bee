//! Handlers for exhibition scene configuration.

use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use galleria_core::exhibition::{build_gallery_config, Exhibition};

use crate::error::AppResult;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// POST /exhibitions/config
// ---------------------------------------------------------------------------

/// Join an exhibition's artwork assignments against its gallery template and
/// return the render-ready configuration.
///
/// Assignments to missing slots or unresolved artworks are left out of the
/// response rather than rejected.
pub async fn build_config(Json(body): Json<Exhibition>) -> AppResult<impl IntoResponse> {
    body.validate()?;

    let config = build_gallery_config(&body);

    let dropped = body.artwork_positions.len() - config.artworks.len();
    tracing::info!(
        exhibition_id = %config.id,
        placed = config.artworks.len(),
        dropped,
        "Exhibition config built"
    );

    Ok(Json(DataResponse { data: config }))
}

//! Handlers for wall and gallery layout computation.
//!
//! Used by the gallery template authoring tool: one call per wall while
//! editing, then one call for the whole room when the template is saved.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use galleria_core::gallery::{build_template_placements, ArtworkPlacement};
use galleria_core::types::RoomDimensions;
use galleria_core::wall_layout::{compute_wall_placements, LayoutOptions, WallDescriptor, WallSpec};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct WallLayoutRequest {
    pub room: RoomDimensions,
    pub wall: WallDescriptor,
    pub wall_dimension: f64,
    pub artwork_count: usize,
    #[validate(range(min = 0.0))]
    pub wall_offset: Option<f64>,
    #[validate(range(min = 0.0))]
    pub height_position: Option<f64>,
}

/// At most 64 walls per gallery.
#[derive(Debug, Deserialize, Validate)]
pub struct GalleryLayoutRequest {
    pub room: RoomDimensions,
    #[validate(length(min = 1, max = 64))]
    pub walls: Vec<WallSpec>,
    #[validate(range(min = 0.0))]
    pub wall_offset: Option<f64>,
    #[validate(range(min = 0.0))]
    pub height_position: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct GalleryLayoutResponse {
    pub slot_count: usize,
    pub artwork_placements: Vec<ArtworkPlacement>,
}

/// Fill omitted tunables from the server configuration.
fn resolve_options(
    state: &AppState,
    wall_offset: Option<f64>,
    height_position: Option<f64>,
) -> LayoutOptions {
    let defaults = state.config.layout;
    LayoutOptions {
        wall_offset: wall_offset.unwrap_or(defaults.wall_offset),
        height_position: height_position.unwrap_or(defaults.height_position),
    }
}

// ---------------------------------------------------------------------------
// POST /layouts/walls
// ---------------------------------------------------------------------------

/// Compute the placements for a single wall.
pub async fn compute_wall(
    State(state): State<AppState>,
    Json(body): Json<WallLayoutRequest>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;

    let options = resolve_options(&state, body.wall_offset, body.height_position);
    // CoreError auto-converts to AppError via #[from].
    let placements = compute_wall_placements(
        &body.wall,
        body.wall_dimension,
        body.artwork_count,
        &body.room,
        &options,
    )?;

    tracing::info!(
        artwork_count = body.artwork_count,
        wall_dimension = body.wall_dimension,
        "Wall layout computed"
    );

    Ok(Json(DataResponse { data: placements }))
}

// ---------------------------------------------------------------------------
// POST /layouts/galleries
// ---------------------------------------------------------------------------

/// Compute the full slot list of a gallery template, walls in request order.
pub async fn compute_gallery(
    State(state): State<AppState>,
    Json(body): Json<GalleryLayoutRequest>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;

    let options = resolve_options(&state, body.wall_offset, body.height_position);
    let artwork_placements = build_template_placements(&body.room, &body.walls, &options)?;

    tracing::info!(
        wall_count = body.walls.len(),
        slot_count = artwork_placements.len(),
        "Gallery layout computed"
    );

    Ok(Json(DataResponse {
        data: GalleryLayoutResponse {
            slot_count: artwork_placements.len(),
            artwork_placements,
        },
    }))
}

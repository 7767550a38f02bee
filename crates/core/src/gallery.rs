//! Gallery templates and their placement slots.
//!
//! A template's slots are computed once, when the template is authored, by
//! running the wall layout for each wall in declaration order and
//! concatenating the results. A slot's index in that list is the address
//! curators use when assigning artworks.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, RoomDimensions, Vec3};
use crate::wall_layout::{
    compute_wall_placements, validate_room_dimensions, LayoutOptions, WallDescriptor, WallSide,
    WallSpec,
};

/// Pose of one artwork slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPlacement {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// The room mesh the renderer loads for a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryModel {
    pub path: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f64,
}

/// Extra physics collider authored alongside the model. Forwarded to the
/// renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCollider {
    pub shape: String,
    pub args: Vec<f64>,
    pub position: Vec3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryTemplate {
    pub id: EntityId,
    pub name: String,
    pub dimensions: RoomDimensions,
    pub wall_thickness: f64,
    #[serde(default)]
    pub wall_height: Option<f64>,
    pub model: GalleryModel,
    #[serde(default)]
    pub artwork_placements: Vec<ArtworkPlacement>,
    #[serde(default)]
    pub custom_colliders: Vec<CustomCollider>,
}

impl GalleryTemplate {
    /// Number of addressable placement slots.
    pub fn slot_count(&self) -> usize {
        self.artwork_placements.len()
    }

    /// Slot at `index`, or `None` when the index is negative or past the end.
    pub fn placement(&self, index: i64) -> Option<&ArtworkPlacement> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.artwork_placements.get(i))
    }
}

/// Run the wall layout for each wall in order and concatenate the slots.
///
/// The result has exactly as many entries as the walls' artwork counts sum
/// to. Any invalid wall aborts the whole build.
pub fn build_template_placements(
    room: &RoomDimensions,
    walls: &[WallSpec],
    options: &LayoutOptions,
) -> Result<Vec<ArtworkPlacement>, CoreError> {
    validate_room_dimensions(room)?;

    let total: usize = walls.iter().map(|w| w.artwork_count).sum();
    let mut placements = Vec::with_capacity(total);

    for (index, spec) in walls.iter().enumerate() {
        if wall_exceeds_room(spec, room) {
            tracing::warn!(
                wall_index = index,
                wall_dimension = spec.wall_dimension,
                "Wall dimension exceeds the room axis it runs along"
            );
        }

        let wall = compute_wall_placements(
            &spec.wall,
            spec.wall_dimension,
            spec.artwork_count,
            room,
            options,
        )
        .map_err(|e| match e {
            CoreError::Validation(msg) => CoreError::Validation(format!("Wall {index}: {msg}")),
        })?;
        placements.extend(wall.into_placements());
    }

    tracing::debug!(
        wall_count = walls.len(),
        slot_count = placements.len(),
        "Built gallery template placements"
    );

    Ok(placements)
}

/// Whether a standard wall is declared longer than the room side it lies on.
///
/// Custom walls are free-standing and never exceed the room by this check.
pub fn wall_exceeds_room(spec: &WallSpec, room: &RoomDimensions) -> bool {
    match spec.wall {
        WallDescriptor::Standard {
            side: WallSide::Back | WallSide::Front,
        } => spec.wall_dimension > room.x_axis,
        WallDescriptor::Standard {
            side: WallSide::Left | WallSide::Right,
        } => spec.wall_dimension > room.z_axis,
        WallDescriptor::Custom { .. } => false,
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

//! Wall artwork placement geometry.
//!
//! Given a wall, its usable length and an artwork count, computes one
//! position/rotation pair per artwork slot. Artworks are spaced evenly along
//! the wall's run axis with equal margins at both ends, centred on the wall
//! midpoint.
//!
//! Standard walls sit on the room boundary and face its centre. Custom walls
//! (interior dividers) carry their own position, yaw and surface normal; the
//! run axis is inferred from the yaw.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::gallery::ArtworkPlacement;
use crate::types::{RoomDimensions, Vec3};

/* --------------------------------------------------------------------------
Defaults and limits
-------------------------------------------------------------------------- */

/// Distance artworks are pushed off the wall surface (metres).
pub const DEFAULT_WALL_OFFSET: f64 = 0.15;

/// Height of artwork centres above the floor (metres).
pub const DEFAULT_HEIGHT_POSITION: f64 = 4.0;

/// Upper bound on artworks hung on a single wall.
pub const MAX_ARTWORKS_PER_WALL: usize = 500;

/// `|sin| - |cos|` must exceed this for a wall to run along Z. Absorbs the
/// rounding that makes `|sin|` and `|cos|` differ by an ulp at odd multiples
/// of 45°.
const AXIS_TIE_EPSILON: f64 = 1e-12;

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// One of the four walls bounding a rectangular room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallSide {
    Back,
    Front,
    Left,
    Right,
}

/// Where a wall is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WallDescriptor {
    /// Axis-aligned wall on the room boundary.
    Standard { side: WallSide },
    /// Free-standing wall with its own pose. `offset_direction` points from
    /// the wall surface towards the side artworks hang on.
    Custom {
        position: Vec3,
        rotation: Vec3,
        offset_direction: Vec3,
    },
}

/// A wall plus how much of it is usable and how many artworks it holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    pub wall: WallDescriptor,
    pub wall_dimension: f64,
    pub artwork_count: usize,
}

/// Tunables shared by every wall of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub wall_offset: f64,
    pub height_position: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            wall_offset: DEFAULT_WALL_OFFSET,
            height_position: DEFAULT_HEIGHT_POSITION,
        }
    }
}

/// Horizontal axis a wall's width extends along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunAxis {
    X,
    Z,
}

/// Parallel arrays of per-artwork positions and rotations, indexed by slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WallPlacements {
    pub positions: Vec<Vec3>,
    pub rotations: Vec<Vec3>,
}

impl WallPlacements {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Zip the parallel arrays into placement slots, preserving order.
    pub fn into_placements(self) -> Vec<ArtworkPlacement> {
        self.positions
            .into_iter()
            .zip(self.rotations)
            .map(|(position, rotation)| ArtworkPlacement { position, rotation })
            .collect()
    }
}

/* --------------------------------------------------------------------------
Geometry
-------------------------------------------------------------------------- */

/// Offsets of each artwork centre along the run axis, relative to the wall
/// midpoint.
///
/// The wall is cut into `artwork_count + 1` equal segments and an artwork
/// hangs on every inner boundary, so the margin at each end equals the gap
/// between neighbours.
pub fn along_wall_offsets(wall_dimension: f64, artwork_count: usize) -> Vec<f64> {
    let spacing = wall_dimension / (artwork_count as f64 + 1.0);
    let half = wall_dimension / 2.0;
    (0..artwork_count)
        .map(|i| spacing * (i as f64 + 1.0) - half)
        .collect()
}

/// Rotation shared by every artwork on a standard wall. Each one turns the
/// artwork's front face towards the room centre.
pub fn standard_wall_rotation(side: WallSide) -> Vec3 {
    match side {
        WallSide::Back => Vec3::ZERO,
        WallSide::Front => Vec3::new(0.0, PI, 0.0),
        WallSide::Left => Vec3::new(0.0, FRAC_PI_2, 0.0),
        WallSide::Right => Vec3::new(0.0, -FRAC_PI_2, 0.0),
    }
}

/// Normalize a yaw angle into `[0, 2π)`.
pub fn normalize_yaw(yaw: f64) -> f64 {
    let wrapped = yaw.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Infer which horizontal axis a wall runs along from its yaw.
///
/// A wall whose normal is closer to X runs along Z, and vice versa. At odd
/// multiples of 45° `|sin|` and `|cos|` agree to within `AXIS_TIE_EPSILON`
/// and the wall runs along X. Any yaw is accepted; `|sin|` and `|cos|` repeat
/// every half turn.
pub fn run_axis_for_yaw(yaw: f64) -> RunAxis {
    if yaw.sin().abs() - yaw.cos().abs() > AXIS_TIE_EPSILON {
        RunAxis::Z
    } else {
        RunAxis::X
    }
}

/// Compute the pose of every artwork slot on one wall.
///
/// Returns arrays of length `artwork_count`. Fails with
/// [`CoreError::Validation`] on non-positive or non-finite dimensions,
/// non-finite options or custom wall vectors, or an oversized count.
pub fn compute_wall_placements(
    wall: &WallDescriptor,
    wall_dimension: f64,
    artwork_count: usize,
    room: &RoomDimensions,
    options: &LayoutOptions,
) -> Result<WallPlacements, CoreError> {
    validate_room_dimensions(room)?;
    validate_wall_dimension(wall_dimension)?;
    validate_artwork_count(artwork_count)?;
    validate_options(options)?;

    let offsets = along_wall_offsets(wall_dimension, artwork_count);
    let LayoutOptions {
        wall_offset,
        height_position,
    } = *options;

    let (positions, rotation) = match *wall {
        WallDescriptor::Standard { side } => {
            let positions = offsets
                .iter()
                .map(|&pos| match side {
                    WallSide::Back => {
                        Vec3::new(pos, height_position, -room.z_axis / 2.0 + wall_offset)
                    }
                    WallSide::Front => {
                        Vec3::new(pos, height_position, room.z_axis / 2.0 - wall_offset)
                    }
                    WallSide::Left => {
                        Vec3::new(-room.x_axis / 2.0 + wall_offset, height_position, pos)
                    }
                    WallSide::Right => {
                        Vec3::new(room.x_axis / 2.0 - wall_offset, height_position, pos)
                    }
                })
                .collect::<Vec<_>>();
            (positions, standard_wall_rotation(side))
        }
        WallDescriptor::Custom {
            position,
            rotation,
            offset_direction,
        } => {
            if !position.is_finite() || !rotation.is_finite() || !offset_direction.is_finite() {
                return Err(CoreError::Validation(
                    "Custom wall position, rotation and offset direction must be finite"
                        .to_string(),
                ));
            }

            let yaw = normalize_yaw(rotation.y);
            let axis = run_axis_for_yaw(yaw);
            let positions = offsets
                .iter()
                .map(|&pos| {
                    let (x, z) = match axis {
                        RunAxis::X => (position.x + pos, position.z),
                        RunAxis::Z => (position.x, position.z + pos),
                    };
                    Vec3::new(
                        x + offset_direction.x * wall_offset,
                        height_position,
                        z + offset_direction.z * wall_offset,
                    )
                })
                .collect::<Vec<_>>();
            (positions, Vec3::new(rotation.x, yaw, rotation.z))
        }
    };

    tracing::debug!(
        wall = ?wall,
        artwork_count,
        wall_dimension,
        "Computed wall placements"
    );

    Ok(WallPlacements {
        rotations: vec![rotation; positions.len()],
        positions,
    })
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate that every room dimension is positive and finite.
pub fn validate_room_dimensions(room: &RoomDimensions) -> Result<(), CoreError> {
    let axes = [
        ("x_axis", room.x_axis),
        ("y_axis", room.y_axis),
        ("z_axis", room.z_axis),
    ];
    for (name, value) in axes {
        if !value.is_finite() || value <= 0.0 {
            return Err(CoreError::Validation(format!(
                "Room dimension {name} must be a positive finite number (got {value})"
            )));
        }
    }
    Ok(())
}

/// Validate that a wall's usable length is positive and finite.
pub fn validate_wall_dimension(wall_dimension: f64) -> Result<(), CoreError> {
    if !wall_dimension.is_finite() || wall_dimension <= 0.0 {
        return Err(CoreError::Validation(format!(
            "Wall dimension must be a positive finite number (got {wall_dimension})"
        )));
    }
    Ok(())
}

/// Validate the per-wall artwork limit.
pub fn validate_artwork_count(artwork_count: usize) -> Result<(), CoreError> {
    if artwork_count > MAX_ARTWORKS_PER_WALL {
        return Err(CoreError::Validation(format!(
            "A wall holds at most {MAX_ARTWORKS_PER_WALL} artworks (got {artwork_count})"
        )));
    }
    Ok(())
}

fn validate_options(options: &LayoutOptions) -> Result<(), CoreError> {
    if !options.wall_offset.is_finite() || !options.height_position.is_finite() {
        return Err(CoreError::Validation(
            "Wall offset and height position must be finite".to_string(),
        ));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

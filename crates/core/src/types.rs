use serde::{Deserialize, Serialize};

/// Entity identifiers are opaque strings issued by the gallery REST service.
pub type EntityId = String;

/// A triple of reals used for world-space positions (metres) and Euler
/// rotations (radians).
///
/// Serialized as a `[x, y, z]` array, which is what the renderer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// Width (`x_axis`), height (`y_axis`) and depth (`z_axis`) of a
/// rectangular room, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub x_axis: f64,
    pub y_axis: f64,
    pub z_axis: f64,
}

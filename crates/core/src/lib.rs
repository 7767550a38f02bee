//! Galleria domain logic.
//!
//! Pure computations behind the virtual exhibition viewer: wall placement
//! geometry, gallery template authoring, and the exhibition configuration
//! join that feeds the 3D renderer. Nothing in this crate performs I/O.

pub mod error;
pub mod exhibition;
pub mod gallery;
pub mod types;
pub mod wall_layout;

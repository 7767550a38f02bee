//! Exhibition configuration builder.
//!
//! Joins a curator's artwork assignments against the gallery template's
//! placement slots and produces the render-ready scene description. The
//! result is a derived view: it is rebuilt from its inputs and never stored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::gallery::{ArtworkPlacement, CustomCollider, GalleryTemplate};
use crate::types::{EntityId, RoomDimensions, Vec3};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Language whose content is preferred for display.
pub const PREFERRED_LANGUAGE: &str = "en";

/// Name used when an exhibition has no content entries at all.
pub const DEFAULT_EXHIBITION_NAME: &str = "Untitled Exhibition";

/// Wall height reported when the template leaves it unset (metres).
pub const DEFAULT_WALL_HEIGHT: f64 = 3.0;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: EntityId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Assigns an artwork to a slot of the exhibition's gallery template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPosition {
    pub artwork_id: EntityId,
    pub position_index: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedContent {
    pub language_code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Exhibition {
    #[validate(length(min = 1))]
    pub id: EntityId,
    #[serde(default)]
    pub contents: Vec<LocalizedContent>,
    pub gallery: GalleryTemplate,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub artwork_positions: Vec<ArtworkPosition>,
    /// Resolved artwork records referenced by `artwork_positions`.
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub artworks: Vec<Artwork>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedArtwork {
    pub artwork: Artwork,
    pub placement: ArtworkPlacement,
}

/// Room and model parameters the renderer needs to build the scene shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryModelConfig {
    pub dimensions: RoomDimensions,
    pub wall_thickness: f64,
    pub wall_height: f64,
    pub model_path: String,
    pub model_position: Vec3,
    pub model_rotation: Vec3,
    pub model_scale: f64,
    pub custom_colliders: Vec<CustomCollider>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitionConfig {
    pub id: EntityId,
    pub name: String,
    pub gallery_model: GalleryModelConfig,
    pub artworks: Vec<PlacedArtwork>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the render-ready configuration for an exhibition.
///
/// Assignments pointing outside the template's slot list, or at an artwork
/// that was not resolved, are dropped without error. Surviving entries keep
/// their input order.
pub fn build_gallery_config(exhibition: &Exhibition) -> ExhibitionConfig {
    let gallery = &exhibition.gallery;

    // First record wins when an id is repeated.
    let mut by_id: HashMap<&str, &Artwork> = HashMap::with_capacity(exhibition.artworks.len());
    for artwork in &exhibition.artworks {
        by_id.entry(artwork.id.as_str()).or_insert(artwork);
    }

    let artworks: Vec<PlacedArtwork> = exhibition
        .artwork_positions
        .iter()
        .filter_map(|pos| {
            let Some(placement) = gallery.placement(pos.position_index) else {
                tracing::debug!(
                    exhibition_id = %exhibition.id,
                    artwork_id = %pos.artwork_id,
                    position_index = pos.position_index,
                    slot_count = gallery.slot_count(),
                    "Dropping artwork assigned to a missing slot"
                );
                return None;
            };
            let Some(artwork) = by_id.get(pos.artwork_id.as_str()) else {
                tracing::debug!(
                    exhibition_id = %exhibition.id,
                    artwork_id = %pos.artwork_id,
                    "Dropping unresolved artwork"
                );
                return None;
            };
            Some(PlacedArtwork {
                artwork: (*artwork).clone(),
                placement: ArtworkPlacement {
                    position: placement.position,
                    rotation: placement.rotation,
                },
            })
        })
        .collect();

    let name = select_content(&exhibition.contents)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| DEFAULT_EXHIBITION_NAME.to_string());

    ExhibitionConfig {
        id: exhibition.id.clone(),
        name,
        gallery_model: GalleryModelConfig {
            dimensions: gallery.dimensions,
            wall_thickness: gallery.wall_thickness,
            wall_height: gallery.wall_height.unwrap_or(DEFAULT_WALL_HEIGHT),
            model_path: gallery.model.path.clone(),
            model_position: gallery.model.position,
            model_rotation: gallery.model.rotation,
            model_scale: gallery.model.scale,
            custom_colliders: gallery.custom_colliders.clone(),
        },
        artworks,
    }
}

/// Pick the English content entry, else the first one.
pub fn select_content(contents: &[LocalizedContent]) -> Option<&LocalizedContent> {
    contents
        .iter()
        .find(|c| c.language_code == PREFERRED_LANGUAGE)
        .or_else(|| contents.first())
}

// ---------------------------------------------------------------------------
// Memoization
// ---------------------------------------------------------------------------

/// Caches the most recent configuration and rebuilds only when the
/// exhibition changes.
///
/// For callers that embed the builder and ask for the same exhibition
/// repeatedly, such as an in-process viewer re-rendering on every frame or
/// edit. The HTTP service is stateless and calls [`build_gallery_config`]
/// directly.
#[derive(Debug, Default)]
pub struct GalleryConfigMemo {
    last: Option<(Exhibition, ExhibitionConfig)>,
    builds: usize,
}

impl GalleryConfigMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration for `exhibition`, reusing the cached one when
    /// the input is unchanged.
    pub fn get(&mut self, exhibition: &Exhibition) -> &ExhibitionConfig {
        if !matches!(&self.last, Some((input, _)) if input == exhibition) {
            self.last = None;
        }
        let builds = &mut self.builds;
        let (_, config) = self.last.get_or_insert_with(|| {
            *builds += 1;
            (exhibition.clone(), build_gallery_config(exhibition))
        });
        config
    }

    /// Number of times the configuration has actually been rebuilt.
    pub fn builds(&self) -> usize {
        self.builds
    }

    /// Drop the cached configuration so the next [`get`](Self::get) rebuilds.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

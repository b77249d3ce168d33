//! Asset catalog seam.
//!
//! Loading sprites from disk belongs to the platform layer. The core only
//! asks a catalog which images exist and how large a card drawn with a
//! given image is on the table.

use rustc_hash::FxHashMap;

use super::image::{ImageId, ImageRef};
use crate::core::geometry::Vec2;

/// Source of card images.
///
/// Implemented by the platform layer; `StaticCatalog` covers tests and
/// headless drivers.
pub trait AssetCatalog {
    /// Every image usable as a card front.
    fn front_images(&self) -> Vec<ImageRef>;

    /// Every image usable as a card back.
    fn back_images(&self) -> Vec<ImageRef>;

    /// Rendered footprint of a card drawn with `image`, in world units.
    fn footprint(&self, image: &ImageRef) -> Vec2;
}

/// In-memory catalog.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{AssetCatalog, ImageRef, StaticCatalog};
/// use memory_match::core::Vec2;
///
/// let catalog = StaticCatalog::new()
///     .with_front(ImageRef::new(1, "apple"))
///     .with_front(ImageRef::new(2, "pear"))
///     .with_back(ImageRef::new(100, "blue"))
///     .with_footprint(Vec2::new(1.0, 1.5));
///
/// assert_eq!(catalog.front_images().len(), 2);
/// assert_eq!(catalog.footprint(&ImageRef::new(100, "blue")), Vec2::new(1.0, 1.5));
/// ```
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    fronts: Vec<ImageRef>,
    backs: Vec<ImageRef>,
    footprint: Vec2,
    overrides: FxHashMap<ImageId, Vec2>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self {
            fronts: Vec::new(),
            backs: Vec::new(),
            footprint: Vec2::ONE,
            overrides: FxHashMap::default(),
        }
    }
}

impl StaticCatalog {
    /// Create an empty catalog with a 1×1 footprint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with `fronts` numbered fronts (IDs `0..fronts`) and `backs`
    /// numbered backs (IDs starting at 1000).
    #[must_use]
    pub fn numbered(fronts: u32, backs: u32) -> Self {
        let mut catalog = Self::new();
        for i in 0..fronts {
            catalog.fronts.push(ImageRef::new(i, format!("front-{}", i)));
        }
        for i in 0..backs {
            catalog.backs.push(ImageRef::new(1000 + i, format!("back-{}", i)));
        }
        catalog
    }

    /// Add a front image.
    #[must_use]
    pub fn with_front(mut self, image: ImageRef) -> Self {
        self.fronts.push(image);
        self
    }

    /// Add a back image.
    #[must_use]
    pub fn with_back(mut self, image: ImageRef) -> Self {
        self.backs.push(image);
        self
    }

    /// Set the footprint used for every image without an override.
    #[must_use]
    pub fn with_footprint(mut self, footprint: Vec2) -> Self {
        self.footprint = footprint;
        self
    }

    /// Give one image its own footprint.
    #[must_use]
    pub fn with_image_footprint(mut self, image: ImageId, footprint: Vec2) -> Self {
        self.overrides.insert(image, footprint);
        self
    }
}

impl AssetCatalog for StaticCatalog {
    fn front_images(&self) -> Vec<ImageRef> {
        self.fronts.clone()
    }

    fn back_images(&self) -> Vec<ImageRef> {
        self.backs.clone()
    }

    fn footprint(&self, image: &ImageRef) -> Vec2 {
        self.overrides.get(&image.id).copied().unwrap_or(self.footprint)
    }
}

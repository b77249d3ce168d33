//! Image references and pair keys.
//!
//! The core never touches pixels. It only needs to know *which* image a
//! card shows, so images are referred to by an opaque `ImageId` plus a
//! human-readable name for logs and debugging.
//!
//! Two cards match when they share a `PairKey`, which wraps the front
//! image's `ImageId`. Matching is a typed comparison of IDs, never of names,
//! so two unrelated images that happen to share a file name cannot pair up.

use serde::{Deserialize, Serialize};

/// Opaque identifier for an image known to the asset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ImageId(pub u32);

impl ImageId {
    /// Create a new image ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}

/// Reference to a front or back image.
///
/// Identity is the `id` alone; `name` is descriptive.
///
/// ```
/// use memory_match::cards::ImageRef;
///
/// let a = ImageRef::new(1, "apple");
/// let b = ImageRef::new(1, "apple-renamed");
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: ImageId,
    pub name: String,
}

impl ImageRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ImageId::new(id),
            name: name.into(),
        }
    }
}

impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::hash::Hash for ImageRef {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// The value two matching cards share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey(pub ImageId);

impl PairKey {
    /// Pair key for cards showing `front`.
    #[must_use]
    pub fn of(front: &ImageRef) -> Self {
        Self(front.id)
    }

    /// The front image this key stands for.
    #[must_use]
    pub const fn image(self) -> ImageId {
        self.0
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0.raw())
    }
}

//! Image resources for the slider
//!
//! Resources are named by a [`ResourceId`] and turned into decoded [`Image`]s
//! by a [`ResourceLoader`]. Icons configured at construction are decoded on the
//! blocking pool and handed back as one complete [`Icons`] bundle.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use iced::widget::image::Handle;
use serde::{Deserialize, Serialize};

use crate::slider::{IconTier, SliderError};

/// Name of an image resource, resolved by a [`ResourceLoader`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A decoded RGBA raster ready to be drawn
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    handle: Handle,
}

impl Image {
    /// Wrap raw RGBA8 pixels
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            handle: Handle::from_rgba(width, height, pixels),
        }
    }

    /// Convert an already decoded image
    pub fn from_dynamic(image: image::DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_raw())
    }

    /// Decode an image file from disk
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path)
            .with_context(|| format!("Failed to decode image {}", path.display()))?;
        Ok(Self::from_dynamic(decoded))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Renderer handle, created once so the texture can be cached by the host
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// Turns resource names into decoded images
pub trait ResourceLoader: Send + Sync {
    fn load(&self, id: &ResourceId) -> Result<Image, SliderError>;
}

/// Loads image files relative to an asset directory
#[derive(Debug, Clone)]
pub struct AssetLoader {
    root: PathBuf,
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceLoader for AssetLoader {
    fn load(&self, id: &ResourceId) -> Result<Image, SliderError> {
        let path = self.root.join(id.as_str());
        tracing::debug!("Loading image resource {} from {:?}", id, path);
        Image::open(&path).map_err(|e| SliderError::Resource {
            id: id.clone(),
            reason: format!("{:#}", e),
        })
    }
}

/// Serves images that were decoded or generated ahead of time
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    images: HashMap<ResourceId, Image>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<ResourceId>, image: Image) {
        self.images.insert(id.into(), image);
    }

    pub fn with(mut self, id: impl Into<ResourceId>, image: Image) -> Self {
        self.insert(id, image);
        self
    }
}

impl ResourceLoader for MemoryLoader {
    fn load(&self, id: &ResourceId) -> Result<Image, SliderError> {
        self.images
            .get(id)
            .cloned()
            .ok_or_else(|| SliderError::Resource {
                id: id.clone(),
                reason: "no such resource".to_string(),
            })
    }
}

/// The three progress-tier icons
#[derive(Debug, Clone, Default)]
pub struct Icons {
    pub low: Option<Image>,
    pub medium: Option<Image>,
    pub high: Option<Image>,
}

impl Icons {
    /// Icons are only drawn once all three tiers are present
    pub fn is_complete(&self) -> bool {
        self.low.is_some() && self.medium.is_some() && self.high.is_some()
    }

    /// Take every tier present in `loaded`, keeping ours where it has none
    pub fn merge(&mut self, loaded: Icons) {
        let Icons { low, medium, high } = loaded;
        if low.is_some() {
            self.low = low;
        }
        if medium.is_some() {
            self.medium = medium;
        }
        if high.is_some() {
            self.high = high;
        }
    }

    /// Icon for `tier`, or `None` while the set is incomplete
    pub fn for_tier(&self, tier: IconTier) -> Option<&Image> {
        if !self.is_complete() {
            return None;
        }
        match tier {
            IconTier::Low => self.low.as_ref(),
            IconTier::Medium => self.medium.as_ref(),
            IconTier::High => self.high.as_ref(),
        }
    }
}

/// Resource names of the icons requested at construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconIds {
    pub low: Option<ResourceId>,
    pub medium: Option<ResourceId>,
    pub high: Option<ResourceId>,
}

impl IconIds {
    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.medium.is_none() && self.high.is_none()
    }

    /// Decode every named icon on the calling thread. Absent names are skipped.
    pub fn load_with(&self, loader: &dyn ResourceLoader) -> Result<Icons, SliderError> {
        let load = |id: &Option<ResourceId>| id.as_ref().map(|id| loader.load(id)).transpose();

        Ok(Icons {
            high: load(&self.high)?,
            medium: load(&self.medium)?,
            low: load(&self.low)?,
        })
    }
}

/// Decode the icon batch on the blocking pool.
///
/// The returned set is published as a whole, so a renderer never observes a
/// partially loaded batch.
pub async fn load_icons(loader: Arc<dyn ResourceLoader>, ids: IconIds) -> Result<Icons> {
    let icons = tokio::task::spawn_blocking(move || ids.load_with(loader.as_ref()))
        .await
        .context("Icon decode task failed")??;
    Ok(icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32) -> Image {
        Image::from_rgba(width, height, vec![255; (width * height * 4) as usize])
    }

    #[test]
    fn test_memory_loader_hit_and_miss() {
        let loader = MemoryLoader::new().with("low", solid(4, 4));

        let image = loader.load(&"low".into()).unwrap();
        assert_eq!((image.width(), image.height()), (4, 4));

        let err = loader.load(&"missing".into()).unwrap_err();
        assert!(matches!(err, SliderError::Resource { ref id, .. } if id.as_str() == "missing"));
    }

    #[test]
    fn test_icons_require_all_three() {
        let mut icons = Icons {
            low: Some(solid(1, 1)),
            medium: Some(solid(2, 2)),
            high: None,
        };
        assert!(!icons.is_complete());
        assert!(icons.for_tier(IconTier::Low).is_none());

        icons.high = Some(solid(3, 3));
        assert!(icons.is_complete());
        assert_eq!(icons.for_tier(IconTier::High).map(Image::width), Some(3));
        assert_eq!(icons.for_tier(IconTier::Medium).map(Image::width), Some(2));
    }

    #[test]
    fn test_merge_keeps_tiers_missing_from_batch() {
        let mut icons = Icons {
            low: Some(solid(1, 1)),
            medium: Some(solid(2, 2)),
            high: Some(solid(3, 3)),
        };

        icons.merge(Icons {
            low: Some(solid(9, 9)),
            ..Default::default()
        });
        assert!(icons.is_complete());
        assert_eq!(icons.low.as_ref().map(Image::width), Some(9));
        assert_eq!(icons.medium.as_ref().map(Image::width), Some(2));
        assert_eq!(icons.high.as_ref().map(Image::width), Some(3));

        icons.merge(Icons::default());
        assert!(icons.is_complete());
    }

    #[test]
    fn test_icon_ids_skip_absent() {
        let loader = MemoryLoader::new().with("low", solid(1, 1));
        let ids = IconIds {
            low: Some("low".into()),
            ..Default::default()
        };

        let icons = ids.load_with(&loader).unwrap();
        assert!(icons.low.is_some());
        assert!(icons.medium.is_none());
        assert!(icons.high.is_none());
    }

    #[test]
    fn test_asset_loader_decodes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let loader = AssetLoader::new(dir.path());
        let image = loader.load(&"dot.png".into()).unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
    }

    #[test]
    fn test_asset_loader_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(dir.path());

        let err = loader.load(&"nope.png".into()).unwrap_err();
        assert!(matches!(err, SliderError::Resource { .. }));
    }

    #[tokio::test]
    async fn test_load_icons_publishes_complete_set() {
        let loader: Arc<dyn ResourceLoader> = Arc::new(
            MemoryLoader::new()
                .with("lo", solid(1, 1))
                .with("mid", solid(2, 2))
                .with("hi", solid(3, 3)),
        );
        let ids = IconIds {
            low: Some("lo".into()),
            medium: Some("mid".into()),
            high: Some("hi".into()),
        };

        let icons = load_icons(loader, ids).await.unwrap();
        assert!(icons.is_complete());
    }

    #[tokio::test]
    async fn test_load_icons_fails_on_bad_resource() {
        let loader: Arc<dyn ResourceLoader> = Arc::new(MemoryLoader::new());
        let ids = IconIds {
            medium: Some("mid".into()),
            ..Default::default()
        };

        assert!(load_icons(loader, ids).await.is_err());
    }
}

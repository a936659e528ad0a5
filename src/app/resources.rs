//! Resources available to the demo

use std::path::PathBuf;

use crate::assets::{AssetLoader, Image, MemoryLoader, ResourceId, ResourceLoader};
use crate::slider::{ICON_SIZE_DP, SliderError, dp_to_px};

use super::icons::{VOLUME_HIGH, VOLUME_LOW, VOLUME_MEDIUM, volume_icon};

/// Built-in volume icons, falling back to image files in the asset directory
pub struct DemoResources {
    builtin: MemoryLoader,
    files: Option<AssetLoader>,
}

impl DemoResources {
    pub fn new(density: f32, asset_dir: Option<PathBuf>) -> Self {
        let size = dp_to_px(ICON_SIZE_DP, density).max(1.0) as u32;
        let builtin = MemoryLoader::new()
            .with(VOLUME_LOW, volume_icon(1, size))
            .with(VOLUME_MEDIUM, volume_icon(2, size))
            .with(VOLUME_HIGH, volume_icon(3, size));

        Self {
            builtin,
            files: asset_dir.map(|dir| AssetLoader::new(dir)),
        }
    }
}

impl ResourceLoader for DemoResources {
    fn load(&self, id: &ResourceId) -> Result<Image, SliderError> {
        match self.builtin.load(id) {
            Ok(image) => Ok(image),
            Err(missing) => match &self.files {
                Some(files) => files.load(id),
                None => Err(missing),
            },
        }
    }
}

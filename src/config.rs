//! Slider attributes persistence
//!
//! Attributes are read once when a slider is built. They are stored as JSON
//! next to the other user configuration.

use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::assets::{IconIds, ResourceId};
use crate::slider::{DEFAULT_MAX, DEFAULT_PROGRESS};

/// Resource number meaning "no resource"
pub const ABSENT_RESOURCE: i64 = -1;

/// Construction-time attributes of a slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderAttributes {
    /// Upper bound of the progress
    pub max: u32,
    /// Initial progress, must not exceed `max`
    pub progress: u32,
    /// Corner radius in density-independent units, `None` for the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    /// Pixels per density-independent unit
    pub density: f32,
    #[serde(
        deserialize_with = "resource_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_low: Option<ResourceId>,
    #[serde(
        deserialize_with = "resource_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_medium: Option<ResourceId>,
    #[serde(
        deserialize_with = "resource_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_high: Option<ResourceId>,
    /// Image drawn instead of the flat track
    #[serde(
        deserialize_with = "resource_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub background: Option<ResourceId>,
    /// Image drawn instead of the flat fill
    #[serde(
        deserialize_with = "resource_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub fill: Option<ResourceId>,
}

impl Default for SliderAttributes {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            progress: DEFAULT_PROGRESS,
            corner_radius: None,
            density: 1.0,
            icon_low: None,
            icon_medium: None,
            icon_high: None,
            background: None,
            fill: None,
        }
    }
}

/// Accepts a resource name, `null`, or the `-1` sentinel
fn resource_or_absent<'de, D>(deserializer: D) -> Result<Option<ResourceId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Name(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None | Some(Raw::Number(ABSENT_RESOURCE)) => Ok(None),
        Some(Raw::Number(other)) => Err(D::Error::custom(format!(
            "unknown resource number {}, use a name or {}",
            other, ABSENT_RESOURCE
        ))),
        Some(Raw::Name(name)) => Ok(Some(ResourceId::new(name))),
    }
}

impl SliderAttributes {
    /// Names of the icons to decode in the background
    pub fn icon_ids(&self) -> IconIds {
        IconIds {
            low: self.icon_low.clone(),
            medium: self.icon_medium.clone(),
            high: self.icon_high.clone(),
        }
    }

    /// Get the attributes file path
    pub fn file_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("slider.json"))
    }

    /// Directory file-based resources are resolved against
    pub fn asset_dir() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("assets"))
    }

    fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "vertical-slider", "VerticalSlider")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load attributes from file, or return defaults if not found
    pub fn load() -> Self {
        match Self::file_path() {
            Some(path) if path.exists() => Self::load_from_file(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring slider attributes: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Load and check attributes from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, AttributesError> {
        let content = std::fs::read_to_string(path).map_err(|e| AttributesError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let attributes: Self =
            serde_json::from_str(&content).map_err(|e| AttributesError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        if !(attributes.density.is_finite() && attributes.density > 0.0) {
            return Err(AttributesError::Density(attributes.density));
        }
        Ok(attributes)
    }

    /// Write attributes as pretty JSON, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<(), AttributesError> {
        let write_error = |source| AttributesError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| AttributesError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, content).map_err(write_error)
    }
}

/// Why an attributes file could not be used
#[derive(Debug)]
pub enum AttributesError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Pixels per dp must be a positive number
    Density(f32),
}

impl std::fmt::Display for AttributesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributesError::Read { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            AttributesError::Write { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
            AttributesError::Parse { path, source } => {
                write!(f, "malformed attributes in {}: {}", path.display(), source)
            }
            AttributesError::Density(density) => {
                write!(f, "density must be positive, got {}", density)
            }
        }
    }
}

impl std::error::Error for AttributesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttributesError::Read { source, .. } | AttributesError::Write { source, .. } => {
                Some(source)
            }
            AttributesError::Parse { source, .. } => Some(source),
            AttributesError::Density(_) => None,
        }
    }
}

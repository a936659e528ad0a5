//! Errors reported by the slider core

use crate::assets::ResourceId;

/// Errors that can occur while mutating or configuring a slider
#[derive(Debug, Clone, PartialEq)]
pub enum SliderError {
    /// Progress was set above the current max
    ProgressOutOfRange { progress: u32, max: u32 },
    /// An image resource could not be read or decoded
    Resource { id: ResourceId, reason: String },
}

impl std::fmt::Display for SliderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliderError::ProgressOutOfRange { progress, max } => write!(
                f,
                "progress must not be larger than max ({} > {})",
                progress, max
            ),
            SliderError::Resource { id, reason } => {
                write!(f, "failed to load resource {}: {}", id, reason)
            }
        }
    }
}

impl std::error::Error for SliderError {}

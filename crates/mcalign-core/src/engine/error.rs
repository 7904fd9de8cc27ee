use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::structure::StructureError;
use crate::core::utils::geometry::GeometryError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "Backbone shape mismatch: target has {target} backbone atoms, mobile has {mobile}"
    )]
    ShapeMismatch { target: usize, mobile: usize },

    #[error("Structures contain no backbone atoms to align")]
    EmptyBackbone,

    #[error("Geometry evaluation failed: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },

    #[error("Structure update failed: {source}")]
    Structure {
        #[from]
        source: StructureError,
    },
}

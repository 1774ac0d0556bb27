pub mod config;
pub mod dataset;
mod error;
pub mod geometry;

pub use config::Config;
pub use dataset::{load_dataset, DatasetStore};
pub use error::{Error, Result};
pub use geometry::{
    fetch_world_geometry, parse_world_geometry, GeometryCache, WorldFeature, WorldGeometry,
};

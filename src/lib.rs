pub mod commands;
pub mod config;
pub mod coordinate;
pub mod errors;
pub mod model;
pub mod pipeline;
pub mod projection;
pub mod utils;

pub use config::ProjectionConfig;
pub use coordinate::{CoordinateConverter, CoordinateSystem, ProjectedPoint};
pub use errors::{MetroError, MetroResult};
pub use model::{Access, GeoPoint, Line, Zone, ZoneAccessRelationship, ZoneLineRelationship};
pub use pipeline::DataPipeline;
pub use projection::{CrsRegistry, Transformer};

pub mod backends;
pub mod band;
pub mod bounds;
pub mod raster;
pub mod rounding;
pub mod source;
pub mod statistics;
pub mod transforms;

pub use band::{Band, DataType};
pub use bounds::BoundingBox;
pub use raster::RasterInfo;
pub use rounding::RoundingPolicy;
pub use source::{BandReader, RasterSource};
pub use statistics::BandStatistics;
pub use transforms::GeoTransform;

use std::collections::HashMap;
pub type Metadata = HashMap<String, String>;

//! Georeferencing and band summaries for raster datasets.
//!
//! [GeoTransform] maps pixel `(row, col)` indices to projected coordinates
//! and back, [RasterInfo] gathers bounds, resolution and CRS from any
//! [RasterSource], and [Band] carries pixel values with their statistics.

#[macro_use]
extern crate shrinkwraprs;

mod components;
mod errors;
mod indexes;

pub use components::{
    backends::memory_backend, Band, BandReader, BandStatistics, BoundingBox, DataType,
    GeoTransform, Metadata, RasterInfo, RasterSource, RoundingPolicy,
};
#[cfg(feature = "gdal")]
pub use components::backends::gdal_backend;
pub use errors::{RasterInfoError, Result};
pub use indexes::Indexes;

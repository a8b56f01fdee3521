use std::fmt::Debug;

use crate::{
    components::{band::Band, transforms::GeoTransform, DataType, Metadata},
    errors::Result,
    Indexes,
};

/// Dataset level facts exposed by a raster access backend.
pub trait RasterSource: Debug {
    fn description(&self) -> Result<String>;
    /// `(width, height)` in pixels.
    fn size(&self) -> (usize, usize);
    fn crs(&self) -> String;
    fn transform(&self) -> Result<GeoTransform>;
    fn num_bands(&self) -> usize;
    fn metadata(&self) -> Metadata;
}

/// Band access, typed by the element the caller wants to read.
pub trait BandReader<T: DataType>: RasterSource {
    /// Zero based `index`.
    fn band(&self, index: usize) -> Result<Band<T>>;

    fn bands(&self, indexes: Indexes) -> Result<Vec<Band<T>>> {
        indexes
            .indexes_from(self.num_bands())?
            .into_iter()
            .map(|idx| self.band(idx))
            .collect()
    }
}

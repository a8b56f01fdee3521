use log::{debug, info};

use crate::{
    components::{
        band::Band, bounds::BoundingBox, rounding::RoundingPolicy, source::RasterSource,
        transforms::GeoTransform, DataType, Metadata,
    },
    errors::{RasterInfoError, Result},
};

/// Georeferencing summary of an opened raster.
#[derive(Debug, Clone)]
pub struct RasterInfo {
    pub description: String,
    /// `(width, height)` in pixels.
    pub size: (usize, usize),
    pub crs: String,
    pub transform: GeoTransform,
    pub bounds: BoundingBox,
    pub num_bands: usize,
    pub metadata: Metadata,
}

impl RasterInfo {
    pub fn from_source<S: RasterSource>(source: &S) -> Result<Self> {
        let size = source.size();
        let transform = source.transform()?;
        let raster = Self {
            description: source.description()?,
            size,
            crs: source.crs(),
            transform,
            bounds: transform.bounds(size.0, size.1),
            num_bands: source.num_bands(),
            metadata: source.metadata(),
        };
        info!(
            "new {:?} {}x{} px, {} bands, {}",
            raster.description, size.0, size.1, raster.num_bands, raster.bounds
        );
        Ok(raster)
    }

    pub fn width(&self) -> usize {
        self.size.0
    }

    pub fn height(&self) -> usize {
        self.size.1
    }

    pub fn resolution(&self) -> (f64, f64) {
        self.transform.resolution()
    }

    /// `(row, col)` of the pixel holding `(x, y)`, `None` when it falls
    /// outside the grid.
    pub fn pixel_at(&self, x: f64, y: f64, policy: RoundingPolicy) -> Result<Option<(usize, usize)>> {
        let (row, col) = self.transform.world_to_pixel(x, y, policy)?;
        let pixel = usize::try_from(row)
            .ok()
            .filter(|row| *row < self.height())
            .zip(usize::try_from(col).ok().filter(|col| *col < self.width()));
        if pixel.is_none() {
            debug!(
                "({x}, {y}) maps to pixel ({row}, {col}) outside {}x{} grid",
                self.width(),
                self.height()
            );
        }
        Ok(pixel)
    }

    /// Value of `band` at world coordinate `(x, y)`.
    pub fn sample<T: DataType>(
        &self,
        band: &Band<T>,
        x: f64,
        y: f64,
        policy: RoundingPolicy,
    ) -> Result<Option<T>> {
        if band.shape() != self.size {
            return Err(RasterInfoError::BandMismatch {
                band: band.shape(),
                raster: self.size,
            });
        }
        Ok(self
            .pixel_at(x, y, policy)?
            .and_then(|(row, col)| band.value_at(row as i64, col as i64)))
    }
}

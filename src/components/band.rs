use std::fmt::Debug;

use num_traits::ToPrimitive;

use crate::{
    components::statistics::BandStatistics,
    errors::{RasterInfoError, Result},
};

/// Pixel element types a band can hold.
pub trait DataType: ToPrimitive + Copy + Send + Sync + Debug + 'static {}

impl<T> DataType for T where T: ToPrimitive + Copy + Send + Sync + Debug + 'static {}

/// One spectral layer of a raster, stored row major.
#[derive(Debug, Clone, PartialEq)]
pub struct Band<T: DataType> {
    description: String,
    width: usize,
    height: usize,
    nodata: Option<f64>,
    data: Vec<T>,
}

impl<T: DataType> Band<T> {
    /// `shape` is `(width, height)`, the length of `data` must match it.
    pub fn new(
        description: impl Into<String>,
        shape: (usize, usize),
        nodata: Option<f64>,
        data: Vec<T>,
    ) -> Result<Self> {
        let (width, height) = shape;
        if width.checked_mul(height) != Some(data.len()) {
            return Err(RasterInfoError::BandShape {
                len: data.len(),
                shape,
            });
        }
        Ok(Self {
            description: description.into(),
            width,
            height,
            nodata,
            data,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `(width, height)`
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// `None` for indices outside the band, negative ones included.
    pub fn value_at(&self, row: i64, col: i64) -> Option<T> {
        let row = usize::try_from(row).ok().filter(|row| *row < self.height)?;
        let col = usize::try_from(col).ok().filter(|col| *col < self.width)?;
        self.data.get(row * self.width + col).copied()
    }

    pub fn statistics(&self) -> Result<BandStatistics> {
        BandStatistics::from_values(&self.data, self.nodata)
            .ok_or_else(|| RasterInfoError::EmptyBand(self.description.clone()))
    }
}

pub type Result<T> = std::result::Result<T, RasterInfoError>;

#[derive(thiserror::Error, Debug)]
pub enum RasterInfoError {
    #[cfg(feature = "gdal")]
    #[error(transparent)]
    GdalError(#[from] gdal::errors::GdalError),
    #[error("Transform is not invertible (determinant {determinant})")]
    SingularTransform { determinant: f64 },
    #[error("Unknown rounding policy {0:?}, expected one of floor, round, ceil")]
    InvalidRoundingPolicy(String),
    #[error("Pixel coordinate for ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },
    #[error("Band index {index} out of range for raster with {num_bands} bands")]
    BandIndexOutOfRange { index: usize, num_bands: usize },
    #[error("Band shape {band:?} does not match raster shape {raster:?}")]
    BandMismatch {
        band: (usize, usize),
        raster: (usize, usize),
    },
    #[error("Band data length {len} does not match shape {shape:?}")]
    BandShape { len: usize, shape: (usize, usize) },
    #[error("Band '{0}' has no valid pixels")]
    EmptyBand(String),
}

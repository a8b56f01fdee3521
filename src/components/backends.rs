use crate::{
    components::{
        band::Band,
        source::{BandReader, RasterSource},
        transforms::GeoTransform,
        DataType, Metadata,
    },
    errors::{RasterInfoError, Result},
};

/// Raster already held in memory.
pub mod memory_backend {
    use super::*;

    #[derive(Debug, Clone)]
    pub struct MemoryRaster<T: DataType> {
        description: String,
        size: (usize, usize),
        crs: String,
        transform: GeoTransform,
        bands: Vec<Band<T>>,
        metadata: Metadata,
    }

    impl<T: DataType> MemoryRaster<T> {
        pub fn new(
            description: impl Into<String>,
            size: (usize, usize),
            crs: impl Into<String>,
            transform: GeoTransform,
        ) -> Self {
            Self {
                description: description.into(),
                size,
                crs: crs.into(),
                transform,
                bands: Vec::new(),
                metadata: Metadata::new(),
            }
        }

        /// Bands must cover the whole grid.
        pub fn with_band(mut self, band: Band<T>) -> Result<Self> {
            if band.shape() != self.size {
                return Err(RasterInfoError::BandMismatch {
                    band: band.shape(),
                    raster: self.size,
                });
            }
            self.bands.push(band);
            Ok(self)
        }

        pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.metadata.insert(key.into(), value.into());
            self
        }
    }

    impl<T: DataType> RasterSource for MemoryRaster<T> {
        fn description(&self) -> Result<String> {
            Ok(self.description.clone())
        }
        fn size(&self) -> (usize, usize) {
            self.size
        }
        fn crs(&self) -> String {
            self.crs.clone()
        }
        fn transform(&self) -> Result<GeoTransform> {
            Ok(self.transform)
        }
        fn num_bands(&self) -> usize {
            self.bands.len()
        }
        fn metadata(&self) -> Metadata {
            self.metadata.clone()
        }
    }

    impl<T: DataType> BandReader<T> for MemoryRaster<T> {
        fn band(&self, index: usize) -> Result<Band<T>> {
            self.bands
                .get(index)
                .cloned()
                .ok_or(RasterInfoError::BandIndexOutOfRange {
                    index,
                    num_bands: self.bands.len(),
                })
        }
    }
}

/// Implementations for gdal
#[cfg(feature = "gdal")]
pub mod gdal_backend {
    use super::*;
    use gdal::{
        raster::GdalType, Dataset as GdalDataset, Metadata as GdalMetadata,
        MetadataEntry as GdalMetadataEntry,
    };
    use std::path::{Path, PathBuf};

    /// Entries of the default (unnamed) domain only.
    fn default_domain_metadata(object: &impl GdalMetadata) -> Metadata {
        GdalMetadata::metadata(object)
            .filter(|entry: &GdalMetadataEntry| entry.domain.is_empty())
            .map(|entry| (entry.key, entry.value))
            .collect()
    }

    /// Dataset opened through GDAL. The handle is released on drop.
    #[derive(Debug)]
    pub struct GdalRaster {
        path: PathBuf,
        dataset: GdalDataset,
    }

    impl GdalRaster {
        pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
            let dataset = GdalDataset::open(&path)?;
            log::debug!("opened {:?}", path.as_ref());
            Ok(GdalRaster {
                path: path.as_ref().to_path_buf(),
                dataset,
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl RasterSource for GdalRaster {
        fn description(&self) -> Result<String> {
            Ok(GdalMetadata::description(&self.dataset)?)
        }
        fn size(&self) -> (usize, usize) {
            self.dataset.raster_size()
        }
        fn crs(&self) -> String {
            self.dataset.projection()
        }
        fn transform(&self) -> Result<GeoTransform> {
            Ok(GeoTransform::from_gdal(self.dataset.geo_transform()?))
        }
        fn num_bands(&self) -> usize {
            self.dataset.raster_count()
        }
        fn metadata(&self) -> Metadata {
            default_domain_metadata(&self.dataset)
        }
    }

    impl<T: DataType + GdalType> BandReader<T> for GdalRaster {
        fn band(&self, index: usize) -> Result<Band<T>> {
            let num_bands = self.num_bands();
            if index >= num_bands {
                return Err(RasterInfoError::BandIndexOutOfRange { index, num_bands });
            }
            let raster_band = self.dataset.rasterband(index + 1)?;
            let description = raster_band.description()?;
            let buffer = raster_band.read_band_as::<T>()?;
            Band::new(
                description,
                raster_band.size(),
                raster_band.no_data_value(),
                buffer.data().to_vec(),
            )
        }
    }

}

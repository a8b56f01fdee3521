use itertools::{Itertools, MinMaxResult};

use crate::components::DataType;

/// Summary of the valid pixels of a band.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BandStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub valid_count: usize,
}

impl BandStatistics {
    /// `None` when every value is NaN or equal to `nodata`.
    pub fn from_values<T: DataType>(values: &[T], nodata: Option<f64>) -> Option<Self> {
        let valid = || {
            values
                .iter()
                .filter_map(|value| value.to_f64())
                .filter(move |value| !value.is_nan() && Some(*value) != nodata)
        };
        let (min, max) = match valid().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(value) => (value, value),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let (sum, valid_count) = valid().fold((0., 0), |(sum, count), value| (sum + value, count + 1));
        Some(Self {
            min,
            max,
            mean: sum / valid_count as f64,
            valid_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unsigned_band() {
        let stats = BandStatistics::from_values(&[0u16, 250, 1000, 3], None).unwrap();
        assert_eq!(
            stats,
            BandStatistics {
                min: 0.,
                max: 1000.,
                mean: 313.25,
                valid_count: 4
            }
        )
    }

    #[rstest]
    fn skips_nodata_and_nan() {
        let stats =
            BandStatistics::from_values(&[-9999., 1.5, f64::NAN, 4.5, -9999.], Some(-9999.))
                .unwrap();
        assert_eq!((stats.min, stats.max, stats.mean), (1.5, 4.5, 3.));
        assert_eq!(stats.valid_count, 2);
    }

    #[rstest]
    fn single_value() {
        let stats = BandStatistics::from_values(&[7i32], Some(0.)).unwrap();
        assert_eq!((stats.min, stats.max, stats.valid_count), (7., 7., 1));
    }

    #[rstest]
    #[case(&[], None)]
    #[case(&[0., 0.], Some(0.))]
    #[case(&[f32::NAN], None)]
    fn no_valid_pixels(#[case] values: &[f32], #[case] nodata: Option<f64>) {
        assert_eq!(BandStatistics::from_values(values, nodata), None)
    }
}

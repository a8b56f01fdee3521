use std::{collections::HashSet, rc::Rc};

use itertools::Itertools;

use crate::errors::{RasterInfoError, Result};

/// Band selection: either the listed (zero based) indexes, or every band
/// except the listed ones when `drop` is set.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Indexes {
    selection: Rc<[usize]>,
    #[serde(default)]
    drop: bool,
}

impl<const N: usize> From<([usize; N], bool)> for Indexes {
    fn from(value: ([usize; N], bool)) -> Self {
        let selection = Rc::from(value.0);
        let drop = value.1;
        Indexes { selection, drop }
    }
}

impl From<(std::ops::Range<usize>, bool)> for Indexes {
    fn from(value: (std::ops::Range<usize>, bool)) -> Self {
        let selection = value.0.collect();
        let drop = value.1;
        Indexes { selection, drop }
    }
}

impl<const N: usize> From<[usize; N]> for Indexes {
    fn from(value: [usize; N]) -> Self {
        Indexes::from((value, false))
    }
}

impl From<std::ops::Range<usize>> for Indexes {
    fn from(value: std::ops::Range<usize>) -> Self {
        Indexes::from((value, false))
    }
}

impl Indexes {
    pub fn all() -> Self {
        Self {
            selection: Rc::from([]),
            drop: true,
        }
    }

    /// Resolve against a raster with `num_bands` bands.
    ///
    /// Selections keep their given order; drops yield the remaining indexes
    /// ascending. Any listed index past `num_bands` is an error.
    pub fn indexes_from(&self, num_bands: usize) -> Result<Vec<usize>> {
        if let Some(&index) = self.selection.iter().find(|&&idx| idx >= num_bands) {
            return Err(RasterInfoError::BandIndexOutOfRange { index, num_bands });
        }
        if self.drop {
            let drop_idxs: HashSet<usize> = self.selection.iter().copied().collect();
            Ok((0..num_bands)
                .filter(|idx| !drop_idxs.contains(idx))
                .collect())
        } else {
            Ok(self.selection.iter().copied().unique().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Indexes::all(), vec![0, 1, 2, 3])]
    #[case(Indexes::from([2, 0]), vec![2, 0])]
    #[case(Indexes::from([1, 1, 3]), vec![1, 3])]
    #[case(Indexes::from(1..3), vec![1, 2])]
    #[case(Indexes::from(([0, 2], true)), vec![1, 3])]
    #[case(Indexes::from((0..4, true)), vec![])]
    fn resolve(#[case] indexes: Indexes, #[case] expected: Vec<usize>) {
        assert_eq!(indexes.indexes_from(4).unwrap(), expected)
    }

    #[rstest]
    #[case(Indexes::from([4]))]
    #[case(Indexes::from(([0, 7], true)))]
    fn out_of_range(#[case] indexes: Indexes) {
        assert!(matches!(
            indexes.indexes_from(4),
            Err(RasterInfoError::BandIndexOutOfRange { num_bands: 4, .. })
        ))
    }

    #[test]
    fn deserialize() {
        let indexes: Indexes = serde_json::from_str(r#"{"selection": [0, 2]}"#).unwrap();
        assert_eq!(indexes, Indexes::from([0, 2]));
        let indexes: Indexes =
            serde_json::from_str(r#"{"selection": [1], "drop": true}"#).unwrap();
        assert_eq!(indexes.indexes_from(3).unwrap(), vec![0, 2]);
    }
}

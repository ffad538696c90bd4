//! Intersection ratio trigger points.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ThresholdError;

/// The sorted, deduplicated set of intersection ratios at which a watcher notifies.
///
/// Every value lies in `[0, 1]`. An empty set behaves like `[0]`, which notifies as soon as a
/// single pixel of the target becomes visible.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Thresholds(Vec<f64>);

impl Thresholds {
    pub fn new<I>(values: I) -> Result<Self, ThresholdError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values
            .into_iter()
            .map(|value| {
                if (0.0..=1.0).contains(&value) {
                    Ok(value)
                } else {
                    Err(ThresholdError::OutOfRange(value))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.is_empty() {
            return Ok(Self::default());
        }

        values.sort_by(f64::total_cmp);
        values.dedup();
        Ok(Thresholds(values))
    }

    pub fn single(value: f64) -> Result<Self, ThresholdError> {
        Self::new([value])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// The number of thresholds `ratio` has met: the index of the first threshold greater than
    /// `ratio`, or the threshold count when none is.
    pub fn index_for(&self, ratio: f64) -> usize {
        self.0.partition_point(|&threshold| threshold <= ratio)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds(vec![0.0])
    }
}

impl TryFrom<Vec<f64>> for Thresholds {
    type Error = ThresholdError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Thresholds> for Vec<f64> {
    fn from(value: Thresholds) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_and_deduplicated() {
        let thresholds = Thresholds::new([1.0, 0.25, 0.5, 0.25, 0.0]).unwrap();
        assert_eq!(thresholds.as_slice(), &[0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn empty_means_zero() {
        assert_eq!(Thresholds::new([]).unwrap(), Thresholds::default());
        assert_eq!(Thresholds::default().as_slice(), &[0.0]);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(Thresholds::single(1.01), Err(ThresholdError::OutOfRange(1.01)));
        assert_eq!(Thresholds::new([0.5, -0.1]), Err(ThresholdError::OutOfRange(-0.1)));
        assert!(matches!(Thresholds::single(f64::NAN), Err(ThresholdError::OutOfRange(v)) if v.is_nan()));
    }

    #[test]
    fn index_counts_met_thresholds() {
        let thresholds = Thresholds::new([0.0, 0.5, 1.0]).unwrap();
        assert_eq!(thresholds.index_for(0.0), 1);
        assert_eq!(thresholds.index_for(0.49), 1);
        assert_eq!(thresholds.index_for(0.5), 2);
        assert_eq!(thresholds.index_for(0.99), 2);
        assert_eq!(thresholds.index_for(1.0), 3);

        let half = Thresholds::single(0.5).unwrap();
        assert_eq!(half.index_for(0.0), 0);
        assert_eq!(half.index_for(0.6), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let thresholds: Thresholds = serde_json::from_str("[0.75, 0.25]").unwrap();
        assert_eq!(thresholds.as_slice(), &[0.25, 0.75]);
        assert!(serde_json::from_str::<Thresholds>("[2.0]").is_err());
    }
}

//! Right-censored lifetime observations.

use crate::error::{ReliabilityError, Result};

/// An ordered set of lifetime observations with right-censoring flags.
///
/// Each observation is a positive time paired with a flag that is `true`
/// when the unit was still running at that time (right-censored) and
/// `false` when the unit failed at exactly that time.
///
/// # Examples
///
/// ```
/// use u_reliability::weibull::LifeData;
///
/// let data = LifeData::new(vec![12.0, 30.0, 45.0], vec![false, false, true]).unwrap();
/// assert_eq!(data.len(), 3);
/// assert_eq!(data.failure_count(), 2);
/// assert_eq!(data.censored_count(), 1);
///
/// // Mismatched lengths are rejected
/// assert!(LifeData::new(vec![1.0, 2.0], vec![false]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LifeData {
    times: Vec<f64>,
    censored: Vec<bool>,
}

impl LifeData {
    /// Creates a sample set from parallel time and censoring vectors.
    ///
    /// # Errors
    /// - [`ReliabilityError::EmptyData`] if `times` is empty
    /// - [`ReliabilityError::LengthMismatch`] if the vectors differ in length
    /// - [`ReliabilityError::InvalidObservation`] if any time is non-positive
    ///   or non-finite
    pub fn new(times: Vec<f64>, censored: Vec<bool>) -> Result<Self> {
        if times.is_empty() {
            return Err(ReliabilityError::EmptyData);
        }
        if censored.len() != times.len() {
            return Err(ReliabilityError::LengthMismatch {
                expected: times.len(),
                actual: censored.len(),
            });
        }
        if let Some((index, &value)) = times
            .iter()
            .enumerate()
            .find(|(_, t)| !t.is_finite() || **t <= 0.0)
        {
            return Err(ReliabilityError::InvalidObservation { index, value });
        }
        Ok(Self { times, censored })
    }

    /// Creates a sample set in which every observation is an exact failure.
    pub fn uncensored(times: Vec<f64>) -> Result<Self> {
        let censored = vec![false; times.len()];
        Self::new(times, censored)
    }

    /// Creates a sample set from `(time, censored)` pairs.
    pub fn from_pairs(pairs: &[(f64, bool)]) -> Result<Self> {
        let (times, censored) = pairs.iter().copied().unzip();
        Self::new(times, censored)
    }

    /// Observed times, in input order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Censoring flags, parallel to [`times`](Self::times).
    pub fn censored(&self) -> &[bool] {
        &self.censored
    }

    /// Total number of observations.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of right-censored observations (r).
    pub fn censored_count(&self) -> usize {
        self.censored.iter().filter(|&&c| c).count()
    }

    /// Number of exact failures (m = n − r).
    pub fn failure_count(&self) -> usize {
        self.len() - self.censored_count()
    }

    /// Iterates over `(time, censored)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, bool)> + '_ {
        self.times.iter().copied().zip(self.censored.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let data = LifeData::new(vec![1.0, 2.0, 3.0], vec![false, true, false])
            .expect("valid data");
        assert_eq!(data.len(), 3);
        assert!(!data.is_empty());
        assert_eq!(data.censored_count(), 1);
        assert_eq!(data.failure_count(), 2);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            LifeData::new(vec![], vec![]),
            Err(ReliabilityError::EmptyData)
        );
        assert_eq!(LifeData::uncensored(vec![]), Err(ReliabilityError::EmptyData));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert_eq!(
            LifeData::new(vec![1.0, 2.0], vec![true, false, false]),
            Err(ReliabilityError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_invalid_observation_rejected() {
        let err = LifeData::uncensored(vec![1.0, 0.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            ReliabilityError::InvalidObservation {
                index: 1,
                value: 0.0
            }
        );
        assert!(LifeData::uncensored(vec![-4.0]).is_err());
        assert!(LifeData::uncensored(vec![2.0, f64::INFINITY]).is_err());
        assert!(LifeData::uncensored(vec![f64::NAN]).is_err());
    }

    #[test]
    fn test_uncensored_has_no_censoring() {
        let data = LifeData::uncensored(vec![5.0, 6.0]).expect("valid data");
        assert_eq!(data.censored(), &[false, false]);
        assert_eq!(data.censored_count(), 0);
    }

    #[test]
    fn test_from_pairs_preserves_order() {
        let data =
            LifeData::from_pairs(&[(3.0, true), (1.0, false), (2.0, false)]).expect("valid");
        assert_eq!(data.times(), &[3.0, 1.0, 2.0]);
        assert_eq!(data.censored(), &[true, false, false]);
        let pairs: Vec<(f64, bool)> = data.iter().collect();
        assert_eq!(pairs, vec![(3.0, true), (1.0, false), (2.0, false)]);
    }

    #[test]
    fn test_all_censored_is_representable() {
        // Estimation rejects this, but the sample set itself is well-formed.
        let data = LifeData::new(vec![1.0, 2.0], vec![true, true]).expect("valid data");
        assert_eq!(data.failure_count(), 0);
    }
}

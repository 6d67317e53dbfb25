//! Maximum Likelihood Estimation (MLE) for Weibull parameters from
//! right-censored data.
//!
//! Uses the Newton-Raphson method to find the shape parameter that solves
//! the profile likelihood equation, then derives the scale parameter
//! analytically.

use super::life_data::LifeData;
use super::model::Weibull;
use crate::error::{ReliabilityError, Result};

/// Default Newton-Raphson iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default relative convergence tolerance on the shape parameter.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Shape value the Newton iteration starts from (the exponential case).
const INITIAL_SHAPE: f64 = 1.0;

/// Iteration controls for [`weibull_mle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MleOptions {
    /// Maximum number of Newton-Raphson steps. Must be positive.
    pub max_iterations: usize,
    /// Relative step size |k_new − k| / |k| at which the iteration stops.
    /// Must be positive and finite.
    pub tolerance: f64,
}

impl Default for MleOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl MleOptions {
    fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ReliabilityError::InvalidMaxIterations);
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ReliabilityError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Result of Weibull MLE fitting.
#[derive(Debug, Clone)]
pub struct WeibullMleResult {
    /// Fitted distribution.
    pub model: Weibull,
    /// Log-likelihood at the fitted parameters.
    pub log_likelihood: f64,
    /// Number of Newton-Raphson iterations used.
    pub iterations: usize,
}

/// Sums over the failure and censored subsets at one shape value.
///
/// Censored units carry no standalone Σ ln t term: their likelihood
/// contribution ln R(t) = −(t/λ)^k depends on t only through t^k.
#[derive(Debug, Default)]
struct ProfileSums {
    /// Σ t^k over failures.
    tk: f64,
    /// Σ ln t over failures.
    ln_t: f64,
    /// Σ t^k ln t over failures.
    tk_ln_t: f64,
    /// Σ t^k ln²t over failures.
    tk_ln2_t: f64,
    /// Σ t^k over censored units.
    tk_c: f64,
    /// Σ t^k ln t over censored units.
    tk_ln_t_c: f64,
    /// Σ t^k ln²t over censored units.
    tk_ln2_t_c: f64,
}

impl ProfileSums {
    fn at(data: &LifeData, shape: f64) -> Self {
        let mut sums = Self::default();
        for (t, censored) in data.iter() {
            let tk = t.powf(shape);
            let lt = t.ln();
            if censored {
                sums.tk_c += tk;
                sums.tk_ln_t_c += tk * lt;
                sums.tk_ln2_t_c += tk * lt * lt;
            } else {
                sums.tk += tk;
                sums.ln_t += lt;
                sums.tk_ln_t += tk * lt;
                sums.tk_ln2_t += tk * lt * lt;
            }
        }
        sums
    }

    /// Profile score f(k) and the slope f'(k) used for the Newton step.
    ///
    /// `n` is the total count and `r` the censored count.
    fn score(&self, shape: f64, n: usize, r: usize) -> (f64, f64) {
        let k2 = shape * shape;
        if r == 0 {
            let n = n as f64;
            let ratio = self.tk_ln_t / self.tk;
            let f = n / shape + self.ln_t - n * ratio;
            let df = -n / k2 - (-(ratio * ratio) + self.tk_ln2_t / self.tk);
            (f, df)
        } else {
            let m = (n - r) as f64;
            let s = self.tk + self.tk_c;
            let ratio = (self.tk_ln_t + self.tk_ln_t_c) / s;
            let f = m / shape + self.ln_t - m * ratio;
            let df = -m / k2 - (-(ratio * ratio) + (self.tk_ln2_t + self.tk_ln2_t_c) / s);
            (f, df)
        }
    }
}

/// Fit a Weibull distribution to right-censored lifetime data using MLE.
///
/// With m exact failures, r censored units and n = m + r, the scale is
/// eliminated analytically from the censored log-likelihood, leaving the
/// profile equation in the shape k alone:
///
/// ```text
/// f(k) = m/k + Σ_fail ln(t_i) − m · Σ_all t_i^k ln(t_i) / Σ_all t_i^k = 0
/// ```
///
/// Newton-Raphson solves f(k) = 0 starting from k₀ = 1 (exponential),
/// stopping once the relative step |k_new − k| / |k| falls to
/// `options.tolerance`. No damping or line search is applied.
///
/// The scale is then back-solved in closed form:
///
/// ```text
/// uncensored: λ = (Σ t_i^k / n)^(1/k)
/// censored:   λ = (Σ_fail t_i^k / m + Σ_cens t_i^k / r)^(1/k)
/// ```
///
/// # Errors
/// - [`ReliabilityError::InvalidMaxIterations`] / [`ReliabilityError::InvalidTolerance`]
///   for unusable options
/// - [`ReliabilityError::AllCensored`] if there is no exact failure
/// - [`ReliabilityError::NotConverged`] if the iteration budget runs out
/// - [`ReliabilityError::IllConditioned`] if the shape or scale is not a
///   positive finite number (e.g. all observations identical)
///
/// # Examples
///
/// ```
/// use u_reliability::weibull::{weibull_mle, LifeData, MleOptions};
///
/// let data = LifeData::new(
///     vec![16.0, 34.0, 53.0, 75.0, 93.0, 120.0, 150.0, 150.0],
///     vec![false, false, false, false, false, false, true, true],
/// )
/// .unwrap();
/// let fit = weibull_mle(&data, &MleOptions::default()).unwrap();
/// assert!(fit.model.shape() > 0.0);
/// assert!(fit.model.scale() > 0.0);
/// assert!(fit.iterations <= 100);
/// ```
///
/// # Reference
/// Lawless (2003), *Statistical Models and Methods for Lifetime Data*, 2nd ed.,
/// Section 5.2.
pub fn weibull_mle(data: &LifeData, options: &MleOptions) -> Result<WeibullMleResult> {
    options.validate()?;

    let n = data.len();
    let r = data.censored_count();
    if r == n {
        return Err(ReliabilityError::AllCensored { n });
    }

    let (shape, iterations) = solve_shape(data, options, n, r)?;

    let (sum_fail, sum_cens) = data.iter().fold((0.0, 0.0), |(f, c), (t, censored)| {
        let tk = t.powf(shape);
        if censored {
            (f, c + tk)
        } else {
            (f + tk, c)
        }
    });
    let scale = if r == 0 {
        (sum_fail / n as f64).powf(1.0 / shape)
    } else {
        (sum_fail / (n - r) as f64 + sum_cens / r as f64).powf(1.0 / shape)
    };

    let model = Weibull::new(shape, scale).map_err(|_| {
        tracing::debug!(shape, scale, "Weibull MLE produced unusable parameters");
        ReliabilityError::IllConditioned { shape, scale }
    })?;

    tracing::debug!(iterations, shape, scale, n, censored = r, "Weibull MLE converged");

    Ok(WeibullMleResult {
        model,
        log_likelihood: model.log_likelihood(data),
        iterations,
    })
}

/// Runs the Newton iteration and returns the converged shape with the
/// number of steps taken.
fn solve_shape(data: &LifeData, options: &MleOptions, n: usize, r: usize) -> Result<(f64, usize)> {
    let mut shape = INITIAL_SHAPE;

    for iter in 0..options.max_iterations {
        let (f, df) = ProfileSums::at(data, shape).score(shape, n, r);
        let next = shape - f / df;
        tracing::trace!(iteration = iter + 1, shape, next, "Newton-Raphson step");

        if !next.is_finite() {
            tracing::debug!(iteration = iter + 1, shape, "Newton-Raphson iterate is not finite");
            return Err(ReliabilityError::IllConditioned {
                shape: next,
                scale: f64::NAN,
            });
        }

        if (next - shape).abs() / shape.abs() <= options.tolerance {
            return Ok((next, iter + 1));
        }
        shape = next;
    }

    tracing::debug!(
        iterations = options.max_iterations,
        shape,
        "Newton-Raphson did not converge"
    );
    Err(ReliabilityError::NotConverged {
        iterations: options.max_iterations,
    })
}

impl Weibull {
    /// Fits a Weibull distribution to exact failure times with default options.
    ///
    /// ```
    /// use u_reliability::weibull::Weibull;
    ///
    /// let fit = Weibull::estimate(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
    /// assert!(fit.shape() > 1.0);
    /// ```
    pub fn estimate(times: &[f64]) -> Result<Self> {
        Self::estimate_with(times, &MleOptions::default())
    }

    /// Fits a Weibull distribution to exact failure times.
    pub fn estimate_with(times: &[f64], options: &MleOptions) -> Result<Self> {
        let data = LifeData::uncensored(times.to_vec())?;
        Ok(weibull_mle(&data, options)?.model)
    }

    /// Fits a Weibull distribution to right-censored data with default options.
    ///
    /// `censored[i]` is `true` when `times[i]` is a survival time rather than
    /// a failure time.
    pub fn estimate_censored(times: &[f64], censored: &[bool]) -> Result<Self> {
        Self::estimate_censored_with(times, censored, &MleOptions::default())
    }

    /// Fits a Weibull distribution to right-censored data.
    pub fn estimate_censored_with(
        times: &[f64],
        censored: &[bool],
        options: &MleOptions,
    ) -> Result<Self> {
        let data = LifeData::new(times.to_vec(), censored.to_vec())?;
        Ok(weibull_mle(&data, options)?.model)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fit_is_valid_or_numeric_error(
            times in proptest::collection::vec(1.0_f64..1e3, 3..=40),
            flags in proptest::collection::vec(any::<bool>(), 40),
        ) {
            let censored = &flags[..times.len()];
            match Weibull::estimate_censored(&times, censored) {
                Ok(fit) => {
                    prop_assert!(fit.shape().is_finite() && fit.shape() > 0.0, "shape = {}", fit.shape());
                    prop_assert!(fit.scale().is_finite() && fit.scale() > 0.0, "scale = {}", fit.scale());
                }
                Err(ReliabilityError::AllCensored { n }) => {
                    prop_assert_eq!(n, times.len());
                    prop_assert!(censored.iter().all(|&c| c));
                }
                Err(e) => {
                    prop_assert_eq!(e.kind(), crate::error::ErrorKind::Numeric, "{}", e);
                }
            }
        }

        #[test]
        fn all_censored_always_rejected(
            times in proptest::collection::vec(0.1_f64..1e4, 1..=30),
        ) {
            let censored = vec![true; times.len()];
            prop_assert_eq!(
                Weibull::estimate_censored(&times, &censored),
                Err(ReliabilityError::AllCensored { n: times.len() })
            );
        }
    }
}

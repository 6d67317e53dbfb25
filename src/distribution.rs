//! Lifetime distribution interface.
//!
//! [`ReliabilityDistribution`] asks an implementor for three primitives
//! (density, cumulative probability, and a single random draw) and derives
//! the usual reliability engineering quantities from them:
//!
//! | Quantity | Definition |
//! |---|---|
//! | Reliability | R(x) = 1 − F(x) |
//! | Conditional reliability | R(x \| t₀) = R(t₀ + x) / R(t₀) |
//! | Hazard | h(x) = f(x) / R(x) |
//! | Cumulative hazard | H(x) = −ln R(x) |
//!
//! Every quantity has a slice form that maps elementwise and preserves
//! order and length.
//!
//! # Examples
//!
//! ```
//! use u_reliability::distribution::ReliabilityDistribution;
//! use u_reliability::weibull::Weibull;
//!
//! let dist = Weibull::new(4.0, 367.0).unwrap();
//! let r = dist.reliability(330.0);
//! assert!((r - 0.520108).abs() < 1e-6);
//! assert!((dist.reliability(330.0) - (1.0 - dist.cdf(330.0))).abs() < 1e-15);
//! ```
//!
//! # Reference
//!
//! Meeker & Escobar (1998), *Statistical Methods for Reliability Data*, Ch. 2.

use rand::RngCore;

use crate::error::{ReliabilityError, Result};

/// A continuous lifetime distribution.
///
/// Implementors supply [`pdf`](Self::pdf), [`cdf`](Self::cdf) and
/// [`random`](Self::random); everything else has a default built from those
/// three. The random generator is always supplied by the caller, so the
/// trait stays object-safe and sampling is reproducible under a seeded RNG.
pub trait ReliabilityDistribution {
    /// Probability density function f(x).
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function F(x) = P(X ≤ x), in [0, 1].
    fn cdf(&self, x: f64) -> f64;

    /// Draws one sample using the caller's generator.
    fn random(&self, rng: &mut dyn RngCore) -> f64;

    /// Evaluates [`pdf`](Self::pdf) at every point.
    fn pdf_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    /// Evaluates [`cdf`](Self::cdf) at every point.
    fn cdf_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.cdf(x)).collect()
    }

    /// Draws `n` independent samples.
    ///
    /// # Errors
    /// [`ReliabilityError::InvalidSampleCount`] if `n == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use u_reliability::distribution::ReliabilityDistribution;
    /// use u_reliability::weibull::Weibull;
    ///
    /// let dist = Weibull::new(2.0, 10.0).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let draws = dist.random_n(50, &mut rng).unwrap();
    /// assert_eq!(draws.len(), 50);
    /// assert!(dist.random_n(0, &mut rng).is_err());
    /// ```
    fn random_n(&self, n: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        if n == 0 {
            return Err(ReliabilityError::InvalidSampleCount);
        }
        Ok((0..n).map(|_| self.random(rng)).collect())
    }

    /// Reliability (survival) function R(x) = 1 − F(x).
    fn reliability(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Evaluates [`reliability`](Self::reliability) at every point.
    fn reliability_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.reliability(x)).collect()
    }

    /// Probability of surviving an additional `x` given survival to `t0`.
    ///
    /// ```text
    /// R(x | t0) = R(t0 + x) / R(t0)
    /// ```
    fn conditional_reliability(&self, x: f64, t0: f64) -> f64 {
        self.reliability(t0 + x) / self.reliability(t0)
    }

    /// Pairs `xs[i]` with `t0s[i]` and evaluates
    /// [`conditional_reliability`](Self::conditional_reliability).
    ///
    /// # Errors
    /// [`ReliabilityError::LengthMismatch`] if the slices differ in length.
    fn conditional_reliability_many(&self, xs: &[f64], t0s: &[f64]) -> Result<Vec<f64>> {
        if xs.len() != t0s.len() {
            return Err(ReliabilityError::LengthMismatch {
                expected: xs.len(),
                actual: t0s.len(),
            });
        }
        Ok(xs
            .iter()
            .zip(t0s)
            .map(|(&x, &t0)| self.conditional_reliability(x, t0))
            .collect())
    }

    /// Hazard (instantaneous failure rate) h(x) = f(x) / R(x).
    fn hazard(&self, x: f64) -> f64 {
        self.pdf(x) / self.reliability(x)
    }

    /// Evaluates [`hazard`](Self::hazard) at every point.
    fn hazard_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.hazard(x)).collect()
    }

    /// Cumulative hazard H(x) = −ln R(x).
    fn cumulative_hazard(&self, x: f64) -> f64 {
        -self.reliability(x).ln()
    }
}

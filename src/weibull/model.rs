//! The two-parameter Weibull lifetime distribution.

use std::fmt;

use rand::distributions::Distribution;
use rand::{Rng, RngCore};
use u_numflow::special;

use super::life_data::LifeData;
use crate::distribution::ReliabilityDistribution;
use crate::error::{ReliabilityError, Result};

/// Two-parameter Weibull distribution with shape k and scale λ.
///
/// # Mathematical Background
///
/// Given shape k > 0 and scale λ > 0:
/// - PDF: f(x) = (k/λ)·(x/λ)^(k−1)·exp(−(x/λ)^k) for x ≥ 0
/// - CDF: F(x) = 1 − exp(−(x/λ)^k) for x > 0
/// - Hazard: h(x) = (k/λ)·(x/λ)^(k−1)
///
/// k < 1 models infant mortality, k = 1 is the exponential distribution,
/// k > 1 models wear-out.
///
/// # Examples
///
/// ```
/// use u_reliability::distribution::ReliabilityDistribution;
/// use u_reliability::weibull::Weibull;
///
/// let dist = Weibull::new(12.0, 30.0).unwrap();
/// assert!((dist.cdf(22.5) - 0.031180).abs() < 1e-6);
/// assert!((dist.cdf(36.0) - 0.999866).abs() < 1e-6);
///
/// // Non-positive parameters never produce an instance
/// assert!(Weibull::new(0.0, 30.0).is_err());
/// assert!(Weibull::new(12.0, -1.0).is_err());
/// ```
///
/// # Reference
/// Weibull (1951), *Journal of Applied Mechanics* 18(3), pp. 293-297.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull {
    /// Shape parameter (k).
    shape: f64,
    /// Scale parameter (λ).
    scale: f64,
}

impl Weibull {
    /// Creates a Weibull distribution.
    ///
    /// # Errors
    /// [`ReliabilityError::InvalidParameter`] if either parameter is
    /// non-positive or non-finite.
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(ReliabilityError::InvalidParameter {
                name: "shape",
                value: shape,
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ReliabilityError::InvalidParameter {
                name: "scale",
                value: scale,
            });
        }
        Ok(Self { shape, scale })
    }

    /// Returns the shape parameter (k).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Returns the scale parameter (λ).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Mean time to failure: λ·Γ(1 + 1/k).
    ///
    /// ```
    /// use u_reliability::weibull::Weibull;
    ///
    /// // k = 1 is exponential, so the mean equals the scale
    /// let exp = Weibull::new(1.0, 50.0).unwrap();
    /// assert!((exp.mean() - 50.0).abs() < 1e-8);
    /// ```
    pub fn mean(&self) -> f64 {
        self.scale * special::ln_gamma(1.0 + 1.0 / self.shape).exp()
    }

    /// Variance: λ²·[Γ(1 + 2/k) − Γ(1 + 1/k)²].
    pub fn variance(&self) -> f64 {
        let g1 = special::ln_gamma(1.0 + 1.0 / self.shape).exp();
        let g2 = special::ln_gamma(1.0 + 2.0 / self.shape).exp();
        self.scale * self.scale * (g2 - g1 * g1)
    }

    /// Inverse CDF: x = λ·(−ln(1 − p))^(1/k).
    ///
    /// Returns `None` if `p` is outside `[0, 1)`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..1.0).contains(&p) {
            return None;
        }
        Some(self.scale * (-(1.0 - p).ln()).powf(1.0 / self.shape))
    }

    /// B-life: time by which `fraction_failed` of the population has failed.
    ///
    /// Returns `None` if `fraction_failed` is outside (0, 1).
    ///
    /// ```
    /// use u_reliability::weibull::Weibull;
    ///
    /// let dist = Weibull::new(2.0, 100.0).unwrap();
    /// let b10 = dist.b_life(0.10).unwrap();
    /// let b50 = dist.b_life(0.50).unwrap();
    /// assert!(b10 < b50 && b50 < 100.0);
    /// ```
    ///
    /// # Reference
    /// Abernethy (2006), *The New Weibull Handbook*, 5th ed., Chapter 2.
    pub fn b_life(&self, fraction_failed: f64) -> Option<f64> {
        if fraction_failed <= 0.0 || fraction_failed >= 1.0 {
            return None;
        }
        self.quantile(fraction_failed)
    }

    /// Log-likelihood of right-censored data under this distribution.
    ///
    /// Exact failures contribute ln f(t); censored observations contribute
    /// ln R(t) = −(t/λ)^k.
    pub fn log_likelihood(&self, data: &LifeData) -> f64 {
        let (k, lambda) = (self.shape, self.scale);
        let ln_k = k.ln();
        let ln_lambda = lambda.ln();
        data.iter()
            .map(|(t, censored)| {
                let z = (t / lambda).powf(k);
                if censored {
                    -z
                } else {
                    ln_k - ln_lambda + (k - 1.0) * (t.ln() - ln_lambda) - z
                }
            })
            .sum()
    }
}

impl Default for Weibull {
    /// Unit shape and scale: the standard exponential distribution.
    fn default() -> Self {
        Self {
            shape: 1.0,
            scale: 1.0,
        }
    }
}

impl fmt::Display for Weibull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weibull(shape = {}, scale = {})", self.shape, self.scale)
    }
}

impl Distribution<f64> for Weibull {
    /// Inverse-CDF sampling with U uniform on [0, 1).
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.gen();
        self.scale * (-(1.0 - u).ln()).powf(1.0 / self.shape)
    }
}

impl ReliabilityDistribution for Weibull {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let z = x / self.scale;
        self.shape / self.scale * z.powf(self.shape - 1.0) * (-z.powf(self.shape)).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        1.0 - (-(x / self.scale).powf(self.shape)).exp()
    }

    fn random(&self, rng: &mut dyn RngCore) -> f64 {
        self.sample(rng)
    }

    /// Closed form, equal to f(x)/R(x) but finite far into the tail.
    fn hazard(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let z = x / self.scale;
        self.shape / self.scale * z.powf(self.shape - 1.0)
    }

    fn cumulative_hazard(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        (x / self.scale).powf(self.shape)
    }
}

//! Weibull lifetime model and censored maximum likelihood estimation.
//!
//! # Modules
//!
//! - [`Weibull`] — density, CDF, reliability, hazard, sampling and moments
//! - [`LifeData`] — failure times with right-censoring flags
//! - [`weibull_mle`] — Newton-Raphson profile-likelihood MLE for right-censored data
//!
//! # Examples
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use u_reliability::distribution::ReliabilityDistribution;
//! use u_reliability::weibull::Weibull;
//!
//! let times = [16.0, 34.0, 53.0, 75.0, 93.0, 120.0, 150.0, 150.0];
//! let censored = [false, false, false, false, false, false, true, true];
//! let fit = Weibull::estimate_censored(&times, &censored).unwrap();
//!
//! assert!(fit.reliability(50.0) > fit.reliability(100.0));
//! let mut rng = StdRng::seed_from_u64(1);
//! assert!(fit.random(&mut rng) >= 0.0);
//! ```
//!
//! # References
//!
//! - Abernethy, R.B. (2006). *The New Weibull Handbook*, 5th ed.
//! - Lawless, J.F. (2003). *Statistical Models and Methods for Lifetime Data*, 2nd ed.

mod life_data;
mod mle;
mod model;

pub use life_data::LifeData;
pub use mle::{
    weibull_mle, MleOptions, WeibullMleResult, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
pub use model::Weibull;

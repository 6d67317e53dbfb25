//! # u-reliability
//!
//! Parametric reliability analysis: a lifetime distribution interface and
//! the two-parameter Weibull distribution with maximum likelihood
//! estimation from right-censored failure data.
//!
//! This crate is domain-agnostic: it operates on raw `f64` times and
//! `bool` censoring flags without knowledge of where the data came from.
//!
//! ## Modules
//!
//! - [`distribution`] — `ReliabilityDistribution` trait (pdf, cdf, sampling,
//!   reliability, conditional reliability, hazard)
//! - [`weibull`] — Weibull model, `LifeData` sample sets, censored MLE
//! - [`error`] — Error types
//!
//! ## Quick Start
//!
//! ```
//! use u_reliability::distribution::ReliabilityDistribution;
//! use u_reliability::weibull::Weibull;
//!
//! let dist = Weibull::new(5.0, 15.0).unwrap();
//! assert!((dist.pdf(2.0) - 1.053453549e-4).abs() < 1e-6);
//!
//! let fit = Weibull::estimate(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
//! assert!(fit.hazard(40.0) > fit.hazard(20.0));
//! ```
//!
//! ## Design Philosophy
//!
//! - **Explicit randomness**: samplers take the caller's RNG, so results
//!   are reproducible under a seed
//! - **No partial results**: estimation yields a valid model or an error
//! - **Research-backed**: algorithms reference reliability literature

pub mod distribution;
pub mod error;
pub mod weibull;

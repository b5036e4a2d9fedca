// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::excessive_precision,
    clippy::float_cmp,
    clippy::unreadable_literal
)]
#![allow(clippy::neg_cmp_op_on_partial_ord)] // suggested fix too verbose

//! Generating random samples from the distributions of the `rand_array`
//! catalog.
//!
//! Every continuous sampler is generic over its working type `F` ([`Float`],
//! implemented for `f32` and `f64`) and does all of its arithmetic in that
//! type: a `Normal<f32>` never round-trips through `f64`. Discrete samplers
//! produce `u64` counts (or `usize` indices for [`Discrete`]).
//!
//! ## Distributions
//!
//! - Related to real-valued quantities that grow linearly
//!   (e.g. errors, offsets):
//!   - [`UniformReal`] distribution
//!   - [`Normal`] distribution, and [`StandardNormal`] as a primitive
//!   - [`Cauchy`] distribution
//! - Related to Bernoulli trials (yes/no events, with a given probability):
//!   - [`Binomial`] distribution
//!   - [`NegativeBinomial`] distribution
//!   - [`Geometric`] distribution
//! - Related to positive real-valued quantities that grow exponentially
//!   (e.g. prices, incomes, populations):
//!   - [`LogNormal`] distribution
//! - Related to the occurrence of independent events at a given rate:
//!   - [`Poisson`] distribution
//!   - [`Exp`]onential distribution, and [`Exp1`] as a primitive
//!   - [`Weibull`] distribution
//!   - [`Gumbel`] distribution
//! - Gamma and derived distributions:
//!   - [`Gamma`] distribution
//!   - [`ChiSquared`] distribution
//!   - [`StudentT`] distribution
//!   - [`FisherF`] distribution
//! - Sampling an index with given weights:
//!   - [`Discrete`] distribution

extern crate alloc;

pub use rand::distributions::{Distribution, Open01, OpenClosed01, Standard};

pub use self::binomial::{Binomial, Error as BinomialError};
pub use self::cauchy::{Cauchy, Error as CauchyError};
pub use self::discrete::{Discrete, WeightError};
pub use self::exponential::{Error as ExpError, Exp, Exp1};
pub use self::gamma::{
    ChiSquared, ChiSquaredError, Error as GammaError, FisherF, FisherFError, Gamma, StudentT,
};
pub use self::geometric::{Error as GeometricError, Geometric};
pub use self::gumbel::{Error as GumbelError, Gumbel};
pub use self::negative_binomial::{Error as NegativeBinomialError, NegativeBinomial};
pub use self::normal::{Error as NormalError, LogNormal, Normal, StandardNormal};
pub use self::poisson::{Error as PoissonError, Poisson};
pub use self::uniform::{Error as UniformError, UniformReal};
pub use self::utils::Float;
pub use self::weibull::{Error as WeibullError, Weibull};

mod binomial;
mod cauchy;
mod discrete;
mod exponential;
mod gamma;
mod geometric;
mod gumbel;
mod negative_binomial;
mod normal;
mod poisson;
mod uniform;
mod utils;
mod weibull;

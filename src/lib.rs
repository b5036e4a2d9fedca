// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fill numeric buffers with samples from statistical distributions.
//!
//! A [`Generator`] owns one pseudo-random engine (see [`rngs`]) and offers
//! one operation per distribution of the catalog. Each operation writes one
//! draw into every element of an [`ArrayViewMut`]: a typed, mutable view of
//! caller storage that enumerates its elements contiguously, with a byte
//! stride, through a table of byte offsets, or over an N-dimensional
//! shape.
//!
//! # Quick start
//!
//! ```
//! use rand_array::{ArrayViewMut, Generator};
//! use rand_array::rngs::Mt19937;
//!
//! let mut gen = Generator::<Mt19937>::new(Some(1));
//!
//! let mut values = [0.0f64; 1000];
//! gen.normal(&mut ArrayViewMut::contiguous(&mut values), 0.0, 1.0)
//!     .unwrap();
//!
//! // every other element of an i16 buffer
//! let mut counts = [0i16; 10];
//! let mut view = ArrayViewMut::strided(&mut counts, 5, 0, 4).unwrap();
//! gen.poisson(&mut view, 4.0).unwrap();
//! ```
//!
//! # Element kinds
//!
//! Real-valued distributions write `f32` or `f64` and sample in that width.
//! Integer-valued distributions (binomial, negative binomial, geometric,
//! Poisson and the categorical `discrete`) write any of the eight integer
//! types, storing counts that do not fit as the type's maximum. Asking for a
//! distribution over a buffer of the other family fails with
//! [`Error::KindMismatch`]; nothing is converted implicitly.
//!
//! # Reproducibility
//!
//! For a given engine and seed, the values written depend only on the
//! sequence of requests and the order in which each view enumerates its
//! elements. [`AnyGenerator`] selects the engine at run time.
//!
//! # Crate features
//!
//! - `std` (default): `std::error::Error` implementations.
//! - `log`: log engine seeding and rejected requests through the `log` crate.
//! - `serde1`: `Serialize`/`Deserialize` for [`Distr`], [`Algorithm`],
//!   [`ElementKind`], [`KindFamily`] and the PCG engines.

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![doc(test(attr(allow(unused_variables), deny(warnings))))]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::float_cmp, clippy::neg_cmp_op_on_partial_ord)]

extern crate alloc;

#[macro_use]
mod log_macros;

mod any;
mod array;
mod dispatch;
mod distr;
mod error;
mod fill;
mod generator;
mod params;
pub mod rngs;

pub use crate::any::{Algorithm, AnyGenerator, ParseAlgorithmError};
pub use crate::array::{
    ArrayViewMut, Element, ElementKind, Indices, KindFamily, Layout, LayoutError, ParseKindError,
    Storage,
};
pub use crate::distr::Distr;
pub use crate::error::Error;
pub use crate::fill::fill;
pub use crate::generator::Generator;
pub use crate::rngs::Engine;
pub use rand_core::{RngCore, SeedableRng};

/// The samplers behind the catalog, re-exported from `rand_array_distr`.
pub use rand_array_distr as distributions;

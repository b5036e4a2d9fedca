// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A by-value description of one catalog request.

use crate::array::KindFamily;
use alloc::vec::Vec;

/// A distribution of the catalog together with its parameters.
///
/// Pass to [`Generator::sample`](crate::Generator::sample) to fill a view
/// from it. The parameters are validated when sampling, not here.
///
/// With the `serde1` feature the request is (de)serialized as a map tagged
/// by `"distribution"`; omitted parameters that have a default take it:
///
/// ```
/// # #[cfg(feature = "serde1")]
/// # {
/// use rand_array::Distr;
///
/// let d: Distr = serde_json::from_str(r#"{"distribution": "normal", "scale": 2.0}"#).unwrap();
/// assert_eq!(d, Distr::Normal { loc: 0.0, scale: 2.0 });
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde1",
    serde(tag = "distribution", rename_all = "snake_case")
)]
pub enum Distr {
    /// Uniform over `[low, high)`.
    Uniform {
        /// Lower bound, default `0.0`.
        #[cfg_attr(feature = "serde1", serde(default = "zero"))]
        low: f64,
        /// Upper bound, default `1.0`.
        #[cfg_attr(feature = "serde1", serde(default = "one"))]
        high: f64,
    },
    /// Normal.
    Normal {
        /// Mean, default `0.0`.
        #[cfg_attr(feature = "serde1", serde(default = "zero"))]
        loc: f64,
        /// Standard deviation, default `1.0`.
        #[cfg_attr(feature = "serde1", serde(default = "one"))]
        scale: f64,
    },
    /// Log-normal.
    #[cfg_attr(feature = "serde1", serde(rename = "lognormal"))]
    LogNormal {
        /// Mean of the underlying normal, default `0.0`.
        #[cfg_attr(feature = "serde1", serde(default = "zero"))]
        mean: f64,
        /// Standard deviation of the underlying normal, default `1.0`.
        #[cfg_attr(feature = "serde1", serde(default = "one"))]
        sigma: f64,
    },
    /// Exponential.
    Exponential {
        /// Scale (inverse rate), default `1.0`.
        #[cfg_attr(feature = "serde1", serde(default = "one"))]
        scale: f64,
    },
    /// Gamma.
    Gamma {
        /// Shape.
        k: f64,
        /// Scale, default `1.0`.
        #[cfg_attr(feature = "serde1", serde(default = "one"))]
        scale: f64,
    },
    /// Gumbel.
    Gumbel {
        /// Location, default `0.0`.
        #[cfg_attr(feature = "serde1", serde(default = "zero"))]
        loc: f64,
        /// Scale, default `1.0`.
        #[cfg_attr(feature = "serde1", serde(default = "one"))]
        scale: f64,
    },
    /// Weibull.
    Weibull {
        /// Shape.
        k: f64,
        /// Scale, default `1.0`.
        #[cfg_attr(feature = "serde1", serde(default = "one"))]
        scale: f64,
    },
    /// Cauchy.
    Cauchy {
        /// Median, default `0.0`.
        #[cfg_attr(feature = "serde1", serde(default = "zero"))]
        loc: f64,
        /// Scale, default `1.0`.
        #[cfg_attr(feature = "serde1", serde(default = "one"))]
        scale: f64,
    },
    /// Chi-squared.
    #[cfg_attr(feature = "serde1", serde(rename = "chisquare"))]
    ChiSquare {
        /// Degrees of freedom.
        df: f64,
    },
    /// Fisher F.
    FisherF {
        /// Numerator degrees of freedom.
        dfnum: f64,
        /// Denominator degrees of freedom.
        dfden: f64,
    },
    /// Student's t.
    StandardT {
        /// Degrees of freedom.
        df: f64,
    },
    /// Binomial.
    Binomial {
        /// Number of trials.
        n: i64,
        /// Success probability.
        p: f64,
    },
    /// Negative binomial.
    NegativeBinomial {
        /// Number of successes.
        n: i64,
        /// Success probability.
        p: f64,
    },
    /// Geometric.
    Geometric {
        /// Success probability.
        p: f64,
    },
    /// Poisson.
    Poisson {
        /// Mean, default `1.0`.
        #[cfg_attr(feature = "serde1", serde(default = "one"))]
        mean: f64,
    },
    /// Categorical over the indices of `weights`.
    Discrete {
        /// Relative weight of each category.
        weights: Vec<f64>,
    },
}

#[cfg(feature = "serde1")]
fn zero() -> f64 {
    0.0
}

#[cfg(feature = "serde1")]
fn one() -> f64 {
    1.0
}

impl Distr {
    /// `Uniform` over `[0, 1)`.
    pub fn uniform() -> Self {
        Distr::Uniform { low: 0.0, high: 1.0 }
    }

    /// The standard normal.
    pub fn normal() -> Self {
        Distr::Normal { loc: 0.0, scale: 1.0 }
    }

    /// `LogNormal` with `mean = 0` and `sigma = 1`.
    pub fn lognormal() -> Self {
        Distr::LogNormal {
            mean: 0.0,
            sigma: 1.0,
        }
    }

    /// `Exponential` with unit scale.
    pub fn exponential() -> Self {
        Distr::Exponential { scale: 1.0 }
    }

    /// `Gamma` with shape `k` and unit scale.
    pub fn gamma(k: f64) -> Self {
        Distr::Gamma { k, scale: 1.0 }
    }

    /// The standard Gumbel.
    pub fn gumbel() -> Self {
        Distr::Gumbel { loc: 0.0, scale: 1.0 }
    }

    /// `Weibull` with shape `k` and unit scale.
    pub fn weibull(k: f64) -> Self {
        Distr::Weibull { k, scale: 1.0 }
    }

    /// The standard Cauchy.
    pub fn cauchy() -> Self {
        Distr::Cauchy { loc: 0.0, scale: 1.0 }
    }

    /// `Poisson` with unit mean.
    pub fn poisson() -> Self {
        Distr::Poisson { mean: 1.0 }
    }

    /// The catalog name of the distribution, as used by the operation of
    /// [`Generator`](crate::Generator) it routes to.
    pub fn name(&self) -> &'static str {
        match self {
            Distr::Uniform { .. } => "uniform",
            Distr::Normal { .. } => "normal",
            Distr::LogNormal { .. } => "lognormal",
            Distr::Exponential { .. } => "exponential",
            Distr::Gamma { .. } => "gamma",
            Distr::Gumbel { .. } => "gumbel",
            Distr::Weibull { .. } => "weibull",
            Distr::Cauchy { .. } => "cauchy",
            Distr::ChiSquare { .. } => "chisquare",
            Distr::FisherF { .. } => "fisher_f",
            Distr::StandardT { .. } => "standard_t",
            Distr::Binomial { .. } => "binomial",
            Distr::NegativeBinomial { .. } => "negative_binomial",
            Distr::Geometric { .. } => "geometric",
            Distr::Poisson { .. } => "poisson",
            Distr::Discrete { .. } => "discrete",
        }
    }

    /// The kind family of the values this distribution writes.
    pub fn family(&self) -> KindFamily {
        match self {
            Distr::Binomial { .. }
            | Distr::NegativeBinomial { .. }
            | Distr::Geometric { .. }
            | Distr::Poisson { .. }
            | Distr::Discrete { .. } => KindFamily::Integer,
            _ => KindFamily::Float,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_families() {
        assert_eq!(Distr::poisson().family(), KindFamily::Integer);
        assert_eq!(
            Distr::Discrete {
                weights: alloc::vec![1.0]
            }
            .family(),
            KindFamily::Integer
        );
        assert_eq!(Distr::gamma(2.0).family(), KindFamily::Float);
        assert_eq!(Distr::cauchy().name(), "cauchy");
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn test_serde_names_and_defaults() {
        let d: Distr = serde_json::from_str(r#"{"distribution": "weibull", "k": 1.5}"#).unwrap();
        assert_eq!(d, Distr::weibull(1.5));
        let d: Distr = serde_json::from_str(r#"{"distribution": "chisquare", "df": 3.0}"#).unwrap();
        assert_eq!(d.name(), "chisquare");
        for d in [Distr::lognormal(), Distr::poisson(), Distr::exponential()] {
            let json = serde_json::to_string(&d).unwrap();
            assert!(json.contains(d.name()));
            assert_eq!(serde_json::from_str::<Distr>(&json).unwrap(), d);
        }
    }
}

// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parameter sets of the real-valued catalog entries.
//!
//! Each set keeps the caller's `f64` values and converts them to the working
//! width of the target buffer before building its sampler, so validation
//! happens in the width the sampler will run in.

use crate::dispatch::{FloatElement, RealParams};
use crate::Error;
use rand_array_distr::{
    Cauchy, CauchyError, ChiSquared, ChiSquaredError, Exp, FisherF, FisherFError, Gamma,
    GammaError, Gumbel, GumbelError, LogNormal, Normal, NormalError, StudentT, UniformError,
    UniformReal, Weibull, WeibullError,
};

const SCALE_NOT_POSITIVE: Error = Error::InvalidParameter("scale must be > 0");
const SCALE_NEGATIVE: Error = Error::InvalidParameter("scale must be a non-negative value");
const K_NOT_POSITIVE: Error = Error::InvalidParameter("k must be > 0");
const DF_NOT_POSITIVE: Error = Error::InvalidParameter("df must be > 0");

#[derive(Clone, Copy, Debug)]
pub(crate) struct UniformParams {
    pub low: f64,
    pub high: f64,
}

impl RealParams for UniformParams {
    type Sampler<F: FloatElement> = UniformReal<F>;

    fn sampler<F: FloatElement>(&self) -> Result<UniformReal<F>, Error> {
        UniformReal::new(F::cast(self.low), F::cast(self.high)).map_err(|e| match e {
            UniformError::EmptyRange => Error::InvalidParameter("high - low must be >= 0"),
            UniformError::NonFinite => Error::InvalidParameter("high - low must be finite"),
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct NormalParams {
    pub loc: f64,
    pub scale: f64,
}

impl RealParams for NormalParams {
    type Sampler<F: FloatElement> = Normal<F>;

    fn sampler<F: FloatElement>(&self) -> Result<Normal<F>, Error> {
        Normal::new(F::cast(self.loc), F::cast(self.scale)).map_err(|e| match e {
            NormalError::BadVariance => SCALE_NEGATIVE,
            NormalError::MeanTooLarge => Error::InvalidParameter("loc must be finite"),
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct LogNormalParams {
    pub mean: f64,
    pub sigma: f64,
}

impl RealParams for LogNormalParams {
    type Sampler<F: FloatElement> = LogNormal<F>;

    fn sampler<F: FloatElement>(&self) -> Result<LogNormal<F>, Error> {
        LogNormal::new(F::cast(self.mean), F::cast(self.sigma)).map_err(|e| match e {
            NormalError::BadVariance => Error::InvalidParameter("sigma must be a non-negative value"),
            NormalError::MeanTooLarge => Error::InvalidParameter("mean must be finite"),
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ExponentialParams {
    pub scale: f64,
}

impl RealParams for ExponentialParams {
    type Sampler<F: FloatElement> = Exp<F>;

    fn sampler<F: FloatElement>(&self) -> Result<Exp<F>, Error> {
        Exp::from_scale(F::cast(self.scale)).map_err(|_| SCALE_NOT_POSITIVE)
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct GammaParams {
    pub k: f64,
    pub scale: f64,
}

impl RealParams for GammaParams {
    type Sampler<F: FloatElement> = Gamma<F>;

    fn sampler<F: FloatElement>(&self) -> Result<Gamma<F>, Error> {
        Gamma::new(F::cast(self.k), F::cast(self.scale)).map_err(|e| match e {
            GammaError::ShapeTooSmall => K_NOT_POSITIVE,
            GammaError::ScaleTooSmall => SCALE_NOT_POSITIVE,
            GammaError::ScaleTooLarge => Error::InvalidParameter("scale must be finite"),
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct GumbelParams {
    pub loc: f64,
    pub scale: f64,
}

impl RealParams for GumbelParams {
    type Sampler<F: FloatElement> = Gumbel<F>;

    fn sampler<F: FloatElement>(&self) -> Result<Gumbel<F>, Error> {
        Gumbel::new(F::cast(self.loc), F::cast(self.scale)).map_err(|e| match e {
            GumbelError::ScaleNotValid => SCALE_NOT_POSITIVE,
            GumbelError::LocationNotValid => Error::InvalidParameter("loc must be finite"),
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct WeibullParams {
    pub k: f64,
    pub scale: f64,
}

impl RealParams for WeibullParams {
    type Sampler<F: FloatElement> = Weibull<F>;

    fn sampler<F: FloatElement>(&self) -> Result<Weibull<F>, Error> {
        // k is checked first, as the catalog lists it first
        if !(self.k > 0.0) {
            return Err(K_NOT_POSITIVE);
        }
        Weibull::new(F::cast(self.scale), F::cast(self.k)).map_err(|e| match e {
            WeibullError::ShapeTooSmall => K_NOT_POSITIVE,
            WeibullError::ScaleTooSmall => SCALE_NOT_POSITIVE,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct CauchyParams {
    pub loc: f64,
    pub scale: f64,
}

impl RealParams for CauchyParams {
    type Sampler<F: FloatElement> = Cauchy<F>;

    fn sampler<F: FloatElement>(&self) -> Result<Cauchy<F>, Error> {
        Cauchy::new(F::cast(self.loc), F::cast(self.scale)).map_err(|e| match e {
            CauchyError::ScaleTooSmall => SCALE_NEGATIVE,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ChiSquareParams {
    pub df: f64,
}

impl RealParams for ChiSquareParams {
    type Sampler<F: FloatElement> = ChiSquared<F>;

    fn sampler<F: FloatElement>(&self) -> Result<ChiSquared<F>, Error> {
        ChiSquared::new(F::cast(self.df)).map_err(|e| match e {
            ChiSquaredError::DoFTooSmall => DF_NOT_POSITIVE,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FisherFParams {
    pub dfnum: f64,
    pub dfden: f64,
}

impl RealParams for FisherFParams {
    type Sampler<F: FloatElement> = FisherF<F>;

    fn sampler<F: FloatElement>(&self) -> Result<FisherF<F>, Error> {
        FisherF::new(F::cast(self.dfnum), F::cast(self.dfden)).map_err(|e| match e {
            FisherFError::MTooSmall => Error::InvalidParameter("dfnum must be > 0"),
            FisherFError::NTooSmall => Error::InvalidParameter("dfden must be > 0"),
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct StandardTParams {
    pub df: f64,
}

impl RealParams for StandardTParams {
    type Sampler<F: FloatElement> = StudentT<F>;

    fn sampler<F: FloatElement>(&self) -> Result<StudentT<F>, Error> {
        StudentT::new(F::cast(self.df)).map_err(|_| DF_NOT_POSITIVE)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = UniformParams { low: 1.0, high: 0.0 }.sampler::<f64>().unwrap_err();
        assert_eq!(err, Error::InvalidParameter("high - low must be >= 0"));
        let err = GammaParams { k: 0.0, scale: 1.0 }.sampler::<f32>().unwrap_err();
        assert_eq!(err, K_NOT_POSITIVE);
        let err = WeibullParams { k: -1.0, scale: -1.0 }.sampler::<f64>().unwrap_err();
        assert_eq!(err, K_NOT_POSITIVE);
        let err = FisherFParams { dfnum: 1.0, dfden: f64::NAN }.sampler::<f64>().unwrap_err();
        assert_eq!(err, Error::InvalidParameter("dfden must be > 0"));
        assert!(CauchyParams { loc: 0.0, scale: 0.0 }.sampler::<f64>().is_ok());
        assert!(NormalParams { loc: 0.0, scale: 0.0 }.sampler::<f32>().is_ok());
    }

    #[test]
    fn test_non_finite_rejections() {
        let inf = f64::INFINITY;
        let err = UniformParams { low: 0.0, high: inf }.sampler::<f64>().unwrap_err();
        assert_eq!(err, Error::InvalidParameter("high - low must be finite"));
        let err = NormalParams { loc: inf, scale: 1.0 }.sampler::<f64>().unwrap_err();
        assert_eq!(err, Error::InvalidParameter("loc must be finite"));
        let err = LogNormalParams { mean: -inf, sigma: 1.0 }.sampler::<f32>().unwrap_err();
        assert_eq!(err, Error::InvalidParameter("mean must be finite"));
        let err = GammaParams { k: 2.0, scale: inf }.sampler::<f64>().unwrap_err();
        assert_eq!(err, Error::InvalidParameter("scale must be finite"));
        let err = GumbelParams { loc: inf, scale: 1.0 }.sampler::<f64>().unwrap_err();
        assert_eq!(err, Error::InvalidParameter("loc must be finite"));
        let err = GumbelParams { loc: 0.0, scale: inf }.sampler::<f32>().unwrap_err();
        assert_eq!(err, SCALE_NOT_POSITIVE);
    }

    #[test]
    fn test_width_dependent_range() {
        // representable as f64 but not as f32
        let params = UniformParams { low: -1e300, high: 1e300 };
        assert!(params.sampler::<f64>().is_ok());
        assert!(params.sampler::<f32>().is_err());
    }
}

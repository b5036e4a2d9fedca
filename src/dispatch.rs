// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Type dispatch: from a runtime [`ElementKind`] to a monomorphized fill.
//!
//! Each distribution family has one table type, generic over the engine and
//! the distribution. Its associated `TABLE` constant has one slot per
//! element kind, in [`ElementKind::ALL`] order; slots outside the family are
//! `None`, which is reported as [`Error::KindMismatch`].

use crate::array::{ArrayViewMut, Element, ElementKind, KindFamily};
use crate::fill::fill_slots;
use crate::Error;
use core::marker::PhantomData;
use rand_array_distr::{Distribution, Float};
use rand_core::RngCore;

/// A fill function for one (engine, distribution, element type) triple.
pub(crate) type FillFn<R, D> = fn(&mut ArrayViewMut<'_>, &mut R, &D) -> Result<(), Error>;

/// Integer element types: counts are stored saturated to the type's range.
pub(crate) trait IntElement: Element {
    fn from_count(count: u64) -> Self;
}

macro_rules! int_element_impl {
    ($($ty:ty),*) => {$(
        impl IntElement for $ty {
            #[inline]
            fn from_count(count: u64) -> Self {
                <$ty>::try_from(count).unwrap_or(<$ty>::MAX)
            }
        }
    )*};
}

int_element_impl!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Float element types: the sampler runs in the element's own width.
pub(crate) trait FloatElement: Element + Float {}

impl FloatElement for f32 {}
impl FloatElement for f64 {}

/// Parameters of a continuous distribution, validated and turned into a
/// sampler of the requested width at fill time.
pub(crate) trait RealParams {
    type Sampler<F: FloatElement>: Distribution<F>;

    fn sampler<F: FloatElement>(&self) -> Result<Self::Sampler<F>, Error>;
}

fn fill_int<R, D, T>(view: &mut ArrayViewMut<'_>, rng: &mut R, distr: &D) -> Result<(), Error>
where
    R: RngCore,
    D: Distribution<u64>,
    T: IntElement,
{
    let found = view.kind();
    let (data, layout, len) = view.parts_mut::<T>().ok_or(Error::KindMismatch {
        expected: KindFamily::Integer,
        found,
    })?;
    fill_slots(data, layout, len, || T::from_count(distr.sample(rng)));
    Ok(())
}

fn fill_real<R, P, F>(view: &mut ArrayViewMut<'_>, rng: &mut R, params: &P) -> Result<(), Error>
where
    R: RngCore,
    P: RealParams,
    F: FloatElement,
{
    let found = view.kind();
    let sampler = params.sampler::<F>()?;
    let (data, layout, len) = view.parts_mut::<F>().ok_or(Error::KindMismatch {
        expected: KindFamily::Float,
        found,
    })?;
    fill_slots(data, layout, len, || sampler.sample(rng));
    Ok(())
}

/// Dispatch table of the integer-valued distributions.
pub(crate) struct IntTable<R, D>(PhantomData<(fn(&mut R), D)>);

impl<R: RngCore, D: Distribution<u64>> IntTable<R, D> {
    pub(crate) const TABLE: [Option<FillFn<R, D>>; 10] = [
        Some(fill_int::<R, D, i8> as FillFn<R, D>),
        Some(fill_int::<R, D, i16> as FillFn<R, D>),
        Some(fill_int::<R, D, i32> as FillFn<R, D>),
        Some(fill_int::<R, D, i64> as FillFn<R, D>),
        Some(fill_int::<R, D, u8> as FillFn<R, D>),
        Some(fill_int::<R, D, u16> as FillFn<R, D>),
        Some(fill_int::<R, D, u32> as FillFn<R, D>),
        Some(fill_int::<R, D, u64> as FillFn<R, D>),
        None,
        None,
    ];
}

/// Dispatch table of the real-valued distributions.
pub(crate) struct RealTable<R, P>(PhantomData<(fn(&mut R), P)>);

impl<R: RngCore, P: RealParams> RealTable<R, P> {
    pub(crate) const TABLE: [Option<FillFn<R, P>>; 10] = [
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        Some(fill_real::<R, P, f32> as FillFn<R, P>),
        Some(fill_real::<R, P, f64> as FillFn<R, P>),
    ];
}

/// Look up the integer fill for `kind`.
pub(crate) fn integer<R, D>(kind: ElementKind) -> Result<FillFn<R, D>, Error>
where
    R: RngCore,
    D: Distribution<u64>,
{
    IntTable::<R, D>::TABLE[kind.index()].ok_or(Error::KindMismatch {
        expected: KindFamily::Integer,
        found: kind,
    })
}

/// Look up the real fill for `kind`.
pub(crate) fn real<R, P>(kind: ElementKind) -> Result<FillFn<R, P>, Error>
where
    R: RngCore,
    P: RealParams,
{
    RealTable::<R, P>::TABLE[kind.index()].ok_or(Error::KindMismatch {
        expected: KindFamily::Float,
        found: kind,
    })
}

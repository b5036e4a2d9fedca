// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The elementwise fill engine.

use crate::array::{ArrayViewMut, Element, Layout};
use crate::Error;

/// Overwrite every logical element of `view` with one value from `sample`.
///
/// Elements are visited exactly once, in the order the view's [`Layout`]
/// enumerates them, and `sample` is called once per element in that same
/// order. Nothing is buffered or reordered, so a sampler that draws from an
/// engine consumes the stream in visitation order.
///
/// The element type `T` must be the exact type of the view's storage;
/// otherwise [`Error::KindMismatch`] is returned and nothing is written.
///
/// # Example
///
/// ```
/// use rand_array::{fill, ArrayViewMut};
///
/// let mut data = [0u32; 6];
/// let mut view = ArrayViewMut::strided(&mut data, 3, 0, 8).unwrap();
/// let mut next = 0u32;
/// fill(&mut view, || {
///     next += 1;
///     next
/// })
/// .unwrap();
/// assert_eq!(data, [1, 0, 2, 0, 3, 0]);
/// ```
pub fn fill<T, G>(view: &mut ArrayViewMut<'_>, sample: G) -> Result<(), Error>
where
    T: Element,
    G: FnMut() -> T,
{
    let found = view.kind();
    let (data, layout, len) = view.parts_mut::<T>().ok_or(Error::KindMismatch {
        expected: T::KIND.family(),
        found,
    })?;
    fill_slots(data, layout, len, sample);
    Ok(())
}

/// The fill loop over an already-typed storage slice.
#[inline]
pub(crate) fn fill_slots<T, G>(data: &mut [T], layout: &Layout<'_>, len: usize, mut sample: G)
where
    G: FnMut() -> T,
{
    for index in layout.indices(len) {
        data[index] = sample();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ElementKind, KindFamily};

    #[test]
    fn test_fill_visits_in_table_order() {
        let mut data = [0i16; 5];
        let offsets = [8, 2, 6, 0, 4];
        let mut view = ArrayViewMut::indexed(&mut data, &offsets).unwrap();
        let mut counter = 0i16;
        fill(&mut view, || {
            counter += 1;
            counter
        })
        .unwrap();
        assert_eq!(data, [4, 2, 5, 3, 1]);
    }

    #[test]
    fn test_fill_shaped() {
        let mut data = [0.0f32; 6];
        // column-major walk of a 2x3 row-major block
        let mut view = ArrayViewMut::shaped(&mut data, &[3, 2], &[4, 12], 0).unwrap();
        let mut counter = 0.0f32;
        fill(&mut view, || {
            counter += 1.0;
            counter
        })
        .unwrap();
        assert_eq!(data, [1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_fill_kind_mismatch() {
        let mut data = [0u8; 3];
        let mut view = ArrayViewMut::contiguous(&mut data);
        let err = fill(&mut view, || 1.0f64).unwrap_err();
        assert_eq!(
            err,
            Error::KindMismatch {
                expected: KindFamily::Float,
                found: ElementKind::UInt8
            }
        );
        assert_eq!(data, [0; 3]);
    }
}

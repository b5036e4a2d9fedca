// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element kinds and mutable views over caller-owned numeric buffers.
//!
//! An [`ArrayViewMut`] couples a typed mutable slice ([`Storage`]) with a
//! [`Layout`] describing which slots of the slice are the logical elements
//! and in which order they are visited. Offsets and strides are given in
//! bytes, the way array containers describe their memory, and are checked
//! once when the view is built: every slot a view can reach lies inside the
//! slice and is aligned to the element size.

use alloc::vec::Vec;
use core::{fmt, slice, str::FromStr};

/// The family an [`ElementKind`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub enum KindFamily {
    /// Signed and unsigned integers of 8 to 64 bits.
    Integer,
    /// `f32` and `f64`.
    Float,
}

impl fmt::Display for KindFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KindFamily::Integer => "integer",
            KindFamily::Float => "float",
        })
    }
}

/// Runtime tag for the element type of a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "lowercase"))]
pub enum ElementKind {
    /// `i8`
    Int8,
    /// `i16`
    Int16,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `u8`
    UInt8,
    /// `u16`
    UInt16,
    /// `u32`
    UInt32,
    /// `u64`
    UInt64,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
}

impl ElementKind {
    /// Every kind, in table order.
    pub const ALL: [ElementKind; 10] = [
        ElementKind::Int8,
        ElementKind::Int16,
        ElementKind::Int32,
        ElementKind::Int64,
        ElementKind::UInt8,
        ElementKind::UInt16,
        ElementKind::UInt32,
        ElementKind::UInt64,
        ElementKind::Float32,
        ElementKind::Float64,
    ];

    /// Position of this kind in [`ElementKind::ALL`], used to index the
    /// dispatch tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Size of one element in bytes.
    pub const fn size(self) -> usize {
        match self {
            ElementKind::Int8 | ElementKind::UInt8 => 1,
            ElementKind::Int16 | ElementKind::UInt16 => 2,
            ElementKind::Int32 | ElementKind::UInt32 | ElementKind::Float32 => 4,
            ElementKind::Int64 | ElementKind::UInt64 | ElementKind::Float64 => 8,
        }
    }

    /// The family of this kind.
    pub const fn family(self) -> KindFamily {
        match self {
            ElementKind::Float32 | ElementKind::Float64 => KindFamily::Float,
            _ => KindFamily::Integer,
        }
    }

    /// Canonical dtype name, e.g. `"uint16"`.
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Int8 => "int8",
            ElementKind::Int16 => "int16",
            ElementKind::Int32 => "int32",
            ElementKind::Int64 => "int64",
            ElementKind::UInt8 => "uint8",
            ElementKind::UInt16 => "uint16",
            ElementKind::UInt32 => "uint32",
            ElementKind::UInt64 => "uint64",
            ElementKind::Float32 => "float32",
            ElementKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown dtype name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseKindError;

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown element kind")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseKindError {}

impl FromStr for ElementKind {
    type Err = ParseKindError;

    /// Accepts the canonical names plus `sfloat` and `dfloat`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "int8" => ElementKind::Int8,
            "int16" => ElementKind::Int16,
            "int32" => ElementKind::Int32,
            "int64" => ElementKind::Int64,
            "uint8" => ElementKind::UInt8,
            "uint16" => ElementKind::UInt16,
            "uint32" => ElementKind::UInt32,
            "uint64" => ElementKind::UInt64,
            "float32" | "sfloat" => ElementKind::Float32,
            "float64" | "dfloat" => ElementKind::Float64,
            _ => return Err(ParseKindError),
        })
    }
}

/// A typed mutable borrow of caller storage, one variant per element kind.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum Storage<'a> {
    Int8(&'a mut [i8]),
    Int16(&'a mut [i16]),
    Int32(&'a mut [i32]),
    Int64(&'a mut [i64]),
    UInt8(&'a mut [u8]),
    UInt16(&'a mut [u16]),
    UInt32(&'a mut [u32]),
    UInt64(&'a mut [u64]),
    Float32(&'a mut [f32]),
    Float64(&'a mut [f64]),
}

impl<'a> Storage<'a> {
    /// The element kind of the borrowed slice.
    pub fn kind(&self) -> ElementKind {
        match self {
            Storage::Int8(_) => ElementKind::Int8,
            Storage::Int16(_) => ElementKind::Int16,
            Storage::Int32(_) => ElementKind::Int32,
            Storage::Int64(_) => ElementKind::Int64,
            Storage::UInt8(_) => ElementKind::UInt8,
            Storage::UInt16(_) => ElementKind::UInt16,
            Storage::UInt32(_) => ElementKind::UInt32,
            Storage::UInt64(_) => ElementKind::UInt64,
            Storage::Float32(_) => ElementKind::Float32,
            Storage::Float64(_) => ElementKind::Float64,
        }
    }

    /// Number of elements in the borrowed slice.
    pub fn len(&self) -> usize {
        match self {
            Storage::Int8(s) => s.len(),
            Storage::Int16(s) => s.len(),
            Storage::Int32(s) => s.len(),
            Storage::Int64(s) => s.len(),
            Storage::UInt8(s) => s.len(),
            Storage::UInt16(s) => s.len(),
            Storage::UInt32(s) => s.len(),
            Storage::UInt64(s) => s.len(),
            Storage::Float32(s) => s.len(),
            Storage::Float64(s) => s.len(),
        }
    }

    /// True if the borrowed slice is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

mod private {
    pub trait Sealed {}
}

/// A primitive type that can back an [`ArrayViewMut`].
///
/// Implemented for the eight integer types of 8 to 64 bits, `f32` and `f64`.
/// This trait is sealed.
pub trait Element: Copy + Send + Sync + fmt::Debug + 'static + private::Sealed {
    /// The runtime tag of this type.
    const KIND: ElementKind;

    /// Wrap a slice of this type.
    fn storage(data: &mut [Self]) -> Storage<'_>;

    /// Borrow the slice back out of `storage` if it holds this type.
    fn slice_mut<'s>(storage: &'s mut Storage<'_>) -> Option<&'s mut [Self]>;
}

macro_rules! element_impl {
    ($ty:ty, $variant:ident) => {
        impl private::Sealed for $ty {}

        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$variant;

            #[inline]
            fn storage(data: &mut [Self]) -> Storage<'_> {
                Storage::$variant(data)
            }

            #[inline]
            fn slice_mut<'s>(storage: &'s mut Storage<'_>) -> Option<&'s mut [Self]> {
                match storage {
                    Storage::$variant(data) => Some(&mut **data),
                    _ => None,
                }
            }
        }
    };
}

element_impl!(i8, Int8);
element_impl!(i16, Int16);
element_impl!(i32, Int32);
element_impl!(i64, Int64);
element_impl!(u8, UInt8);
element_impl!(u16, UInt16);
element_impl!(u32, UInt32);
element_impl!(u64, UInt64);
element_impl!(f32, Float32);
element_impl!(f64, Float64);

/// Error returned when a buffer descriptor does not fit its storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// An offset or stride is not a multiple of the element size.
    Misaligned,
    /// A visited slot lies outside the storage.
    OutOfBounds,
    /// `shape` and `strides` have different lengths.
    DimensionMismatch,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LayoutError::Misaligned => "offset or stride is not a multiple of the element size",
            LayoutError::OutOfBounds => "buffer descriptor reaches outside the storage",
            LayoutError::DimensionMismatch => "shape and strides differ in length",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

/// Visitation order of the logical elements of a view, in element units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout<'a> {
    /// `len` slots starting at `start`, `step` elements apart.
    Strided {
        /// Index of the first slot.
        start: usize,
        /// Distance between consecutive slots, may be zero or negative.
        step: isize,
    },
    /// An explicit table of byte offsets, visited in table order.
    Indexed {
        /// Byte offsets, each a multiple of `size`.
        offsets: &'a [usize],
        /// Element size in bytes.
        size: usize,
    },
    /// An N-dimensional block visited in row-major order (last axis
    /// fastest).
    Shaped {
        /// Index of the element at the origin.
        start: usize,
        /// Extent of each axis.
        shape: Vec<usize>,
        /// Distance between neighbours along each axis, in elements.
        steps: Vec<isize>,
    },
}

impl<'a> Layout<'a> {
    /// Storage indices of the `len` logical elements, in visitation order.
    pub fn indices(&self, len: usize) -> Indices<'_> {
        match self {
            Layout::Strided { start, step } => Indices::Strided {
                next: *start as isize,
                step: *step,
                remaining: len,
            },
            Layout::Indexed { offsets, size } => Indices::Indexed {
                offsets: offsets.iter(),
                size: *size,
            },
            Layout::Shaped { start, shape, steps } => Indices::Shaped {
                next: *start as isize,
                counter: alloc::vec![0; shape.len()],
                shape,
                steps,
                remaining: len,
            },
        }
    }
}

/// Iterator over storage indices, see [`Layout::indices`].
#[derive(Clone, Debug)]
#[allow(missing_docs)]
pub enum Indices<'l> {
    #[doc(hidden)]
    Strided {
        next: isize,
        step: isize,
        remaining: usize,
    },
    #[doc(hidden)]
    Indexed {
        offsets: slice::Iter<'l, usize>,
        size: usize,
    },
    #[doc(hidden)]
    Shaped {
        next: isize,
        counter: Vec<usize>,
        shape: &'l [usize],
        steps: &'l [isize],
        remaining: usize,
    },
}

impl<'l> Iterator for Indices<'l> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        match self {
            Indices::Strided {
                next,
                step,
                remaining,
            } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                let index = *next as usize;
                *next = next.wrapping_add(*step);
                Some(index)
            }
            Indices::Indexed { offsets, size } => offsets.next().map(|offset| offset / *size),
            Indices::Shaped {
                next,
                counter,
                shape,
                steps,
                remaining,
            } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                let index = *next as usize;
                // advance the odometer, last axis fastest
                for axis in (0..shape.len()).rev() {
                    counter[axis] += 1;
                    *next = next.wrapping_add(steps[axis]);
                    if counter[axis] < shape[axis] {
                        break;
                    }
                    *next = next.wrapping_sub(steps[axis].wrapping_mul(shape[axis] as isize));
                    counter[axis] = 0;
                }
                Some(index)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self {
            Indices::Strided { remaining, .. } | Indices::Shaped { remaining, .. } => *remaining,
            Indices::Indexed { offsets, .. } => offsets.len(),
        };
        (len, Some(len))
    }
}

impl<'l> ExactSizeIterator for Indices<'l> {}

/// A mutable view over caller-owned storage: the target buffer descriptor of
/// every fill operation.
///
/// # Example
///
/// ```
/// use rand_array::ArrayViewMut;
///
/// // every other element of a 6-element buffer, starting at the second
/// let mut data = [0.0f64; 6];
/// let view = ArrayViewMut::strided(&mut data, 3, 8, 16).unwrap();
/// assert_eq!(view.len(), 3);
/// ```
#[derive(Debug)]
pub struct ArrayViewMut<'a> {
    storage: Storage<'a>,
    layout: Layout<'a>,
    len: usize,
}

impl<'a> ArrayViewMut<'a> {
    /// A view of every element of `data`, in order.
    pub fn contiguous<T: Element>(data: &'a mut [T]) -> ArrayViewMut<'a> {
        let len = data.len();
        ArrayViewMut {
            storage: T::storage(data),
            layout: Layout::Strided { start: 0, step: 1 },
            len,
        }
    }

    /// A view of `len` elements starting `offset` bytes into `data`, each
    /// `stride` bytes after the previous one.
    pub fn strided<T: Element>(
        data: &'a mut [T], len: usize, offset: usize, stride: isize,
    ) -> Result<ArrayViewMut<'a>, LayoutError> {
        let size = T::KIND.size();
        if offset % size != 0 || stride % size as isize != 0 {
            return Err(LayoutError::Misaligned);
        }
        let start = offset / size;
        let step = stride / size as isize;
        if len > 0 {
            let last = (len - 1) as isize;
            let end = last
                .checked_mul(step)
                .and_then(|span| span.checked_add(start as isize))
                .ok_or(LayoutError::OutOfBounds)?;
            if start >= data.len() || end < 0 || end as usize >= data.len() {
                return Err(LayoutError::OutOfBounds);
            }
        }
        Ok(ArrayViewMut {
            storage: T::storage(data),
            layout: Layout::Strided { start, step },
            len,
        })
    }

    /// A view of the elements at the given byte `offsets` of `data`, visited
    /// in table order.
    pub fn indexed<T: Element>(
        data: &'a mut [T], offsets: &'a [usize],
    ) -> Result<ArrayViewMut<'a>, LayoutError> {
        let size = T::KIND.size();
        for &offset in offsets {
            if offset % size != 0 {
                return Err(LayoutError::Misaligned);
            }
            if offset / size >= data.len() {
                return Err(LayoutError::OutOfBounds);
            }
        }
        Ok(ArrayViewMut {
            storage: T::storage(data),
            layout: Layout::Indexed { offsets, size },
            len: offsets.len(),
        })
    }

    /// An N-dimensional view: the element at multi-index `i` lives at byte
    /// `offset + Σ i[k] * strides[k]`. Elements are visited in row-major
    /// order.
    pub fn shaped<T: Element>(
        data: &'a mut [T], shape: &[usize], strides: &[isize], offset: usize,
    ) -> Result<ArrayViewMut<'a>, LayoutError> {
        if shape.len() != strides.len() {
            return Err(LayoutError::DimensionMismatch);
        }
        let size = T::KIND.size();
        if offset % size != 0 || strides.iter().any(|s| s % size as isize != 0) {
            return Err(LayoutError::Misaligned);
        }
        let start = offset / size;
        let steps: Vec<isize> = strides.iter().map(|s| s / size as isize).collect();
        let len = shape
            .iter()
            .try_fold(1usize, |n, &extent| n.checked_mul(extent))
            .ok_or(LayoutError::OutOfBounds)?;

        if len > 0 {
            // lowest and highest reachable index
            let (mut low, mut high) = (start as isize, start as isize);
            for (&extent, &step) in shape.iter().zip(&steps) {
                let span = ((extent - 1) as isize)
                    .checked_mul(step)
                    .ok_or(LayoutError::OutOfBounds)?;
                if span < 0 {
                    low = low.checked_add(span).ok_or(LayoutError::OutOfBounds)?;
                } else {
                    high = high.checked_add(span).ok_or(LayoutError::OutOfBounds)?;
                }
            }
            if low < 0 || high as usize >= data.len() {
                return Err(LayoutError::OutOfBounds);
            }
        }
        Ok(ArrayViewMut {
            storage: T::storage(data),
            layout: Layout::Shaped {
                start,
                shape: shape.to_vec(),
                steps,
            },
            len,
        })
    }

    /// The element kind of the underlying storage.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.storage.kind()
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the view has no logical elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The visitation order of the view.
    pub fn layout(&self) -> &Layout<'a> {
        &self.layout
    }

    /// The typed storage and the layout, borrowed together.
    pub(crate) fn parts_mut<T: Element>(&mut self) -> Option<(&mut [T], &Layout<'a>, usize)> {
        let data = T::slice_mut(&mut self.storage)?;
        Some((data, &self.layout, self.len))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kind_names() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.name().parse::<ElementKind>(), Ok(kind));
            assert_eq!(ElementKind::ALL[kind.index()], kind);
        }
        assert_eq!("dfloat".parse::<ElementKind>(), Ok(ElementKind::Float64));
        assert_eq!("sfloat".parse::<ElementKind>(), Ok(ElementKind::Float32));
        assert_eq!("complex".parse::<ElementKind>(), Err(ParseKindError));
    }

    #[test]
    fn test_kind_family_and_size() {
        assert_eq!(ElementKind::UInt16.size(), 2);
        assert_eq!(ElementKind::Float32.size(), 4);
        assert_eq!(ElementKind::Int64.family(), KindFamily::Integer);
        assert_eq!(ElementKind::Float64.family(), KindFamily::Float);
        let floats = ElementKind::ALL
            .iter()
            .filter(|k| k.family() == KindFamily::Float)
            .count();
        assert_eq!(floats, 2);
    }

    #[test]
    fn test_contiguous() {
        let mut data = [0u16; 5];
        let view = ArrayViewMut::contiguous(&mut data);
        assert_eq!(view.kind(), ElementKind::UInt16);
        assert_eq!(view.layout().indices(view.len()).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_strided() {
        let mut data = [0i32; 10];
        let view = ArrayViewMut::strided(&mut data, 3, 4, 12).unwrap();
        assert_eq!(view.layout().indices(3).collect::<Vec<_>>(), [1, 4, 7]);

        // reversed
        let view = ArrayViewMut::strided(&mut data, 4, 36, -8).unwrap();
        assert_eq!(view.layout().indices(4).collect::<Vec<_>>(), [9, 7, 5, 3]);

        assert_eq!(
            ArrayViewMut::strided(&mut data, 3, 2, 4).unwrap_err(),
            LayoutError::Misaligned
        );
        assert_eq!(
            ArrayViewMut::strided(&mut data, 3, 0, 6).unwrap_err(),
            LayoutError::Misaligned
        );
        assert_eq!(
            ArrayViewMut::strided(&mut data, 4, 4, 12).unwrap_err(),
            LayoutError::OutOfBounds
        );
        assert_eq!(
            ArrayViewMut::strided(&mut data, 2, 0, -4).unwrap_err(),
            LayoutError::OutOfBounds
        );
        assert!(ArrayViewMut::strided(&mut data, 0, 400, 4).unwrap().is_empty());
    }

    #[test]
    fn test_indexed() {
        let mut data = [0.0f64; 4];
        let offsets = [24, 0, 16, 8];
        let view = ArrayViewMut::indexed(&mut data, &offsets).unwrap();
        assert_eq!(view.len(), 4);
        assert_eq!(view.layout().indices(4).collect::<Vec<_>>(), [3, 0, 2, 1]);

        assert_eq!(
            ArrayViewMut::indexed(&mut data, &[4]).unwrap_err(),
            LayoutError::Misaligned
        );
        assert_eq!(
            ArrayViewMut::indexed(&mut data, &[32]).unwrap_err(),
            LayoutError::OutOfBounds
        );
    }

    #[test]
    fn test_shaped() {
        // the transpose of a 2x3 row-major u8 matrix
        let mut data = [0u8; 6];
        let view = ArrayViewMut::shaped(&mut data, &[3, 2], &[1, 3], 0).unwrap();
        assert_eq!(view.len(), 6);
        assert_eq!(
            view.layout().indices(6).collect::<Vec<_>>(),
            [0, 3, 1, 4, 2, 5]
        );

        // a 2x2 window at (1, 1) of a 4x4 matrix, rows reversed
        let mut data = [0i64; 16];
        let view = ArrayViewMut::shaped(&mut data, &[2, 2], &[-32, 8], 8 * 9).unwrap();
        assert_eq!(view.layout().indices(4).collect::<Vec<_>>(), [9, 10, 5, 6]);

        assert_eq!(
            ArrayViewMut::shaped(&mut data, &[2, 2], &[8], 0).unwrap_err(),
            LayoutError::DimensionMismatch
        );
        assert_eq!(
            ArrayViewMut::shaped(&mut data, &[5, 4], &[32, 8], 0).unwrap_err(),
            LayoutError::OutOfBounds
        );
        assert!(ArrayViewMut::shaped(&mut data, &[0, 4], &[32, 8], 0).unwrap().is_empty());
    }
}

// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use crate::array::{ElementKind, KindFamily};
use core::fmt;

/// Error type of the array fill operations
///
/// Both kinds of failure are detected before the target buffer is written
/// and before the engine is advanced, so a failed call leaves the generator
/// and the buffer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A distribution parameter violates its documented constraint.
    InvalidParameter(&'static str),
    /// The element kind of the target buffer is outside the kind family the
    /// distribution produces.
    KindMismatch {
        /// The family the distribution writes.
        expected: KindFamily,
        /// The element kind of the buffer.
        found: ElementKind,
    },
}

impl Error {
    /// True if this is a parameter error.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter(_))
    }

    /// True if this is a kind-family mismatch.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, Error::KindMismatch { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => f.write_str(msg),
            Error::KindMismatch { expected, found } => match expected {
                KindFamily::Integer => write!(
                    f,
                    "invalid element kind {}, it must be an integer kind",
                    found
                ),
                KindFamily::Float => write!(
                    f,
                    "invalid element kind {}, it must be float32 or float64",
                    found
                ),
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidParameter("mean must be > 0").to_string(),
            "mean must be > 0"
        );
        let err = Error::KindMismatch {
            expected: KindFamily::Float,
            found: ElementKind::Int32,
        };
        assert_eq!(
            err.to_string(),
            "invalid element kind int32, it must be float32 or float64"
        );
        assert!(err.is_kind_mismatch());
        assert!(!err.is_invalid_parameter());
    }
}

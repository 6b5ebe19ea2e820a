//! Complex number element types
//!
//! Complex tensors only take part in gathers (`index_select`,
//! `index_sample`), so the types carry storage, construction and a
//! magnitude-based ordering and nothing else.
//!
//! # Storage Format
//!
//! Interleaved `(re, im, re, im, ...)`, matching numpy.

use super::{DType, Element};
use bytemuck::{Pod, Zeroable};
use std::cmp::Ordering;
use std::fmt;

macro_rules! impl_complex {
    ($name:ident, $float:ty, $dtype:ident, $doc_bits:literal) => {
        #[doc = concat!($doc_bits, "-bit complex number with ", stringify!($float), " real and imaginary parts")]
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
        pub struct $name {
            /// Real part
            pub re: $float,
            /// Imaginary part
            pub im: $float,
        }

        impl $name {
            /// Zero complex number
            pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

            /// One (real unit)
            pub const ONE: Self = Self { re: 1.0, im: 0.0 };

            /// Create a new complex number
            #[inline]
            pub const fn new(re: $float, im: $float) -> Self {
                Self { re, im }
            }

            /// Magnitude: |z| = sqrt(re² + im²)
            #[inline]
            pub fn magnitude(self) -> $float {
                self.re.hypot(self.im)
            }
        }

        impl PartialOrd for $name {
            /// Complex numbers have no natural order; compare by magnitude.
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                self.magnitude().partial_cmp(&other.magnitude())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.im >= 0.0 {
                    write!(f, "{}+{}i", self.re, self.im)
                } else {
                    write!(f, "{}{}i", self.re, self.im)
                }
            }
        }

        impl Element for $name {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                self.magnitude() as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                Self::new(v as $float, 0.0)
            }

            #[inline]
            fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            fn one() -> Self {
                Self::ONE
            }

            #[inline]
            fn is_nan(self) -> bool {
                self.re.is_nan() || self.im.is_nan()
            }

            #[inline]
            fn is_finite(self) -> bool {
                self.re.is_finite() && self.im.is_finite()
            }
        }
    };
}

impl_complex!(Complex64, f32, Complex64, "64");
impl_complex!(Complex128, f64, Complex128, "128");

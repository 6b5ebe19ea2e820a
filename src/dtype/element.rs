//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};

/// Trait for types that can be elements of a tensor
///
/// This trait connects Rust's type system to seekr's runtime dtype system.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `PartialOrd` - Ordering for sort, search and selection kernels
///
/// Floating point types override `is_nan`/`is_finite`; every other type is
/// always ordered and finite.
pub trait Element: Copy + Send + Sync + Pod + Zeroable + PartialOrd + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    ///
    /// For complex types this is the magnitude.
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// True for NaN payloads
    #[inline]
    fn is_nan(self) -> bool {
        false
    }

    /// False for NaN and infinities
    #[inline]
    fn is_finite(self) -> bool {
        true
    }

    /// True when the value is not equal to zero
    #[inline]
    fn is_nonzero(self) -> bool {
        self != Self::zero()
    }
}

macro_rules! impl_int_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $ty
                }

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }
            }
        )*
    };
}

impl_int_element!(i64 => I64, i32 => I32, i16 => I16, i8 => I8, u8 => U8);

macro_rules! impl_float_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $ty
                }

                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn one() -> Self {
                    1.0
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$ty>::is_nan(self)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    <$ty>::is_finite(self)
                }
            }
        )*
    };
}

impl_float_element!(f64 => F64, f32 => F32);

// Boolean tensors are stored as u8; there is no `bool` Element.

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
macro_rules! impl_half_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    <$ty>::to_f64(self)
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    <$ty>::from_f64(v)
                }

                #[inline]
                fn zero() -> Self {
                    <$ty>::ZERO
                }

                #[inline]
                fn one() -> Self {
                    <$ty>::ONE
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$ty>::is_nan(self)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    <$ty>::is_finite(self)
                }
            }
        )*
    };
}

#[cfg(feature = "f16")]
impl_half_element!(half::f16 => F16, half::bf16 => BF16);

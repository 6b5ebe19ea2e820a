//! Data type system for seekr tensors
//!
//! `DType` tags the element type of a tensor at runtime, `Element` binds a Rust
//! type to its tag, and `DTypeSet` describes the closed set of element types an
//! operation accepts.

pub mod complex;
mod element;

pub use complex::{Complex64, Complex128};
pub use element::Element;

use crate::error::{Error, Result};
use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Data types supported by seekr tensors
///
/// # Discriminant Values
///
/// - Floats: 0-9 (F64=0, F32=1, F16=2, BF16=3)
/// - Signed ints: 10-19 (I64=10, I32=11, I16=12, I8=13)
/// - Unsigned ints: 20-29 (U8=23)
/// - Bool: 30
/// - Complex: 40-49 (Complex64=40, Complex128=41)
///
/// Existing values are never renumbered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 16-bit floating point (IEEE 754)
    F16 = 2,
    /// 16-bit brain floating point
    BF16 = 3,

    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// 16-bit signed integer
    I16 = 12,
    /// 8-bit signed integer
    I8 = 13,

    /// 8-bit unsigned integer
    U8 = 23,

    /// Boolean type, stored as one byte holding 0 or 1
    Bool = 30,

    /// 64-bit complex (two f32: re, im)
    Complex64 = 40,
    /// 128-bit complex (two f64: re, im)
    Complex128 = 41,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Complex128 => 16,
            Self::F64 | Self::I64 | Self::Complex64 => 8,
            Self::F32 | Self::I32 => 4,
            Self::F16 | Self::BF16 | Self::I16 => 2,
            Self::I8 | Self::U8 | Self::Bool => 1,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32 | Self::F16 | Self::BF16)
    }

    /// Returns true if this is a complex number type
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }

    /// Returns true if this is a signed integer type
    #[inline]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I64 | Self::I32 | Self::I16 | Self::I8)
    }

    /// Returns true if this is any integer type (signed or unsigned)
    #[inline]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || matches!(self, Self::U8)
    }

    /// Returns true if this is a boolean type
    #[inline]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Returns true if tensors of this dtype can index another tensor
    #[inline]
    pub const fn is_index(self) -> bool {
        matches!(self, Self::I64 | Self::I32)
    }

    /// Short name for display (e.g., "f32", "i64")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::Bool => "bool",
            Self::Complex64 => "c64",
            Self::Complex128 => "c128",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

// ============================================================================
// DTypeSet
// ============================================================================

/// Set of dtypes for efficient membership testing
///
/// Each operation declares the set of element types it accepts; the CPU
/// backend checks membership before dispatching to a kernel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DTypeSet {
    bits: u64,
}

impl DTypeSet {
    /// Empty set
    pub const EMPTY: Self = Self { bits: 0 };

    /// All floating point types
    pub const FLOATS: Self = Self::EMPTY
        .with(DType::F64)
        .with(DType::F32)
        .with(DType::F16)
        .with(DType::BF16);

    /// I32 and I64
    pub const INDEX: Self = Self::EMPTY.with(DType::I64).with(DType::I32);

    /// sort / argsort
    pub const SORT: Self = Self::FLOATS
        .with(DType::I64)
        .with(DType::I32)
        .with(DType::I16)
        .with(DType::I8)
        .with(DType::U8);

    /// argmax / argmin
    pub const ARG_REDUCE: Self = Self::FLOATS
        .with(DType::I64)
        .with(DType::I32)
        .with(DType::I16)
        .with(DType::U8);

    /// topk / mode
    pub const TOPK: Self = Self::FLOATS.with(DType::I64).with(DType::I32);

    /// kthvalue
    pub const KTHVALUE: Self = Self::FLOATS.with(DType::I64).with(DType::I32);

    /// Gather sources for index_select / index_sample
    pub const GATHER: Self = Self::FLOATS
        .with(DType::I64)
        .with(DType::I32)
        .with(DType::Complex64)
        .with(DType::Complex128);

    /// masked_select sources and where operands
    pub const SELECT: Self = Self::FLOATS.with(DType::I64).with(DType::I32);

    /// nonzero inputs
    pub const NONZERO: Self = Self::FLOATS
        .with(DType::I64)
        .with(DType::I32)
        .with(DType::I16)
        .with(DType::Bool);

    /// searchsorted / bucketize
    pub const SEARCH: Self = Self::FLOATS.with(DType::I64).with(DType::I32);

    /// Create a set containing a single dtype
    #[inline]
    pub const fn single(dtype: DType) -> Self {
        Self {
            bits: 1 << dtype as u8,
        }
    }

    /// Add a dtype to the set
    #[inline]
    pub const fn with(self, dtype: DType) -> Self {
        Self {
            bits: self.bits | (1 << dtype as u8),
        }
    }

    /// Check if the set contains a dtype
    #[inline]
    pub const fn contains(self, dtype: DType) -> bool {
        self.bits & (1 << dtype as u8) != 0
    }

    /// Check if set is empty
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Fail with `UnsupportedDType` unless `dtype` is a member
    #[inline]
    pub fn check(self, dtype: DType, op: &'static str) -> Result<()> {
        if self.contains(dtype) {
            Ok(())
        } else {
            Err(Error::unsupported_dtype(dtype, op))
        }
    }
}

/// Fail with `InvalidIndexDType` unless `dtype` is I32 or I64
#[inline]
pub fn check_index_dtype(dtype: DType, op: &'static str) -> Result<()> {
    if dtype.is_index() {
        Ok(())
    } else {
        Err(Error::InvalidIndexDType { dtype, op })
    }
}

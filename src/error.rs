//! Error types for seekr

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using seekr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`]
///
/// Every operation validates its inputs before touching any data, so callers
/// can branch on the kind without inspecting individual variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operand dtype outside the operation's supported set
    Type,
    /// Rank, shape, broadcast, axis or index-range violation
    Shape,
    /// Mutually dependent optional arguments violated
    Value,
    /// `k` outside the valid range of the selected axis
    Range,
    /// Allocation or thread pool failure
    Runtime,
}

/// Errors that can occur in seekr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Shapes cannot be broadcast together
    #[error("Cannot broadcast shapes {lhs:?} and {rhs:?}")]
    BroadcastError {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Invalid dimension index
    #[error("Invalid dimension {dim} for tensor with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension
        dim: isize,
        /// Number of dimensions
        ndim: usize,
    },

    /// A tensor argument has the wrong rank
    #[error("Argument '{arg}' must have {expected} dimension(s), got {got}")]
    RankMismatch {
        /// The argument name
        arg: &'static str,
        /// Required rank
        expected: usize,
        /// Actual rank
        got: usize,
    },

    /// Reduction over an axis (or tensor) with no elements
    #[error("Operation '{op}' cannot reduce over an empty axis")]
    EmptyReduction {
        /// The operation name
        op: &'static str,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Index tensor is not I32/I64
    #[error("Index tensor for '{op}' must be i32 or i64, got {dtype:?}")]
    InvalidIndexDType {
        /// The offending dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Left-hand side dtype
        lhs: DType,
        /// Right-hand side dtype
        rhs: DType,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: i64,
        /// Size of the dimension
        size: usize,
    },

    /// `k` does not fit the selected axis
    #[error("k ({k}) out of range for '{op}' along a dimension of size {size}")]
    KOutOfRange {
        /// Requested k
        k: i64,
        /// Size of the selected axis
        size: usize,
        /// The operation name
        op: &'static str,
    },

    /// Positions along an axis do not fit the requested index dtype
    #[error("Operation '{op}' cannot report position {max_index} as {dtype}")]
    IndexOverflow {
        /// Largest position the operation may report
        max_index: usize,
        /// Requested output dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// In-place operation requested on a client that cannot alias storage
    #[error("Operation '{op}' writes in place and requires an eager client")]
    AliasingUnsupported {
        /// The operation name
        op: &'static str,
    },

    /// Tensor is not contiguous when contiguous memory is required
    #[error("Operation requires contiguous tensor")]
    NotContiguous,

    /// Thread pool construction failed
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Feature not yet implemented
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// Description of the unimplemented feature
        feature: &'static str,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a broadcast error
    pub fn broadcast(lhs: &[usize], rhs: &[usize]) -> Self {
        Self::BroadcastError {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedDType { .. }
            | Self::InvalidIndexDType { .. }
            | Self::DTypeMismatch { .. } => ErrorKind::Type,
            Self::ShapeMismatch { .. }
            | Self::BroadcastError { .. }
            | Self::InvalidDimension { .. }
            | Self::RankMismatch { .. }
            | Self::IndexOutOfBounds { .. }
            | Self::EmptyReduction { .. }
            | Self::NotContiguous => ErrorKind::Shape,
            Self::InvalidArgument { .. } | Self::AliasingUnsupported { .. } => ErrorKind::Value,
            Self::KOutOfRange { .. } | Self::IndexOverflow { .. } => ErrorKind::Range,
            Self::OutOfMemory { .. }
            | Self::ThreadPool(_)
            | Self::Internal(_)
            | Self::NotImplemented { .. } => ErrorKind::Runtime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_taxonomy() {
        assert_eq!(
            Error::unsupported_dtype(DType::Bool, "sort").kind(),
            ErrorKind::Type
        );
        assert_eq!(
            Error::RankMismatch {
                arg: "sorted_sequence",
                expected: 1,
                got: 2
            }
            .kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            Error::invalid_argument("dtype", "must not be None").kind(),
            ErrorKind::Value
        );
        assert_eq!(
            Error::KOutOfRange {
                k: 5,
                size: 3,
                op: "topk"
            }
            .kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_display() {
        let err = Error::IndexOutOfBounds { index: 7, size: 3 };
        assert_eq!(
            err.to_string(),
            "Index 7 out of bounds for dimension of size 3"
        );
    }
}

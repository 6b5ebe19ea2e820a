//! Conditional operations trait.

use crate::error::{Error, Result};
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// An optional value operand of `where`
#[derive(Clone, Debug, Default)]
pub enum WhereOperand<R: Runtime> {
    /// Operand not given
    #[default]
    None,
    /// Scalar, promoted to a one-element tensor of the other operand's dtype
    Scalar(f64),
    /// Tensor operand
    Tensor(Tensor<R>),
}

impl<R: Runtime> WhereOperand<R> {
    /// True unless this is [`WhereOperand::None`]
    pub fn is_given(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl<R: Runtime> From<Tensor<R>> for WhereOperand<R> {
    fn from(t: Tensor<R>) -> Self {
        Self::Tensor(t)
    }
}

impl<R: Runtime> From<&Tensor<R>> for WhereOperand<R> {
    fn from(t: &Tensor<R>) -> Self {
        Self::Tensor(t.clone())
    }
}

impl<R: Runtime> From<f64> for WhereOperand<R> {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl<R: Runtime> From<Option<Tensor<R>>> for WhereOperand<R> {
    fn from(t: Option<Tensor<R>>) -> Self {
        t.map_or(Self::None, Self::Tensor)
    }
}

/// Result of [`ConditionalOps::where_cond`]
#[derive(Clone, Debug)]
pub enum WhereOutput<R: Runtime> {
    /// Neither value operand was given: coordinates of true elements
    Indices(Vec<Tensor<R>>),
    /// Element-wise selection between the two operands
    Selected(Tensor<R>),
}

impl<R: Runtime> WhereOutput<R> {
    /// The selected tensor, if this is a selection result
    pub fn into_selected(self) -> Option<Tensor<R>> {
        match self {
            Self::Selected(t) => Some(t),
            Self::Indices(_) => None,
        }
    }

    /// The coordinate tensors, if this is an index result
    pub fn into_indices(self) -> Option<Vec<Tensor<R>>> {
        match self {
            Self::Indices(v) => Some(v),
            Self::Selected(_) => None,
        }
    }
}

/// Conditional operations
pub trait ConditionalOps<R: Runtime> {
    /// Conditional select: `where(cond, x, y) = cond ? x : y`.
    ///
    /// `cond` must be Bool. `x` and `y` share a dtype, and all three operands
    /// broadcast to a common shape. Scalar operands become one-element tensors
    /// of the other operand's dtype (F64 when both are scalars).
    ///
    /// With neither `x` nor `y` given this returns the coordinates of the true
    /// elements of `cond`, exactly as [`IndexingOps::nonzero_tuple`] does.
    /// Giving only one of them is a Value error.
    ///
    /// [`IndexingOps::nonzero_tuple`]: crate::ops::IndexingOps::nonzero_tuple
    ///
    /// ```
    /// # use seekr::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let x = Tensor::<CpuRuntime>::from_slice(&[0.9f32, 0.1, 3.2, 1.2], &[4], &device);
    /// let y = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 1.0, 1.0, 1.0], &[4], &device);
    /// let cond = Tensor::<CpuRuntime>::from_bools(&[false, false, true, true], &[4], &device);
    /// let out = client.where_cond(&cond, &x, &y)?.into_selected().unwrap();
    /// assert_eq!(out.to_vec::<f32>(), [1.0, 1.0, 3.2, 1.2]);
    /// # Ok::<(), seekr::error::Error>(())
    /// ```
    fn where_cond<X, Y>(&self, cond: &Tensor<R>, x: X, y: Y) -> Result<WhereOutput<R>>
    where
        X: Into<WhereOperand<R>>,
        Y: Into<WhereOperand<R>>,
    {
        let _ = (cond, x.into(), y.into());
        Err(Error::NotImplemented {
            feature: "ConditionalOps::where_cond",
        })
    }

    /// In-place conditional select into `x`.
    ///
    /// `y` must be a tensor, and the broadcast shape of `cond`, `x`, `y` must be
    /// `x`'s own shape. Requires a client that supports aliasing. If `x` shares
    /// its storage with other tensors it first receives a private copy.
    fn where_<Y>(&self, cond: &Tensor<R>, x: &mut Tensor<R>, y: Y) -> Result<()>
    where
        Y: Into<WhereOperand<R>>,
    {
        let _ = (cond, x, y.into());
        Err(Error::NotImplemented {
            feature: "ConditionalOps::where_",
        })
    }
}

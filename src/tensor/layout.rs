//! Layout: shape, strides, and offset describing a view into storage

use smallvec::SmallVec;
use std::fmt;

/// Most tensors handled here have 4 or fewer dimensions
const STACK_DIMS: usize = 4;

/// Shape type: dimensions of a tensor
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Strides type, in ELEMENTS (not bytes)
///
/// A stride of 0 repeats one element along that dimension (broadcast view).
pub type Strides = SmallVec<[isize; STACK_DIMS]>;

/// Memory layout of a tensor view
///
/// Element `[i0, i1, ..., in]` lives at
/// `offset + i0 * strides[0] + ... + in * strides[n]`.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
    strides: Strides,
    offset: usize,
}

impl Layout {
    /// Row-major layout for `shape`
    ///
    /// # Example
    /// ```
    /// use seekr::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        let shape: Shape = shape.iter().copied().collect();
        let strides = row_major_strides(&shape);
        Self {
            shape,
            strides,
            offset: 0,
        }
    }

    /// Layout with explicit shape, strides, and offset
    pub fn new(shape: Shape, strides: Strides, offset: usize) -> Self {
        debug_assert_eq!(shape.len(), strides.len());
        Self {
            shape,
            strides,
            offset,
        }
    }

    /// 0-dimensional layout
    pub fn scalar() -> Self {
        Self::contiguous(&[])
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Get the offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// True for 0-dimensional layouts
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// True when elements are laid out row-major starting at offset 0
    pub fn is_contiguous(&self) -> bool {
        self.offset == 0 && self.strides == row_major_strides(&self.shape)
    }

    /// Swap two dimensions
    pub fn transpose(&self, dim0: usize, dim1: usize) -> Option<Self> {
        if dim0 >= self.ndim() || dim1 >= self.ndim() {
            return None;
        }
        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape.swap(dim0, dim1);
        strides.swap(dim0, dim1);
        Some(Self::new(shape, strides, self.offset))
    }

    /// Reinterpret a contiguous layout with a new shape of equal element count
    pub fn reshape(&self, new_shape: &[usize]) -> Option<Self> {
        if !self.is_contiguous() {
            return None;
        }
        if new_shape.iter().product::<usize>() != self.elem_count() {
            return None;
        }
        Some(Self::contiguous(new_shape))
    }

    /// Insert a size-1 dimension at `dim` (0..=ndim)
    pub fn unsqueeze(&self, dim: usize) -> Option<Self> {
        if dim > self.ndim() {
            return None;
        }
        let stride = if dim < self.ndim() {
            self.strides[dim] * self.shape[dim] as isize
        } else {
            1
        };
        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape.insert(dim, 1);
        strides.insert(dim, stride);
        Some(Self::new(shape, strides, self.offset))
    }

    /// Remove the size-1 dimension at `dim`
    pub fn squeeze(&self, dim: usize) -> Option<Self> {
        if dim >= self.ndim() || self.shape[dim] != 1 {
            return None;
        }
        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape.remove(dim);
        strides.remove(dim);
        Some(Self::new(shape, strides, self.offset))
    }

    /// Expand to `target` using stride 0 for new and size-1 dimensions
    ///
    /// Returns None if the shapes are not broadcast-compatible.
    pub fn broadcast_to(&self, target: &[usize]) -> Option<Self> {
        if target.len() < self.ndim() {
            return None;
        }
        let pad = target.len() - self.ndim();
        let mut shape: Shape = target.iter().copied().collect();
        let mut strides: Strides = SmallVec::from_elem(0, target.len());

        for (i, (&s, &st)) in self.shape.iter().zip(self.strides.iter()).enumerate() {
            let t = target[pad + i];
            if s == t {
                strides[pad + i] = st;
            } else if s != 1 {
                return None;
            }
            shape[pad + i] = t;
        }

        Some(Self::new(shape, strides, self.offset))
    }
}

/// Row-major strides for `shape`
pub(crate) fn row_major_strides(shape: &[usize]) -> Strides {
    let mut strides: Strides = SmallVec::from_elem(0, shape.len());
    let mut acc = 1isize;
    for (stride, &dim) in strides.iter_mut().zip(shape.iter()).rev() {
        *stride = acc;
        acc *= dim as isize;
    }
    strides
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?}, offset: {} }}",
            self.shape.as_slice(),
            self.strides.as_slice(),
            self.offset
        )
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.shape.as_slice())
    }
}

//! Operation traits.
//!
//! Each trait groups one family of operations. Implementations live in the
//! backend-specific modules; default method bodies report `NotImplemented`.

mod conditional;
mod indexing;
mod search;
mod selection;
mod sorting;

pub use conditional::{ConditionalOps, WhereOperand, WhereOutput};
pub use indexing::IndexingOps;
pub use search::SearchOps;
pub use selection::{SelectionOps, TopK};
pub use sorting::SortingOps;

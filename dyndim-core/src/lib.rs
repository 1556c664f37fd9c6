//! Dyndim provides dynamically ranked tensor shapes without heap allocation.
//!
//! A shape is a sequence of 1 to 9 signed extents, one per axis. The rank is
//! only known at runtime, but instead of a heap-backed buffer every shape is
//! stored as one of nine statically ranked payloads ([`Dim`]), so shapes stay
//! stack-resident and copying one never allocates.
//!
//! ## A quick guide
//! - Build a [`DDim`] with [`make_ddim`] from a slice of extents; its length
//!   picks the rank. Lengths outside 1..=9 are rejected, never clamped.
//! - Inspect it with [`DDim::arity`], [`DDim::get`], [`DDim::product`] and
//!   [`DDim::vectorize`] without ever naming the rank.
//! - Elementwise `+` and `*` are defined between equal-rank shapes and return
//!   a [`Result`], failing on a rank mismatch rather than padding.
//! - Hand a shape to statically ranked code with [`DDim::to_dim`], the one
//!   checked exit from rank erasure.
//! - Rank-generic logic of your own goes through [`DimVisitor`] and
//!   [`DDim::apply_visitor`]: written once over the rank, dispatched in one
//!   place.
//!
//! ## What can you do with it?
//! ```
//! use dyndim_core::{make_ddim, Dim};
//!
//! let shape = make_ddim(&[2, 3, 4]).unwrap();
//! assert_eq!(shape.arity(), 3);
//! assert_eq!(shape.product(), 24);
//! assert_eq!(shape.vectorize(), vec![2, 3, 4]);
//!
//! let scaled = (shape * make_ddim(&[2, 2, 2]).unwrap()).unwrap();
//! assert_eq!(scaled.vectorize(), vec![4, 6, 8]);
//!
//! let fixed: Dim<3> = scaled.to_dim().unwrap();
//! assert_eq!(fixed.as_slice(), &[4, 6, 8]);
//! ```

mod ddim;
mod dim;
mod error;

pub use ddim::{make_ddim, DDim, DimVisitor, DimVisitorMut, MAX_RANK};
pub use dim::Dim;
pub use error::{Error, Result};

//! The canonical batch representation of bounding boxes.
//!
//! This module defines the hub type all conversions pass through. A batch
//! of boxes enters through one of four named constructors, lives as four
//! corner coordinate pairs plus a center and a size, and leaves through
//! one of four named projections (or the dict/tuple accessors).
//!
//! # Design Principles
//!
//! 1. **One canonical form**: corners are always ordered (top-left,
//!    top-right, bottom-right, bottom-left), with corners 1 and 3
//!    diagonally opposite, regardless of which parameterization the batch
//!    arrived in.
//!
//! 2. **Permissive representation**: degenerate boxes (negative or zero
//!    width/height from out-of-order corner input) can be represented;
//!    nothing here clamps or rejects them.
//!
//! 3. **Eager invariant checks**: batch shapes are validated when a
//!    [`Boxes`] is built, so a constructed value always has one coherent
//!    batch size.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use panbox::boxes::{Boxes, Origin};
//!
//! let batch = array![[1.5, 1.0, 3.0, 2.0]];
//! let mut boxes = Boxes::from_center(batch.view(), Origin::default())?;
//!
//! let corners = boxes.to_two_corners().as_batch()?;
//! assert_eq!(corners.row(0).to_vec(), vec![0.0, 0.0, 3.0, 2.0]);
//! # Ok::<(), panbox::PanboxError>(())
//! ```

mod coord;
mod dict;
mod model;
mod origin;
mod projection;

// Re-export core types for convenient access
pub use coord::{Coordinates, Size};
pub use dict::{BoxesDict, BoxesTuple, CoordDict, SizeDict};
pub use model::Boxes;
pub use origin::Origin;

//! Panbox: the universal bounding box converter.
//!
//! Panbox converts batches of axis-aligned bounding boxes between the four
//! equivalent parameterizations used across detection tooling
//! (top-left + size, bottom-left + size, center + size, two opposite
//! corners). A batch is parsed once into a canonical representation (the
//! four corners, the center, and the size of every box) and projected out
//! into whichever layout the consumer wants, so N×M format plumbing
//! collapses into one hub type.
//!
//! On top of conversion, [`boxes::Boxes`] derives a few geometric
//! artifacts: squared boxes, origin-flipped boxes for bottom-left
//! coordinate systems, and binary occlusion masks.
//!
//! # Modules
//!
//! - [`boxes`]: the canonical batch representation and all operations
//! - [`error`]: error types for panbox operations
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use panbox::boxes::Boxes;
//!
//! // One box per row: (x_top_left, y_top_left, width, height).
//! let batch = array![[0.0, 0.0, 3.0, 2.0], [10.0, 10.0, 10.0, 10.0]];
//!
//! let mut boxes = Boxes::from_top_left(batch.view())?;
//! let centers = boxes.to_center().as_batch()?;
//!
//! assert_eq!(centers.row(0).to_vec(), vec![1.5, 1.0, 3.0, 2.0]);
//! # Ok::<(), panbox::PanboxError>(())
//! ```

pub mod boxes;
pub mod error;

pub use error::PanboxError;

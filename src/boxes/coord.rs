//! Batched coordinate and size vectors.

use ndarray::Array1;

use super::dict::{CoordDict, SizeDict};

/// One logical corner (or center) across a batch of boxes.
///
/// `x` and `y` must have the same length; that length is the batch size.
/// The constructors on [`Boxes`](super::Boxes) always produce matching
/// lengths, and [`Boxes::from_parts`](super::Boxes::from_parts) checks
/// them before accepting a hand-built value.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

impl Coordinates {
    /// Creates a coordinate pair from x and y vectors.
    #[inline]
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Self {
        Self { x, y }
    }

    /// Returns the number of boxes this pair spans.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.x.len()
    }

    /// Copies the pair into its serializable dict form.
    pub fn to_dict(&self) -> CoordDict {
        CoordDict {
            x: self.x.to_vec(),
            y: self.y.to_vec(),
        }
    }
}

/// Width and height across a batch of boxes.
///
/// Values may be negative when built from out-of-order corners; nothing
/// here forbids that.
#[derive(Clone, Debug, PartialEq)]
pub struct Size {
    pub w: Array1<f64>,
    pub h: Array1<f64>,
}

impl Size {
    /// Creates a size from width and height vectors.
    #[inline]
    pub fn new(w: Array1<f64>, h: Array1<f64>) -> Self {
        Self { w, h }
    }

    /// Returns the number of boxes this size spans.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.w.len()
    }

    /// Copies the size into its serializable dict form.
    pub fn to_dict(&self) -> SizeDict {
        SizeDict {
            w: self.w.to_vec(),
            h: self.h.to_vec(),
        }
    }
}

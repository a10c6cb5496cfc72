//! The canonical batch of bounding boxes and the operations on it.

use ndarray::{s, Array1, Array2, Array3, ArrayView2, Zip};

use crate::error::PanboxError;

use super::coord::{Coordinates, Size};
use super::dict::{BoxesDict, BoxesTuple};
use super::origin::Origin;
use super::projection::Projection;

/// A batch of axis-aligned bounding boxes in canonical form.
///
/// Whatever parameterization a batch arrives in, it is stored as four
/// corner coordinate pairs in fixed order
/// (top-left, top-right, bottom-right, bottom-left, with corners 1 and 3
/// diagonally opposite), a center pair, and a width/height pair, plus the
/// [`Origin`] label of the vertical axis.
///
/// A `Boxes` is built through one of the named constructors and read back
/// through the `to_*` projections, which materialize an N×4 batch in
/// place and return the instance for chaining:
///
/// ```
/// use ndarray::array;
/// use panbox::boxes::Boxes;
///
/// let batch = array![[0.0, 0.0, 3.0, 2.0]];
/// let two_corners = Boxes::from_top_left(batch.view())?
///     .to_two_corners()
///     .as_batch()?
///     .clone();
/// assert_eq!(two_corners, array![[0.0, 0.0, 3.0, 2.0]]);
/// # Ok::<(), panbox::PanboxError>(())
/// ```
///
/// Degenerate boxes (negative or zero extents from out-of-order corner
/// input) are representable and never rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct Boxes {
    corners: [Coordinates; 4],
    center: Coordinates,
    size: Size,
    origin: Origin,
    projection: Projection,
}

impl Boxes {
    /// Builds a batch from hand-assembled parts.
    ///
    /// The four corners and the center must share one batch size; the
    /// check runs here, once, so every constructed `Boxes` is coherent.
    /// The four `from_*` constructors route through this.
    pub fn from_parts(
        corners: [Coordinates; 4],
        center: Coordinates,
        size: Size,
        origin: Origin,
    ) -> Result<Self, PanboxError> {
        let boxes = Self {
            corners,
            center,
            size,
            origin,
            projection: Projection::Constructed,
        };
        let sizes = boxes.dimensions();
        if sizes.iter().any(|&n| n != sizes[0]) {
            return Err(PanboxError::BatchSizeMismatch { sizes });
        }
        Ok(boxes)
    }

    /// Builds a batch from rows of `(x_1, y_1, w, h)`: the top-left
    /// corner and the size of each box. Origin is `TopLeft`.
    pub fn from_top_left(batch: ArrayView2<'_, f64>) -> Result<Self, PanboxError> {
        let [x_1, y_1, w, h] = split_columns(batch)?;
        let size = Size::new(w, h);
        let corners = corners_from_top_left(&Coordinates::new(x_1, y_1), &size);
        let center = center_from_corners(&corners);
        Self::from_parts(corners, center, size, Origin::TopLeft)
    }

    /// Builds a batch from rows of `(x_4, y_4, w, h)`: the bottom-left
    /// corner and the size of each box. Origin is `BottomLeft`.
    pub fn from_bottom_left(batch: ArrayView2<'_, f64>) -> Result<Self, PanboxError> {
        let [x_4, y_4, w, h] = split_columns(batch)?;
        let size = Size::new(w, h);
        let corners = corners_from_bottom_left(&Coordinates::new(x_4, y_4), &size);
        let center = center_from_corners(&corners);
        Self::from_parts(corners, center, size, Origin::BottomLeft)
    }

    /// Builds a batch from rows of `(x_c, y_c, w, h)`: the center and
    /// the size of each box.
    ///
    /// The supplied center is stored as-is rather than recomputed from
    /// the corners; it is the caller's primary data here. The
    /// conventional `origin` is `Origin::default()` (top-left).
    pub fn from_center(batch: ArrayView2<'_, f64>, origin: Origin) -> Result<Self, PanboxError> {
        let [x_c, y_c, w, h] = split_columns(batch)?;
        let center = Coordinates::new(x_c, y_c);
        let size = Size::new(w, h);
        let corners = corners_from_center(&center, &size);
        Self::from_parts(corners, center, size, origin)
    }

    /// Builds a batch from rows of `(x_1, y_1, x_3, y_3)`: the top-left
    /// and bottom-right corners of each box.
    ///
    /// The conventional `origin` is `Origin::default()` (top-left).
    pub fn from_two_corners(
        batch: ArrayView2<'_, f64>,
        origin: Origin,
    ) -> Result<Self, PanboxError> {
        let [x_1, y_1, x_3, y_3] = split_columns(batch)?;
        let corner_1 = Coordinates::new(x_1, y_1);
        let corner_3 = Coordinates::new(x_3, y_3);
        let size = size_from_two_corners(&corner_1, &corner_3);
        let corners = corners_from_two_corners(corner_1, corner_3);
        let center = center_from_corners(&corners);
        Self::from_parts(corners, center, size, origin)
    }

    /// Returns the four corner pairs in canonical order.
    #[inline]
    pub fn corners(&self) -> &[Coordinates; 4] {
        &self.corners
    }

    /// Returns the center pair.
    #[inline]
    pub fn center(&self) -> &Coordinates {
        &self.center
    }

    /// Returns the size pair.
    #[inline]
    pub fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the vertical-axis convention of the batch.
    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns the batch sizes of the four corners and the center.
    pub fn dimensions(&self) -> [usize; 5] {
        [
            self.corners[0].batch_size(),
            self.corners[1].batch_size(),
            self.corners[2].batch_size(),
            self.corners[3].batch_size(),
            self.center.batch_size(),
        ]
    }

    /// Returns the number of boxes in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.corners[0].batch_size()
    }

    /// Returns true if the batch holds no boxes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes rows of `(x_1, y_1, w, h)` into the projection cache.
    pub fn to_top_left(&mut self) -> &mut Self {
        let batch = stack_columns([
            &self.corners[0].x,
            &self.corners[0].y,
            &self.size.w,
            &self.size.h,
        ]);
        self.projection.record(batch);
        self
    }

    /// Materializes rows of `(x_4, y_4, w, h)` into the projection cache.
    pub fn to_bottom_left(&mut self) -> &mut Self {
        let batch = stack_columns([
            &self.corners[3].x,
            &self.corners[3].y,
            &self.size.w,
            &self.size.h,
        ]);
        self.projection.record(batch);
        self
    }

    /// Materializes rows of `(x_c, y_c, w, h)` into the projection cache.
    pub fn to_center(&mut self) -> &mut Self {
        let batch = stack_columns([&self.center.x, &self.center.y, &self.size.w, &self.size.h]);
        self.projection.record(batch);
        self
    }

    /// Materializes rows of `(x_1, y_1, x_3, y_3)` into the projection
    /// cache.
    pub fn to_two_corners(&mut self) -> &mut Self {
        let batch = stack_columns([
            &self.corners[0].x,
            &self.corners[0].y,
            &self.corners[2].x,
            &self.corners[2].y,
        ]);
        self.projection.record(batch);
        self
    }

    /// Pads every box into a square, in place.
    ///
    /// The side becomes `max(w, h)` and the corners are recomputed around
    /// the existing center, which is preserved.
    pub fn square(&mut self) -> &mut Self {
        let (size, corners) = self.squared();
        self.size = size;
        self.corners = corners;
        self
    }

    /// Returns the squared size and corners without mutating the batch.
    pub fn squared(&self) -> (Size, [Coordinates; 4]) {
        let side: Array1<f64> = Zip::from(&self.size.w)
            .and(&self.size.h)
            .map_collect(|w, h| w.max(*h));
        let size = Size::new(side.clone(), side);
        let corners = corners_from_center(&self.center, &size);
        (size, corners)
    }

    /// Flips the vertical axis of every corner against `image_height`,
    /// in place, and toggles the origin label.
    ///
    /// Fails when `image_height` is below the smallest box height in the
    /// batch. Applying the flip twice with the same `image_height`
    /// restores the original corner values. The stored center keeps its
    /// value; reconstruct from a projection if a flipped center is
    /// needed.
    pub fn flip_origin(&mut self, image_height: f64) -> Result<&mut Self, PanboxError> {
        let minimum = min_extent(&self.size.h);
        if image_height < minimum {
            return Err(PanboxError::InvalidDimension {
                name: "height",
                given: image_height,
                minimum,
            });
        }

        for corner in &mut self.corners {
            corner.y.mapv_inplace(|y| image_height - y);
        }
        self.origin = self.origin.flipped();
        Ok(self)
    }

    /// Rasterizes the batch into binary occlusion masks of shape
    /// N×`height`×`width`: ones everywhere, zeroes inside each box.
    ///
    /// Each box zeroes the half-open pixel rectangle `[y_1, y_3) ×
    /// [x_1, x_3)`, with corner coordinates truncated toward zero and
    /// clamped into the grid. Fails when `width` or `height` is below the
    /// smallest box extent on that axis.
    pub fn binary_mask(&self, width: u32, height: u32) -> Result<Array3<u8>, PanboxError> {
        let min_w = min_extent(&self.size.w);
        if f64::from(width) < min_w {
            return Err(PanboxError::InvalidDimension {
                name: "width",
                given: f64::from(width),
                minimum: min_w,
            });
        }
        let min_h = min_extent(&self.size.h);
        if f64::from(height) < min_h {
            return Err(PanboxError::InvalidDimension {
                name: "height",
                given: f64::from(height),
                minimum: min_h,
            });
        }

        let mut masks = Array3::<u8>::ones((self.len(), height as usize, width as usize));
        for i in 0..self.len() {
            let y_1 = grid_index(self.corners[0].y[i], height);
            let y_3 = grid_index(self.corners[2].y[i], height);
            let x_1 = grid_index(self.corners[0].x[i], width);
            let x_3 = grid_index(self.corners[2].x[i], width);
            if y_1 < y_3 && x_1 < x_3 {
                masks.slice_mut(s![i, y_1..y_3, x_1..x_3]).fill(0);
            }
        }
        Ok(masks)
    }

    /// Returns the batch keyed by corner id. Always available.
    pub fn as_dict(&self) -> BoxesDict {
        BoxesDict {
            corner_1: self.corners[0].to_dict(),
            corner_2: self.corners[1].to_dict(),
            corner_3: self.corners[2].to_dict(),
            corner_4: self.corners[3].to_dict(),
            center: self.center.to_dict(),
            size: self.size.to_dict(),
        }
    }

    /// Returns the batch as the flat
    /// `(x1, y1, x2, y2, x3, y3, x4, y4, xc, yc, w, h)` tuple. Always
    /// available.
    pub fn as_tuple(&self) -> BoxesTuple<'_> {
        (
            &self.corners[0].x,
            &self.corners[0].y,
            &self.corners[1].x,
            &self.corners[1].y,
            &self.corners[2].x,
            &self.corners[2].y,
            &self.corners[3].x,
            &self.corners[3].y,
            &self.center.x,
            &self.center.y,
            &self.size.w,
            &self.size.h,
        )
    }

    /// Returns the N×4 batch recorded by the most recent `to_*` call.
    ///
    /// Fails with [`PanboxError::MissingProjection`] until one of the
    /// projection methods has run. Derived operations (`square`,
    /// `flip_origin`) do not clear a recorded projection.
    pub fn as_batch(&self) -> Result<&Array2<f64>, PanboxError> {
        self.projection.batch()
    }
}

/// Splits an N×4 batch into its four column vectors.
fn split_columns(batch: ArrayView2<'_, f64>) -> Result<[Array1<f64>; 4], PanboxError> {
    if batch.ncols() != 4 {
        return Err(PanboxError::ShapeMismatch {
            rows: batch.nrows(),
            cols: batch.ncols(),
        });
    }
    Ok([
        batch.column(0).to_owned(),
        batch.column(1).to_owned(),
        batch.column(2).to_owned(),
        batch.column(3).to_owned(),
    ])
}

/// Stacks four column vectors of one batch size into an N×4 batch.
fn stack_columns(columns: [&Array1<f64>; 4]) -> Array2<f64> {
    let rows = columns[0].len();
    let mut batch = Array2::zeros((rows, 4));
    for (i, column) in columns.into_iter().enumerate() {
        batch.column_mut(i).assign(column);
    }
    batch
}

fn corners_from_top_left(top_left: &Coordinates, size: &Size) -> [Coordinates; 4] {
    let x_right = &top_left.x + &size.w;
    let y_bottom = &top_left.y + &size.h;
    [
        top_left.clone(),
        Coordinates::new(x_right.clone(), top_left.y.clone()),
        Coordinates::new(x_right, y_bottom.clone()),
        Coordinates::new(top_left.x.clone(), y_bottom),
    ]
}

fn corners_from_bottom_left(bottom_left: &Coordinates, size: &Size) -> [Coordinates; 4] {
    let x_right = &bottom_left.x + &size.w;
    let y_top = &bottom_left.y - &size.h;
    [
        Coordinates::new(bottom_left.x.clone(), y_top.clone()),
        Coordinates::new(x_right.clone(), y_top),
        Coordinates::new(x_right, bottom_left.y.clone()),
        bottom_left.clone(),
    ]
}

fn corners_from_center(center: &Coordinates, size: &Size) -> [Coordinates; 4] {
    let half_w = &size.w / 2.0;
    let half_h = &size.h / 2.0;
    let x_left = &center.x - &half_w;
    let x_right = &center.x + &half_w;
    let y_top = &center.y - &half_h;
    let y_bottom = &center.y + &half_h;
    [
        Coordinates::new(x_left.clone(), y_top.clone()),
        Coordinates::new(x_right.clone(), y_top),
        Coordinates::new(x_right, y_bottom.clone()),
        Coordinates::new(x_left, y_bottom),
    ]
}

fn corners_from_two_corners(top_left: Coordinates, bottom_right: Coordinates) -> [Coordinates; 4] {
    let corner_2 = Coordinates::new(bottom_right.x.clone(), top_left.y.clone());
    let corner_4 = Coordinates::new(top_left.x.clone(), bottom_right.y.clone());
    [top_left, corner_2, bottom_right, corner_4]
}

fn size_from_two_corners(top_left: &Coordinates, bottom_right: &Coordinates) -> Size {
    Size::new(
        &bottom_right.x - &top_left.x,
        &bottom_right.y - &top_left.y,
    )
}

/// Center is the average of opposite corners: x from 1 and 2, y from 1
/// and 3.
fn center_from_corners(corners: &[Coordinates; 4]) -> Coordinates {
    let x_c = (&corners[0].x + &corners[1].x) / 2.0;
    let y_c = (&corners[0].y + &corners[2].y) / 2.0;
    Coordinates::new(x_c, y_c)
}

fn min_extent(values: &Array1<f64>) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Truncates a corner coordinate toward zero and clamps it into the grid.
fn grid_index(value: f64, bound: u32) -> usize {
    value.trunc().clamp(0.0, f64::from(bound)) as usize
}

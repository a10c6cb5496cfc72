#![allow(dead_code)]

use ndarray::{array, Array2, Array3};

/// The same two-box geometry in every parameterization: a 3×2 box at the
/// image origin and a 10×10 box at (10, 10), top-left origin.
pub fn top_left_batch() -> Array2<f64> {
    array![[0.0, 0.0, 3.0, 2.0], [10.0, 10.0, 10.0, 10.0]]
}

pub fn bottom_left_batch() -> Array2<f64> {
    array![[0.0, 2.0, 3.0, 2.0], [10.0, 20.0, 10.0, 10.0]]
}

pub fn center_batch() -> Array2<f64> {
    array![[1.5, 1.0, 3.0, 2.0], [15.0, 15.0, 10.0, 10.0]]
}

pub fn two_corners_batch() -> Array2<f64> {
    array![[0.0, 0.0, 3.0, 2.0], [10.0, 10.0, 20.0, 20.0]]
}

pub fn squared_center_batch() -> Array2<f64> {
    array![[1.5, 1.0, 3.0, 3.0], [15.0, 15.0, 10.0, 10.0]]
}

pub const IMAGE_HEIGHT: f64 = 30.0;

/// `top_left_batch` after one origin flip against `IMAGE_HEIGHT`.
pub fn flipped_top_left_batch() -> Array2<f64> {
    array![[0.0, 30.0, 3.0, 2.0], [10.0, 20.0, 10.0, 10.0]]
}

pub const MASK_DIMENSION: (u32, u32) = (10, 10);

/// A single box to rasterize: center (1.5, 1.0), size 3×2, so corner 1
/// sits at (0, 0) and corner 3 at (3, 2).
pub fn mask_center_batch() -> Array2<f64> {
    array![[1.5, 1.0, 3.0, 2.0]]
}

pub fn expected_mask() -> Array3<u8> {
    array![[
        [0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ]]
}

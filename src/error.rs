use thiserror::Error;

/// The main error type for panbox operations.
#[derive(Debug, Error)]
pub enum PanboxError {
    /// A batch passed to a constructor did not have four columns.
    #[error("expected a boxes batch of shape (n, 4), got ({rows}, {cols})")]
    ShapeMismatch { rows: usize, cols: usize },

    /// The four corners and the center do not share one batch size.
    #[error("corner and center batch sizes disagree: {sizes:?}")]
    BatchSizeMismatch { sizes: [usize; 5] },

    /// An output accessor was used before any projection method.
    #[error(
        "one of the methods `to_top_left`, `to_bottom_left`, `to_center` \
         or `to_two_corners` must be called first"
    )]
    MissingProjection,

    /// A mask or flip bound does not reach the smallest box extent.
    #[error("`{name}` ({given}) must be higher than the smallest box {name} ({minimum})")]
    InvalidDimension {
        name: &'static str,
        given: f64,
        minimum: f64,
    },
}

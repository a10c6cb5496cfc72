//! Lazily materialized projection state.

use ndarray::Array2;

use crate::error::PanboxError;

/// The per-instance projection state of a [`Boxes`](super::Boxes) value.
///
/// A fresh instance starts in `Constructed`; the first `to_*` call moves
/// it to `Projected` with the materialized N×4 batch, and later `to_*`
/// calls replace that batch. Nothing else transitions the state: derived
/// operations leave a recorded projection in place, and only constructing
/// a new instance resets it.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    /// No projection method has run yet.
    Constructed,
    /// The batch produced by the most recent projection method.
    Projected(Array2<f64>),
}

impl Projection {
    /// Records a freshly materialized batch.
    #[inline]
    pub(crate) fn record(&mut self, batch: Array2<f64>) {
        *self = Projection::Projected(batch);
    }

    /// Returns the recorded batch, or fails if none has been materialized.
    pub(crate) fn batch(&self) -> Result<&Array2<f64>, PanboxError> {
        match self {
            Projection::Projected(batch) => Ok(batch),
            Projection::Constructed => Err(PanboxError::MissingProjection),
        }
    }
}

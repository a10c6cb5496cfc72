//! The vertical-axis convention attached to a batch of boxes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which direction increasing `y` points.
///
/// `TopLeft` is the image convention (y grows downward), `BottomLeft` the
/// mathematical one (y grows upward). The origin is purely a label: it
/// never changes the stored coordinate values, only how
/// [`flip_origin`](super::Boxes::flip_origin) and the corner-based
/// constructors are meant to be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// (0, 0) at the top-left corner, y grows downward.
    #[default]
    TopLeft,
    /// (0, 0) at the bottom-left corner, y grows upward.
    BottomLeft,
}

impl Origin {
    /// Returns the opposite convention.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Origin::TopLeft => Origin::BottomLeft,
            Origin::BottomLeft => Origin::TopLeft,
        }
    }

    /// Returns the canonical name of the convention.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Origin::TopLeft => "top-left",
            Origin::BottomLeft => "bottom-left",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

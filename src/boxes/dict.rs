//! Always-available output forms: the corner dict and the flat tuple.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// One coordinate pair in dict form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordDict {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// The size entry in dict form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeDict {
    pub w: Vec<f64>,
    pub h: Vec<f64>,
}

/// A batch of boxes keyed by corner id.
///
/// Serializes under the stable keys `"1"`..`"4"` for the corners
/// (top-left, top-right, bottom-right, bottom-left), `"c"` for the
/// center and `"size"` for the extents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxesDict {
    #[serde(rename = "1")]
    pub corner_1: CoordDict,
    #[serde(rename = "2")]
    pub corner_2: CoordDict,
    #[serde(rename = "3")]
    pub corner_3: CoordDict,
    #[serde(rename = "4")]
    pub corner_4: CoordDict,
    #[serde(rename = "c")]
    pub center: CoordDict,
    pub size: SizeDict,
}

/// The flat tuple form of a batch:
/// `(x1, y1, x2, y2, x3, y3, x4, y4, xc, yc, w, h)`.
pub type BoxesTuple<'a> = (
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
    &'a Array1<f64>,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(x: f64, y: f64) -> CoordDict {
        CoordDict {
            x: vec![x],
            y: vec![y],
        }
    }

    #[test]
    fn dict_serializes_under_corner_id_keys() {
        let dict = BoxesDict {
            corner_1: pair(0.0, 0.0),
            corner_2: pair(3.0, 0.0),
            corner_3: pair(3.0, 2.0),
            corner_4: pair(0.0, 2.0),
            center: pair(1.5, 1.0),
            size: SizeDict {
                w: vec![3.0],
                h: vec![2.0],
            },
        };

        let value = serde_json::to_value(&dict).unwrap();
        for key in ["1", "2", "3", "4", "c", "size"] {
            assert!(value.get(key).is_some(), "missing key {:?}", key);
        }
        assert_eq!(value["c"]["x"][0], 1.5);
        assert_eq!(value["size"]["h"][0], 2.0);
    }

    #[test]
    fn dict_roundtrips_through_json() {
        let dict = BoxesDict {
            corner_1: pair(0.0, 0.0),
            corner_2: pair(3.0, 0.0),
            corner_3: pair(3.0, 2.0),
            corner_4: pair(0.0, 2.0),
            center: pair(1.5, 1.0),
            size: SizeDict {
                w: vec![3.0],
                h: vec![2.0],
            },
        };

        let json = serde_json::to_string(&dict).unwrap();
        let parsed: BoxesDict = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dict);
    }
}

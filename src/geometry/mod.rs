mod bbox;

use std::fmt;
use std::str::FromStr;

pub use bbox::{compute_bbox, BoundingBox, BoundingBoxBuilder};

/// How arcs contribute to a bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BBoxMode {
    /// Arc centre plus the square at `radius / sqrt(2)` around it,
    /// regardless of sweep.
    #[default]
    Approximate,
    /// True extent of the swept arc.
    Exact,
}

impl FromStr for BBoxMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approx" | "approximate" => Ok(BBoxMode::Approximate),
            "exact" => Ok(BBoxMode::Exact),
            _ => Err(format!("Unknown bbox mode: {s}")),
        }
    }
}

impl fmt::Display for BBoxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BBoxMode::Approximate => f.write_str("approx"),
            BBoxMode::Exact => f.write_str("exact"),
        }
    }
}

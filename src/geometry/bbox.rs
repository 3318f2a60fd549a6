use std::f64::consts::SQRT_2;
use std::fmt;

use crate::primitives::{Arc, Line};

use super::BBoxMode;

/// `BoundingBox` defines an axis-aligned rectangular region in domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Accumulates points into a `BoundingBox`.
///
/// Starts from sentinel extremes (min at +inf, max at -inf); every point is
/// compared against both bounds.
#[derive(Debug, Clone)]
pub struct BoundingBoxBuilder {
    bbox: BoundingBox,
    count: usize,
}

impl Default for BoundingBoxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBoxBuilder {
    pub fn new() -> Self {
        Self {
            bbox: BoundingBox {
                min_x: f64::INFINITY,
                max_x: f64::NEG_INFINITY,
                min_y: f64::INFINITY,
                max_y: f64::NEG_INFINITY,
            },
            count: 0,
        }
    }

    pub fn extend_x(&mut self, x: f64) -> &mut Self {
        let b = &mut self.bbox;
        if x < b.min_x {
            b.min_x = x;
        }
        if x > b.max_x {
            b.max_x = x;
        }
        self
    }

    pub fn extend_y(&mut self, y: f64) -> &mut Self {
        let b = &mut self.bbox;
        if y < b.min_y {
            b.min_y = y;
        }
        if y > b.max_y {
            b.max_y = y;
        }
        self
    }

    pub fn extend_point(&mut self, (x, y): (f64, f64)) -> &mut Self {
        self.count += 1;
        self.extend_x(x).extend_y(y)
    }

    pub fn extend(&mut self, bbox: BoundingBox) -> &mut Self {
        self.extend_point((bbox.min_x, bbox.min_y))
            .extend_point((bbox.max_x, bbox.max_y))
    }

    pub fn add_line(&mut self, line: &Line) -> &mut Self {
        self.extend_point(line.start()).extend_point(line.end())
    }

    /// Fold in an arc using the centre plus the `radius / sqrt(2)` square
    /// around it. This is not the true arc extent.
    pub fn add_arc_approx(&mut self, arc: &Arc) -> &mut Self {
        let (cx, cy) = arc.center();
        let r = arc.radius / SQRT_2;
        self.extend_point((cx, cy))
            .extend_point((cx - r, cy - r))
            .extend_point((cx + r, cy - r))
            .extend_point((cx - r, cy + r))
            .extend_point((cx + r, cy + r))
    }

    /// Fold in the true extent of an arc swept anticlockwise (Y up) from
    /// `arc_start` by `arc_extend` degrees.
    pub fn add_arc_exact(&mut self, arc: &Arc) -> &mut Self {
        let (cx, cy) = arc.center();
        let r = arc.radius;
        let from = arc.arc_start;
        let to = arc.arc_start + arc.arc_extend;
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };

        if hi - lo >= 360. {
            return self.extend(BoundingBox::new(cx - r, cx + r, cy - r, cy + r));
        }

        let at = |deg: f64| {
            let rad = deg.to_radians();
            (cx + r * rad.cos(), cy + r * rad.sin())
        };
        self.extend_point(at(lo)).extend_point(at(hi));

        // Quadrant extremes crossed by the sweep; exact values avoid cos/sin noise.
        let first = (lo / 90.).ceil() as i64;
        let last = (hi / 90.).floor() as i64;
        for k in first..=last {
            let p = match k.rem_euclid(4) {
                0 => (cx + r, cy),
                1 => (cx, cy + r),
                2 => (cx - r, cy),
                _ => (cx, cy - r),
            };
            self.extend_point(p);
        }
        self
    }

    pub fn add_arc(&mut self, arc: &Arc, mode: BBoxMode) -> &mut Self {
        match mode {
            BBoxMode::Approximate => self.add_arc_approx(arc),
            BBoxMode::Exact => self.add_arc_exact(arc),
        }
    }

    /// Returns `None` if no points were added.
    pub fn build(&self) -> Option<BoundingBox> {
        (self.count > 0).then_some(self.bbox)
    }
}

/// Axis-aligned extent of every line and arc, or `None` if both are empty.
pub fn compute_bbox(lines: &[Line], arcs: &[Arc], mode: BBoxMode) -> Option<BoundingBox> {
    let mut builder = BoundingBoxBuilder::new();
    for line in lines {
        builder.add_line(line);
    }
    for arc in arcs {
        builder.add_arc(arc, mode);
    }
    builder.build()
}

impl BoundingBox {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min_x: {} max_x: {} min_y: {} max_y: {}",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

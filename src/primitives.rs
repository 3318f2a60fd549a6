use std::fmt;

use crate::color::Color;
use crate::errors::{Error, Result};
use crate::geometry::{compute_bbox, BBoxMode, BoundingBox};

/// A straight segment in domain space (origin bottom-left, Y up).
///
/// Endpoints are not ordered; `x_start` may be greater than `x_end`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
pub struct Line {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
    pub color: Color,
}

impl Line {
    pub fn new(x_start: f64, x_end: f64, y_start: f64, y_end: f64, color: Color) -> Self {
        Self {
            x_start,
            x_end,
            y_start,
            y_end,
            color,
        }
    }

    pub fn start(&self) -> (f64, f64) {
        (self.x_start, self.y_start)
    }

    pub fn end(&self) -> (f64, f64) {
        (self.x_end, self.y_end)
    }
}

/// A circular arc in domain space.
///
/// `arc_start` and `arc_extend` are in degrees; `arc_extend` is the signed
/// sweep from `arc_start`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
pub struct Arc {
    pub x_center: f64,
    pub y_center: f64,
    pub radius: f64,
    pub arc_start: f64,
    pub arc_extend: f64,
    pub color: Color,
}

impl Arc {
    pub fn new(
        x_center: f64,
        y_center: f64,
        radius: f64,
        arc_start: f64,
        arc_extend: f64,
        color: Color,
    ) -> Self {
        Self {
            x_center,
            y_center,
            radius,
            arc_start,
            arc_extend,
            color,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x_center, self.y_center)
    }
}

/// Lines and arcs loaded from a single document, each in document order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
pub struct Drawing {
    pub lines: Vec<Line>,
    pub arcs: Vec<Arc>,
}

impl Drawing {
    pub fn new(lines: Vec<Line>, arcs: Vec<Arc>) -> Self {
        Self { lines, arcs }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.arcs.is_empty()
    }

    /// Total number of primitives.
    pub fn len(&self) -> usize {
        self.lines.len() + self.arcs.len()
    }

    pub fn bbox(&self, mode: BBoxMode) -> Result<BoundingBox> {
        compute_bbox(&self.lines, &self.arcs, mode).ok_or(Error::EmptyDrawing)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line ({}, {}) -> ({}, {}) {}",
            self.x_start, self.y_start, self.x_end, self.y_end, self.color
        )
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc ({}, {}) r={} start={} extend={} {}",
            self.x_center, self.y_center, self.radius, self.arc_start, self.arc_extend, self.color
        )
    }
}

/// One primitive per line; lines first, then arcs.
impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let lines = self.lines.iter().map(|l| l as &dyn fmt::Display);
        for item in lines.chain(self.arcs.iter().map(|a| a as &dyn fmt::Display)) {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        Ok(())
    }
}

//! Mapping from domain-space primitives to canvas drawing commands.
//!
//! Domain space has its origin bottom-left with Y increasing upward; canvas
//! space has its origin top-left with Y increasing downward. Canvas angles
//! are in degrees, clockwise on screen from the ellipse's (rotated) major axis.

#[cfg(feature = "png")]
mod png;
mod svg;

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::color::Rgb;
use crate::errors::{Error, Result};
use crate::primitives::{Arc, Drawing, Line};
use crate::DrawConfig;

#[cfg(feature = "png")]
pub use png::PngCanvas;
pub use svg::SvgCanvas;

pub type Point = (f64, f64);

/// A single call to be made on a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Segment {
        from: Point,
        to: Point,
        color: Rgb,
    },
    EllipseArc {
        center: Point,
        radii: (f64, f64),
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        color: Rgb,
    },
}

/// Converts primitives into canvas-space [`DrawCommand`]s for a canvas of
/// the given height. X is unchanged, so the width plays no part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    height: f64,
}

impl RenderTransform {
    /// Rotation applied to every arc's ellipse.
    pub const ARC_ROTATION: f64 = 90.;

    pub fn new(height: u32) -> Self {
        Self {
            height: height.into(),
        }
    }

    pub fn point(&self, (x, y): Point) -> Point {
        (x, self.height - y)
    }

    pub fn line(&self, line: &Line) -> DrawCommand {
        DrawCommand::Segment {
            from: self.point(line.start()),
            to: self.point(line.end()),
            color: line.color.rgb(),
        }
    }

    /// Arcs are always circular. The end angle is `360 - start + extend`,
    /// not `start + extend`; this reconciles the document's angle convention
    /// with the canvas one.
    pub fn arc(&self, arc: &Arc) -> DrawCommand {
        DrawCommand::EllipseArc {
            center: self.point(arc.center()),
            radii: (arc.radius, arc.radius),
            rotation: Self::ARC_ROTATION,
            start_angle: arc.arc_start,
            end_angle: 360. - arc.arc_start + arc.arc_extend,
            color: arc.color.rgb(),
        }
    }

    /// All lines (in order) followed by all arcs (in order).
    pub fn commands(&self, drawing: &Drawing) -> Vec<DrawCommand> {
        drawing
            .lines
            .iter()
            .map(|l| self.line(l))
            .chain(drawing.arcs.iter().map(|a| self.arc(a)))
            .collect()
    }
}

/// Order a sweep so `start <= end`, limiting it to a single turn.
pub fn normalize_sweep(start: f64, end: f64) -> (f64, f64) {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    if end - start > 360. {
        (start, start + 360.)
    } else {
        (start, end)
    }
}

/// Point at `angle` degrees on an ellipse rotated by `rotation` degrees,
/// both measured clockwise in canvas space.
pub fn ellipse_point(center: Point, radii: (f64, f64), rotation: f64, angle: f64) -> Point {
    let (sin_r, cos_r) = rotation.to_radians().sin_cos();
    let (sin_a, cos_a) = angle.to_radians().sin_cos();
    let x = radii.0 * cos_a;
    let y = radii.1 * sin_a;
    (
        center.0 + x * cos_r - y * sin_r,
        center.1 + x * sin_r + y * cos_r,
    )
}

/// Flatten an elliptical arc into a polyline with at most `max_step`
/// degrees between successive points.
pub fn arc_polyline(
    center: Point,
    radii: (f64, f64),
    rotation: f64,
    (start, end): (f64, f64),
    max_step: f64,
) -> Vec<Point> {
    let (start, end) = normalize_sweep(start, end);
    let steps = ((end - start) / max_step).ceil().max(1.) as usize;
    let step = (end - start) / steps as f64;
    (0..=steps)
        .map(|i| ellipse_point(center, radii, rotation, start + step * i as f64))
        .collect()
}

/// A drawing surface accepting line and elliptical arc commands.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb);

    fn draw_arc(
        &mut self,
        center: Point,
        radii: (f64, f64),
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        color: Rgb,
    );

    /// Encode the canvas contents to `writer`.
    fn write_to(&self, writer: &mut dyn Write) -> Result<()>;

    fn draw(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Segment { from, to, color } => self.draw_line(from, to, color),
            DrawCommand::EllipseArc {
                center,
                radii,
                rotation,
                start_angle,
                end_angle,
                color,
            } => self.draw_arc(center, radii, rotation, start_angle, end_angle, color),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    /// Format implied by a file extension, if recognised.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        ext.parse().ok()
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Svg => f.write_str("svg"),
            OutputFormat::Png => f.write_str("png"),
        }
    }
}

fn new_canvas(config: &DrawConfig) -> Result<Box<dyn Canvas>> {
    match config.format {
        OutputFormat::Svg => Ok(Box::new(SvgCanvas::new(
            config.width,
            config.height,
            config.background,
        ))),
        #[cfg(feature = "png")]
        OutputFormat::Png => Ok(Box::new(PngCanvas::new(
            config.width,
            config.height,
            config.background,
        )?)),
        #[cfg(not(feature = "png"))]
        OutputFormat::Png => Err(Error::Render(
            "PNG output requires the 'png' feature".to_owned(),
        )),
    }
}

/// Render `drawing` onto a new canvas as described by `config`, writing the
/// encoded image to `writer`.
pub fn render_drawing(drawing: &Drawing, config: &DrawConfig, writer: &mut dyn Write) -> Result<()> {
    if config.width == 0 || config.height == 0 {
        return Err(Error::Render(format!(
            "invalid canvas size {}x{}",
            config.width, config.height
        )));
    }
    let transform = RenderTransform::new(config.height);
    let mut canvas = new_canvas(config)?;
    let commands = transform.commands(drawing);
    log::debug!("rendering {} commands as {}", commands.len(), config.format);
    for command in &commands {
        canvas.draw(command);
    }
    canvas.write_to(writer)
}

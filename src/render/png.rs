//! Raster output using tiny-skia

use std::io::Write;

use tiny_skia::{Color as SkColor, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::{arc_polyline, Canvas, Point};
use crate::color::Rgb;
use crate::errors::{Error, Result};

/// Maximum angle (degrees) between polyline points when flattening arcs
const ARC_STEP: f64 = 2.;

const STROKE_WIDTH: f32 = 1.;

pub struct PngCanvas {
    pixmap: Pixmap,
}

impl PngCanvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Render(format!("invalid canvas size {width}x{height}")))?;
        pixmap.fill(SkColor::from_rgba8(background.0, background.1, background.2, 255));
        Ok(Self { pixmap })
    }

    fn stroke(&mut self, path: Option<tiny_skia::Path>, color: Rgb) {
        let Some(path) = path else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.0, color.1, color.2, 255);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: STROKE_WIDTH,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// RGBA value at the given pixel, if in range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some((p.red(), p.green(), p.blue(), p.alpha()))
    }
}

impl Canvas for PngCanvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0 as f32, from.1 as f32);
        pb.line_to(to.0 as f32, to.1 as f32);
        self.stroke(pb.finish(), color);
    }

    fn draw_arc(
        &mut self,
        center: Point,
        radii: (f64, f64),
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        color: Rgb,
    ) {
        if start_angle == end_angle {
            return;
        }
        let points = arc_polyline(center, radii, rotation, (start_angle, end_angle), ARC_STEP);
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.0 as f32, first.1 as f32);
        for p in rest {
            pb.line_to(p.0 as f32, p.1 as f32);
        }
        self.stroke(pb.finish(), color);
    }

    fn write_to(&self, writer: &mut dyn Write) -> Result<()> {
        let data = self
            .pixmap
            .encode_png()
            .map_err(|e| Error::Render(format!("PNG encoding failed: {e}")))?;
        writer.write_all(&data)?;
        Ok(())
    }
}

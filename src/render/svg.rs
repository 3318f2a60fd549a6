use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event as XmlEvent};
use quick_xml::Writer;

use super::{ellipse_point, normalize_sweep, Canvas, Point};
use crate::color::Rgb;
use crate::errors::{Error, Result};

/// Return a 'minimal' representation of the given number
fn fstr(x: f64) -> String {
    if x == (x as i64) as f64 {
        return (x as i64).to_string();
    }
    let result = format!("{x:.3}");
    if result.contains('.') {
        match result.trim_end_matches('0').trim_end_matches('.') {
            "-0" => "0".into(),
            trimmed => trimmed.into(),
        }
    } else {
        result
    }
}

fn fpair((x, y): Point) -> String {
    format!("{} {}", fstr(x), fstr(y))
}

/// Canvas producing an SVG document of `<line>` and `<path>` elements.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    background: Rgb,
    elements: Vec<BytesStart<'static>>,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            width,
            height,
            background,
            elements: Vec::new(),
        }
    }

    /// Path data for an arc; a full turn is drawn as two half-turn segments
    /// since a single SVG arc cannot start and end at the same point.
    fn arc_path(center: Point, radii: (f64, f64), rotation: f64, start: f64, end: f64) -> String {
        let (start, end) = normalize_sweep(start, end);
        let at = |angle| ellipse_point(center, radii, rotation, angle);
        let arc_cmd = |large: bool, to: Point| {
            format!(
                "A {} {} {} {} 1 {}",
                fstr(radii.0),
                fstr(radii.1),
                fstr(rotation),
                u8::from(large),
                fpair(to)
            )
        };

        let mut d = format!("M {}", fpair(at(start)));
        if end - start >= 360. {
            d.push(' ');
            d.push_str(&arc_cmd(false, at(start + 180.)));
            d.push(' ');
            d.push_str(&arc_cmd(false, at(start)));
        } else {
            d.push(' ');
            d.push_str(&arc_cmd(end - start > 180., at(end)));
        }
        d
    }
}

impl Canvas for SvgCanvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) {
        let mut el = BytesStart::new("line");
        el.push_attribute(("x1", fstr(from.0).as_str()));
        el.push_attribute(("y1", fstr(from.1).as_str()));
        el.push_attribute(("x2", fstr(to.0).as_str()));
        el.push_attribute(("y2", fstr(to.1).as_str()));
        el.push_attribute(("stroke", color.to_hex().as_str()));
        self.elements.push(el);
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
        let d = Self::arc_path(center, radii, rotation, start_angle, end_angle);
        let mut el = BytesStart::new("path");
        el.push_attribute(("d", d.as_str()));
        el.push_attribute(("fill", "none"));
        el.push_attribute(("stroke", color.to_hex().as_str()));
        self.elements.push(el);
    }

    fn write_to(&self, writer: &mut dyn Write) -> Result<()> {
        let mut writer = Writer::new_with_indent(writer, b' ', 2);
        let width = self.width.to_string();
        let height = self.height.to_string();
        let view_box = format!("0 0 {width} {height}");

        let svg = BytesStart::new("svg").with_attributes([
            ("xmlns", "http://www.w3.org/2000/svg"),
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("viewBox", view_box.as_str()),
        ]);
        writer
            .write_event(XmlEvent::Start(svg))
            .map_err(Error::from_err)?;

        let background = self.background.to_hex();
        let rect = BytesStart::new("rect").with_attributes([
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("fill", background.as_str()),
        ]);
        writer
            .write_event(XmlEvent::Empty(rect))
            .map_err(Error::from_err)?;

        for el in &self.elements {
            writer
                .write_event(XmlEvent::Empty(el.borrow()))
                .map_err(Error::from_err)?;
        }
        writer
            .write_event(XmlEvent::End(BytesEnd::new("svg")))
            .map_err(Error::from_err)?;
        writer.get_mut().write_all(b"\n")?;
        Ok(())
    }
}

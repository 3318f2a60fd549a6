//! Converts a generic [`Document`] tree into a typed [`Drawing`].
//!
//! Every child of the root must be a `Line` or an `Arc`, and every child of
//! those must be one of the primitive's known fields. All schema violations
//! in a document are collected; if there are any, no `Drawing` is produced.

use crate::color::Color;
use crate::document::{Document, NodeRef};
use crate::errors::{Error, Result};
use crate::primitives::{Arc, Drawing, Line};

enum FieldError {
    NotANumber,
    BadColor,
}

type FieldResult = std::result::Result<(), FieldError>;

/// Finite numeric value; `NaN` and `inf` are rejected.
fn number(text: &str) -> std::result::Result<f64, FieldError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FieldError::NotANumber)
}

fn color(text: &str) -> std::result::Result<Color, FieldError> {
    Color::parse(text).map_err(|_| FieldError::BadColor)
}

/// A primitive which can be populated field-by-field from element children.
trait Schema: Default {
    const ELEMENT: &'static str;
    const FIELDS: &'static [&'static str];

    /// Set the field named `FIELDS[index]` from its text value.
    fn set_field(&mut self, index: usize, text: &str) -> FieldResult;
}

impl Schema for Line {
    const ELEMENT: &'static str = "Line";
    const FIELDS: &'static [&'static str] = &["XStart", "XEnd", "YStart", "YEnd", "Color"];

    fn set_field(&mut self, index: usize, text: &str) -> FieldResult {
        match index {
            0 => self.x_start = number(text)?,
            1 => self.x_end = number(text)?,
            2 => self.y_start = number(text)?,
            3 => self.y_end = number(text)?,
            _ => self.color = color(text)?,
        }
        Ok(())
    }
}

impl Schema for Arc {
    const ELEMENT: &'static str = "Arc";
    const FIELDS: &'static [&'static str] = &[
        "XCenter",
        "YCenter",
        "Radius",
        "ArcStart",
        "ArcExtend",
        "Color",
    ];

    fn set_field(&mut self, index: usize, text: &str) -> FieldResult {
        match index {
            0 => self.x_center = number(text)?,
            1 => self.y_center = number(text)?,
            2 => self.radius = number(text)?,
            3 => self.arc_start = number(text)?,
            4 => self.arc_extend = number(text)?,
            _ => self.color = color(text)?,
        }
        Ok(())
    }
}

fn load_element<T: Schema>(node: NodeRef, strict: bool, errors: &mut Vec<Error>) -> T {
    let mut item = T::default();
    let mut seen = vec![false; T::FIELDS.len()];

    for child in node.children() {
        let field = child.name();
        let Some(index) = T::FIELDS.iter().position(|f| *f == field) else {
            errors.push(Error::UnknownField {
                element: T::ELEMENT.to_owned(),
                field: field.to_owned(),
                line: child.line(),
            });
            continue;
        };
        seen[index] = true;

        let text = child.text();
        match item.set_field(index, text) {
            Ok(()) => {}
            Err(FieldError::NotANumber) => errors.push(Error::MalformedNumber {
                element: T::ELEMENT.to_owned(),
                field: field.to_owned(),
                value: text.to_owned(),
                line: child.line(),
            }),
            Err(FieldError::BadColor) => errors.push(Error::UnrecognizedColor {
                token: text.to_owned(),
                line: Some(child.line()),
            }),
        }
    }

    if strict {
        for (field, _) in T::FIELDS.iter().zip(&seen).filter(|(_, seen)| !**seen) {
            errors.push(Error::MissingField {
                element: T::ELEMENT.to_owned(),
                field: (*field).to_owned(),
                line: node.line(),
            });
        }
    }
    item
}

/// Build a `Drawing` from a parsed document.
///
/// With `strict` set, every field of every primitive must be present;
/// otherwise absent fields keep their zero / white default.
pub fn load_document(doc: &Document, strict: bool) -> Result<Drawing> {
    let root = doc.root();
    log::debug!("root element '{}'", root.name());

    let mut drawing = Drawing::default();
    let mut errors = Vec::new();

    for node in root.children() {
        log::debug!("{} at line {}", node.name(), node.line());
        match node.name() {
            "Line" => drawing.lines.push(load_element(node, strict, &mut errors)),
            "Arc" => drawing.arcs.push(load_element(node, strict, &mut errors)),
            other => errors.push(Error::UnknownElement {
                name: other.to_owned(),
                line: node.line(),
            }),
        }
    }

    if let Some(err) = Error::from_list(errors) {
        return Err(err);
    }
    log::debug!(
        "loaded {} lines and {} arcs",
        drawing.lines.len(),
        drawing.arcs.len()
    );
    Ok(drawing)
}

//! ## arcplot - bounding boxes and rendering for line/arc drawings
//!
//! `arcplot` reads an XML document describing a drawing as a flat list of
//! `<Line>` and `<Arc>` elements, each with a colour, and derives two views
//! from it: an axis-aligned bounding box enclosing every primitive, and an
//! image (SVG or PNG) of the primitives on a canvas with a flipped Y-axis.
//!
//! ## Input format
//!
//! ```xml
//! <Drawing>
//!   <Line>
//!     <XStart>0</XStart><XEnd>10</XEnd><YStart>0</YStart><YEnd>5</YEnd>
//!     <Color>red</Color>
//!   </Line>
//!   <Arc>
//!     <XCenter>5</XCenter><YCenter>5</YCenter><Radius>10</Radius>
//!     <ArcStart>0</ArcStart><ArcExtend>90</ArcExtend>
//!     <Color>blue</Color>
//!   </Arc>
//! </Drawing>
//! ```
//!
//! ## Example
//!
//! ```
//! let cfg = arcplot::DrawConfig::default();
//!
//! let input = r#"<Drawing><Line>
//!     <XStart>0</XStart><XEnd>10</XEnd><YStart>0</YStart><YEnd>5</YEnd>
//! </Line></Drawing>"#;
//! let drawing = arcplot::load_str(input, &cfg).unwrap();
//! let bbox = drawing.bbox(cfg.bbox_mode).unwrap();
//! assert_eq!((bbox.min_x, bbox.max_x, bbox.min_y, bbox.max_y), (0., 10., 0., 5.));
//!
//! let mut svg = Vec::new();
//! arcplot::render_drawing(&drawing, &cfg, &mut svg).unwrap();
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod document;
pub mod errors;
pub mod geometry;
mod loader;
pub mod primitives;
pub mod render;

pub use color::{Color, Rgb};
pub use document::Document;
pub use errors::{Error, Result};
pub use geometry::{compute_bbox, BBoxMode, BoundingBox};
pub use loader::load_document;
pub use primitives::{Arc, Drawing, Line};
pub use render::{render_drawing, OutputFormat, RenderTransform};

// Allow users of this as a library to easily retrieve the version of arcplot being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings for loading and rendering a single drawing.
#[derive(Clone, Debug)]
pub struct DrawConfig {
    /// Canvas width in pixels (default 1000)
    pub width: u32,
    /// Canvas height in pixels (default 1000)
    pub height: u32,
    /// Canvas background colour (default black)
    pub background: Rgb,
    /// How arcs contribute to the bounding box
    pub bbox_mode: BBoxMode,
    /// Require every field of every primitive to be present
    pub strict: bool,
    /// Encoding used by `render_drawing`
    pub format: OutputFormat,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            background: Rgb::BLACK,
            bbox_mode: BBoxMode::default(),
            strict: false,
            format: OutputFormat::default(),
        }
    }
}

/// Load a drawing from the `reader` stream.
///
/// The entire stream is parsed before any primitive is produced; on error no
/// partial drawing is returned.
pub fn load_reader(reader: &mut dyn BufRead, config: &DrawConfig) -> Result<Drawing> {
    let doc = Document::from_reader(reader)?;
    load_document(&doc, config.strict)
}

/// Load a drawing from XML text.
pub fn load_str(input: &str, config: &DrawConfig) -> Result<Drawing> {
    load_document(&Document::parse_str(input)?, config.strict)
}

/// Load a drawing from the file at `path`.
pub fn load_file(path: impl AsRef<Path>, config: &DrawConfig) -> Result<Drawing> {
    let mut reader = BufReader::new(File::open(path)?);
    load_reader(&mut reader, config)
}

/// Bounding box of a drawing given as XML text.
pub fn bbox_str(input: &str, config: &DrawConfig) -> Result<BoundingBox> {
    load_str(input, config)?.bbox(config.bbox_mode)
}

/// Render a drawing given as XML text to SVG, returning the SVG document.
pub fn render_str(input: &str, config: &DrawConfig) -> Result<String> {
    let drawing = load_str(input, config)?;
    let cfg = DrawConfig {
        format: OutputFormat::Svg,
        ..config.clone()
    };
    let mut output: Vec<u8> = vec![];
    render_drawing(&drawing, &cfg, &mut output)?;
    Ok(String::from_utf8(output)?)
}

use arcplot::{BoundingBox, DrawConfig};

/// A document containing a single line with the given coordinates.
pub fn line_doc(x1: f64, x2: f64, y1: f64, y2: f64, color: &str) -> String {
    format!(
        r#"<Drawing>
  <Line>
    <XStart>{x1}</XStart>
    <XEnd>{x2}</XEnd>
    <YStart>{y1}</YStart>
    <YEnd>{y2}</YEnd>
    <Color>{color}</Color>
  </Line>
</Drawing>"#
    )
}

pub fn arc_xml(x: f64, y: f64, r: f64, start: f64, extend: f64, color: &str) -> String {
    format!(
        r#"  <Arc>
    <XCenter>{x}</XCenter>
    <YCenter>{y}</YCenter>
    <Radius>{r}</Radius>
    <ArcStart>{start}</ArcStart>
    <ArcExtend>{extend}</ArcExtend>
    <Color>{color}</Color>
  </Arc>
"#
    )
}

pub fn render_default(input: &str) -> String {
    arcplot::render_str(input, &DrawConfig::default()).expect("render failure")
}

pub fn assert_bbox_near(actual: BoundingBox, expected: (f64, f64, f64, f64)) {
    let got = (actual.min_x, actual.max_x, actual.min_y, actual.max_y);
    let close = |a: f64, b: f64| (a - b).abs() < 1e-6;
    assert!(
        close(got.0, expected.0)
            && close(got.1, expected.1)
            && close(got.2, expected.2)
            && close(got.3, expected.3),
        "\n {got:?}\n != {expected:?}"
    );
}

use arcplot::{render_str, DrawConfig, Rgb};
use assertables::{assert_contains, assert_not_contains};

use super::utils::{arc_xml, line_doc, render_default};

#[test]
fn test_render_svg_root() {
    let svg = render_default(&line_doc(0., 10., 0., 5., "red"));
    assert_contains!(svg, r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    assert_contains!(svg, r#"width="1000" height="1000" viewBox="0 0 1000 1000""#);
    assert_contains!(svg, r##"<rect width="1000" height="1000" fill="#000000"/>"##);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_render_line_flip() {
    let svg = render_default(&line_doc(0., 0., 0., 100., "red"));
    assert_contains!(
        svg,
        r##"<line x1="0" y1="1000" x2="0" y2="900" stroke="#ff0000"/>"##
    );
}

#[test]
fn test_render_custom_canvas() {
    let cfg = DrawConfig {
        width: 200,
        height: 300,
        background: "#102030".parse::<Rgb>().unwrap(),
        ..Default::default()
    };
    let svg = render_str(&line_doc(1., 2., 10., 20., "green"), &cfg).unwrap();
    assert_contains!(svg, r#"viewBox="0 0 200 300""#);
    assert_contains!(svg, r##"fill="#102030""##);
    assert_contains!(
        svg,
        r##"<line x1="1" y1="290" x2="2" y2="280" stroke="#00cc00"/>"##
    );
}

#[test]
fn test_render_arc() {
    let input = format!("<Drawing>\n{}</Drawing>", arc_xml(500., 500., 100., 0., -180., "blue"));
    let svg = render_default(&input);
    assert_contains!(svg, "<path d=\"M ");
    assert_contains!(svg, r##"fill="none" stroke="#0000ff""##);
    assert_not_contains!(svg, "<line");
}

#[test]
fn test_render_arc_path() {
    // end angle 360 - 0 + -90 = 270; three quarters swept, so large-arc is set
    let input = format!("<Drawing>\n{}</Drawing>", arc_xml(500., 500., 100., 0., -90., "red"));
    let svg = render_default(&input);
    assert_contains!(
        svg,
        r##"<path d="M 500 600 A 100 100 90 1 1 600 500" fill="none" stroke="#ff0000"/>"##
    );
}

#[test]
fn test_render_zero_sweep_arc() {
    // end angle equals start angle: nothing drawn
    let input = format!("<Drawing>\n{}</Drawing>", arc_xml(500., 500., 100., 180., 0., "blue"));
    let svg = render_default(&input);
    assert_not_contains!(svg, "<path");
}

#[test]
fn test_render_lines_before_arcs() {
    let input = format!(
        "<Drawing>\n{}  <Line><XEnd>10</XEnd><Color>yellow</Color></Line>\n</Drawing>",
        arc_xml(50., 50., 10., 0., 45., "white")
    );
    let svg = render_default(&input);
    let line_pos = svg.find("<line").expect("line rendered");
    let path_pos = svg.find("<path").expect("arc rendered");
    assert!(line_pos < path_pos);
}

#[test]
fn test_render_empty_drawing() {
    let svg = render_default("<Drawing/>");
    assert_contains!(svg, "<rect");
    assert_not_contains!(svg, "<line");
    assert_not_contains!(svg, "<path");
}

#[test]
fn test_render_zero_size() {
    let cfg = DrawConfig {
        width: 0,
        ..Default::default()
    };
    assert!(render_str(&line_doc(0., 1., 0., 1., "red"), &cfg).is_err());
}

#[cfg(feature = "png")]
#[test]
fn test_render_png() {
    use arcplot::{render_drawing, Color, Drawing, Line, OutputFormat};

    let drawing = Drawing::new(vec![Line::new(0., 50., 10., 10., Color::White)], vec![]);
    let cfg = DrawConfig {
        width: 64,
        height: 64,
        format: OutputFormat::Png,
        ..Default::default()
    };
    let mut out = Vec::new();
    render_drawing(&drawing, &cfg, &mut out).unwrap();
    assert_eq!(&out[..8], b"\x89PNG\r\n\x1a\n");
}

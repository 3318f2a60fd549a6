// Schema and document errors: loading either yields a full drawing or nothing.

use assertables::assert_contains;
use arcplot::{load_str, DrawConfig, Error};

#[test]
fn test_error_unknown_element() {
    let input = r#"<Drawing>
  <Line><XStart>1</XStart></Line>
  <Triangle><XStart>1</XStart></Triangle>
</Drawing>"#;
    let err = load_str(input, &DrawConfig::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownElement { .. }));
    assert_contains!(err.to_string(), "line 3: unknown element 'Triangle'");
}

#[test]
fn test_error_unknown_field() {
    let input = "<Drawing>\n<Arc>\n<Diameter>3</Diameter>\n</Arc>\n</Drawing>";
    let err = load_str(input, &DrawConfig::default()).unwrap_err();
    assert_contains!(err.to_string(), "line 3: unknown field 'Diameter' in Arc");
}

#[test]
fn test_error_malformed_number() {
    let input = "<Drawing><Line><XEnd>1,5</XEnd></Line></Drawing>";
    let err = load_str(input, &DrawConfig::default()).unwrap_err();
    assert_contains!(err.to_string(), "Line/XEnd is not a number: '1,5'");
}

#[test]
fn test_error_color() {
    let input = "<Drawing><Line><Color>BLUE</Color></Line></Drawing>";
    let err = load_str(input, &DrawConfig::default()).unwrap_err();
    assert_contains!(err.to_string(), "unrecognized color 'BLUE'");
}

#[test]
fn test_error_reports_all() {
    let input = r#"<Drawing>
  <Line><XStart>a</XStart></Line>
  <Square/>
  <Arc><Radius>b</Radius></Arc>
</Drawing>"#;
    let err = load_str(input, &DrawConfig::default()).unwrap_err();
    assert_eq!(err.count(), 3);
    let msg = err.to_string();
    assert_contains!(msg, "3 errors:");
    assert_contains!(msg, "line 2:");
    assert_contains!(msg, "line 3:");
    assert_contains!(msg, "line 4:");
}

#[test]
fn test_error_bad_xml() {
    for input in [
        "",
        "<Drawing>",
        "<Drawing><Line></Drawing>",
        "<Drawing/><Drawing/>",
    ] {
        let err = load_str(input, &DrawConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Document(_)), "{input}: {err:?}");
    }
}

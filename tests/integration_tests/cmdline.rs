use assert_cmd::{crate_name, Command};
use assertables::assert_contains;
use std::io::Write;
use tempfile::NamedTempFile;

use arcplot::cli::Config;

use super::utils::line_doc;

fn drawing_file(content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    write!(tmpfile, "{content}").expect("tmpfile write failed");
    tmpfile
}

fn stdout_of(cmd: &mut Command) -> String {
    String::from_utf8(cmd.assert().success().get_output().stdout.clone()).expect("non-UTF8")
}

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = stdout_of(cmd.arg("-h"));
    assert_contains!(output, "Usage");
}

#[test]
fn test_cmdline_no_file() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = cmd.assert().failure().code(1).get_output().stderr.clone();
    assert_contains!(String::from_utf8_lossy(&output), "--file required");
}

#[test]
fn test_cmdline_bad_option() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("--no-such-option").assert().failure().code(2);
}

#[test]
fn test_cmdline_missing_input() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--file", "/nonexistent/arcplot/drawing.xml"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_cmdline_render_stdout() {
    let input = drawing_file(&line_doc(0., 0., 0., 100., "red"));
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = stdout_of(cmd.arg("-f").arg(input.path()));
    assert_contains!(output, "<svg");
    assert_contains!(output, r#"y1="1000" x2="0" y2="900""#);
}

#[test]
fn test_cmdline_render_outfile() {
    let input = drawing_file(&line_doc(0., 10., 0., 5., "blue"));
    let outdir = tempfile::tempdir().expect("could not create tempdir");
    let outpath = outdir.path().join("out.svg");
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg(input.path())
        .arg("-o")
        .arg(&outpath)
        .assert()
        .success();
    let svg = std::fs::read_to_string(&outpath).expect("output written");
    assert_contains!(svg, r##"stroke="#0000ff""##);
}

#[test]
fn test_cmdline_stdin() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = stdout_of(
        cmd.args(["-", "--bbox"])
            .write_stdin(line_doc(-1., 3., 2., 7., "white")),
    );
    assert_eq!(output.trim(), "min_x: -1 max_x: 3 min_y: 2 max_y: 7");
}

#[test]
fn test_cmdline_bbox() {
    let input = drawing_file(&line_doc(0., 10., 0., 5.5, "green"));
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = stdout_of(cmd.arg(input.path()).arg("--bbox"));
    assert_eq!(output.trim(), "min_x: 0 max_x: 10 min_y: 0 max_y: 5.5");
}

#[test]
fn test_cmdline_dump() {
    let input = drawing_file(&line_doc(0., 10., 0., 5., "yellow"));
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = stdout_of(cmd.arg(input.path()).arg("--dump"));
    assert_eq!(output.trim(), "Line (0, 0) -> (10, 5) yellow");
}

#[test]
fn test_cmdline_schema_error() {
    let input = drawing_file("<Drawing>\n<Triangle/>\n</Drawing>");
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let assert = cmd.arg(input.path()).assert().failure().code(1);
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    assert_contains!(
        String::from_utf8_lossy(&output.stderr),
        "line 2: unknown element 'Triangle'"
    );
}

#[test]
fn test_cmdline_empty_bbox() {
    let input = drawing_file("<Drawing/>");
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg(input.path()).arg("--bbox").assert().failure().code(1);
}

#[test]
fn test_cmdline_config() {
    let input = drawing_file(&line_doc(0., 10., 0., 5., "red"));
    let outfile = NamedTempFile::new().expect("could not create outfile");
    let config = Config::from_cmdline(&format!(
        "{} {} -o {} --width 100 --height 50",
        crate_name!(),
        input.path().to_str().unwrap(),
        outfile.path().to_str().unwrap()
    ))
    .expect("cmdline should be valid");
    assert_eq!(config.draw.width, 100);
    arcplot::cli::run(config).expect("run failed");
    let svg = std::fs::read_to_string(outfile.path()).expect("output written");
    assert_contains!(svg, r#"y1="50" x2="10" y2="45""#);

    let config = Config::from_cmdline(&format!(
        "{} {} -o {}",
        crate_name!(),
        input.path().to_str().unwrap(),
        input.path().to_str().unwrap()
    ));
    assert!(config.is_err(), "output must not overwrite input");
}

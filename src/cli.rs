use clap::Parser;

use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor, IsTerminal, Read, Write};
use std::{path::Path, sync::mpsc::channel, time::Duration};
use tempfile::NamedTempFile;

use crate::errors::{Error, Result};
use crate::{load_reader, render_drawing, BBoxMode, DrawConfig, Drawing, OutputFormat, Rgb};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// Drawing file to process ('-' for stdin)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Drawing file to process (alternative to positional FILE)
    #[arg(short, long, conflicts_with = "input")]
    file: Option<String>,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Output image format; inferred from the output file extension if omitted
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Canvas width in pixels
    #[arg(long, default_value = "1000")]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value = "1000")]
    height: u32,

    /// Canvas background colour ('#rrggbb' or colour name)
    #[arg(long, default_value = "black")]
    background: Rgb,

    /// Print the bounding box instead of rendering
    #[arg(long, conflicts_with = "dump")]
    bbox: bool,

    /// How arcs contribute to the bounding box ('approx' or 'exact')
    #[arg(long, default_value = "approx")]
    bbox_mode: BBoxMode,

    /// Print the loaded lines and arcs instead of rendering
    #[arg(long)]
    dump: bool,

    /// Require every field of every Line and Arc to be present
    #[arg(long)]
    strict: bool,

    /// Emit bounding box / dump output as JSON
    #[cfg(feature = "json")]
    #[arg(long)]
    json: bool,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long)]
    watch: bool,

    /// Open the rendered output in the system viewer (requires --output)
    #[arg(long, conflicts_with_all = ["bbox", "dump"])]
    show: bool,
}

/// What to produce from the loaded drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Render,
    BBox,
    Dump,
}

/// Top-level configuration used by the `arcplot` command-line process.
///
/// Front-end settings (input/output paths, watch mode, etc) are stored
/// directly in this struct; per-drawing settings are in `draw`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    pub action: Action,
    /// Emit JSON rather than text for `BBox` / `Dump`
    pub json: bool,
    /// Stay monitoring `input_path` for changes (Requires input_path is not stdin)
    pub watch: bool,
    /// Open `output_path` after rendering
    pub show: bool,
    pub draw: DrawConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        let input_path = args
            .input
            .or(args.file)
            .ok_or_else(|| Error::Cli("--file required".into()))?;

        if args.watch && input_path == "-" {
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        if args.show && args.output == "-" {
            return Err(Error::Cli("--show requires an --output file".into()));
        }
        if input_path != "-" && args.output != "-" {
            let in_path = Path::new(&input_path);
            let out_path = Path::new(&args.output);
            if out_path.exists() && out_path.canonicalize()? == in_path.canonicalize()? {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }

        let action = if args.bbox {
            Action::BBox
        } else if args.dump {
            Action::Dump
        } else {
            Action::Render
        };
        let format = args
            .format
            .or_else(|| OutputFormat::from_path(&args.output))
            .unwrap_or_default();

        #[cfg(feature = "json")]
        let json = args.json;
        #[cfg(not(feature = "json"))]
        let json = false;

        Ok(Self {
            input_path,
            output_path: args.output,
            action,
            json,
            watch: args.watch,
            show: args.show,
            draw: DrawConfig {
                width: args.width,
                height: args.height,
                background: args.background,
                bbox_mode: args.bbox_mode,
                strict: args.strict,
                format,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

fn read_drawing(input: &str, cfg: &DrawConfig) -> Result<Drawing> {
    let mut in_reader = if input == "-" {
        let mut stdin = std::io::stdin().lock();
        if stdin.is_terminal() {
            // A single Ctrl-D may not end terminal input; read everything first.
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf)?;
            Box::new(Cursor::new(buf)) as Box<dyn BufRead>
        } else {
            Box::new(stdin) as Box<dyn BufRead>
        }
    } else {
        let file = File::open(input).inspect_err(|_| log::error!("Unable to open: {input}"))?;
        Box::new(BufReader::new(file)) as Box<dyn BufRead>
    };
    load_reader(&mut in_reader, cfg)
}

fn write_output(output: &str, emit: impl FnOnce(&mut dyn Write) -> Result<()>) -> Result<()> {
    if output == "-" {
        emit(&mut std::io::stdout().lock())
    } else {
        let mut out_temp = NamedTempFile::new()?;
        emit(&mut out_temp)?;
        // Copy content rather than rename (by .persist()) since this
        // could cross filesystems; some apps (e.g. eog) also fail to
        // react to 'moved-over' files.
        fs::copy(out_temp.path(), output)?;
        Ok(())
    }
}

#[cfg(feature = "json")]
fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::from_err)
}

#[cfg(not(feature = "json"))]
fn to_json<T>(_value: &T) -> Result<String> {
    Err(Error::Cli("JSON output requires the 'json' feature".into()))
}

fn report(drawing: &Drawing, config: &Config) -> Result<String> {
    match config.action {
        Action::BBox => {
            let bbox = drawing.bbox(config.draw.bbox_mode)?;
            if config.json {
                to_json(&bbox)
            } else {
                Ok(bbox.to_string())
            }
        }
        Action::Dump if config.json => to_json(drawing),
        Action::Dump => Ok(drawing.to_string()),
        Action::Render => Ok(String::new()),
    }
}

/// Load the input and produce the configured output once.
pub fn process(config: &Config) -> Result<()> {
    log::info!("File: {}", config.input_path);
    let drawing = read_drawing(&config.input_path, &config.draw)?;
    log::info!(
        "{} lines, {} arcs",
        drawing.lines.len(),
        drawing.arcs.len()
    );

    if config.action == Action::Render {
        return write_output(&config.output_path, |w| {
            render_drawing(&drawing, &config.draw, w)
        });
    }
    let text = report(&drawing, config)?;
    write_output(&config.output_path, |w| {
        writeln!(w, "{text}")?;
        Ok(())
    })
}

fn show(config: &Config) -> Result<()> {
    if config.show {
        open::that(&config.output_path)?;
    }
    Ok(())
}

/// Run the `arcplot` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    if !config.watch {
        process(&config)?;
        show(&config)?;
    } else if config.input_path != "-" {
        let watch = &config.input_path;
        let (tx, rx) = channel();
        let mut watcher = new_debouncer(Duration::from_millis(250), tx).map_err(Error::from_err)?;
        let watch_path = Path::new(watch);
        watcher
            .watcher()
            .watch(watch_path, RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        process(&config).unwrap_or_else(|e| log::warn!("processing failed: {e}"));
        show(&config)?;
        eprintln!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.path.canonicalize()? == watch_path.canonicalize()? {
                            log::info!("{} changed", event.path.to_string_lossy());
                            process(&config)
                                .unwrap_or_else(|e| log::warn!("processing failed: {e}"));
                        }
                    }
                }
                Ok(Err(e)) => log::warn!("Watch error {e:?}"),
                Err(e) => {
                    log::warn!("Channel error: {e:?}");
                    break;
                }
            }
        }
    }

    Ok(())
}

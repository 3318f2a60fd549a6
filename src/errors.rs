use std::error;
use std::fmt;
use std::string::FromUtf8Error;

use itertools::Itertools;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Document(String),
    UnknownElement {
        name: String,
        line: usize,
    },
    UnknownField {
        element: String,
        field: String,
        line: usize,
    },
    UnrecognizedColor {
        token: String,
        line: Option<usize>,
    },
    MalformedNumber {
        element: String,
        field: String,
        value: String,
        line: usize,
    },
    MissingField {
        element: String,
        field: String,
        line: usize,
    },
    EmptyDrawing,
    Render(String),
    Cli(String),
    Multi(Vec<Error>),
    Other(Box<dyn error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::UnknownElement { name, line } => {
                write!(f, "line {line}: unknown element '{name}'")
            }
            Error::UnknownField {
                element,
                field,
                line,
            } => write!(f, "line {line}: unknown field '{field}' in {element}"),
            Error::UnrecognizedColor { token, line: None } => {
                write!(f, "unrecognized color '{token}'")
            }
            Error::UnrecognizedColor {
                token,
                line: Some(line),
            } => write!(f, "line {line}: unrecognized color '{token}'"),
            Error::MalformedNumber {
                element,
                field,
                value,
                line,
            } => write!(
                f,
                "line {line}: {element}/{field} is not a number: '{value}'"
            ),
            Error::MissingField {
                element,
                field,
                line,
            } => write!(f, "line {line}: {element} is missing field '{field}'"),
            Error::EmptyDrawing => write!(f, "drawing contains no lines or arcs"),
            Error::Render(reason) => write!(f, "Render error: {reason}"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Multi(errors) => {
                write!(f, "{} errors:", errors.len())?;
                write!(f, "\n  {}", errors.iter().join("\n  "))
            }
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(source) => Some(&**source),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: error::Error + Send + Sync + 'static,
    {
        Error::Other(Box::new(err))
    }

    /// Collapse a list of errors; a single error is returned as-is.
    ///
    /// Returns `None` if `errors` is empty.
    pub fn from_list(mut errors: Vec<Error>) -> Option<Error> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Error::Multi(errors)),
        }
    }

    /// Number of individual problems this error represents.
    pub fn count(&self) -> usize {
        match self {
            Error::Multi(errors) => errors.iter().map(Error::count).sum(),
            _ => 1,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Document(format!("utf8: {err}"))
    }
}

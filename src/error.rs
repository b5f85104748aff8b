use std::fmt;
use std::io;
use std::path::PathBuf;

pub(crate) type StatefaceResult<T> = Result<T, Error>;

/// Errors that can occur while turning a mapping into a stylesheet
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The mapping file does not exist or could not be opened.
    #[allow(missing_docs)]
    MissingInput { path: PathBuf, source: io::Error },

    /// An I/O error occurred while reading standard input or writing the stylesheet.
    Io(io::Error),

    /// The input is not valid JSON.
    MalformedInput(serde_json::Error),

    /// The input is valid JSON but the top level value is not an object.
    #[allow(missing_docs)]
    NotAnObject { found: &'static str },

    /// A mapping value is neither a string nor a number.
    #[allow(missing_docs)]
    InvalidGlyphCode {
        abbreviation: String,
        found: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingInput { path, source } => {
                write!(f, "cannot open mapping file '{}': {}", path.display(), source)
            }
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::MalformedInput(err) => write!(f, "JSON parsing error: {}", err),
            Error::NotAnObject { found } => {
                write!(f, "expected a JSON object at the top level, found {}", found)
            }
            Error::InvalidGlyphCode {
                abbreviation,
                found,
            } => write!(
                f,
                "glyph code for '{}' must be a string or a number, found {}",
                abbreviation, found
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingInput { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::MalformedInput(err) => Some(err),
            Error::NotAnObject { .. } | Error::InvalidGlyphCode { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedInput(err)
    }
}

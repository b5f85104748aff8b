use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, StatefaceResult};

/// The glyph a class renders, as found in the mapping file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GlyphCode {
    /// Written verbatim, eg `"a"` or `"\\e001"`.
    Text(String),
    /// Written in decimal form.
    Number(serde_json::Number),
}

impl fmt::Display for GlyphCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphCode::Text(s) => f.write_str(s),
            GlyphCode::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Where the mapping is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin,
}

impl Input {
    /// A path argument reads that file, no argument reads standard input.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Input::File(p),
            None => Input::Stdin,
        }
    }

    /// Reads the whole stream as raw bytes. The file is closed before returning, whatever
    /// the outcome.
    ///
    /// A path that cannot be opened or read as a file (missing, unreadable, a directory)
    /// is reported as [`Error::MissingInput`].
    pub fn read_to_end(&self) -> StatefaceResult<Vec<u8>> {
        let mut content = Vec::new();
        match self {
            Input::File(path) => {
                let missing = |source| Error::MissingInput {
                    path: path.clone(),
                    source,
                };
                let mut file = File::open(path).map_err(missing)?;
                file.read_to_end(&mut content).map_err(missing)?;
            }
            Input::Stdin => {
                io::stdin().lock().read_to_end(&mut content)?;
            }
        }
        Ok(content)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::File(path) => write!(f, "{}", path.display()),
            Input::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Abbreviation to glyph code mapping.
///
/// Iteration is always in ascending order of the original abbreviation, regardless of the
/// order of the keys in the source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateMapping {
    entries: BTreeMap<String, GlyphCode>,
}

impl StateMapping {
    /// Parses a JSON object of abbreviation to glyph code.
    pub fn from_json_str(content: &str) -> StatefaceResult<Self> {
        Self::from_json_slice(content.as_bytes())
    }

    /// Same as [`StateMapping::from_json_str`] for raw bytes. Invalid UTF-8 is a JSON error.
    pub fn from_json_slice(content: &[u8]) -> StatefaceResult<Self> {
        let value: Value = serde_json::from_slice(content)?;
        Self::from_value(value)
    }

    /// Reads everything from the reader then parses it.
    pub fn from_reader(mut reader: impl Read) -> StatefaceResult<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Self::from_json_slice(&content)
    }

    /// Reads the file and parses it.
    pub fn load_from_file(path: impl AsRef<Path>) -> StatefaceResult<Self> {
        Self::load(&Input::File(path.as_ref().to_path_buf()))
    }

    /// Reads the whole input then parses it.
    pub fn load(input: &Input) -> StatefaceResult<Self> {
        let content = input.read_to_end()?;
        let mapping = Self::from_json_slice(&content)?;
        #[cfg(feature = "debug")]
        log::debug!(
            "[load] Read {} bytes from {}, {} entries",
            content.len(),
            input,
            mapping.len()
        );
        Ok(mapping)
    }

    fn from_value(value: Value) -> StatefaceResult<Self> {
        let obj = match value {
            Value::Object(obj) => obj,
            other => {
                return Err(Error::NotAnObject {
                    found: value_kind(&other),
                });
            }
        };

        let mut entries = BTreeMap::new();
        for (abbreviation, v) in obj {
            let found = value_kind(&v);
            let code = GlyphCode::deserialize(v).map_err(|_| Error::InvalidGlyphCode {
                abbreviation: abbreviation.clone(),
                found,
            })?;
            entries.insert(abbreviation, code);
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, abbreviation: &str) -> Option<&GlyphCode> {
        self.entries.get(abbreviation)
    }

    /// Entries sorted by abbreviation, as written in the source (not lowercased).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GlyphCode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, GlyphCode)> for StateMapping {
    fn from_iter<I: IntoIterator<Item = (K, GlyphCode)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

mod config;
mod error;
mod mapping;
mod stylesheet;
mod template;

use std::io::Write;

pub use config::{DEFAULT_CLASS_PREFIX, DEFAULT_FONT_NAME, StylesheetConfig};
pub use error::Error;
pub use mapping::{GlyphCode, Input, StateMapping};
pub use stylesheet::Stylesheet;
pub use template::{BOILERPLATE_TEMPLATE, render_boilerplate, render_rule};

/// Loads the mapping from `input` and writes the full stylesheet to `writer`.
///
/// Nothing is written if the mapping cannot be loaded.
pub fn generate(
    input: &Input,
    config: &StylesheetConfig,
    writer: impl Write,
) -> Result<(), Error> {
    let mapping = StateMapping::load(input)?;
    Stylesheet::new(config.clone()).write_to(&mapping, writer)
}

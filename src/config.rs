/// The CSS class prefix used by the StateFace font.
pub const DEFAULT_CLASS_PREFIX: &str = "stateface";

/// The font family name declared by the `@font-face` rule.
pub const DEFAULT_FONT_NAME: &str = "StateFaceRegular";

/// The fixed parameters substituted into the stylesheet templates.
///
/// Nothing in the input mapping can change these, so the boilerplate rendered from a given
/// config is always the same text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StylesheetConfig {
    pub(crate) class_prefix: String,
    pub(crate) font_name: String,
}

impl StylesheetConfig {
    /// Creates a config with the given class prefix and font family name.
    pub fn new(class_prefix: impl Into<String>, font_name: impl Into<String>) -> Self {
        Self {
            class_prefix: class_prefix.into(),
            font_name: font_name.into(),
        }
    }

    /// Prefix of every generated class, eg `stateface` in `.stateface-tx`.
    pub fn class_prefix(mut self, value: impl Into<String>) -> Self {
        self.class_prefix = value.into();
        self
    }

    /// Font family name used in the `@font-face` rule and the base class.
    pub fn font_name(mut self, value: impl Into<String>) -> Self {
        self.font_name = value.into();
        self
    }

    pub fn get_class_prefix(&self) -> &str {
        &self.class_prefix
    }

    pub fn get_font_name(&self) -> &str {
        &self.font_name
    }
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_PREFIX, DEFAULT_FONT_NAME)
    }
}

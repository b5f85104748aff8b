use std::io::Write;

use crate::config::StylesheetConfig;
use crate::error::StatefaceResult;
use crate::mapping::StateMapping;
use crate::template::{render_boilerplate, render_rule};

/// Renders the stylesheet for a given config.
///
/// The boilerplate is rendered once on creation and reused for every mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    config: StylesheetConfig,
    boilerplate: String,
}

impl Stylesheet {
    pub fn new(config: StylesheetConfig) -> Self {
        let boilerplate = render_boilerplate(&config);
        Self {
            config,
            boilerplate,
        }
    }

    pub fn config(&self) -> &StylesheetConfig {
        &self.config
    }

    /// The part of the stylesheet that does not depend on the mapping.
    pub fn boilerplate(&self) -> &str {
        &self.boilerplate
    }

    /// One `:before` rule per entry, sorted by abbreviation and separated by a blank line.
    pub fn render_rules(&self, mapping: &StateMapping) -> String {
        let mut rules = Vec::with_capacity(mapping.len());
        for (abbrev, code) in mapping.iter() {
            rules.push(render_rule(&self.config, abbrev, code));
        }
        rules.join("\n")
    }

    /// The boilerplate followed by the rules for the mapping.
    pub fn render(&self, mapping: &StateMapping) -> String {
        let rules = self.render_rules(mapping);
        let mut out = String::with_capacity(self.boilerplate.len() + rules.len());
        out.push_str(&self.boilerplate);
        out.push_str(&rules);
        out
    }

    /// Renders everything in memory first so a failure never leaves a partial stylesheet
    /// behind, then writes it in one go.
    pub fn write_to(&self, mapping: &StateMapping, mut writer: impl Write) -> StatefaceResult<()> {
        let css = self.render(mapping);
        #[cfg(feature = "debug")]
        log::debug!(
            "[write_to] Writing {} rules, {} bytes",
            mapping.len(),
            css.len()
        );
        writer.write_all(css.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new(StylesheetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::GlyphCode;

    fn mapping(json: &str) -> StateMapping {
        StateMapping::from_json_str(json).unwrap()
    }

    #[test]
    fn empty_mapping_is_only_boilerplate() {
        let stylesheet = Stylesheet::default();
        let empty = mapping("{}");
        assert_eq!(stylesheet.render_rules(&empty), "");
        assert_eq!(stylesheet.render(&empty), stylesheet.boilerplate());
    }

    #[test]
    fn rules_are_sorted_and_separated() {
        let stylesheet = Stylesheet::default();
        let rules = stylesheet.render_rules(&mapping(r#"{"TX": "a", "AL": "b"}"#));
        insta::assert_snapshot!(rules, @r#"
        .stateface-al:before {
            content: "b";
        }

        .stateface-tx:before {
            content: "a";
        }
        "#);
    }

    #[test]
    fn single_entry_block() {
        let css = Stylesheet::default().render(&mapping(r#"{"AL": "a"}"#));
        assert!(css.ends_with(".stateface-al:before {\n    content: \"a\";\n}\n"));
        assert!(!css.contains(".stateface-AL:before"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let stylesheet = Stylesheet::default();
        let input = r#"{"NY": "y", "CA": 5, "AK": "A", "DC": "z"}"#;
        assert_eq!(
            stylesheet.render(&mapping(input)),
            stylesheet.render(&mapping(input))
        );
        // same entries, different source order
        assert_eq!(
            stylesheet.render(&mapping(input)),
            stylesheet.render(&mapping(r#"{"DC": "z", "AK": "A", "CA": 5, "NY": "y"}"#))
        );
    }

    #[test]
    fn boilerplate_does_not_depend_on_input() {
        let stylesheet = Stylesheet::default();
        let css = stylesheet.render(&mapping(r#"{"$prefix": "$fontname"}"#));
        assert!(css.starts_with(stylesheet.boilerplate()));
        assert_eq!(stylesheet.boilerplate(), Stylesheet::default().boilerplate());
        assert!(css.ends_with(".stateface-$prefix:before {\n    content: \"$fontname\";\n}\n"));
    }

    #[test]
    fn custom_prefix_applies_to_rules() {
        let stylesheet = Stylesheet::new(StylesheetConfig::default().class_prefix("sf"));
        let entries: StateMapping = [("MA", GlyphCode::Text("m".to_string()))]
            .into_iter()
            .collect();
        assert_eq!(
            stylesheet.render_rules(&entries),
            ".sf-ma:before {\n    content: \"m\";\n}\n"
        );
    }

    #[test]
    fn write_to_writes_the_rendered_stylesheet() {
        let stylesheet = Stylesheet::default();
        let entries = mapping(r#"{"OH": "o"}"#);
        let mut out = Vec::new();
        stylesheet.write_to(&entries, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), stylesheet.render(&entries));
    }
}

use crate::config::StylesheetConfig;
use crate::mapping::GlyphCode;

const PREFIX_PLACEHOLDER: &str = "$prefix";
const FONT_NAME_PLACEHOLDER: &str = "$fontname";

/// The icon font boilerplate: `@font-face` plus the sizing, list, border, spin, rotation,
/// flip and stacking utility classes.
///
/// `.stateface-li.stateface-lg` and the `fa-spin` animation name are literal in the
/// StateFace stylesheet and are left as such.
pub const BOILERPLATE_TEMPLATE: &str = r#"@font-face {
  font-family: '$fontname';
  src: url('../font/webfont/$prefix-regular-webfont.eot');
  src: url('../font/webfont/$prefix-regular-webfont.eot?#iefix') format('embedded-opentype'),
  url('../font/webfont/$prefix-regular-webfont.woff') format('woff'),
  url('../font/webfont/$prefix-regular-webfont.ttf') format('truetype'),
  url('../font/webfont/$prefix-regular-webfont.svg#$fontname') format('svg');
  font-weight: normal;
  font-style: normal;
}
.$prefix {
  display: inline-block;
  font: normal normal normal 14px/1 $fontname;
  font-size: inherit;
  text-rendering: auto;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}
/* makes the font 33% larger relative to the icon container */
.$prefix-lg {
  font-size: 1.33333333em;
  line-height: 0.75em;
  vertical-align: -15%;
}
.$prefix-2x {
  font-size: 2em;
}
.$prefix-3x {
  font-size: 3em;
}
.$prefix-4x {
  font-size: 4em;
}
.$prefix-5x {
  font-size: 5em;
}
.$prefix-fw {
  width: 1.28571429em;
  text-align: center;
}
.$prefix-ul {
  padding-left: 0;
  margin-left: 2.14285714em;
  list-style-type: none;
}
.$prefix-ul > li {
  position: relative;
}
.$prefix-li {
  position: absolute;
  left: -2.14285714em;
  width: 2.14285714em;
  top: 0.14285714em;
  text-align: center;
}
.stateface-li.stateface-lg {
  left: -1.85714286em;
}
.$prefix-border {
  padding: .2em .25em .15em;
  border: solid 0.08em #eeeeee;
  border-radius: .1em;
}
.$prefix.pull-left {
  margin-right: .3em;
}
.$prefix.pull-right {
  margin-left: .3em;
}
.$prefix-spin {
  -webkit-animation: fa-spin 2s infinite linear;
  animation: fa-spin 2s infinite linear;
}
@-webkit-keyframes $prefix-spin {
  0% {
    -webkit-transform: rotate(0deg);
    transform: rotate(0deg);
  }
  100% {
    -webkit-transform: rotate(359deg);
    transform: rotate(359deg);
  }
}
@keyframes $prefix-spin {
  0% {
    -webkit-transform: rotate(0deg);
    transform: rotate(0deg);
  }
  100% {
    -webkit-transform: rotate(359deg);
    transform: rotate(359deg);
  }
}
.$prefix-rotate-90 {
  filter: progid:DXImageTransform.Microsoft.BasicImage(rotation=1);
  -webkit-transform: rotate(90deg);
  -ms-transform: rotate(90deg);
  transform: rotate(90deg);
}
.$prefix-rotate-180 {
  filter: progid:DXImageTransform.Microsoft.BasicImage(rotation=2);
  -webkit-transform: rotate(180deg);
  -ms-transform: rotate(180deg);
  transform: rotate(180deg);
}
.$prefix-rotate-270 {
  filter: progid:DXImageTransform.Microsoft.BasicImage(rotation=3);
  -webkit-transform: rotate(270deg);
  -ms-transform: rotate(270deg);
  transform: rotate(270deg);
}
.$prefix-flip-horizontal {
  filter: progid:DXImageTransform.Microsoft.BasicImage(rotation=0, mirror=1);
  -webkit-transform: scale(-1, 1);
  -ms-transform: scale(-1, 1);
  transform: scale(-1, 1);
}
.$prefix-flip-vertical {
  filter: progid:DXImageTransform.Microsoft.BasicImage(rotation=2, mirror=1);
  -webkit-transform: scale(1, -1);
  -ms-transform: scale(1, -1);
  transform: scale(1, -1);
}
:root .$prefix-rotate-90,
:root .$prefix-rotate-180,
:root .$prefix-rotate-270,
:root .$prefix-flip-horizontal,
:root .$prefix-flip-vertical {
  filter: none;
}
.$prefix-stack {
  position: relative;
  display: inline-block;
  width: 2em;
  height: 2em;
  line-height: 2em;
  vertical-align: middle;
}
.$prefix-stack-1x,
.$prefix-stack-2x {
  position: absolute;
  left: 0;
  width: 100%;
  text-align: center;
}
.$prefix-stack-1x {
  line-height: inherit;
}
.$prefix-stack-2x {
  font-size: 2em;
}
.$prefix-inverse {
  color: #ffffff;
}
"#;

/// Renders the boilerplate by substituting the config into every placeholder.
///
/// Placeholders are replaced in a single pass, so a prefix or font name that itself looks
/// like a placeholder ends up in the output as is.
pub fn render_boilerplate(config: &StylesheetConfig) -> String {
    let mut out = String::with_capacity(BOILERPLATE_TEMPLATE.len() + 256);
    let mut rest = BOILERPLATE_TEMPLATE;
    while let Some(idx) = rest.find('$') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        if let Some(after) = tail.strip_prefix(PREFIX_PLACEHOLDER) {
            out.push_str(&config.class_prefix);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(FONT_NAME_PLACEHOLDER) {
            out.push_str(&config.font_name);
            rest = after;
        } else {
            out.push('$');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Renders the `:before` rule giving the class for `abbrev` its glyph.
///
/// The abbreviation is lowercased. The code is written as is: a code containing a `"`
/// produces an invalid CSS string.
pub fn render_rule(config: &StylesheetConfig, abbrev: &str, code: &GlyphCode) -> String {
    let prefix = &config.class_prefix;
    let abbrev = abbrev.to_lowercase();
    format!(".{prefix}-{abbrev}:before {{\n    content: \"{code}\";\n}}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_placeholder_survives() {
        let css = render_boilerplate(&StylesheetConfig::default());
        assert!(!css.contains('$'));
        assert!(css.starts_with("@font-face {\n  font-family: 'StateFaceRegular';\n"));
        assert!(css.contains("url('../font/webfont/stateface-regular-webfont.svg#StateFaceRegular') format('svg');"));
        assert!(css.contains("font: normal normal normal 14px/1 StateFaceRegular;"));
        assert!(css.contains("@keyframes stateface-spin {"));
        assert!(css.ends_with(".stateface-inverse {\n  color: #ffffff;\n}\n"));
    }

    #[test]
    fn custom_config_is_substituted_everywhere() {
        let config = StylesheetConfig::new("sf", "Glyphs");
        let css = render_boilerplate(&config);
        assert!(!css.contains('$'));
        assert!(css.contains("font-family: 'Glyphs';"));
        assert!(css.contains(".sf-rotate-270 {"));
        assert!(css.contains(":root .sf-flip-vertical {"));
        assert_eq!(
            css.matches("sf-regular-webfont").count(),
            BOILERPLATE_TEMPLATE.matches("$prefix-regular-webfont").count()
        );
        // literal in the StateFace stylesheet
        assert!(css.contains(".stateface-li.stateface-lg {"));
    }

    #[test]
    fn substituted_values_are_not_substituted_again() {
        let config = StylesheetConfig::new("$fontname", "$prefix");
        let css = render_boilerplate(&config);
        assert!(css.starts_with("@font-face {\n  font-family: '$prefix';\n"));
        assert!(css.contains(".$fontname-2x {"));
        assert!(css.contains("url('../font/webfont/$fontname-regular-webfont.svg#$prefix')"));
        assert!(!css.contains("StateFaceRegular"));
    }

    #[test]
    fn boilerplate_is_stable() {
        let config = StylesheetConfig::default();
        assert_eq!(render_boilerplate(&config), render_boilerplate(&config));
    }

    #[test]
    fn rule_lowercases_abbreviation() {
        let rule = render_rule(
            &StylesheetConfig::default(),
            "AL",
            &GlyphCode::Text("a".to_string()),
        );
        assert_eq!(rule, ".stateface-al:before {\n    content: \"a\";\n}\n");
    }

    #[test]
    fn rule_inserts_code_verbatim() {
        let rule = render_rule(
            &StylesheetConfig::default(),
            "Tx",
            &GlyphCode::Text("\\e001\"".to_string()),
        );
        insta::assert_snapshot!(rule, @r#"
        .stateface-tx:before {
            content: "\e001"";
        }
        "#);
    }

    #[test]
    fn rule_with_numeric_code() {
        let rule = render_rule(
            &StylesheetConfig::default(),
            "NY",
            &GlyphCode::Number(65.into()),
        );
        assert!(rule.contains("content: \"65\";"));
    }
}

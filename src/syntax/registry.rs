//! Style registry
//!
//! Resolves semantic roles to concrete styles. Colors come from the
//! `syntax_colors/*` settings with built-in defaults; roles without their
//! own color group borrow another role's resolved color.

use crate::config::Settings;

use super::roles::{StyleRole, ALL_ROLES};
use super::style::{Color, Style};

/// Background used for markdown inline code
const CODE_BACKGROUND: Color = Color::rgb(0x40, 0x40, 0x40);

/// Built-in default color for a configurable color group
fn default_color(group: &str) -> Color {
    match group {
        "keyword" => Color::rgb(0xC5, 0x86, 0xC0),
        "comment" => Color::rgb(0x6A, 0x99, 0x55),
        "string" => Color::rgb(0xCE, 0x91, 0x78),
        "number" => Color::rgb(0xB5, 0xCE, 0xA8),
        "function" => Color::rgb(0xDC, 0xDC, 0xAA),
        "class_type" => Color::rgb(0x4E, 0xC9, 0xB0),
        "operator_brace" => Color::rgb(0xD4, 0xD4, 0xD4),
        "preprocessor_decorator" => Color::rgb(0x80, 0x80, 0x80),
        "tag" => Color::rgb(0x56, 0x9C, 0xD6),
        "attribute" => Color::rgb(0x9C, 0xDC, 0xFE),
        "selector" => Color::rgb(0xD7, 0xBA, 0x7D),
        "property" => Color::rgb(0x9C, 0xDC, 0xFE),
        _ => Color::rgb(0xD4, 0xD4, 0xD4),
    }
}

/// Resolved styles for every role, built once per session
///
/// Rebuilt when colors change; rule tables keep only roles, so a rebuild
/// never touches patterns.
pub struct StyleRegistry {
    styles: [Style; ALL_ROLES.len()],
}

impl StyleRegistry {
    /// Build the registry from settings, falling back to defaults for
    /// missing or unparsable color values
    pub fn from_settings(settings: &Settings) -> Self {
        let group = |name: &str| -> Color {
            settings
                .color_override(name)
                .and_then(Color::parse_hex)
                .unwrap_or_else(|| default_color(name))
        };

        let keyword = group("keyword");
        let comment = group("comment");
        let string = group("string");
        let number = group("number");
        let function = group("function");
        let class_type = group("class_type");
        let operator_brace = group("operator_brace");
        let preproc_dec = group("preprocessor_decorator");
        let tag = group("tag");
        let attribute = group("attribute");
        let selector = group("selector");
        let property = group("property");

        let mut styles = [Style::fg(operator_brace); ALL_ROLES.len()];

        let mut set = |role: StyleRole, style: Style| {
            styles[role.index()] = style;
        };

        set(StyleRole::Keyword, Style::fg(keyword).with_bold());
        set(StyleRole::Comment, Style::fg(comment).with_italic());
        set(StyleRole::String, Style::fg(string));
        set(StyleRole::Number, Style::fg(number));
        set(StyleRole::Function, Style::fg(function));
        set(StyleRole::ClassType, Style::fg(class_type));
        set(StyleRole::Operator, Style::fg(operator_brace));
        set(StyleRole::Brace, Style::fg(operator_brace));
        set(StyleRole::Preprocessor, Style::fg(preproc_dec));
        set(StyleRole::Decorator, Style::fg(preproc_dec));
        set(StyleRole::Tag, Style::fg(tag).with_bold());
        set(StyleRole::Attribute, Style::fg(attribute).with_italic());
        set(StyleRole::Selector, Style::fg(selector).with_bold());
        set(StyleRole::Property, Style::fg(property));

        // Derived roles borrow another group's resolved color
        set(StyleRole::Value, Style::fg(string));
        set(StyleRole::MarkdownHeader, Style::fg(tag).with_bold());
        set(StyleRole::MarkdownEmphasis, Style::fg(keyword).with_bold());
        set(
            StyleRole::MarkdownCode,
            Style::fg(number).with_bg(CODE_BACKGROUND),
        );
        set(StyleRole::SelfReference, Style::fg(attribute));
        set(StyleRole::BuiltinName, Style::fg(class_type));
        set(StyleRole::RegexLiteral, Style::fg(string));
        set(StyleRole::TypeName, Style::fg(class_type));
        set(StyleRole::LiteralConstant, Style::fg(number).with_bold());

        Self { styles }
    }

    /// Resolve a role to its concrete style
    pub fn resolve(&self, role: StyleRole) -> Style {
        self.styles[role.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_defaults() {
        let registry = StyleRegistry::from_settings(&Settings::default());

        let keyword = registry.resolve(StyleRole::Keyword);
        assert_eq!(keyword.fg, Color::rgb(0xC5, 0x86, 0xC0));
        assert!(keyword.bold);

        let comment = registry.resolve(StyleRole::Comment);
        assert!(comment.italic);

        // operator and brace share one color group
        assert_eq!(
            registry.resolve(StyleRole::Operator).fg,
            registry.resolve(StyleRole::Brace).fg
        );
        assert_eq!(
            registry.resolve(StyleRole::Preprocessor).fg,
            registry.resolve(StyleRole::Decorator).fg
        );
    }

    #[test]
    fn test_override_applies() {
        let mut settings = Settings::default();
        settings.set("syntax_colors/string", "#112233");
        let registry = StyleRegistry::from_settings(&settings);

        assert_eq!(
            registry.resolve(StyleRole::String).fg,
            Color::rgb(0x11, 0x22, 0x33)
        );
        // derived roles follow the borrowed group
        assert_eq!(
            registry.resolve(StyleRole::Value).fg,
            Color::rgb(0x11, 0x22, 0x33)
        );
        assert_eq!(
            registry.resolve(StyleRole::RegexLiteral).fg,
            Color::rgb(0x11, 0x22, 0x33)
        );
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let mut settings = Settings::default();
        settings.set("syntax_colors/number", "not-a-color");
        let registry = StyleRegistry::from_settings(&settings);

        assert_eq!(
            registry.resolve(StyleRole::Number).fg,
            Color::rgb(0xB5, 0xCE, 0xA8)
        );
    }

    #[test]
    fn test_borrow_table() {
        let registry = StyleRegistry::from_settings(&Settings::default());

        assert_eq!(
            registry.resolve(StyleRole::TypeName).fg,
            registry.resolve(StyleRole::ClassType).fg
        );
        assert_eq!(
            registry.resolve(StyleRole::BuiltinName).fg,
            registry.resolve(StyleRole::ClassType).fg
        );
        assert_eq!(
            registry.resolve(StyleRole::SelfReference).fg,
            registry.resolve(StyleRole::Attribute).fg
        );
        assert_eq!(
            registry.resolve(StyleRole::MarkdownHeader).fg,
            registry.resolve(StyleRole::Tag).fg
        );

        let literal = registry.resolve(StyleRole::LiteralConstant);
        assert_eq!(literal.fg, registry.resolve(StyleRole::Number).fg);
        assert!(literal.bold);

        let code = registry.resolve(StyleRole::MarkdownCode);
        assert_eq!(code.bg, Some(Color::rgb(0x40, 0x40, 0x40)));
    }
}

//! Per-language rule tables
//!
//! Builds the ordered rule list and multi-line constructs for each
//! supported language. Table order is application order and later rules
//! overwrite earlier ones, so each table layers from generic to specific:
//! baseline literals and punctuation, then keyword/builtin word lists,
//! then structural detectors, then strings, with single-line comment
//! rules last. Unrecognized language names degrade to the baseline rules
//! with no constructs.

mod cpp;
mod csharp;
mod css;
mod html;
mod javascript;
mod markdown;
mod python;
mod sql;

use super::roles::StyleRole;
use super::rules::RuleTable;

/// Display names of the languages with dedicated rule sets
pub const LANGUAGE_NAMES: [&str; 9] = [
    "C#",
    "C++",
    "CSS",
    "HTML",
    "JavaScript",
    "Markdown",
    "Python",
    "SQL",
    "Text",
];

/// Build the rule table for a language
///
/// Names compare case-insensitively. Unrecognized names get the baseline
/// table (generic literals and punctuation) and no constructs; this never
/// fails.
pub fn build_table(language: &str) -> RuleTable {
    let mut table = RuleTable::new();
    add_baseline(&mut table);

    match language.trim().to_lowercase().as_str() {
        "python" => python::add_rules(&mut table),
        "c++" => cpp::add_rules(&mut table),
        "c#" => csharp::add_rules(&mut table),
        "sql" => sql::add_rules(&mut table),
        "markdown" => markdown::add_rules(&mut table),
        "html" => html::add_rules(&mut table),
        "css" => css::add_rules(&mut table),
        "javascript" => javascript::add_rules(&mut table),
        "text" => {
            add_strings(&mut table);
            table.add_rule(r"#.*", StyleRole::Comment);
        }
        _ => add_strings(&mut table),
    }

    table
}

/// The language for a file extension, if recognized
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "py" | "pyw" | "pyi" => Some("python"),
        "cpp" | "cxx" | "cc" | "hpp" | "hh" | "h" => Some("c++"),
        "cs" => Some("c#"),
        "sql" => Some("sql"),
        "md" | "markdown" => Some("markdown"),
        "html" | "htm" => Some("html"),
        "css" => Some("css"),
        "js" | "mjs" | "jsx" => Some("javascript"),
        "txt" | "text" => Some("text"),
        _ => None,
    }
}

/// Whole-word pattern for a keyword
fn word(kw: &str) -> String {
    format!(r"\b{}\b", kw)
}

/// Case-insensitive whole-word pattern
fn word_ci(kw: &str) -> String {
    format!(r"(?i)\b{}\b", kw)
}

/// Rules shared by every language: punctuation and numeric literals
fn add_baseline(table: &mut RuleTable) {
    table.add_rule(r"[=+\-*/%<>&|^~!:.?,;]", StyleRole::Operator);
    table.add_rule(r"[(){}\[\]]", StyleRole::Brace);
    table.add_rule(r"\b[0-9]+\.?[0-9]*(?:[eE][-+]?[0-9]+)?\b", StyleRole::Number);
    table.add_rule(r"\b0[xX][0-9a-fA-F]+\b", StyleRole::Number);
    table.add_rule(r"\b0[bB][01]+\b", StyleRole::Number);
    table.add_rule(r"\b0[oO]?[0-7]+\b", StyleRole::Number);
}

/// Generic quoted strings with escape handling
fn add_strings(table: &mut RuleTable) {
    table.add_rule(r#""(?:[^"\\]|\\.)*""#, StyleRole::String);
    table.add_rule(r"'(?:[^'\\]|\\.)*'", StyleRole::String);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::syntax::registry::StyleRegistry;
    use crate::syntax::rules::{BlockState, ConstructKind};
    use crate::syntax::style::{Span, Style};

    fn registry() -> StyleRegistry {
        StyleRegistry::from_settings(&Settings::default())
    }

    fn style_at(spans: &[Span], pos: usize) -> Option<Style> {
        spans
            .iter()
            .filter(|s| s.contains(pos))
            .last()
            .map(|s| s.style)
    }

    #[test]
    fn test_unknown_language_is_baseline() {
        let table = build_table("Cobol");
        // punctuation + numbers + two string rules, nothing else
        assert_eq!(table.rule_count(), 8);
        assert_eq!(table.construct_count(), 0);
    }

    #[test]
    fn test_language_name_case_insensitive() {
        assert_eq!(
            build_table("Python").construct_count(),
            build_table("python").construct_count()
        );
        assert_eq!(build_table("PYTHON").construct_count(), 2);
    }

    #[test]
    fn test_construct_wiring() {
        assert_eq!(build_table("python").construct_count(), 2);
        assert_eq!(build_table("c++").construct_count(), 1);
        assert_eq!(build_table("c#").construct_count(), 1);
        assert_eq!(build_table("javascript").construct_count(), 1);
        assert_eq!(build_table("css").construct_count(), 1);
        assert_eq!(build_table("html").construct_count(), 1);
        assert_eq!(build_table("sql").construct_count(), 0);
        assert_eq!(build_table("markdown").construct_count(), 0);
        assert_eq!(build_table("text").construct_count(), 0);
    }

    #[test]
    fn test_html_comment_delimiters() {
        let table = build_table("html");
        let c = table.construct_for(ConstructKind::Comment).unwrap();
        assert_eq!(c.find_start("x <!-- y"), Some((2, 4)));
        assert_eq!(c.find_end("<!-- y -->", 4), Some((7, 3)));
    }

    #[test]
    fn test_sql_keywords_case_insensitive() {
        let reg = registry();
        let table = build_table("sql");
        let keyword = reg.resolve(StyleRole::Keyword);
        let function = reg.resolve(StyleRole::Function);

        let (spans, _) = table.highlight_block("select count(*) from t", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 0), Some(keyword));
        assert_eq!(style_at(&spans, 7), Some(function));
        assert_eq!(style_at(&spans, 16), Some(keyword));
    }

    #[test]
    fn test_sql_line_comment() {
        let reg = registry();
        let table = build_table("sql");
        let comment = reg.resolve(StyleRole::Comment);

        let (spans, _) =
            table.highlight_block("SELECT 1 -- pick one", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 9), Some(comment));
        assert_eq!(style_at(&spans, 15), Some(comment));
    }

    #[test]
    fn test_cpp_types_and_literals() {
        let reg = registry();
        let table = build_table("c++");
        let type_name = reg.resolve(StyleRole::TypeName);
        let literal = reg.resolve(StyleRole::LiteralConstant);
        let preprocessor = reg.resolve(StyleRole::Preprocessor);

        let (spans, _) =
            table.highlight_block("std::string ok = true;", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 0), Some(type_name));
        assert_eq!(style_at(&spans, 17), Some(literal));

        let (spans, _) =
            table.highlight_block("#include <vector>", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 0), Some(preprocessor));
    }

    #[test]
    fn test_csharp_attribute_line() {
        let reg = registry();
        let table = build_table("c#");
        let decorator = reg.resolve(StyleRole::Decorator);
        let class_type = reg.resolve(StyleRole::ClassType);

        let (spans, _) = table.highlight_block("[TestMethod]", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 0), Some(decorator));

        let (spans, _) =
            table.highlight_block("interface IShape {", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 0), Some(class_type));
        assert_eq!(style_at(&spans, 10), Some(class_type));
    }

    #[test]
    fn test_markdown_header_over_comment() {
        let reg = registry();
        let table = build_table("markdown");
        let header = reg.resolve(StyleRole::MarkdownHeader);
        let code = reg.resolve(StyleRole::MarkdownCode);
        let emphasis = reg.resolve(StyleRole::MarkdownEmphasis);

        let (spans, _) = table.highlight_block("## Notes", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 0), Some(header));
        assert_eq!(style_at(&spans, 5), Some(header));

        let (spans, _) =
            table.highlight_block("some **bold** and `code`", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 7), Some(emphasis));
        assert_eq!(style_at(&spans, 19), Some(code));
    }

    #[test]
    fn test_html_tags_and_attributes() {
        let reg = registry();
        let table = build_table("html");
        let tag = reg.resolve(StyleRole::Tag);
        let attribute = reg.resolve(StyleRole::Attribute);
        let string = reg.resolve(StyleRole::String);

        let text = r#"<a href="x">go</a>"#;
        let (spans, _) = table.highlight_block(text, BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 1), Some(tag));
        assert_eq!(style_at(&spans, 3), Some(attribute));
        assert_eq!(style_at(&spans, 8), Some(string));
        assert_eq!(style_at(&spans, 16), Some(tag));
    }

    #[test]
    fn test_css_properties_and_units() {
        let reg = registry();
        let table = build_table("css");
        let property = reg.resolve(StyleRole::Property);
        let number = reg.resolve(StyleRole::Number);
        let value = reg.resolve(StyleRole::Value);

        let (spans, _) =
            table.highlight_block("margin: 10px auto #fff", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 0), Some(property));
        assert_eq!(style_at(&spans, 8), Some(number));
        assert_eq!(style_at(&spans, 13), Some(value));
        assert_eq!(style_at(&spans, 18), Some(number));
    }

    #[test]
    fn test_javascript_regex_and_builtins() {
        let reg = registry();
        let table = build_table("javascript");
        let regex_literal = reg.resolve(StyleRole::RegexLiteral);
        let builtin = reg.resolve(StyleRole::BuiltinName);

        let (spans, _) =
            table.highlight_block("const re = /a\\/b/gi;", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 11), Some(regex_literal));
        assert_eq!(style_at(&spans, 17), Some(regex_literal));

        let (spans, _) =
            table.highlight_block("console.log(1)", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 0), Some(builtin));
    }

    #[test]
    fn test_text_gets_hash_comments() {
        let reg = registry();
        let table = build_table("text");
        let comment = reg.resolve(StyleRole::Comment);

        let (spans, _) = table.highlight_block("note # remark", BlockState::Normal, &reg);
        assert_eq!(style_at(&spans, 5), Some(comment));
        assert_eq!(style_at(&spans, 0), None);
    }

    #[test]
    fn test_extension_detection() {
        assert_eq!(language_for_extension("py"), Some("python"));
        assert_eq!(language_for_extension("CPP"), Some("c++"));
        assert_eq!(language_for_extension("cs"), Some("c#"));
        assert_eq!(language_for_extension("md"), Some("markdown"));
        assert_eq!(language_for_extension("js"), Some("javascript"));
        assert_eq!(language_for_extension("txt"), Some("text"));
        assert_eq!(language_for_extension("zig"), None);
    }
}

//! Semantic style roles
//!
//! Every rule maps matched text to one of a fixed set of semantic roles;
//! the style registry turns roles into concrete colors and attributes.
//! The set is closed at compile time.

/// Semantic categories recognized by the highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// Language keywords (if, class, SELECT, ...)
    Keyword,
    /// Comments, both single-line and block
    Comment,
    /// String literals
    String,
    /// Numeric literals
    Number,
    /// Function names and calls
    Function,
    /// Class and type introductions
    ClassType,
    /// Operator characters
    Operator,
    /// Parentheses, brackets, braces
    Brace,
    /// Preprocessor directive lines
    Preprocessor,
    /// Decorators and attribute annotations
    Decorator,
    /// Markup tag names
    Tag,
    /// Markup attribute names
    Attribute,
    /// CSS selectors and pseudo-classes
    Selector,
    /// CSS property names
    Property,
    /// CSS value keywords
    Value,
    /// Markdown headers
    MarkdownHeader,
    /// Markdown bold/italic emphasis
    MarkdownEmphasis,
    /// Markdown inline code
    MarkdownCode,
    /// self/cls/this references
    SelfReference,
    /// Built-in functions and globals
    BuiltinName,
    /// Regular expression literals
    RegexLiteral,
    /// Built-in type names
    TypeName,
    /// Boolean/null literal constants
    LiteralConstant,
}

/// All roles, in registry index order
pub const ALL_ROLES: [StyleRole; 23] = [
    StyleRole::Keyword,
    StyleRole::Comment,
    StyleRole::String,
    StyleRole::Number,
    StyleRole::Function,
    StyleRole::ClassType,
    StyleRole::Operator,
    StyleRole::Brace,
    StyleRole::Preprocessor,
    StyleRole::Decorator,
    StyleRole::Tag,
    StyleRole::Attribute,
    StyleRole::Selector,
    StyleRole::Property,
    StyleRole::Value,
    StyleRole::MarkdownHeader,
    StyleRole::MarkdownEmphasis,
    StyleRole::MarkdownCode,
    StyleRole::SelfReference,
    StyleRole::BuiltinName,
    StyleRole::RegexLiteral,
    StyleRole::TypeName,
    StyleRole::LiteralConstant,
];

impl StyleRole {
    /// Index into the registry's style array
    pub fn index(self) -> usize {
        ALL_ROLES.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Human-readable name (also the config key suffix where applicable)
    pub fn name(self) -> &'static str {
        match self {
            StyleRole::Keyword => "keyword",
            StyleRole::Comment => "comment",
            StyleRole::String => "string",
            StyleRole::Number => "number",
            StyleRole::Function => "function",
            StyleRole::ClassType => "class_type",
            StyleRole::Operator => "operator",
            StyleRole::Brace => "brace",
            StyleRole::Preprocessor => "preprocessor",
            StyleRole::Decorator => "decorator",
            StyleRole::Tag => "tag",
            StyleRole::Attribute => "attribute",
            StyleRole::Selector => "selector",
            StyleRole::Property => "property",
            StyleRole::Value => "value",
            StyleRole::MarkdownHeader => "markdown_header",
            StyleRole::MarkdownEmphasis => "markdown_emphasis",
            StyleRole::MarkdownCode => "markdown_code",
            StyleRole::SelfReference => "self_reference",
            StyleRole::BuiltinName => "builtin_name",
            StyleRole::RegexLiteral => "regex_literal",
            StyleRole::TypeName => "type_name",
            StyleRole::LiteralConstant => "literal_constant",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_unique() {
        for (i, role) in ALL_ROLES.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_names_are_unique() {
        for a in ALL_ROLES.iter() {
            let dupes = ALL_ROLES.iter().filter(|b| b.name() == a.name()).count();
            assert_eq!(dupes, 1, "duplicate name {}", a.name());
        }
    }
}

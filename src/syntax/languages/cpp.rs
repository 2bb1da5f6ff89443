//! C++ rules

use crate::syntax::roles::StyleRole;
use crate::syntax::rules::{ConstructKind, RuleTable};

use super::{add_strings, word};

const KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel", "atomic_commit",
    "atomic_noexcept", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
    "char8_t", "char16_t", "char32_t", "class", "compl", "concept", "const", "consteval",
    "constexpr", "constinit", "const_cast", "continue", "co_await", "co_return", "co_yield",
    "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit",
    "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int", "long",
    "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or",
    "or_eq", "private", "protected", "public", "reflexpr", "register", "reinterpret_cast",
    "requires", "return", "short", "signed", "sizeof", "static", "static_assert", "static_cast",
    "struct", "switch", "synchronized", "template", "this", "thread_local", "throw", "true",
    "try", "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void",
    "volatile", "wchar_t", "while", "xor", "xor_eq",
];

const TYPES: &[&str] = &[
    "int", "float", "double", "char", "void", "bool", "string", "vector", "map", "set", "pair",
    "tuple", "istream", "ostream", "fstream", "size_t",
];

pub fn add_rules(table: &mut RuleTable) {
    for kw in KEYWORDS {
        table.add_rule(&word(kw), StyleRole::Keyword);
    }
    // common types, with an optional namespace qualifier
    for ty in TYPES {
        table.add_rule(&format!(r"\b(?:std::)?{}\b", ty), StyleRole::TypeName);
    }
    table.add_rule(r"\b(?:true|false|nullptr)\b", StyleRole::LiteralConstant);
    table.add_rule(r"\b(?:class|struct)\s+\w+", StyleRole::ClassType);
    table.add_rule(r"^\s*#\w+.*", StyleRole::Preprocessor);
    table.add_rule(r"\bthis\b", StyleRole::SelfReference);
    table.add_group_rule(r"\b(\w+)\s*\(", 1, StyleRole::Function);
    add_strings(table);
    table.add_rule(r#"R"\([^)]*\)""#, StyleRole::String);
    table.add_rule(r"//.*", StyleRole::Comment);

    table.set_construct(ConstructKind::Comment, r"/\*", r"\*/");
}

//! JavaScript rules

use crate::syntax::roles::StyleRole;
use crate::syntax::rules::{ConstructKind, RuleTable};

use super::{add_strings, word};

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "let", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield", "async", "await",
    "static", "get", "set", "arguments", "of", "undefined",
];

const BUILTINS: &[&str] = &[
    "console", "Math", "JSON", "Promise", "Object", "Array", "String", "Number", "Boolean",
    "Date", "RegExp", "Error", "Symbol", "Map", "Set", "WeakMap", "WeakSet", "Intl", "isNaN",
    "parseFloat", "parseInt", "document", "window", "fetch", "setTimeout", "setInterval",
    "clearTimeout", "clearInterval", "alert", "confirm", "prompt",
];

pub fn add_rules(table: &mut RuleTable) {
    for kw in KEYWORDS {
        table.add_rule(&word(kw), StyleRole::Keyword);
    }
    for builtin in BUILTINS {
        table.add_rule(&word(builtin), StyleRole::BuiltinName);
    }
    // function/generator declarations; styles only the declared name
    table.add_group_rule(r"\b(?:function|const|let|var)\s+\*?(\w+)", 1, StyleRole::Function);
    table.add_rule(r"=>", StyleRole::Operator);
    table.add_rule(r"\bclass\s+\w+", StyleRole::ClassType);
    table.add_rule(r"\bthis\b", StyleRole::SelfReference);
    table.add_group_rule(r"\b(\w+)\s*\(", 1, StyleRole::Function);
    add_strings(table);
    table.add_rule(r"`[^`]*`", StyleRole::String);
    table.add_rule(r"/[^/\n\\]*(?:\\.[^/\n\\]*)*/[gimyus]*", StyleRole::RegexLiteral);
    table.add_rule(r"//.*", StyleRole::Comment);

    table.set_construct(ConstructKind::Comment, r"/\*", r"\*/");
}

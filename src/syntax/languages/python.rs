//! Python rules

use crate::syntax::roles::StyleRole;
use crate::syntax::rules::{ConstructKind, RuleTable};

use super::{add_strings, word};

const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "False", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "None", "nonlocal", "not", "or", "pass", "raise", "return", "True", "try", "while",
    "with", "yield",
];

const BUILTINS: &[&str] = &[
    "int", "str", "float", "list", "dict", "tuple", "set", "bool", "print", "len", "range",
    "open", "super", "isinstance", "type",
];

pub fn add_rules(table: &mut RuleTable) {
    for kw in KEYWORDS {
        table.add_rule(&word(kw), StyleRole::Keyword);
    }
    table.add_rule(r"\bdef\s+\w+", StyleRole::Function);
    table.add_rule(r"\bclass\s+\w+", StyleRole::ClassType);
    table.add_rule(r"^\s*@\w+", StyleRole::Decorator);
    table.add_rule(r"\bself\b", StyleRole::SelfReference);
    table.add_rule(r"\bcls\b", StyleRole::SelfReference);
    table.add_group_rule(r"\b(\w+)\s*\(", 1, StyleRole::Function);
    for builtin in BUILTINS {
        table.add_rule(&word(builtin), StyleRole::BuiltinName);
    }
    add_strings(table);
    table.add_rule(r"#.*", StyleRole::Comment);

    // Triple-quoted strings span blocks
    table.set_construct(ConstructKind::StringDouble, "\"\"\"", "\"\"\"");
    table.set_construct(ConstructKind::StringSingle, "'''", "'''");
}

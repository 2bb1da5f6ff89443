//! C# rules

use crate::syntax::roles::StyleRole;
use crate::syntax::rules::{ConstructKind, RuleTable};

use super::{add_strings, word};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while", "get", "set", "value", "var", "add", "remove", "yield",
    "dynamic", "await", "async",
];

pub fn add_rules(table: &mut RuleTable) {
    for kw in KEYWORDS {
        table.add_rule(&word(kw), StyleRole::Keyword);
    }
    table.add_rule(r"\b(?:class|interface|enum|struct)\s+\w+", StyleRole::ClassType);
    // return-type method heuristic; styles only the method name
    table.add_group_rule(r"\b\w+\s+(\w+)\s*\(", 1, StyleRole::Function);
    table.add_rule(r"^\s*\[.*\]", StyleRole::Decorator);
    table.add_rule(r"^\s*#\w+.*", StyleRole::Preprocessor);
    table.add_rule(r"\bthis\b", StyleRole::SelfReference);
    table.add_group_rule(r"\b(\w+)\s*\(", 1, StyleRole::Function);
    add_strings(table);
    table.add_rule(r"//.*", StyleRole::Comment);

    table.set_construct(ConstructKind::Comment, r"/\*", r"\*/");
}

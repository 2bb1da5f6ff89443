//! CSS rules

use crate::syntax::roles::StyleRole;
use crate::syntax::rules::{ConstructKind, RuleTable};

use super::{add_strings, word};

const VALUES: &[&str] = &[
    "auto", "inherit", "initial", "unset", "none", "block", "inline", "flex", "grid", "bold",
    "italic", "normal", "absolute", "relative", "fixed", "static",
];

pub fn add_rules(table: &mut RuleTable) {
    table.add_rule(
        r"^\s*[*.#]?[a-zA-Z0-9_-]+(?:\s*[,>+~ ]\s*[*.#]?[a-zA-Z0-9_-]+)*",
        StyleRole::Selector,
    );
    table.add_rule(r":[a-zA-Z-]+(?:\([^)]*\))?", StyleRole::Selector);
    table.add_group_rule(r"\b([a-zA-Z-]+)\s*:", 1, StyleRole::Property);
    for value in VALUES {
        table.add_rule(&word(value), StyleRole::Value);
    }
    table.add_rule(r"\b\d+(?:px|em|rem|pt|vh|vw|ms|s)\b", StyleRole::Number);
    table.add_rule(r"\b\d+%", StyleRole::Number);
    table.add_rule(r"#[0-9a-fA-F]{3,8}\b", StyleRole::Number);
    table.add_rule(r"\b(?:rgb|rgba|hsl|hsla)\([^)]*\)", StyleRole::Number);
    add_strings(table);

    table.set_construct(ConstructKind::Comment, r"/\*", r"\*/");
}

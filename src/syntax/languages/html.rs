//! HTML rules
//!
//! The comment construct uses `<!-- -->` instead of the C-style default.

use crate::syntax::roles::StyleRole;
use crate::syntax::rules::{ConstructKind, RuleTable};

use super::add_strings;

pub fn add_rules(table: &mut RuleTable) {
    table.add_rule(r"</?[a-zA-Z0-9-]+\b", StyleRole::Tag);
    table.add_rule(r"<!DOCTYPE\b", StyleRole::Tag);
    // attribute name before `=`; the quoted value is styled by the
    // string rules
    table.add_group_rule(r"\b([a-zA-Z-]+)\s*=", 1, StyleRole::Attribute);
    table.add_rule(r"&[a-zA-Z0-9#]+;", StyleRole::Number);
    add_strings(table);

    table.set_construct(ConstructKind::Comment, "<!--", "-->");
}

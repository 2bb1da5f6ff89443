//! Markdown rules
//!
//! Whole-line rules (lists, blockquotes) come before inline rules so
//! emphasis and code spans survive inside them, and the `#` comment rule
//! comes first so headers painted later win over it.

use crate::syntax::roles::StyleRole;
use crate::syntax::rules::RuleTable;

use super::add_strings;

pub fn add_rules(table: &mut RuleTable) {
    table.add_rule(r"#.*", StyleRole::Comment);
    add_strings(table);
    table.add_rule(r"^\s*[-*+]\s+.*", StyleRole::Operator);
    table.add_rule(r"^>\s+.*", StyleRole::Comment);
    table.add_rule(r"^#{1,6}\s+.*", StyleRole::MarkdownHeader);
    table.add_rule(r"\*\*.*?\*\*", StyleRole::MarkdownEmphasis);
    table.add_rule(r"__[^_]+__", StyleRole::MarkdownEmphasis);
    table.add_rule(r"\*[^*]+\*", StyleRole::MarkdownEmphasis);
    table.add_rule(r"_[^_]+_", StyleRole::MarkdownEmphasis);
    table.add_rule(r"`.+?`", StyleRole::MarkdownCode);
    table.add_rule(r"^```.*", StyleRole::Comment);
    table.add_rule(r"!?\[.*?\]\(.*?\)", StyleRole::Tag);
}

//! Pattern rules and rule tables
//!
//! Single-line rules match a regex within one block and assign a style
//! role to each match. Multi-line constructs carry a start and end
//! delimiter and a continuation state across blocks. Rules are applied
//! in table order; later rules overwrite earlier ones where matches
//! overlap.

use regex::Regex;

use super::roles::StyleRole;

/// A single-line pattern rule
pub struct Rule {
    /// Compiled regex pattern
    pattern: Regex,
    /// Capture group to style (0 = whole match)
    group: usize,
    /// Role assigned to matches
    pub role: StyleRole,
}

impl Rule {
    /// Create a rule styling the whole match
    ///
    /// Returns None if the pattern does not compile; callers drop such
    /// rules silently so a bad pattern degrades rather than fails.
    pub fn new(pattern: &str, role: StyleRole) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            pattern: regex,
            group: 0,
            role,
        })
    }

    /// Create a rule styling only the given capture group
    pub fn with_group(pattern: &str, group: usize, role: StyleRole) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            pattern: regex,
            group,
            role,
        })
    }

    /// All non-overlapping matches within the text, as (start, len)
    ///
    /// Zero-length matches are dropped.
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        let mut found = Vec::new();

        if self.group == 0 {
            for m in self.pattern.find_iter(text) {
                if !m.is_empty() {
                    found.push((m.start(), m.len()));
                }
            }
        } else {
            for caps in self.pattern.captures_iter(text) {
                if let Some(m) = caps.get(self.group) {
                    if !m.is_empty() {
                        found.push((m.start(), m.len()));
                    }
                }
            }
        }

        found
    }
}

/// The kind of a multi-line construct
///
/// At most one construct of each kind exists per language; the order
/// below is also the tie-break order when two constructs start at the
/// same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    Comment,
    StringDouble,
    StringSingle,
}

/// Kinds in declaration (tie-break) order
pub const CONSTRUCT_KINDS: [ConstructKind; 3] = [
    ConstructKind::Comment,
    ConstructKind::StringDouble,
    ConstructKind::StringSingle,
];

impl ConstructKind {
    /// The continuation state entered while inside this construct
    pub fn state(self) -> BlockState {
        match self {
            ConstructKind::Comment => BlockState::InComment,
            ConstructKind::StringDouble => BlockState::InStringDouble,
            ConstructKind::StringSingle => BlockState::InStringSingle,
        }
    }

    /// The role used to style this construct's text
    pub fn role(self) -> StyleRole {
        match self {
            ConstructKind::Comment => StyleRole::Comment,
            ConstructKind::StringDouble | ConstructKind::StringSingle => StyleRole::String,
        }
    }
}

/// A multi-line construct (block comment or block string)
pub struct MultilineConstruct {
    /// Which construct slot this fills
    pub kind: ConstructKind,
    /// Pattern that opens the construct
    start: Regex,
    /// Pattern that closes the construct
    end: Regex,
}

impl MultilineConstruct {
    /// Create a construct; None if either pattern fails to compile
    pub fn new(kind: ConstructKind, start_pattern: &str, end_pattern: &str) -> Option<Self> {
        let start = Regex::new(start_pattern).ok()?;
        let end = Regex::new(end_pattern).ok()?;
        Some(Self { kind, start, end })
    }

    /// First start-delimiter match in the text, as (start, len)
    pub fn find_start(&self, text: &str) -> Option<(usize, usize)> {
        self.start.find(text).map(|m| (m.start(), m.len()))
    }

    /// First end-delimiter match at or after `from`, as absolute (start, len)
    pub fn find_end(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        self.end
            .find(&text[from..])
            .map(|m| (from + m.start(), m.len()))
    }
}

/// Continuation state carried from one block to the next
///
/// This is the entire piece of cross-block information: which multi-line
/// construct, if any, is still open. Constructs do not nest, so no depth
/// or stack is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    Normal,
    InComment,
    InStringDouble,
    InStringSingle,
}

impl BlockState {
    /// Check for the initial/terminal state
    pub fn is_normal(self) -> bool {
        self == BlockState::Normal
    }

    /// The construct kind this state is inside, if any
    pub fn construct_kind(self) -> Option<ConstructKind> {
        match self {
            BlockState::Normal => None,
            BlockState::InComment => Some(ConstructKind::Comment),
            BlockState::InStringDouble => Some(ConstructKind::StringDouble),
            BlockState::InStringSingle => Some(ConstructKind::StringSingle),
        }
    }

    /// Integer form for hosts that carry plain block states
    pub fn as_raw(self) -> i32 {
        match self {
            BlockState::Normal => -1,
            BlockState::InComment => 1,
            BlockState::InStringDouble => 2,
            BlockState::InStringSingle => 3,
        }
    }

    /// Parse the integer form; anything unrecognized is Normal
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => BlockState::InComment,
            2 => BlockState::InStringDouble,
            3 => BlockState::InStringSingle,
            _ => BlockState::Normal,
        }
    }
}

/// An ordered rule list plus up to three multi-line constructs
///
/// Built once per language change and immutable afterwards.
pub struct RuleTable {
    rules: Vec<Rule>,
    constructs: Vec<MultilineConstruct>,
}

impl RuleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            constructs: Vec::new(),
        }
    }

    /// Append a whole-match rule; silently drops bad patterns
    pub fn add_rule(&mut self, pattern: &str, role: StyleRole) {
        if let Some(rule) = Rule::new(pattern, role) {
            self.rules.push(rule);
        }
    }

    /// Append a capture-group rule; silently drops bad patterns
    pub fn add_group_rule(&mut self, pattern: &str, group: usize, role: StyleRole) {
        if let Some(rule) = Rule::with_group(pattern, group, role) {
            self.rules.push(rule);
        }
    }

    /// Set a multi-line construct slot
    ///
    /// A later call for the same kind replaces the earlier one, so a
    /// language can override a default delimiter pair.
    pub fn set_construct(&mut self, kind: ConstructKind, start: &str, end: &str) {
        if let Some(construct) = MultilineConstruct::new(kind, start, end) {
            self.constructs.retain(|c| c.kind != kind);
            self.constructs.push(construct);
        }
    }

    /// Rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the table
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Number of configured constructs
    pub fn construct_count(&self) -> usize {
        self.constructs.len()
    }

    /// The construct for a kind, if configured
    pub fn construct_for(&self, kind: ConstructKind) -> Option<&MultilineConstruct> {
        self.constructs.iter().find(|c| c.kind == kind)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

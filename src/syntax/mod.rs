//! Syntax highlighting engine
//!
//! An incremental, multi-language highlighter: one block of text plus the
//! previous block's continuation state in, styled spans plus the next
//! state out. Rule tables are built per language; colors resolve through
//! the style registry.

mod highlighter;
mod languages;
mod registry;
mod roles;
mod rules;
mod session;
mod style;

pub use languages::{build_table, language_for_extension, LANGUAGE_NAMES};
pub use registry::StyleRegistry;
pub use roles::StyleRole;
pub use rules::{BlockState, ConstructKind, MultilineConstruct, Rule, RuleTable};
pub use session::{BlockCache, Session};
pub use style::{Color, Span, Style};

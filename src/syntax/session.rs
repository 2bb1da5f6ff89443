//! Highlighter sessions and per-document block caching
//!
//! A Session owns the rule table and style registry for one
//! (document, language) pairing. BlockCache tracks each block's terminal
//! state so an edit only re-highlights forward until the carried state
//! settles.

use crate::config::Settings;

use super::languages::build_table;
use super::registry::StyleRegistry;
use super::rules::{BlockState, RuleTable};
use super::style::Span;

/// Highlighting state for one open document
pub struct Session {
    language: String,
    registry: StyleRegistry,
    table: RuleTable,
}

impl Session {
    /// Create a session for a language, reading colors from settings
    pub fn new(language: &str, settings: &Settings) -> Self {
        Self {
            language: language.to_string(),
            registry: StyleRegistry::from_settings(settings),
            table: build_table(language),
        }
    }

    /// The session's current language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Highlight one block with the previous block's terminal state
    pub fn highlight(&self, text: &str, prev: BlockState) -> (Vec<Span>, BlockState) {
        self.table.highlight_block(text, prev, &self.registry)
    }

    /// Switch languages, rebuilding the rule table
    ///
    /// Every cached block state is meaningless under the new table; the
    /// caller must re-highlight the document from the first block.
    pub fn set_language(&mut self, language: &str) {
        self.language = language.to_string();
        self.table = build_table(language);
    }

    /// Re-read colors, rebuilding styles only
    ///
    /// Patterns and constructs are untouched, so cached block states stay
    /// valid; cached spans carry stale colors and should be recomputed.
    pub fn reload_colors(&mut self, settings: &Settings) {
        self.registry = StyleRegistry::from_settings(settings);
    }
}

/// Cached per-block highlight output for one document
///
/// Stores each block's spans and terminal state. After an edit to block
/// k, re-highlighting resumes at k and cascades forward only while a
/// block's freshly computed terminal state differs from the cached one.
pub struct BlockCache {
    /// Terminal state per block
    states: Vec<BlockState>,
    /// Cached spans per block (None = not computed)
    spans: Vec<Option<Vec<Span>>>,
}

impl BlockCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            spans: Vec::new(),
        }
    }

    /// Resize to the document's block count, invalidating removed tail
    /// blocks
    fn resize(&mut self, block_count: usize) {
        self.states.resize(block_count, BlockState::Normal);
        self.spans.resize(block_count, None);
    }

    /// Drop cached spans from a block onwards (states are kept; the next
    /// update recomputes and compares them)
    pub fn invalidate_from(&mut self, block: usize) {
        for slot in self.spans.iter_mut().skip(block) {
            *slot = None;
        }
    }

    /// Drop everything (language switch)
    pub fn invalidate_all(&mut self) {
        self.states.clear();
        self.spans.clear();
    }

    /// Cached spans for a block, if computed
    pub fn spans(&self, block: usize) -> Option<&[Span]> {
        self.spans.get(block).and_then(|s| s.as_deref())
    }

    /// Cached terminal state for a block
    pub fn state(&self, block: usize) -> BlockState {
        self.states.get(block).copied().unwrap_or_default()
    }

    /// Re-highlight starting at `from`, cascading forward while terminal
    /// states change
    ///
    /// Returns the index one past the last recomputed block.
    pub fn update(&mut self, session: &Session, blocks: &[&str], from: usize) -> usize {
        self.resize(blocks.len());

        let mut block = from.min(blocks.len());
        while block < blocks.len() {
            let prev = if block == 0 {
                BlockState::Normal
            } else {
                self.states[block - 1]
            };

            let (spans, next) = session.highlight(blocks[block], prev);
            let settled = self.spans[block].is_some() && self.states[block] == next;

            self.spans[block] = Some(spans);
            self.states[block] = next;
            block += 1;

            // the carried state matches what the next block already saw
            if settled {
                break;
            }
        }

        block
    }

    /// Highlight a whole document from scratch
    pub fn update_all(&mut self, session: &Session, blocks: &[&str]) {
        self.invalidate_all();
        self.update(session, blocks, 0);
    }
}

impl Default for BlockCache {
    fn default() -> Self {
        Self::new()
    }
}

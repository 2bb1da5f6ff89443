//! The per-block highlighting state machine
//!
//! One block of text goes in together with the previous block's terminal
//! state; styled spans and the new terminal state come out. The function
//! is total: any input text produces a result, worst case unstyled.
//!
//! Per block: a continuation phase closes (or extends) a construct left
//! open by the previous block, then a scan loop alternates between
//! single-line rule application and multi-line construct detection. The
//! cursor only moves forward, so the loop always terminates.

use super::registry::StyleRegistry;
use super::rules::{BlockState, MultilineConstruct, RuleTable, CONSTRUCT_KINDS};
use super::style::Span;

impl RuleTable {
    /// Highlight one block of text
    ///
    /// Returns the styled spans (in application order, later spans win on
    /// overlap) and the state to carry into the next block. Deterministic:
    /// identical inputs always produce identical outputs.
    pub fn highlight_block(
        &self,
        text: &str,
        prev: BlockState,
        registry: &StyleRegistry,
    ) -> (Vec<Span>, BlockState) {
        let mut spans = Vec::new();
        let mut cursor = 0;

        // Continuation phase: close out a construct spanning from an
        // earlier block.
        if let Some(kind) = prev.construct_kind() {
            let construct = match self.construct_for(kind) {
                Some(c) => c,
                // The table defines no such construct (stale state after
                // a language switch); keep the state, nothing to style.
                None => return (spans, prev),
            };

            match construct.find_end(text, 0) {
                Some((at, len)) => {
                    push_span(&mut spans, 0, at + len, kind.role(), registry);
                    cursor = at + len;
                }
                None => {
                    // Construct covers the whole block and stays open.
                    push_span(&mut spans, 0, text.len(), kind.role(), registry);
                    return (spans, prev);
                }
            }
        }

        // Scan loop: handle any number of constructs opening (and possibly
        // closing) within this block, applying single-line rules to the
        // text between them.
        loop {
            let rest = &text[cursor..];

            match self.earliest_construct_start(rest) {
                None => {
                    self.apply_rules(rest, cursor, registry, &mut spans);
                    return (spans, BlockState::Normal);
                }
                Some((offset, len, construct)) => {
                    self.apply_rules(&rest[..offset], cursor, registry, &mut spans);

                    let open_at = cursor + offset;
                    let body_from = open_at + len;

                    match construct.find_end(text, body_from) {
                        Some((close_at, close_len)) => {
                            let end = close_at + close_len;
                            push_span(
                                &mut spans,
                                open_at,
                                end,
                                construct.kind.role(),
                                registry,
                            );
                            cursor = end;
                        }
                        None => {
                            push_span(
                                &mut spans,
                                open_at,
                                text.len(),
                                construct.kind.role(),
                                registry,
                            );
                            return (spans, construct.kind.state());
                        }
                    }
                }
            }
        }
    }

    /// Earliest construct start in the text, ties resolved by the fixed
    /// kind order (comment, double-quoted string, single-quoted string)
    fn earliest_construct_start<'a>(
        &'a self,
        text: &str,
    ) -> Option<(usize, usize, &'a MultilineConstruct)> {
        let mut found: Option<(usize, usize, &MultilineConstruct)> = None;

        for kind in CONSTRUCT_KINDS {
            if let Some(construct) = self.construct_for(kind) {
                if let Some((start, len)) = construct.find_start(text) {
                    // strict < keeps the earlier-declared kind on ties
                    if found.map_or(true, |(best, _, _)| start < best) {
                        found = Some((start, len, construct));
                    }
                }
            }
        }

        found
    }

    /// Apply every rule globally to a segment, translating offsets back
    /// to block-absolute positions
    fn apply_rules(
        &self,
        segment: &str,
        base: usize,
        registry: &StyleRegistry,
        spans: &mut Vec<Span>,
    ) {
        if segment.is_empty() {
            return;
        }

        for rule in self.rules() {
            for (start, len) in rule.find_all(segment) {
                spans.push(Span::new(base + start, len, registry.resolve(rule.role)));
            }
        }
    }
}

/// Append a span covering [start, end), dropping empty ranges
fn push_span(
    spans: &mut Vec<Span>,
    start: usize,
    end: usize,
    role: super::roles::StyleRole,
    registry: &StyleRegistry,
) {
    if end > start {
        spans.push(Span::new(start, end - start, registry.resolve(role)));
    }
}

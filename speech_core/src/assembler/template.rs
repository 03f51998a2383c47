//! Named-slot phrase template.
//!
//! Language packs describe the sentence shape with named tokens, e.g.
//! `"{dist} {dir} {onto} {street} {verb}"`. Unknown text (including
//! unrecognized braces) is kept literally, and a pack may omit any slot -
//! a missing trailing verb simply contributes nothing.

use crate::grammar::SentenceParts;

/// The five sentence slots a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Distance,
    Direction,
    Onto,
    Street,
    Verb,
}

const SLOT_TOKENS: &[(&str, Slot)] = &[
    ("{dist}", Slot::Distance),
    ("{dir}", Slot::Direction),
    ("{onto}", Slot::Onto),
    ("{street}", Slot::Street),
    ("{verb}", Slot::Verb),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A parsed sentence template ready to be filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTemplate {
    segments: Vec<Segment>,
}

impl PhraseTemplate {
    /// Parse a pack string into literal and slot segments.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            rest = &rest[open..];

            match SLOT_TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
                Some((token, slot)) => {
                    segments.push(Segment::Slot(*slot));
                    rest = &rest[token.len()..];
                }
                None => {
                    // Not one of ours; keep the brace as text.
                    segments.push(Segment::Literal("{".to_string()));
                    rest = &rest[1..];
                }
            }
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Self { segments }
    }

    /// Substitute the sentence parts into the template.
    pub fn fill(&self, parts: &SentenceParts) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => out.push_str(match slot {
                    Slot::Distance => &parts.distance,
                    Slot::Direction => &parts.direction,
                    Slot::Onto => &parts.onto,
                    Slot::Street => &parts.street,
                    Slot::Verb => &parts.verb,
                }),
            }
        }
        out
    }

    /// Whether the template references the given slot at all.
    pub fn has_slot(&self, slot: Slot) -> bool {
        self.segments.iter().any(|s| *s == Segment::Slot(slot))
    }
}

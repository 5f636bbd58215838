//! Half-width to cabinet-native codepoint mapping.
//!
//! A `CodepointMapper` is driven by an ordered table of `MappingRule`s.
//! Rules are checked in order and the first match wins; characters no rule
//! covers pass through unchanged, so names that already contain native
//! characters (stored katakana, IME-typed full-width text) survive re-editing.

/// One entry of a mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingRule {
    /// Contiguous source range shifted onto a contiguous target block:
    /// `first..=last` maps to `target + (c - first)`.
    Offset {
        first: char,
        last: char,
        target: char,
    },

    /// Exact single-character substitution.
    Single { from: char, to: char },
}

impl MappingRule {
    /// Apply this rule to `ch`, returning `None` when the rule does not match.
    pub fn apply(&self, ch: char) -> Option<char> {
        match *self {
            MappingRule::Offset {
                first,
                last,
                target,
            } => {
                if ch < first || ch > last {
                    return None;
                }
                let code = target as u32 + (ch as u32 - first as u32);
                char::from_u32(code)
            }
            MappingRule::Single { from, to } => (ch == from).then_some(to),
        }
    }

    /// Every source character this rule matches, in order.
    pub fn sources(&self) -> impl Iterator<Item = char> {
        let (first, last) = match *self {
            MappingRule::Offset { first, last, .. } => (first, last),
            MappingRule::Single { from, .. } => (from, from),
        };
        first..=last
    }
}

/// Stateless per-character transcoder over a fixed rule table.
#[derive(Debug, Clone, Copy)]
pub struct CodepointMapper {
    rules: &'static [MappingRule],
}

impl CodepointMapper {
    /// Create a mapper over `rules`, checked in slice order.
    pub const fn new(rules: &'static [MappingRule]) -> Self {
        Self { rules }
    }

    /// The rule table, in priority order.
    pub fn rules(&self) -> &'static [MappingRule] {
        self.rules
    }

    /// Map a single character. Total: unmatched input is returned as-is.
    pub fn map(&self, ch: char) -> char {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(ch))
            .unwrap_or(ch)
    }

    /// Map a whole raw input string left to right.
    pub fn map_str(&self, raw: &str) -> String {
        raw.chars().map(|ch| self.map(ch)).collect()
    }

    /// Whether any rule rewrites `ch`.
    pub fn is_source(&self, ch: char) -> bool {
        self.rules.iter().any(|rule| rule.apply(ch).is_some())
    }

    /// All characters some rule rewrites (the typeable half-width set).
    pub fn sources(&self) -> impl Iterator<Item = char> + '_ {
        self.rules.iter().flat_map(|rule| rule.sources())
    }
}

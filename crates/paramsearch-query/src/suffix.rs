//! Parameter-name suffixes.
//!
//! A parameter named `<field>from`, `<field>to` or `<field>match` (any case)
//! asks for a lower bound, an upper bound, or an analyzed match on `<field>`.

use crate::types::QueryKind;

/// Recognized suffixes, in the order they are checked.
const SUFFIXES: [(&str, SuffixKind); 3] = [
    ("from", SuffixKind::From),
    ("to", SuffixKind::To),
    ("match", SuffixKind::Match),
];

/// Suffix found at the end of a parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixKind {
    /// Lower range bound.
    From,
    /// Upper range bound.
    To,
    /// Analyzed match.
    Match,
    /// No recognized suffix.
    None,
}

impl SuffixKind {
    /// Query kind a parameter with this suffix asks for.
    pub fn query_kind(&self) -> QueryKind {
        match self {
            SuffixKind::From | SuffixKind::To => QueryKind::Range,
            SuffixKind::Match => QueryKind::Match,
            SuffixKind::None => QueryKind::Terms,
        }
    }

    /// Whether this suffix names one side of a range.
    pub fn is_range_bound(&self) -> bool {
        matches!(self, SuffixKind::From | SuffixKind::To)
    }
}

/// Split a raw parameter name into its suffix and base name.
///
/// Matching is ASCII case-insensitive and checks `from`, then `to`, then
/// `match`. The base name is the raw name with exactly that many trailing
/// bytes removed, so it may come out empty (`"to"` → `""`). Without a
/// recognized suffix the base name is the raw name unchanged.
pub fn classify(raw: &str) -> (SuffixKind, &str) {
    for (suffix, kind) in SUFFIXES {
        if let Some(base) = strip_suffix_ignore_case(raw, suffix) {
            return (kind, base);
        }
    }
    (SuffixKind::None, raw)
}

fn strip_suffix_ignore_case<'a>(raw: &'a str, suffix: &str) -> Option<&'a str> {
    let split = raw.len().checked_sub(suffix.len())?;
    // An ASCII suffix can only match ASCII bytes, so `split` is a char boundary.
    let tail = raw.as_bytes().get(split..)?;
    if tail.eq_ignore_ascii_case(suffix.as_bytes()) {
        raw.get(..split)
    } else {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

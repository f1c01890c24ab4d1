use regex::Captures;
use tracing::trace;

use crate::errors::ParseError;
use crate::grammar::GrammarEntry;

/// Labeled captures from a single match of one [`GrammarEntry`].
///
/// Borrows from the transcript; nothing is copied until a resolver converts
/// a capture into a typed value.
#[derive(Debug)]
pub struct CaptureSet<'t> {
    section: &'static str,
    captures: Captures<'t>,
}

impl<'t> CaptureSet<'t> {
    pub fn section(&self) -> &'static str {
        self.section
    }

    /// The labeled capture, or `None` when the label did not participate in
    /// the match.
    pub fn get(&self, label: &str) -> Option<&'t str> {
        self.captures.name(label).map(|m| m.as_str())
    }

    /// Like [`CaptureSet::get`], but a missing label means the section is
    /// unusable.
    pub fn require(&self, label: &str) -> Result<&'t str, ParseError> {
        self.get(label).ok_or(ParseError::MissingRequiredSection {
            section: self.section,
        })
    }
}

/// Applies `entry` once against the whole text and returns the first match.
pub fn extract<'t>(text: &'t str, entry: &GrammarEntry) -> Option<CaptureSet<'t>> {
    let found = entry.pattern().captures(text).map(|captures| CaptureSet {
        section: entry.name(),
        captures,
    });
    trace!(section = entry.name(), matched = found.is_some(), "extract");
    found
}

/// Every non-overlapping match of `entry`, in text order. Used for sections
/// made of repeated lines (seat declarations, winner lines).
pub fn extract_all<'t>(text: &'t str, entry: &GrammarEntry) -> Vec<CaptureSet<'t>> {
    let found: Vec<_> = entry
        .pattern()
        .captures_iter(text)
        .map(|captures| CaptureSet {
            section: entry.name(),
            captures,
        })
        .collect();
    trace!(section = entry.name(), matches = found.len(), "extract_all");
    found
}

/// [`extract`] for a section the hand cannot be represented without.
pub fn require<'t>(text: &'t str, entry: &GrammarEntry) -> Result<CaptureSet<'t>, ParseError> {
    extract(text, entry).ok_or(ParseError::MissingRequiredSection {
        section: entry.name(),
    })
}

/// Presence test with no captures.
pub fn present(text: &str, entry: &GrammarEntry) -> bool {
    entry.pattern().is_match(text)
}

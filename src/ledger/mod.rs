//! Append-only action history.
//!
//! Every transition appends one or more [`LedgerEntry`] lines. Lines are never
//! edited, with one exception: an Action line that directly follows a Hit
//! line by the same player is folded into it, so "drew Lock, locked Bob"
//! reads as one line.

mod entry;

pub use entry::{LedgerAction, LedgerEntry};

use im::Vector;
use serde::{Deserialize, Serialize};

/// The game's history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vector<LedgerEntry>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, merging it into a trailing Hit line when allowed.
    pub fn record(&mut self, entry: LedgerEntry) {
        if let Some(last) = self.entries.back_mut() {
            if last.absorbs(&entry) {
                last.result = format!("{}; {}", last.result, entry.result);
                if entry.target_name.is_some() {
                    last.target_name = entry.target_name;
                }
                return;
            }
        }
        self.entries.push_back(entry);
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the ledger empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent line.
    #[must_use]
    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.back()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }

    /// Lines belonging to one round.
    pub fn for_round(&self, round_number: u32) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter(move |e| e.round_number == round_number)
    }

    /// Copy with every timestamp zeroed, for determinism comparisons.
    #[must_use]
    pub fn without_timestamps(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .cloned()
                .map(|mut e| {
                    e.timestamp = 0;
                    e
                })
                .collect(),
        }
    }
}

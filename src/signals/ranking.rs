//! Gainers/losers ranking by whole-period percent change.

use std::cmp::Ordering;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedChange {
    pub symbol: String,
    pub percent_change: f64,
}

/// Symbols sorted by percent change, highest first. Equal changes keep their
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<RankedChange>,
}

impl Ranking {
    /// Non-finite changes are left out; they have no place in the ordering.
    pub fn new<I, S>(changes: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut entries: Vec<RankedChange> = changes
            .into_iter()
            .filter(|(_, change)| change.is_finite())
            .map(|(symbol, percent_change)| RankedChange {
                symbol: symbol.into(),
                percent_change,
            })
            .collect();
        // sort_by is stable
        entries.sort_by(|a, b| {
            b.percent_change
                .partial_cmp(&a.percent_change)
                .unwrap_or(Ordering::Equal)
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedChange] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The top `k` entries.
    pub fn gainers(&self, k: usize) -> &[RankedChange] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// The bottom `k` entries, still in descending order.
    pub fn losers(&self, k: usize) -> &[RankedChange] {
        let start = self.entries.len().saturating_sub(k);
        &self.entries[start..]
    }
}

//! Symbol-keyed collection of price series.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::series::{SeriesError, TimeSeries};

/// Maps each unique symbol to one [`TimeSeries`], preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolSeriesSet {
    entries: Vec<(String, TimeSeries)>,
}

impl SymbolSeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (S, TimeSeries)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (symbol, series) in entries {
            set.insert(symbol, series)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, symbol: impl Into<String>, series: TimeSeries) -> Result<(), SeriesError> {
        let symbol = symbol.into();
        if self.contains(&symbol) {
            return Err(SeriesError::DuplicateSymbol(symbol));
        }
        self.entries.push((symbol, series));
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&TimeSeries> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, series)| series)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimeSeries)> {
        self.entries.iter().map(|(s, series)| (s.as_str(), series))
    }

    /// The shared timestamp index, if every series has the same one.
    pub fn common_index(&self) -> Option<Vec<DateTime<Utc>>> {
        let (_, first) = self.entries.first()?;
        self.entries
            .iter()
            .all(|(_, series)| series.same_index(first))
            .then(|| first.timestamps())
    }

    /// Union of all timestamps across the set, ascending.
    pub fn union_index(&self) -> Vec<DateTime<Utc>> {
        self.entries
            .iter()
            .flat_map(|(_, series)| series.iter().map(|o| o.timestamp))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Timestamps present in every series, ascending. Empty for an empty set.
    pub fn intersection_index(&self) -> Vec<DateTime<Utc>> {
        let Some((_, first)) = self.entries.first() else {
            return Vec::new();
        };
        first
            .timestamps()
            .into_iter()
            .filter(|t| {
                self.entries[1..]
                    .iter()
                    .all(|(_, series)| series.contains_timestamp(*t))
            })
            .collect()
    }

    /// Reindex every series onto the union of timestamps so the set shares one
    /// index. Dates a symbol did not trade become missing observations.
    pub fn aligned(&self) -> Result<SymbolSeriesSet, SeriesError> {
        self.reindexed(&self.union_index())
    }

    /// Every series placed onto `index`, which must be strictly increasing.
    pub fn reindexed(&self, index: &[DateTime<Utc>]) -> Result<SymbolSeriesSet, SeriesError> {
        self.try_map(|series| series.reindex(index))
    }

    /// Apply `f` to every series, keeping symbols and order.
    pub fn map<F>(&self, mut f: F) -> SymbolSeriesSet
    where
        F: FnMut(&TimeSeries) -> TimeSeries,
    {
        SymbolSeriesSet {
            entries: self
                .entries
                .iter()
                .map(|(symbol, series)| (symbol.clone(), f(series)))
                .collect(),
        }
    }

    fn try_map<F>(&self, mut f: F) -> Result<SymbolSeriesSet, SeriesError>
    where
        F: FnMut(&TimeSeries) -> Result<TimeSeries, SeriesError>,
    {
        let entries = self
            .entries
            .iter()
            .map(|(symbol, series)| Ok((symbol.clone(), f(series)?)))
            .collect::<Result<Vec<_>, SeriesError>>()?;
        Ok(SymbolSeriesSet { entries })
    }
}

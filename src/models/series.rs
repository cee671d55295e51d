//! Date-indexed price series with explicit missing observations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("timestamps must be strictly increasing (violated at index {index})")]
    NonIncreasingTimestamp { index: usize },

    #[error("timestamp and value counts differ: {timestamps} timestamps, {values} values")]
    LengthMismatch { timestamps: usize, values: usize },

    #[error("symbol appears more than once in series set: {0}")]
    DuplicateSymbol(String),
}

/// A single point of a [`TimeSeries`]. `None` marks a missing observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub value: Option<f64>,
}

impl Observation {
    /// Non-finite values are stored as missing so they never reach arithmetic.
    pub fn new(timestamp: DateTime<Utc>, value: Option<f64>) -> Self {
        Self {
            timestamp,
            value: value.filter(|v| v.is_finite()),
        }
    }

    pub fn present(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self::new(timestamp, Some(value))
    }

    pub fn missing(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            value: None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Ordered sequence of observations keyed by strictly increasing timestamps.
///
/// Serialized as a plain list of observations; deserializing goes through
/// [`TimeSeries::new`] so the ordering and finite-value rules hold.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Observation>", into = "Vec<Observation>")]
pub struct TimeSeries {
    observations: Vec<Observation>,
}

impl TimeSeries {
    pub fn new(observations: Vec<Observation>) -> Result<Self, SeriesError> {
        if let Some(index) = observations
            .windows(2)
            .position(|w| w[1].timestamp <= w[0].timestamp)
        {
            return Err(SeriesError::NonIncreasingTimestamp { index: index + 1 });
        }
        Ok(Self { observations })
    }

    /// Build a series from parallel timestamp and value vectors.
    pub fn from_parts(
        timestamps: Vec<DateTime<Utc>>,
        values: Vec<Option<f64>>,
    ) -> Result<Self, SeriesError> {
        if timestamps.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        let observations = timestamps
            .into_iter()
            .zip(values)
            .map(|(timestamp, value)| Observation::new(timestamp, value))
            .collect();
        Self::new(observations)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.observations.iter().map(|o| o.timestamp).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.observations.iter().map(|o| o.value).collect()
    }

    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.observations.get(index).and_then(|o| o.value)
    }

    /// Value observed at `timestamp`, if the index contains it.
    pub fn value_on(&self, timestamp: DateTime<Utc>) -> Option<f64> {
        self.observations
            .binary_search_by_key(&timestamp, |o| o.timestamp)
            .ok()
            .and_then(|i| self.observations[i].value)
    }

    pub fn contains_timestamp(&self, timestamp: DateTime<Utc>) -> bool {
        self.observations
            .binary_search_by_key(&timestamp, |o| o.timestamp)
            .is_ok()
    }

    pub fn timestamp_at(&self, index: usize) -> Option<DateTime<Utc>> {
        self.observations.get(index).map(|o| o.timestamp)
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// True when at least one observation carries a value.
    pub fn has_values(&self) -> bool {
        self.observations.iter().any(|o| o.value.is_some())
    }

    /// True when no observation is missing.
    pub fn is_complete(&self) -> bool {
        self.observations.iter().all(|o| o.value.is_some())
    }

    pub fn missing_count(&self) -> usize {
        self.observations.iter().filter(|o| o.is_missing()).count()
    }

    pub fn same_index(&self, other: &TimeSeries) -> bool {
        self.len() == other.len()
            && self
                .observations
                .iter()
                .zip(&other.observations)
                .all(|(a, b)| a.timestamp == b.timestamp)
    }

    /// Copy of the series without its first `n` observations.
    pub fn skip_leading(&self, n: usize) -> TimeSeries {
        TimeSeries {
            observations: self.observations.iter().skip(n).copied().collect(),
        }
    }

    /// Place the series onto `index`; timestamps it does not cover become missing.
    /// `index` must be strictly increasing.
    pub fn reindex(&self, index: &[DateTime<Utc>]) -> Result<TimeSeries, SeriesError> {
        let mut source = self.observations.iter().peekable();
        let mut observations = Vec::with_capacity(index.len());
        for &timestamp in index {
            while source.next_if(|o| o.timestamp < timestamp).is_some() {}
            let value = source
                .peek()
                .filter(|o| o.timestamp == timestamp)
                .and_then(|o| o.value);
            observations.push(Observation::new(timestamp, value));
        }
        TimeSeries::new(observations)
    }

    /// Same index, new values. Lengths must match.
    pub(crate) fn with_values(&self, values: Vec<Option<f64>>) -> TimeSeries {
        debug_assert_eq!(values.len(), self.observations.len());
        TimeSeries {
            observations: self
                .observations
                .iter()
                .zip(values)
                .map(|(o, value)| Observation::new(o.timestamp, value))
                .collect(),
        }
    }

    /// Built from observations already known to be strictly increasing.
    pub(crate) fn from_ordered(observations: Vec<Observation>) -> TimeSeries {
        debug_assert!(observations
            .windows(2)
            .all(|w| w[0].timestamp < w[1].timestamp));
        TimeSeries { observations }
    }
}

impl TryFrom<Vec<Observation>> for TimeSeries {
    type Error = SeriesError;

    fn try_from(observations: Vec<Observation>) -> Result<Self, Self::Error> {
        TimeSeries::new(
            observations
                .into_iter()
                .map(|o| Observation::new(o.timestamp, o.value))
                .collect(),
        )
    }
}

impl From<TimeSeries> for Vec<Observation> {
    fn from(series: TimeSeries) -> Self {
        series.observations
    }
}

//! Moving-average crossover detection.
//!
//! Walks two aligned rolling means (`fast`, `slow`) and emits a Buy when the
//! fast line moves from strictly below to strictly above the slow line between
//! consecutive bars, and a Sell for the opposite move. Bars where either line
//! is undefined are skipped, and equality never counts as a crossing.

use crate::indicators::trend::sma_pair;
use crate::indicators::IndicatorError;
use crate::models::{Signal, SignalDirection, TimeSeries};

/// Position of the fast line relative to the slow line on one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Below,
    Equal,
    Above,
}

impl Relation {
    /// `None` when either side is missing.
    pub fn between(fast: Option<f64>, slow: Option<f64>) -> Option<Self> {
        let (fast, slow) = (fast?, slow?);
        Some(if fast < slow {
            Relation::Below
        } else if fast > slow {
            Relation::Above
        } else {
            Relation::Equal
        })
    }

    /// Direction of the crossing from `prev` to `self`, if it is one.
    pub fn crossing_from(self, prev: Relation) -> Option<SignalDirection> {
        match (prev, self) {
            (Relation::Below, Relation::Above) => Some(SignalDirection::Buy),
            (Relation::Above, Relation::Below) => Some(SignalDirection::Sell),
            _ => None,
        }
    }
}

/// Buy and Sell signals, each in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Crossovers {
    pub buys: Vec<Signal>,
    pub sells: Vec<Signal>,
}

impl Crossovers {
    pub fn len(&self) -> usize {
        self.buys.len() + self.sells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }

    /// Buys and sells merged into one timeline.
    pub fn chronological(&self) -> Vec<Signal> {
        let mut all: Vec<Signal> = self.buys.iter().chain(&self.sells).copied().collect();
        all.sort_by_key(|s| s.timestamp);
        all
    }
}

/// Detect crossings of `fast` over `slow`, pricing each signal from `price`.
///
/// All three series must share one timestamp index.
pub fn detect_crossovers(
    price: &TimeSeries,
    fast: &TimeSeries,
    slow: &TimeSeries,
) -> Result<Crossovers, IndicatorError> {
    if !price.same_index(fast) || !price.same_index(slow) {
        return Err(IndicatorError::MisalignedSeries);
    }

    let mut crossovers = Crossovers::default();
    let mut prev: Option<Relation> = None;

    for (i, obs) in price.iter().enumerate() {
        let current = Relation::between(fast.value_at(i), slow.value_at(i));
        let direction = match (prev, current) {
            (Some(p), Some(c)) => c.crossing_from(p),
            _ => None,
        };
        prev = current;

        let (Some(direction), Some(px)) = (direction, obs.value) else {
            continue;
        };
        match direction {
            SignalDirection::Buy => crossovers.buys.push(Signal::buy(obs.timestamp, px)),
            SignalDirection::Sell => crossovers.sells.push(Signal::sell(obs.timestamp, px)),
        }
    }

    Ok(crossovers)
}

/// Fast/slow SMA crossover over a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossoverDetector {
    pub fast_window: usize,
    pub slow_window: usize,
}

/// Everything the detector derived from one price series.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossoverAnalysis {
    pub fast_window: usize,
    pub slow_window: usize,
    pub fast: TimeSeries,
    pub slow: TimeSeries,
    pub crossovers: Crossovers,
}

impl CrossoverDetector {
    pub fn new(fast_window: usize, slow_window: usize) -> Result<Self, IndicatorError> {
        if fast_window == 0 || slow_window == 0 {
            return Err(IndicatorError::InvalidWindow);
        }
        Ok(Self {
            fast_window,
            slow_window,
        })
    }

    pub fn analyze(&self, price: &TimeSeries) -> Result<CrossoverAnalysis, IndicatorError> {
        let (fast, slow) = sma_pair(price, self.fast_window, self.slow_window)?;
        let crossovers = detect_crossovers(price, &fast, &slow)?;
        Ok(CrossoverAnalysis {
            fast_window: self.fast_window,
            slow_window: self.slow_window,
            fast,
            slow,
            crossovers,
        })
    }
}

impl Default for CrossoverDetector {
    fn default() -> Self {
        Self {
            fast_window: 5,
            slow_window: 20,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalDirection {
    Buy,
    Sell,
}

/// A crossover event: the bar at which it fired and the price on that bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub direction: SignalDirection,
}

impl Signal {
    pub fn buy(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self {
            timestamp,
            price,
            direction: SignalDirection::Buy,
        }
    }

    pub fn sell(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self {
            timestamp,
            price,
            direction: SignalDirection::Sell,
        }
    }
}

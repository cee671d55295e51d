//! Reference instrument universe and random sub-selection.

use std::io::Read;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::Instrument;

#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("failed to read universe: {0}")]
    Csv(#[from] csv::Error),

    #[error("universe is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("cannot sample {requested} instruments from a universe of {available}")]
    SampleTooLarge { requested: usize, available: usize },
}

const REQUIRED_COLUMNS: [&str; 2] = ["Symbol", "Company Name"];

/// Candidate instruments, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Universe {
    instruments: Vec<Instrument>,
}

impl Universe {
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, UniverseError> {
        Self::from_reader(
            csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_path(path)?,
        )
    }

    /// Read any CSV with at least `Symbol` and `Company Name` columns. Extra
    /// columns are ignored.
    pub fn from_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, UniverseError> {
        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(UniverseError::MissingColumn(column));
            }
        }
        let instruments = reader
            .deserialize::<Instrument>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { instruments })
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Draw `n` distinct instruments uniformly without replacement. The caller
    /// owns the random source, so a seeded RNG gives a reproducible draw.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Instrument>, UniverseError> {
        if n > self.instruments.len() {
            return Err(UniverseError::SampleTooLarge {
                requested: n,
                available: self.instruments.len(),
            });
        }
        Ok(self.instruments.choose_multiple(rng, n).cloned().collect())
    }
}

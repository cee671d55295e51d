//! Equity price analytics: fetch daily history, clean it, derive returns,
//! rolling statistics, crossover signals, rankings and portfolio value.

pub mod charts;
pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod output;
pub mod pipelines;
pub mod portfolio;
pub mod services;
pub mod signals;
pub mod universe;

//! zjump-core - frecency-ranked directory jump engine
//!
//! This crate reads the flat-file z database maintained by an external
//! shell tracking agent, ranks matching directories by frecency, and feeds
//! user selections back by rewriting a single record in place.

pub mod config;
mod error;
pub mod path_utils;
pub mod score;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use store::RecordStore;
pub use types::{RankedResult, Record, TouchOutcome};

//! Framework error type.
//!
//! Simulation ticks never fail: out-of-range coordinates, blocked footprints
//! and stranded vehicles all degrade to "no state change".  `CityError` only
//! covers the edges of the system: configuration and parsing.

use thiserror::Error;

/// The top-level error type for `city-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CityError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `city-*` crates.
pub type CityResult<T> = Result<T, CityError>;

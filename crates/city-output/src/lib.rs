//! `city-output`: statistics writers for the city sandbox.
//!
//! | File                     | One row per                                  |
//! |--------------------------|----------------------------------------------|
//! | `frame_summaries.csv`    | snapshot frame: date, speed, population, …   |
//! | `vehicle_snapshots.csv`  | live vehicle at each snapshot frame          |
//!
//! The writer implements [`OutputWriter`] and is driven by
//! [`CityOutputObserver`], which implements `city_sim::CityObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use city_output::{CityOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = CityOutputObserver::new(writer);
//! city.run_frames(3_600, 16.0, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CityOutputObserver;
pub use row::{FrameSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;

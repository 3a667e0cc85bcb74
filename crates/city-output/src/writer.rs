//! The `OutputWriter` trait implemented by backend writers.

use crate::{FrameSummaryRow, OutputResult, VehicleSnapshotRow};

/// Sink for city statistics.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`CityOutputObserver::take_error`][crate::CityOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Write a batch of vehicle positions.
    fn write_vehicles(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

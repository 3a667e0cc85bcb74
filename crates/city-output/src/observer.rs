//! `CityOutputObserver<W>`: bridges `CityObserver` to an `OutputWriter`.

use city_sim::{City, CityObserver, FrameReport};
use tracing::warn;

use crate::row::{FrameSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`CityObserver`] that writes a frame summary and every vehicle position
/// at each snapshot frame.
///
/// Errors from the writer are stored internally because `CityObserver`
/// methods have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct CityOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> CityOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Frame summaries written so far.
    #[inline]
    pub fn summaries_written(&self) -> u64 {
        self.rows
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> CityObserver for CityOutputObserver<W> {
    fn on_snapshot(&mut self, report: &FrameReport, city: &City) {
        let summary = FrameSummaryRow::new(report, &city.grid);
        let result = self.writer.write_frame_summary(&summary);
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);

        let rows: Vec<VehicleSnapshotRow> = city
            .traffic
            .vehicles()
            .iter()
            .map(|v| VehicleSnapshotRow::new(report.frame, v))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_vehicles(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _frames: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

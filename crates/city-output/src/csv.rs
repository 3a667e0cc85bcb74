//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `frame_summaries.csv`
//! - `vehicle_snapshots.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{FrameSummaryRow, OutputResult, VehicleSnapshotRow};

pub const FRAME_SUMMARIES_FILE:   &str = "frame_summaries.csv";
pub const VEHICLE_SNAPSHOTS_FILE: &str = "vehicle_snapshots.csv";

const SUMMARY_HEADER: [&str; 12] = [
    "frame", "year", "day", "speed", "population", "building_cells", "buildings",
    "vehicles", "spawned", "upgraded", "vehicles_spawned", "vehicles_despawned",
];

const VEHICLE_HEADER: [&str; 7] = [
    "frame", "vehicle_id", "grid_x", "grid_z", "exact_x", "exact_z", "heading",
];

/// Writes city statistics to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    vehicles:  Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join(FRAME_SUMMARIES_FILE))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut vehicles = Writer::from_path(dir.join(VEHICLE_SNAPSHOTS_FILE))?;
        vehicles.write_record(VEHICLE_HEADER)?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self {
            summaries,
            vehicles,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.year.to_string(),
            row.day.to_string(),
            row.speed.to_string(),
            row.population.to_string(),
            row.building_cells.to_string(),
            row.buildings.to_string(),
            row.vehicles.to_string(),
            row.spawned.to_string(),
            row.upgraded.to_string(),
            row.vehicles_spawned.to_string(),
            row.vehicles_despawned.to_string(),
        ])?;
        Ok(())
    }

    fn write_vehicles(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.frame.to_string(),
                row.vehicle_id.to_string(),
                row.grid_x.to_string(),
                row.grid_z.to_string(),
                format!("{:.3}", row.exact_x),
                format!("{:.3}", row.exact_z),
                row.heading.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.vehicles.flush()?;
        Ok(())
    }
}

//! Unit and integration tests for city-output.

#[cfg(test)]
mod csv_tests {
    use city_core::Direction;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, FRAME_SUMMARIES_FILE, VEHICLE_SNAPSHOTS_FILE};
    use crate::row::{FrameSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn summary_row(frame: u64) -> FrameSummaryRow {
        FrameSummaryRow {
            frame,
            year:               1,
            day:                frame as u32 + 1,
            speed:              2,
            population:         frame * 100,
            building_cells:     6,
            buildings:          4,
            vehicles:           3,
            spawned:            1,
            upgraded:           0,
            vehicles_spawned:   1,
            vehicles_despawned: 0,
        }
    }

    fn vehicle_row(vehicle_id: u32) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            frame:   7,
            vehicle_id,
            grid_x:  vehicle_id as i32,
            grid_z:  20,
            exact_x: vehicle_id as f32 + 0.25,
            exact_z: 20.0,
            heading: Direction::East,
        }
    }

    fn read_rows(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created_in_new_dir() {
        let dir = tmp();
        let out = dir.path().join("nested").join("run");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join(FRAME_SUMMARIES_FILE).exists());
        assert!(out.join(VEHICLE_SNAPSHOTS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(VEHICLE_SNAPSHOTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["frame", "vehicle_id", "grid_x", "grid_z", "exact_x", "exact_z", "heading"]);

        let mut rdr = csv::Reader::from_path(dir.path().join(FRAME_SUMMARIES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers.len(), 12);
        assert_eq!(headers[0], "frame");
        assert_eq!(headers[4], "population");
    }

    #[test]
    fn summary_values_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let rows = read_rows(dir.path().join(FRAME_SUMMARIES_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");   // frame
        assert_eq!(&rows[0][2], "4");   // day
        assert_eq!(&rows[0][3], "2");   // speed
        assert_eq!(&rows[0][4], "300"); // population
    }

    #[test]
    fn vehicle_positions_are_fixed_precision() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_vehicles(&[vehicle_row(0), vehicle_row(5)]).unwrap();
        w.finish().unwrap();

        let rows = read_rows(dir.path().join(VEHICLE_SNAPSHOTS_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "5");
        assert_eq!(&rows[1][4], "5.250");
        assert_eq!(&rows[1][5], "20.000");
        assert_eq!(&rows[1][6], "east");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_vehicle_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_vehicles(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use city_core::{Cell, CityConfig, Direction, TrafficConfig};
    use city_grid::{EditIntent, EditTool};
    use city_sim::{City, CityBuilder};
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, FRAME_SUMMARIES_FILE, VEHICLE_SNAPSHOTS_FILE};
    use crate::{CityOutputObserver, FrameSummaryRow, OutputError, OutputResult, OutputWriter, VehicleSnapshotRow};

    /// Road along z = 20, no automatic vehicle spawns.
    fn quiet_city(snapshot_interval: u64) -> City {
        let config = CityConfig {
            traffic: TrafficConfig { spawn_interval_ms: f64::MAX, ..TrafficConfig::default() },
            ..CityConfig::default()
        };
        let mut city = CityBuilder::new(config)
            .seed(1)
            .snapshot_interval(snapshot_interval)
            .build()
            .unwrap();
        city.apply_edit(&EditIntent::new(EditTool::RoadMajor, Cell::new(0, 20), Cell::new(39, 20)));
        city
    }

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn integration_csv() {
        let mut city = quiet_city(1);
        city.traffic.spawn_at(Cell::new(5, 20), Direction::East).unwrap();
        city.traffic.spawn_at(Cell::new(30, 20), Direction::West).unwrap();

        let dir = tmp();
        let mut obs = CityOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        city.run_frames(3, 16.0, &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.summaries_written(), 3);

        let mut rdr = csv::Reader::from_path(dir.path().join(FRAME_SUMMARIES_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 3);

        // 3 frames × 2 vehicles
        let mut rdr = csv::Reader::from_path(dir.path().join(VEHICLE_SNAPSHOTS_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 6);
    }

    #[test]
    fn interval_thins_summaries() {
        let mut city = quiet_city(5);
        let dir = tmp();
        let mut obs = CityOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        city.run_frames(20, 16.0, &mut obs);
        assert_eq!(obs.summaries_written(), 4);
        assert!(obs.take_error().is_none());
    }

    /// Fails every write with a fresh I/O error tagged by call number.
    struct FailingWriter {
        calls: u32,
    }

    impl OutputWriter for FailingWriter {
        fn write_frame_summary(&mut self, _row: &FrameSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(io::Error::other(format!("call {}", self.calls)).into())
        }

        fn write_vehicles(&mut self, _rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(io::Error::other(format!("call {}", self.calls)).into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut city = quiet_city(1);
        let mut obs = CityOutputObserver::new(FailingWriter { calls: 0 });
        city.run_frames(4, 16.0, &mut obs);

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "call 1"),
            other => panic!("expected stored I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none(), "error is taken once");
        assert_eq!(obs.summaries_written(), 0);
        assert_eq!(obs.into_writer().calls, 4);
    }
}

//! Frame observer trait for progress reporting and data collection.

use city_core::{SimDate, TickContext};
use city_growth::GrowthReport;

use crate::{City, FrameReport};

/// Callbacks invoked by [`City::frame`][crate::City::frame] at key points of
/// each frame.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: population logger
///
/// ```rust,ignore
/// struct PopLogger;
///
/// impl CityObserver for PopLogger {
///     fn on_growth(&mut self, date: SimDate, _report: &GrowthReport, population: u64) {
///         println!("{date}: population {population}");
///     }
/// }
/// ```
pub trait CityObserver {
    /// Called before the clock advances.  `ctx.date` is the date at the
    /// start of the frame.
    fn on_frame_start(&mut self, _frame: u64, _ctx: &TickContext) {}

    /// Called once per frame in which at least one day rolled over, with the
    /// new date and the number of days that elapsed.
    fn on_day(&mut self, _date: SimDate, _days: u32) {}

    /// Called when a growth tick visibly changed the city.  `population` is
    /// already recounted.
    fn on_growth(&mut self, _date: SimDate, _report: &GrowthReport, _population: u64) {}

    /// Called at the end of every frame.
    fn on_frame_end(&mut self, _report: &FrameReport) {}

    /// Called every `snapshot_interval` frames with read access to the whole
    /// city, so output writers can record state without the driver knowing
    /// any file format.
    fn on_snapshot(&mut self, _report: &FrameReport, _city: &City) {}

    /// Called once by [`City::run_frames`][crate::City::run_frames] after
    /// the last frame.
    fn on_run_end(&mut self, _frames: u64) {}
}

/// A [`CityObserver`] that does nothing.
pub struct NoopObserver;

impl CityObserver for NoopObserver {}

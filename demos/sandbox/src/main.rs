//! sandbox: headless run of the city simulation.
//!
//! Paints a road lattice with a few parks and schools, then lets buildings
//! grow and traffic wander for a fixed number of frames.
//!
//! ```text
//! sandbox [CONFIG.json] [--out DIR] [--frames N] [--speed 0|1|2|4|10]
//! ```
//!
//! Logging honours `RUST_LOG` (default `info`).

mod layout;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use city_core::{CityConfig, SimDate, SimSpeed, TickContext};
use city_grid::CellType;
use city_growth::GrowthReport;
use city_output::{CityOutputObserver, CsvWriter};
use city_sim::{City, CityBuilder, CityObserver, FrameReport, NoopObserver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SEED:      u64 = 42;
const DEFAULT_FRAMES:    u64 = 3_600;
const FRAME_MS:          f64 = 1_000.0 / 60.0;
const SNAPSHOT_INTERVAL: u64 = 60; // once per real second

// ── Command line ──────────────────────────────────────────────────────────────

struct Args {
    config: Option<PathBuf>,
    out:    Option<PathBuf>,
    frames: u64,
    speed:  SimSpeed,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        out:    None,
        frames: DEFAULT_FRAMES,
        speed:  SimSpeed::Superfast,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" => args.out = Some(it.next().context("--out needs a directory")?.into()),
            "--frames" => {
                let n = it.next().context("--frames needs a count")?;
                args.frames = n.parse().with_context(|| format!("bad frame count {n:?}"))?;
            }
            "--speed" => {
                let n = it.next().context("--speed needs a multiplier")?;
                let m: u32 = n.parse().with_context(|| format!("bad speed {n:?}"))?;
                args.speed = SimSpeed::try_from(m)?;
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => args.config = Some(path.into()),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&Path>) -> Result<CityConfig> {
    let Some(path) = path else {
        return Ok(CityConfig { seed: Some(DEFAULT_SEED), ..CityConfig::default() });
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: CityConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── Observer wrapper to log progress ─────────────────────────────────────────

struct ProgressLogger<O: CityObserver> {
    inner:        O,
    growth_ticks: u64,
    peak_traffic: usize,
}

impl<O: CityObserver> ProgressLogger<O> {
    fn new(inner: O) -> Self {
        Self { inner, growth_ticks: 0, peak_traffic: 0 }
    }
}

impl<O: CityObserver> CityObserver for ProgressLogger<O> {
    fn on_frame_start(&mut self, frame: u64, ctx: &TickContext) {
        self.inner.on_frame_start(frame, ctx);
    }

    fn on_day(&mut self, date: SimDate, days: u32) {
        self.inner.on_day(date, days);
    }

    fn on_growth(&mut self, date: SimDate, report: &GrowthReport, population: u64) {
        self.growth_ticks += 1;
        info!(%date, spawned = report.spawned, upgraded = report.upgraded, population, "city grew");
        self.inner.on_growth(date, report, population);
    }

    fn on_frame_end(&mut self, report: &FrameReport) {
        self.peak_traffic = self.peak_traffic.max(report.vehicles);
        self.inner.on_frame_end(report);
    }

    fn on_snapshot(&mut self, report: &FrameReport, city: &City) {
        self.inner.on_snapshot(report, city);
    }

    fn on_run_end(&mut self, frames: u64) {
        self.inner.on_run_end(frames);
    }
}

fn run<O: CityObserver>(city: &mut City, args: &Args, observer: O) -> ProgressLogger<O> {
    let mut logger = ProgressLogger::new(observer);
    city.run_frames(args.frames, FRAME_MS, &mut logger);
    logger
}

fn report(city: &City, logger: &ProgressLogger<impl CityObserver>, elapsed_ms: u128) {
    info!(
        date = %city.date(),
        population = city.population(),
        buildings = city.grid.pivot_indices(CellType::Building).len(),
        building_cells = city.grid.count(CellType::Building),
        vehicles = city.traffic.len(),
        peak_vehicles = logger.peak_traffic,
        growth_ticks = logger.growth_ticks,
        elapsed_ms,
        "simulation complete"
    );
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;
    info!(
        width = config.grid_width,
        height = config.grid_height,
        seed = ?config.seed,
        frames = args.frames,
        speed = %args.speed,
        "configuration loaded"
    );

    let mut city = CityBuilder::new(config)
        .speed(args.speed)
        .snapshot_interval(SNAPSHOT_INTERVAL)
        .build()?;
    let edits = layout::paint(&mut city)?;
    info!(
        edits,
        roads = city.grid.count(CellType::RoadMajor) + city.grid.count(CellType::RoadMinor),
        parks = city.grid.count(CellType::Park),
        schools = city.grid.count(CellType::School),
        "layout painted"
    );

    let started = Instant::now();
    match &args.out {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening output in {}", dir.display()))?;
            let mut logger = run(&mut city, &args, CityOutputObserver::new(writer));
            report(&city, &logger, started.elapsed().as_millis());
            if let Some(e) = logger.inner.take_error() {
                warn!(error = %e, "output incomplete");
                return Err(e.into());
            }
            info!(dir = %dir.display(), rows = logger.inner.summaries_written(), "csv written");
        }
        None => {
            let logger = run(&mut city, &args, NoopObserver);
            report(&city, &logger, started.elapsed().as_millis());
        }
    }
    Ok(())
}


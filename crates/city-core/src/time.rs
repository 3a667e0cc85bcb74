//! Simulation time model.
//!
//! # Design
//!
//! The external driver feeds a real elapsed delta (milliseconds) once per
//! frame together with a discrete [`SimSpeed`].  Every time-based component
//! consumes the *scaled* delta `delta_ms * multiplier`:
//!
//! - [`SimClock`] turns scaled time into calendar days (1 000 ms per day by
//!   default, 365 days per year).
//! - [`IntervalTimer`] gates the growth and vehicle-spawn schedulers.
//!
//! At [`SimSpeed::Paused`] the scaled delta is zero, so nothing accrues and
//! resuming never replays a burst of missed ticks.

use std::fmt;

use crate::{CityError, CityResult};

// ── SimSpeed ──────────────────────────────────────────────────────────────────

/// The discrete speed steps offered to the player.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimSpeed {
    Paused,
    #[default]
    Normal,
    Fast,
    Superfast,
    Hyper,
}

impl SimSpeed {
    pub const ALL: [SimSpeed; 5] = [
        SimSpeed::Paused,
        SimSpeed::Normal,
        SimSpeed::Fast,
        SimSpeed::Superfast,
        SimSpeed::Hyper,
    ];

    /// Time multiplier applied to every elapsed delta.
    #[inline]
    pub fn multiplier(self) -> u32 {
        match self {
            SimSpeed::Paused    => 0,
            SimSpeed::Normal    => 1,
            SimSpeed::Fast      => 2,
            SimSpeed::Superfast => 4,
            SimSpeed::Hyper     => 10,
        }
    }

    #[inline]
    pub fn is_paused(self) -> bool {
        self == SimSpeed::Paused
    }
}

impl TryFrom<u32> for SimSpeed {
    type Error = CityError;

    fn try_from(multiplier: u32) -> CityResult<Self> {
        SimSpeed::ALL
            .into_iter()
            .find(|s| s.multiplier() == multiplier)
            .ok_or_else(|| CityError::Parse(format!("unsupported speed multiplier {multiplier}")))
    }
}

impl fmt::Display for SimSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_paused() {
            f.write_str("paused")
        } else {
            write!(f, "{}x", self.multiplier())
        }
    }
}

// ── SimDate ───────────────────────────────────────────────────────────────────

pub const DAYS_PER_YEAR: u32 = 365;

/// Calendar position.  Both fields are 1-based.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimDate {
    pub year: u32,
    pub day:  u32,
}

impl SimDate {
    pub const START: SimDate = SimDate { year: 1, day: 1 };

    /// The following day, rolling over to day 1 of the next year after
    /// [`DAYS_PER_YEAR`].
    pub fn next_day(self) -> SimDate {
        if self.day >= DAYS_PER_YEAR {
            SimDate { year: self.year + 1, day: 1 }
        } else {
            SimDate { year: self.year, day: self.day + 1 }
        }
    }
}

impl Default for SimDate {
    fn default() -> Self {
        SimDate::START
    }
}

impl fmt::Display for SimDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year: {} | Day: {}", self.year, self.day)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Accumulates scaled time into calendar days.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Scaled milliseconds in one simulated day.
    pub day_length_ms:  f64,
    /// Scaled milliseconds accrued toward the next day.
    pub accumulator_ms: f64,
    pub date:           SimDate,
}

impl SimClock {
    pub fn new(day_length_ms: f64) -> Self {
        Self {
            day_length_ms,
            accumulator_ms: 0.0,
            date: SimDate::START,
        }
    }

    /// Feed one frame.  Returns the number of whole days that elapsed.
    pub fn advance(&mut self, delta_ms: f64, speed: SimSpeed) -> u32 {
        if speed.is_paused() || delta_ms <= 0.0 {
            return 0;
        }
        self.accumulator_ms += delta_ms * speed.multiplier() as f64;

        let mut days = 0;
        while self.accumulator_ms >= self.day_length_ms {
            self.accumulator_ms -= self.day_length_ms;
            self.date = self.date.next_day();
            days += 1;
        }
        days
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.date, f)
    }
}

// ── IntervalTimer ─────────────────────────────────────────────────────────────

/// Fires once the accumulated scaled time reaches `interval_ms`, then
/// restarts from zero.  A [`strict`](IntervalTimer::strict()) timer only fires
/// once the accumulated time is past the interval.
///
/// Any overshoot past the threshold is discarded, so a single long frame
/// yields at most one firing.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    pub interval_ms:    f64,
    pub accumulated_ms: f64,
    /// Fire on `accumulated > interval` rather than `>=`.
    pub strict:         bool,
}

impl IntervalTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, accumulated_ms: 0.0, strict: false }
    }

    /// A timer that stays quiet when the accumulated time lands exactly on
    /// the interval.
    pub fn strict(interval_ms: f64) -> Self {
        Self { strict: true, ..Self::new(interval_ms) }
    }

    /// Accrue `scaled_delta_ms`; `true` if the timer fired.
    pub fn advance(&mut self, scaled_delta_ms: f64) -> bool {
        if scaled_delta_ms <= 0.0 {
            return false;
        }
        self.accumulated_ms += scaled_delta_ms;
        let due = if self.strict {
            self.accumulated_ms > self.interval_ms
        } else {
            self.accumulated_ms >= self.interval_ms
        };
        if !due {
            return false;
        }
        self.accumulated_ms = 0.0;
        true
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }
}

// ── TickContext ───────────────────────────────────────────────────────────────

/// Immutable per-frame driver state handed to every scheduler call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickContext {
    /// Real elapsed milliseconds since the previous frame.
    pub delta_ms:   f64,
    pub speed:      SimSpeed,
    pub date:       SimDate,
    /// Population as of the start of this frame.
    pub population: u64,
}

impl TickContext {
    pub fn new(delta_ms: f64, speed: SimSpeed) -> Self {
        Self {
            delta_ms,
            speed,
            date: SimDate::START,
            population: 0,
        }
    }

    /// `delta_ms` multiplied by the speed step; zero while paused.
    #[inline]
    pub fn scaled_delta_ms(&self) -> f64 {
        self.delta_ms * self.speed.multiplier() as f64
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.speed.is_paused()
    }
}

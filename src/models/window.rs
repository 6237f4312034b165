//! Feasibility time window.
//!
//! # Time Model
//! Times are plain `f64` values on a caller-defined axis (seconds since
//! epoch, orbit fraction, anything monotone). The crate never interprets
//! the unit.

use serde::{Deserialize, Serialize};

/// A closed interval [start, end] within which a task's full execution must fit.
///
/// Unlike a half-open availability window, both bounds are inclusive: a task
/// may start exactly at `start` and finish exactly at `end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeWindow {
    /// Earliest allowed start (inclusive).
    pub start: f64,
    /// Latest allowed finish (inclusive).
    pub end: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the window. Negative for inverted windows.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the window is inverted (`end < start`).
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Whether an execution `[start, start + duration]` lies inside the window.
    ///
    /// NaN inputs never fit.
    #[inline]
    pub fn fits(&self, start: f64, duration: f64) -> bool {
        start >= self.start && start + duration <= self.end
    }

    /// Earliest start at or after `ready`, clamped to the window start.
    ///
    /// With no `ready` time (nothing scheduled yet) this is the window start.
    #[inline]
    pub fn earliest_start(&self, ready: Option<f64>) -> f64 {
        match ready {
            Some(t) => t.max(self.start),
            None => self.start,
        }
    }
}

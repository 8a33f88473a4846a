//! Measurement tool state machine.

use std::fmt;

use asetgis_core::{format_area, format_distance, path_length, ring_area, Coord};
use serde::{Deserialize, Serialize};

/// Active measurement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureMode {
    /// No measurement in progress; map clicks are ignored.
    None,
    /// Accumulate a polyline and report its total length.
    Distance,
    /// Accumulate a ring and report its enclosed area.
    Area,
}

impl Default for MeasureMode {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for MeasureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Distance => write!(f, "distance"),
            Self::Area => write!(f, "area"),
        }
    }
}

/// One measurement session: the active mode, the clicks collected so
/// far, and the formatted result of the last recomputation.
///
/// Owned by a single UI surface and driven synchronously, one event at
/// a time. Every mode change starts a fresh session; `clear` wipes the
/// session without leaving the mode.
#[derive(Debug, Clone, Default)]
pub struct MeasureTool {
    mode: MeasureMode,
    points: Vec<Coord<f64>>,
    last_result: Option<String>,
}

impl MeasureTool {
    /// New tool in the inactive state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active mode.
    pub fn mode(&self) -> MeasureMode {
        self.mode
    }

    /// Clicks collected in arrival order. The view layer draws these as
    /// an in-progress line even before a result exists.
    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    /// Formatted result of the last recomputation, when one exists.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Switch modes. Every call resets the session — including
    /// re-activating the mode that is already active, which the UI uses
    /// as a "start over" gesture.
    pub fn set_mode(&mut self, mode: MeasureMode) {
        tracing::debug!(from = %self.mode, to = %mode, "measure mode change");
        self.mode = mode;
        self.points.clear();
        self.last_result = None;
    }

    /// Record one map click. Ignored while inactive. Otherwise the
    /// click is appended and the result recomputed from scratch over
    /// the full point list, so repeated calls are idempotent for a
    /// given click sequence.
    ///
    /// Returns the updated formatted result, or `None` while the click
    /// count is still below the mode's minimum (two for distance, three
    /// for area).
    pub fn add_point(&mut self, point: Coord<f64>) -> Option<&str> {
        if self.mode == MeasureMode::None {
            return None;
        }

        self.points.push(point);
        self.last_result = self.recompute();
        self.last_result.as_deref()
    }

    /// Wipe the collected points and result, keeping the mode. Wired to
    /// the measurement panel's trash action.
    pub fn clear(&mut self) {
        self.points.clear();
        self.last_result = None;
    }

    fn recompute(&self) -> Option<String> {
        match self.mode {
            MeasureMode::None => None,
            MeasureMode::Distance => {
                if self.points.len() < 2 {
                    return None;
                }
                Some(format_distance(path_length(&self.points)))
            }
            MeasureMode::Area => {
                if self.points.len() < 3 {
                    return None;
                }
                Some(format_area(ring_area(&self.points)))
            }
        }
    }
}

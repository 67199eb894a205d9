//! Non-fatal limitations met while computing a body

use crate::framelib::Frame;
use crate::planetlib::Body;
use std::fmt;

/// What went wrong for one body at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComputationErrorKind {
    /// Requested precision (arcsec) finer than what the tabulated theory gives
    PrecisionNotHandled { requested: f64, nominal: f64 },
    /// Date outside the span over which the theory was fitted
    OutsideValidSpan { start: f64, end: f64 },
    /// The pipeline left the body in another frame than the requested one
    FrameNotApplied { frame: Frame },
}

impl ComputationErrorKind {
    /// Rank used to group errors of the same kind in reports
    pub fn rank(&self) -> u8 {
        match self {
            ComputationErrorKind::PrecisionNotHandled { .. } => 0,
            ComputationErrorKind::OutsideValidSpan { .. } => 1,
            ComputationErrorKind::FrameNotApplied { .. } => 2,
        }
    }
}

impl fmt::Display for ComputationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputationErrorKind::PrecisionNotHandled { requested, nominal } => write!(
                f,
                "precision of {}\" not reachable, theory gives {}\"",
                requested, nominal
            ),
            ComputationErrorKind::OutsideValidSpan { start, end } => write!(
                f,
                "date outside the validity of the theory (JD {} to {})",
                start, end
            ),
            ComputationErrorKind::FrameNotApplied { frame } => {
                write!(f, "coordinates not transformed to frame '{}'", frame)
            }
        }
    }
}

/// A [`ComputationErrorKind`] attached to a body and instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputationError {
    pub body: Body,
    pub julian_day: f64,
    pub kind: ComputationErrorKind,
}

impl ComputationError {
    pub fn new(body: Body, julian_day: f64, kind: ComputationErrorKind) -> Self {
        Self {
            body,
            julian_day,
            kind,
        }
    }
}

impl fmt::Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at JD {}: {}", self.body, self.julian_day, self.kind)
    }
}

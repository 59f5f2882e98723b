//! Credit-weighted grade-point averaging.
//!
//! Computation happens at full precision. Rounding is a presentation concern
//! applied once, at the boundary where a figure leaves the engine, so that
//! chained computations do not accumulate rounding error.

use crate::error::GradeError;
use crate::model::GradedEntry;

/// Running quality-point and credit totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Tally {
    pub quality_points: f64,
    pub credits: u64,
}

impl Tally {
    pub fn add(&mut self, points: f64, credits: u32) {
        self.quality_points += points * f64::from(credits);
        self.credits += u64::from(credits);
    }

    pub fn without(&self, points: f64, credits: u32) -> Tally {
        Tally {
            quality_points: self.quality_points - points * f64::from(credits),
            credits: self.credits - u64::from(credits),
        }
    }

    /// Mean grade points, or `0.0` when no credits were tallied.
    pub fn average(&self) -> f64 {
        if self.credits == 0 {
            0.0
        } else {
            self.quality_points / self.credits as f64
        }
    }
}

/// Credit-weighted average over the graded entries.
///
/// Entries without a grade are excluded from both the numerator and the
/// denominator. An empty or fully ungraded roster yields `0.0`. Every entry,
/// graded or not, must carry a positive credit load.
pub fn weighted_average(entries: &[GradedEntry]) -> Result<f64, GradeError> {
    let mut tally = Tally::default();
    for (index, entry) in entries.iter().enumerate() {
        if entry.credits == 0 {
            return Err(GradeError::InvalidCredits {
                course: format!("entry #{}", index + 1),
                credits: 0,
            });
        }
        if let Some(grade) = entry.grade {
            tally.add(grade.points(), entry.credits);
        }
    }
    Ok(tally.average())
}

/// Round a GPA-shaped figure to two decimal places, half away from zero.
///
/// Halves are judged on the decimal value, not the binary one: `3.475` is
/// stored as `3.47499...`, so the scaled figure is snapped to six places
/// before rounding.
pub fn round_gpa(value: f64) -> f64 {
    let scaled = ((value * 100.0) * 1e6).round() / 1e6;
    scaled.round() / 100.0
}

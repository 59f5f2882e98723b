//! Core value types for gradecast.
//!
//! These are plain values handed to the engine by the caller. The engine never
//! stores them between calls; the calling layer owns whatever mutable session
//! state it needs and re-invokes the engine on every change.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_gpa_scale, GradeError};
use crate::grade::GradeToken;

/// One course in a planning session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Caller-assigned identifier.
    pub id: String,
    /// Human-readable course name.
    pub name: String,
    /// Credit load, always greater than zero.
    pub credits: u32,
    /// Grade already earned or currently standing, if any.
    #[serde(default)]
    pub current_grade: Option<GradeToken>,
    /// Hypothetical grade for a what-if scenario, if any.
    #[serde(default)]
    pub projected_grade: Option<GradeToken>,
}

impl CourseRecord {
    /// Create an ungraded course, rejecting a zero credit load.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
    ) -> Result<Self, GradeError> {
        let id = id.into();
        if credits == 0 {
            return Err(GradeError::InvalidCredits {
                course: id,
                credits: 0,
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            credits,
            current_grade: None,
            projected_grade: None,
        })
    }

    pub fn with_current(mut self, grade: GradeToken) -> Self {
        self.current_grade = Some(grade);
        self
    }

    pub fn with_projected(mut self, grade: GradeToken) -> Self {
        self.projected_grade = Some(grade);
        self
    }

    /// The grade used for projections: the hypothetical one if set, the
    /// current one otherwise.
    pub fn effective_grade(&self) -> Option<GradeToken> {
        self.projected_grade.or(self.current_grade)
    }

    pub(crate) fn ensure_credits(&self) -> Result<(), GradeError> {
        if self.credits == 0 {
            return Err(GradeError::InvalidCredits {
                course: self.id.clone(),
                credits: 0,
            });
        }
        Ok(())
    }
}

/// Academic history prior to the courses under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub completed_credits: u32,
    pub baseline_gpa: f64,
}

impl Baseline {
    pub fn new(completed_credits: u32, baseline_gpa: f64) -> Result<Self, GradeError> {
        ensure_gpa_scale(baseline_gpa)?;
        Ok(Self {
            completed_credits,
            baseline_gpa,
        })
    }

    /// No prior history: projections reduce to the in-session courses.
    pub fn empty() -> Self {
        Self {
            completed_credits: 0,
            baseline_gpa: 0.0,
        }
    }

    /// Quality points already earned (`baseline_gpa * completed_credits`).
    pub fn quality_points(&self) -> f64 {
        self.baseline_gpa * f64::from(self.completed_credits)
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::empty()
    }
}

/// A `{credits, grade}` pair as consumed by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradedEntry {
    pub credits: u32,
    #[serde(default)]
    pub grade: Option<GradeToken>,
}

impl GradedEntry {
    pub fn new(credits: u32, grade: GradeToken) -> Self {
        Self {
            credits,
            grade: Some(grade),
        }
    }

    pub fn ungraded(credits: u32) -> Self {
        Self {
            credits,
            grade: None,
        }
    }
}

/// Graduation requirements a projection is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraduationTarget {
    pub minimum_gpa: f64,
    pub required_credits: u32,
}

impl GraduationTarget {
    pub fn new(minimum_gpa: f64, required_credits: u32) -> Result<Self, GradeError> {
        ensure_gpa_scale(minimum_gpa)?;
        if required_credits == 0 {
            return Err(GradeError::InvalidRequirement(
                "required credits must be greater than zero".into(),
            ));
        }
        Ok(Self {
            minimum_gpa,
            required_credits,
        })
    }
}

/// Partial graduation target carried by a session file. Missing values fall
/// back to configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetOverrides {
    #[serde(default)]
    pub minimum_gpa: Option<f64>,
    #[serde(default)]
    pub required_credits: Option<u32>,
}

/// A planning session: the roster and history a caller hands to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSession {
    /// Unique identifier for this session.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub baseline: Baseline,
    #[serde(default)]
    pub target: TargetOverrides,
    /// Courses in roster order.
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

impl PlanningSession {
    /// Graduation target for this session, filling gaps from `fallback`.
    pub fn resolve_target(
        &self,
        fallback: &GraduationTarget,
    ) -> Result<GraduationTarget, GradeError> {
        GraduationTarget::new(
            self.target.minimum_gpa.unwrap_or(fallback.minimum_gpa),
            self.target
                .required_credits
                .unwrap_or(fallback.required_credits),
        )
    }
}

/// Outcome of one projection. Produced fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub current_gpa: f64,
    pub projected_gpa: f64,
    pub delta: f64,
    pub graduation_eligible: bool,
    pub credits_remaining: u32,
}

/// Marginal effect of one course's hypothetical grade on the projected CGPA.
///
/// Only emitted when the projected grade differs from or supplements the
/// current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEntry {
    pub course_name: String,
    pub from_grade: Option<GradeToken>,
    pub to_grade: GradeToken,
    pub impact: f64,
}

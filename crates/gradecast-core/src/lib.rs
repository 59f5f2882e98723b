//! Grade-point aggregation, CGPA projection and graduation target analysis.
//!
//! This crate defines the value types, the fixed grade-point table, and the
//! pure computations that turn a roster of graded courses into current and
//! projected cumulative GPAs, per-course impacts, and an eligibility verdict.

pub mod config;
pub mod engine;
pub mod error;
pub mod gpa;
pub mod grade;
pub mod model;
pub mod parser;
pub mod recommend;
pub mod report;
pub mod scenario;
pub mod target;

pub use engine::{aggregate, analyze, plan, project, project_with, PlanOutcome, Projection};
pub use error::GradeError;
pub use grade::{grade_points, GradeToken};
pub use model::{
    Baseline, CourseRecord, GradedEntry, GraduationTarget, ImpactEntry, PlanningSession,
    ProjectionResult,
};
pub use recommend::Recommendation;
pub use scenario::ProjectionOptions;
pub use target::TargetVerdict;

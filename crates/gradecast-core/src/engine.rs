//! The engine's call/return surface.
//!
//! Each function here chains the full-precision components and rounds every
//! GPA-shaped figure exactly once, on the way out. Nothing is cached and no
//! state survives a call, so any number of callers may use these concurrently.

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::gpa::{round_gpa, weighted_average};
use crate::model::{
    Baseline, CourseRecord, GradedEntry, GraduationTarget, ImpactEntry, ProjectionResult,
};
use crate::recommend::{recommend, Recommendation};
use crate::scenario::{ProjectionOptions, Scenario};
use crate::target::{self, TargetVerdict};

/// Rounded projection without a graduation target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub current_gpa: f64,
    pub projected_gpa: f64,
    pub delta: f64,
    pub impacts: Vec<ImpactEntry>,
}

/// Rounded output of the whole pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub result: ProjectionResult,
    pub impacts: Vec<ImpactEntry>,
    pub verdict: TargetVerdict,
    pub recommendation: Recommendation,
}

/// Credit-weighted GPA of a roster, rounded for display.
pub fn aggregate(entries: &[GradedEntry]) -> Result<f64, GradeError> {
    weighted_average(entries).map(round_gpa)
}

/// Blended projection of a session over its baseline.
pub fn project(baseline: &Baseline, courses: &[CourseRecord]) -> Result<Projection, GradeError> {
    project_with(baseline, courses, &ProjectionOptions::default())
}

pub fn project_with(
    baseline: &Baseline,
    courses: &[CourseRecord],
    options: &ProjectionOptions,
) -> Result<Projection, GradeError> {
    let scenario = Scenario::evaluate(baseline, courses, options)?;
    Ok(Projection {
        current_gpa: round_gpa(scenario.current_gpa),
        projected_gpa: round_gpa(scenario.projected_gpa),
        delta: round_gpa(scenario.delta),
        impacts: round_impacts(scenario.impacts),
    })
}

/// Eligibility verdict for a GPA and credit count, rounded for display.
pub fn analyze(
    projected_gpa: f64,
    minimum_gpa: f64,
    total_credits: u64,
    required_credits: u32,
) -> Result<TargetVerdict, GradeError> {
    target::analyze(projected_gpa, minimum_gpa, total_credits, required_credits)
        .map(round_verdict)
}

/// Run the full pipeline: projection, target analysis, recommendation.
pub fn plan(
    baseline: &Baseline,
    courses: &[CourseRecord],
    target: &GraduationTarget,
    options: &ProjectionOptions,
) -> Result<PlanOutcome, GradeError> {
    let scenario = Scenario::evaluate(baseline, courses, options)?;
    let verdict = target::analyze(
        scenario.projected_gpa,
        target.minimum_gpa,
        scenario.total_credits,
        target.required_credits,
    )?;
    let recommendation = recommend(verdict.graduation_eligible, &scenario.low_quality);

    Ok(PlanOutcome {
        result: ProjectionResult {
            current_gpa: round_gpa(scenario.current_gpa),
            projected_gpa: round_gpa(scenario.projected_gpa),
            delta: round_gpa(scenario.delta),
            graduation_eligible: verdict.graduation_eligible,
            credits_remaining: verdict.credits_remaining,
        },
        impacts: round_impacts(scenario.impacts),
        verdict: round_verdict(verdict),
        recommendation,
    })
}

fn round_impacts(impacts: Vec<ImpactEntry>) -> Vec<ImpactEntry> {
    impacts
        .into_iter()
        .map(|entry| ImpactEntry {
            impact: round_gpa(entry.impact),
            ..entry
        })
        .collect()
}

fn round_verdict(verdict: TargetVerdict) -> TargetVerdict {
    TargetVerdict {
        gpa_gap: round_gpa(verdict.gpa_gap),
        required_average: verdict.required_average.map(round_gpa),
        ..verdict
    }
}

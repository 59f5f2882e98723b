//! Projection report types with JSON persistence and scenario comparison.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::PlanOutcome;
use crate::gpa::round_gpa;
use crate::model::{GraduationTarget, ImpactEntry, PlanningSession, ProjectionResult};
use crate::recommend::Recommendation;
use crate::target::TargetVerdict;

/// A complete projection report. All GPA figures are already rounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the planning session.
    pub session: SessionSummary,
    /// Target the projection was measured against.
    pub target: GraduationTarget,
    pub result: ProjectionResult,
    pub verdict: TargetVerdict,
    /// Per-course impacts in roster order.
    pub impacts: Vec<ImpactEntry>,
    pub recommendation: Recommendation,
}

/// Summary of a session (without the full course list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub name: String,
    pub course_count: usize,
    pub completed_credits: u32,
    pub baseline_gpa: f64,
}

impl ProjectionReport {
    pub fn new(session: &PlanningSession, target: GraduationTarget, outcome: PlanOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            session: SessionSummary {
                id: session.id.clone(),
                name: session.name.clone(),
                course_count: session.courses.len(),
                completed_credits: session.baseline.completed_credits,
                baseline_gpa: session.baseline.baseline_gpa,
            },
            target,
            result: outcome.result,
            verdict: outcome.verdict,
            impacts: outcome.impacts,
            recommendation: outcome.recommendation,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(report = %self.id, path = %path.display(), "projection report saved");
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ProjectionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this scenario against a baseline scenario.
    ///
    /// Impacts are matched by course name, with repeated names paired in
    /// roster order (the first "Elective" against the first "Elective"). A
    /// shift counts as improved or worsened only when it moves by more than
    /// `threshold`.
    pub fn compare(&self, baseline: &ProjectionReport, threshold: f64) -> ScenarioComparison {
        let baseline_impacts: HashMap<(String, usize), f64> =
            keyed_impacts(baseline).into_iter().collect();
        let current_impacts = keyed_impacts(self);

        let mut improved = Vec::new();
        let mut worsened = Vec::new();
        let mut unchanged = 0usize;
        let mut added_courses = 0usize;

        // Walk in roster order so the output is stable.
        for (key, current_impact) in &current_impacts {
            let Some(&baseline_impact) = baseline_impacts.get(key) else {
                added_courses += 1;
                continue;
            };
            let delta = round_gpa(current_impact - baseline_impact);
            let shift = ImpactShift {
                course_name: key.0.clone(),
                baseline_impact,
                current_impact: *current_impact,
                delta,
            };
            if delta > threshold {
                improved.push(shift);
            } else if delta < -threshold {
                worsened.push(shift);
            } else {
                unchanged += 1;
            }
        }

        let removed_courses = baseline_impacts
            .keys()
            .filter(|key| !current_impacts.iter().any(|(current, _)| current == *key))
            .count();

        ScenarioComparison {
            baseline_projected_gpa: baseline.result.projected_gpa,
            current_projected_gpa: self.result.projected_gpa,
            gpa_change: round_gpa(self.result.projected_gpa - baseline.result.projected_gpa),
            baseline_eligible: baseline.result.graduation_eligible,
            current_eligible: self.result.graduation_eligible,
            improved,
            worsened,
            unchanged,
            added_courses,
            removed_courses,
        }
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## Projection: {}\n\n", self.session.name));
        md.push_str(&format!(
            "**Current GPA:** {:.2} | **Projected CGPA:** {:.2} | **Delta:** {:+.2}\n\n",
            self.result.current_gpa, self.result.projected_gpa, self.result.delta
        ));
        md.push_str(&format!(
            "**Target:** {:.2} over {} credits | **Eligible:** {} | **Credits remaining:** {}\n\n",
            self.target.minimum_gpa,
            self.target.required_credits,
            if self.result.graduation_eligible {
                "yes"
            } else {
                "no"
            },
            self.result.credits_remaining
        ));
        if let Some(average) = self.verdict.required_average {
            md.push_str(&format!(
                "**Required average on remaining credits:** {average:.2}{}\n\n",
                if self.verdict.target_reachable {
                    ""
                } else {
                    " (not reachable)"
                }
            ));
        }

        if !self.impacts.is_empty() {
            md.push_str("### Impacts\n\n");
            md.push_str("| Course | From | To | Impact |\n");
            md.push_str("|--------|------|----|--------|\n");
            for entry in &self.impacts {
                md.push_str(&format!(
                    "| {} | {} | {} | {:+.2} |\n",
                    entry.course_name,
                    entry
                        .from_grade
                        .map(|g| g.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    entry.to_grade,
                    entry.impact
                ));
            }
            md.push('\n');
        }

        md.push_str(&format!("> {}\n", self.recommendation));
        md
    }
}

/// Impacts keyed by course name and the name's occurrence index.
fn keyed_impacts(report: &ProjectionReport) -> Vec<((String, usize), f64)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    report
        .impacts
        .iter()
        .map(|entry| {
            let occurrence = seen.entry(entry.course_name.as_str()).or_insert(0);
            let key = (entry.course_name.clone(), *occurrence);
            *occurrence += 1;
            (key, entry.impact)
        })
        .collect()
}

/// Result of comparing two scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub baseline_projected_gpa: f64,
    pub current_projected_gpa: f64,
    /// Current minus baseline projected CGPA.
    pub gpa_change: f64,
    pub baseline_eligible: bool,
    pub current_eligible: bool,
    /// Courses whose impact grew.
    pub improved: Vec<ImpactShift>,
    /// Courses whose impact shrank.
    pub worsened: Vec<ImpactShift>,
    /// Courses with no significant change.
    pub unchanged: usize,
    /// Courses in current but not baseline.
    pub added_courses: usize,
    /// Courses in baseline but not current.
    pub removed_courses: usize,
}

/// Change in one course's impact between two scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactShift {
    pub course_name: String,
    pub baseline_impact: f64,
    pub current_impact: f64,
    pub delta: f64,
}

impl ScenarioComparison {
    /// Format the comparison as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** projected CGPA {:.2} -> {:.2} ({:+.2}), {} improved, {} worsened, {} unchanged\n\n",
            self.baseline_projected_gpa,
            self.current_projected_gpa,
            self.gpa_change,
            self.improved.len(),
            self.worsened.len(),
            self.unchanged
        ));

        if self.baseline_eligible != self.current_eligible {
            md.push_str(&format!(
                "**Eligibility changed:** {} -> {}\n\n",
                self.baseline_eligible, self.current_eligible
            ));
        }

        for (title, shifts) in [("Worsened", &self.worsened), ("Improved", &self.improved)] {
            if shifts.is_empty() {
                continue;
            }
            md.push_str(&format!("### {title}\n\n"));
            md.push_str("| Course | Baseline | Current | Delta |\n");
            md.push_str("|--------|----------|---------|-------|\n");
            for s in shifts {
                md.push_str(&format!(
                    "| {} | {:+.2} | {:+.2} | {:+.2} |\n",
                    s.course_name, s.baseline_impact, s.current_impact, s.delta
                ));
            }
            md.push('\n');
        }

        md
    }

    /// Returns true if the projected CGPA dropped or any course's impact
    /// worsened.
    pub fn has_worsened(&self) -> bool {
        self.gpa_change < 0.0 || !self.worsened.is_empty()
    }
}

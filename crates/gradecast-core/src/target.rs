//! Graduation eligibility and gap-to-target analysis.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_gpa_scale, GradeError};

/// Verdict of measuring a GPA and credit count against graduation targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetVerdict {
    /// Both the GPA bar and the credit requirement are met.
    pub graduation_eligible: bool,
    /// `max(0, required - completed)`.
    pub credits_remaining: u32,
    /// How far the GPA sits below the minimum; `0.0` when it meets it.
    pub gpa_gap: f64,
    /// Average grade points needed on the remaining credits for the
    /// cumulative GPA to reach the minimum. `None` when no credits remain.
    pub required_average: Option<f64>,
    /// Whether the minimum is still attainable on the 4.0 scale.
    pub target_reachable: bool,
}

/// Measure a GPA against a minimum and a credit requirement.
///
/// Eligibility is conjunctive: meeting the GPA bar alone is not enough while
/// credits remain outstanding.
pub fn analyze(
    gpa: f64,
    minimum_gpa: f64,
    completed_credits: u64,
    required_credits: u32,
) -> Result<TargetVerdict, GradeError> {
    ensure_gpa_scale(gpa)?;
    ensure_gpa_scale(minimum_gpa)?;
    if required_credits == 0 {
        return Err(GradeError::InvalidRequirement(
            "required credits must be greater than zero".into(),
        ));
    }

    let credits_remaining = u64::from(required_credits).saturating_sub(completed_credits) as u32;
    let meets_gpa = gpa >= minimum_gpa;
    let graduation_eligible = meets_gpa && credits_remaining == 0;

    let required_average = (credits_remaining > 0).then(|| {
        let needed = minimum_gpa * f64::from(required_credits) - gpa * completed_credits as f64;
        (needed / f64::from(credits_remaining)).max(0.0)
    });

    let target_reachable = match required_average {
        Some(average) => average <= 4.0,
        None => meets_gpa,
    };

    Ok(TargetVerdict {
        graduation_eligible,
        credits_remaining,
        gpa_gap: (minimum_gpa - gpa).max(0.0),
        required_average,
        target_reachable,
    })
}

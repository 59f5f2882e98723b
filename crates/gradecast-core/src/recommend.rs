//! Qualitative guidance at the end of the projection pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Guidance chosen from the eligibility verdict and the count of courses
/// projected below `B` quality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    OnTrack,
    NeedsImprovement { below_b_courses: usize },
}

impl Recommendation {
    pub fn message(&self) -> String {
        match self {
            Recommendation::OnTrack => {
                "On track to graduate: the projected CGPA meets the minimum and the credit requirement is complete."
                    .to_string()
            }
            Recommendation::NeedsImprovement { below_b_courses } => format!(
                "Not yet eligible to graduate: {below_b_courses} course(s) projected below B quality."
            ),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

pub fn recommend<S: AsRef<str>>(graduation_eligible: bool, low_quality: &[S]) -> Recommendation {
    if graduation_eligible {
        Recommendation::OnTrack
    } else {
        Recommendation::NeedsImprovement {
            below_b_courses: low_quality.len(),
        }
    }
}

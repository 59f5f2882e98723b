//! What-if projection of a cumulative GPA.
//!
//! Blends the baseline history with the in-session courses and isolates the
//! marginal contribution of every hypothetical grade.

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::gpa::{weighted_average, Tally};
use crate::grade::GradeToken;
use crate::model::{Baseline, CourseRecord, GradedEntry, ImpactEntry};

/// Caller-controlled projection knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionOptions {
    /// Grade assumed for courses carrying neither a current nor a projected
    /// grade. `None` excludes such courses from the projected figure.
    #[serde(default)]
    pub default_grade: Option<GradeToken>,
}

/// Full-precision projection of a planning session.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Average over the courses' current grades only, without the baseline.
    pub current_gpa: f64,
    /// Baseline blended with every course's effective grade.
    pub projected_gpa: f64,
    /// `projected_gpa - current_gpa`.
    pub delta: f64,
    /// Baseline credits plus the credits of every course that contributed
    /// to `projected_gpa`.
    pub total_credits: u64,
    /// One entry per course whose projected grade differs from or supplements
    /// its current grade, in roster order.
    pub impacts: Vec<ImpactEntry>,
    /// Courses whose effective grade is below `B` quality, in roster order.
    pub low_quality: Vec<String>,
}

impl Scenario {
    pub fn evaluate(
        baseline: &Baseline,
        courses: &[CourseRecord],
        options: &ProjectionOptions,
    ) -> Result<Self, GradeError> {
        for course in courses {
            course.ensure_credits()?;
        }

        let current_entries: Vec<GradedEntry> = courses
            .iter()
            .map(|course| GradedEntry {
                credits: course.credits,
                grade: course.current_grade,
            })
            .collect();
        let current_gpa = weighted_average(&current_entries)?;

        let projected_grades: Vec<Option<GradeToken>> = courses
            .iter()
            .map(|course| course.effective_grade().or(options.default_grade))
            .collect();

        let mut blended = Tally {
            quality_points: baseline.quality_points(),
            credits: u64::from(baseline.completed_credits),
        };
        for (course, grade) in courses.iter().zip(&projected_grades) {
            if let Some(grade) = grade {
                blended.add(grade.points(), course.credits);
            }
        }
        let projected_gpa = blended.average();

        let impacts = courses
            .iter()
            .zip(&projected_grades)
            .filter_map(|(course, grade)| {
                let to_grade = course.projected_grade?;
                if course.current_grade == Some(to_grade) {
                    return None;
                }
                let points = grade.unwrap_or(to_grade).points();
                let without = blended.without(points, course.credits).average();
                Some(ImpactEntry {
                    course_name: course.name.clone(),
                    from_grade: course.current_grade,
                    to_grade,
                    impact: projected_gpa - without,
                })
            })
            .collect();

        let low_quality = courses
            .iter()
            .zip(&projected_grades)
            .filter(|(_, grade)| grade.is_some_and(GradeToken::is_low_quality))
            .map(|(course, _)| course.name.clone())
            .collect();

        tracing::debug!(
            courses = courses.len(),
            projected_gpa,
            total_credits = blended.credits,
            "projection evaluated"
        );

        Ok(Self {
            current_gpa,
            projected_gpa,
            delta: projected_gpa - current_gpa,
            total_credits: blended.credits,
            impacts,
            low_quality,
        })
    }
}

//! The `gradecast gpa` command.

use std::path::PathBuf;

use anyhow::Result;

use gradecast_core::parser::parse_session;
use gradecast_core::{aggregate, GradedEntry};

pub fn execute(session_path: PathBuf, projected: bool) -> Result<()> {
    let session = parse_session(&session_path)?;

    let entries: Vec<GradedEntry> = session
        .courses
        .iter()
        .map(|course| GradedEntry {
            credits: course.credits,
            grade: if projected {
                course.effective_grade()
            } else {
                course.current_grade
            },
        })
        .collect();
    let graded = entries.iter().filter(|e| e.grade.is_some()).count();

    let gpa = aggregate(&entries)?;
    let label = if projected { "Projected" } else { "Current" };
    println!(
        "{label} GPA: {gpa:.2} ({graded} of {} courses graded)",
        entries.len()
    );

    Ok(())
}

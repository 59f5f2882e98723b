//! The `gradecast compare` command.

use std::path::PathBuf;

use anyhow::Result;

use gradecast_core::report::ProjectionReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: f64,
    fail_on_worse: bool,
    format: String,
) -> Result<()> {
    let baseline = ProjectionReport::load_json(&baseline_path)?;
    let current = ProjectionReport::load_json(&current_path)?;

    let comparison = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", comparison.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        _ => {
            println!(
                "Projected CGPA: {:.2} -> {:.2} ({:+.2})",
                comparison.baseline_projected_gpa,
                comparison.current_projected_gpa,
                comparison.gpa_change
            );
            if comparison.baseline_eligible != comparison.current_eligible {
                println!(
                    "Eligibility: {} -> {}",
                    comparison.baseline_eligible, comparison.current_eligible
                );
            }
            println!(
                "Courses: {} improved, {} worsened, {} unchanged",
                comparison.improved.len(),
                comparison.worsened.len(),
                comparison.unchanged
            );

            if !comparison.worsened.is_empty() {
                println!("\nWorsened:");
                for s in &comparison.worsened {
                    println!(
                        "  {} {:+.2} -> {:+.2} ({:+.2})",
                        s.course_name, s.baseline_impact, s.current_impact, s.delta
                    );
                }
            }

            if !comparison.improved.is_empty() {
                println!("\nImproved:");
                for s in &comparison.improved {
                    println!(
                        "  {} {:+.2} -> {:+.2} ({:+.2})",
                        s.course_name, s.baseline_impact, s.current_impact, s.delta
                    );
                }
            }

            if comparison.added_courses > 0 {
                println!("\n{} added course(s)", comparison.added_courses);
            }
            if comparison.removed_courses > 0 {
                println!("{} removed course(s)", comparison.removed_courses);
            }
        }
    }

    if fail_on_worse && comparison.has_worsened() {
        std::process::exit(1);
    }

    Ok(())
}

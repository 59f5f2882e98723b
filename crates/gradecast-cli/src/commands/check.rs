//! The `gradecast check` command.

use std::path::PathBuf;

use anyhow::Result;

use gradecast_core::config::load_config_from;
use gradecast_core::{analyze, GraduationTarget};

pub fn execute(
    gpa: f64,
    credits: u64,
    minimum_gpa: Option<f64>,
    required_credits: Option<u32>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let target = GraduationTarget::new(
        minimum_gpa.unwrap_or(config.minimum_gpa),
        required_credits.unwrap_or(config.required_credits),
    )?;

    let verdict = analyze(gpa, target.minimum_gpa, credits, target.required_credits)?;

    println!(
        "Eligible: {}",
        if verdict.graduation_eligible { "yes" } else { "no" }
    );
    println!("Credits remaining: {}", verdict.credits_remaining);
    if verdict.gpa_gap > 0.0 {
        println!("GPA gap: {:.2}", verdict.gpa_gap);
    }
    if let Some(average) = verdict.required_average {
        println!("Required average on remaining credits: {average:.2}");
    }
    if !verdict.target_reachable {
        println!("Target is not reachable on a 4.0 scale.");
    }

    Ok(())
}

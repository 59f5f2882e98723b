//! The `gradecast init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    if Path::new("gradecast.toml").exists() {
        println!("gradecast.toml already exists, skipping.");
    } else {
        std::fs::write("gradecast.toml", SAMPLE_CONFIG)
            .context("failed to write gradecast.toml")?;
        println!("Created gradecast.toml");
    }

    std::fs::create_dir_all("sessions").context("failed to create sessions directory")?;
    let example_path = Path::new("sessions/example.toml");
    if example_path.exists() {
        println!("sessions/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SESSION)
            .context("failed to write sessions/example.toml")?;
        println!("Created sessions/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit sessions/example.toml with your own courses");
    println!("  2. Run: gradecast validate --session sessions/example.toml");
    println!("  3. Run: gradecast project --session sessions/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradecast configuration

# Graduation requirements used when a session does not set its own.
minimum_gpa = 2.0
required_credits = 120

# text, json or markdown
default_format = "text"
output_dir = "./gradecast-results"
"#;

const EXAMPLE_SESSION: &str = r#"[session]
id = "fall-term"
name = "Fall Term Plan"
description = "What-if planning for the current term"

[baseline]
completed_credits = 90
baseline_gpa = 3.1

[target]
minimum_gpa = 3.0

[[courses]]
id = "cs301"
name = "Algorithms"
credits = 4
current_grade = "B"
projected_grade = "A-"

[[courses]]
id = "cs320"
name = "Operating Systems"
credits = 3
current_grade = "B+"

[[courses]]
id = "math240"
name = "Linear Algebra"
credits = 3
current_grade = "C+"
projected_grade = "B"
"#;

//! The `gradecast project` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use gradecast_core::config::load_config_from;
use gradecast_core::parser::{parse_session, validate_session};
use gradecast_core::report::ProjectionReport;
use gradecast_core::{plan, GradeToken, GraduationTarget, ProjectionOptions};

pub struct ProjectArgs {
    pub session: PathBuf,
    pub minimum_gpa: Option<f64>,
    pub required_credits: Option<u32>,
    pub default_grade: Option<String>,
    pub format: Option<String>,
    pub save: bool,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn execute(args: ProjectArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let session = parse_session(&args.session)?;

    for w in validate_session(&session) {
        let prefix = w
            .course_id
            .as_ref()
            .map(|id| format!("[{id}] "))
            .unwrap_or_default();
        eprintln!("Warning: {prefix}{}", w.message);
    }

    // Command-line flags beat the session file, which beats configuration.
    let session_target = session.resolve_target(&config.graduation_target()?)?;
    let target = GraduationTarget::new(
        args.minimum_gpa.unwrap_or(session_target.minimum_gpa),
        args.required_credits.unwrap_or(session_target.required_credits),
    )?;

    let options = ProjectionOptions {
        default_grade: args
            .default_grade
            .as_deref()
            .map(str::parse::<GradeToken>)
            .transpose()
            .context("invalid --default-grade")?,
    };

    let outcome = plan(&session.baseline, &session.courses, &target, &options)?;
    let report = ProjectionReport::new(&session, target, outcome);

    let format = args.format.unwrap_or(config.default_format);
    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "markdown" | "md" => println!("{}", report.to_markdown()),
        "text" => print_summary(&report),
        other => anyhow::bail!("unknown format: {other} (expected text, json or markdown)"),
    }

    if args.save {
        let output = args.output.unwrap_or(config.output_dir);
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let path = output.join(format!("projection-{timestamp}.json"));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &ProjectionReport) {
    use comfy_table::{Cell, Table};

    let result = &report.result;
    println!("Session: {} ({} courses)", report.session.name, report.session.course_count);
    println!(
        "Current GPA: {:.2}  Projected CGPA: {:.2}  Delta: {:+.2}",
        result.current_gpa, result.projected_gpa, result.delta
    );
    println!(
        "Target: {:.2} over {} credits  Eligible: {}  Credits remaining: {}",
        report.target.minimum_gpa,
        report.target.required_credits,
        if result.graduation_eligible { "yes" } else { "no" },
        result.credits_remaining
    );
    if let Some(average) = report.verdict.required_average {
        println!(
            "Required average on remaining credits: {average:.2}{}",
            if report.verdict.target_reachable {
                ""
            } else {
                " (not reachable)"
            }
        );
    }

    if !report.impacts.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Course", "From", "To", "Impact"]);
        for entry in &report.impacts {
            table.add_row(vec![
                Cell::new(&entry.course_name),
                Cell::new(
                    entry
                        .from_grade
                        .map(|g| g.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::new(entry.to_grade),
                Cell::new(format!("{:+.2}", entry.impact)),
            ]);
        }
        println!("\n{table}");
    }

    println!("\n{}", report.recommendation);
}

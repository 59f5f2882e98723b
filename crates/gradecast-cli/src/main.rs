//! The `gradecast` command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "gradecast",
    version,
    about = "CGPA projection and graduation planning"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a planning session's CGPA and check it against graduation targets
    Project {
        /// Path to a .toml planning session
        #[arg(long)]
        session: PathBuf,

        /// Override the minimum CGPA required to graduate
        #[arg(long)]
        minimum_gpa: Option<f64>,

        /// Override the credits required to graduate
        #[arg(long)]
        required_credits: Option<u32>,

        /// Grade assumed for courses with neither a current nor a projected grade
        #[arg(long)]
        default_grade: Option<String>,

        /// Output format: text, json, markdown (default from config)
        #[arg(long)]
        format: Option<String>,

        /// Save the projection report as JSON
        #[arg(long)]
        save: bool,

        /// Output directory for saved reports (default from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compute the credit-weighted GPA of a session's courses (no baseline)
    Gpa {
        /// Path to a .toml planning session
        #[arg(long)]
        session: PathBuf,

        /// Use projected grades (falling back to current) instead of current grades
        #[arg(long)]
        projected: bool,
    },

    /// Check a GPA and credit count against graduation targets
    Check {
        /// Cumulative GPA to check
        #[arg(long)]
        gpa: f64,

        /// Credits completed (including the current term)
        #[arg(long)]
        credits: u64,

        /// Override the minimum CGPA required to graduate
        #[arg(long)]
        minimum_gpa: Option<f64>,

        /// Override the credits required to graduate
        #[arg(long)]
        required_credits: Option<u32>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compare two saved projection reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Minimum impact shift that counts as a change
        #[arg(long, default_value = "0.005")]
        threshold: f64,

        /// Exit code 1 if the projected CGPA dropped or any impact worsened
        #[arg(long)]
        fail_on_worse: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate planning session TOML files
    Validate {
        /// Path to a session file or directory
        #[arg(long)]
        session: PathBuf,
    },

    /// Print the grade-point table
    Grades,

    /// Create starter config and example session
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradecast=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Project {
            session,
            minimum_gpa,
            required_credits,
            default_grade,
            format,
            save,
            output,
            config,
        } => commands::project::execute(commands::project::ProjectArgs {
            session,
            minimum_gpa,
            required_credits,
            default_grade,
            format,
            save,
            output,
            config,
        }),
        Commands::Gpa { session, projected } => commands::gpa::execute(session, projected),
        Commands::Check {
            gpa,
            credits,
            minimum_gpa,
            required_credits,
            config,
        } => commands::check::execute(gpa, credits, minimum_gpa, required_credits, config),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_worse,
            format,
        } => commands::compare::execute(baseline, current, threshold, fail_on_worse, format),
        Commands::Validate { session } => commands::validate::execute(session),
        Commands::Grades => commands::grades::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

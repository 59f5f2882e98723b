//! gradecast configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::GraduationTarget;

/// Top-level gradecast configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradecastConfig {
    /// Minimum CGPA for graduation eligibility.
    #[serde(default = "default_minimum_gpa")]
    pub minimum_gpa: f64,
    /// Credits required to graduate.
    #[serde(default = "default_required_credits")]
    pub required_credits: u32,
    /// Output format used when none is given on the command line.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Directory saved projection reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_minimum_gpa() -> f64 {
    2.0
}
fn default_required_credits() -> u32 {
    120
}
fn default_format() -> String {
    "text".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./gradecast-results")
}

impl Default for GradecastConfig {
    fn default() -> Self {
        Self {
            minimum_gpa: default_minimum_gpa(),
            required_credits: default_required_credits(),
            default_format: default_format(),
            output_dir: default_output_dir(),
        }
    }
}

impl GradecastConfig {
    /// The configured graduation target, validated.
    pub fn graduation_target(&self) -> Result<GraduationTarget> {
        GraduationTarget::new(self.minimum_gpa, self.required_credits)
            .context("invalid graduation target in configuration")
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `gradecast.toml` in the current directory
/// 2. `~/.config/gradecast/config.toml`
///
/// Environment variable overrides: `GRADECAST_MINIMUM_GPA`, `GRADECAST_REQUIRED_CREDITS`.
pub fn load_config() -> Result<GradecastConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GradecastConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradecast.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GradecastConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradecastConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn apply_env_overrides(
    config: &mut GradecastConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(raw) = lookup("GRADECAST_MINIMUM_GPA") {
        config.minimum_gpa = raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("GRADECAST_MINIMUM_GPA must be a number, got '{raw}'"))?;
    }
    if let Some(raw) = lookup("GRADECAST_REQUIRED_CREDITS") {
        config.required_credits = raw.trim().parse::<u32>().with_context(|| {
            format!("GRADECAST_REQUIRED_CREDITS must be a positive integer, got '{raw}'")
        })?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradecast"))
}

//! TOML planning-session parser.
//!
//! Loads planning sessions from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::GradeError;
use crate::grade::GradeToken;
use crate::model::{Baseline, CourseRecord, PlanningSession, TargetOverrides};

/// Intermediate TOML structure for parsing session files.
#[derive(Debug, Deserialize)]
struct TomlSessionFile {
    session: TomlSessionHeader,
    #[serde(default)]
    baseline: Option<TomlBaseline>,
    #[serde(default)]
    target: Option<TomlTarget>,
    #[serde(default)]
    courses: Vec<TomlCourse>,
}

#[derive(Debug, Deserialize)]
struct TomlSessionHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlBaseline {
    #[serde(default)]
    completed_credits: i64,
    #[serde(default)]
    baseline_gpa: f64,
}

#[derive(Debug, Deserialize)]
struct TomlTarget {
    #[serde(default)]
    minimum_gpa: Option<f64>,
    #[serde(default)]
    required_credits: Option<i64>,
}

// Credits are read signed so a negative value surfaces as `InvalidCredits`
// rather than a TOML type error.
#[derive(Debug, Deserialize)]
struct TomlCourse {
    id: String,
    #[serde(default)]
    name: Option<String>,
    credits: i64,
    #[serde(default)]
    current_grade: Option<String>,
    #[serde(default)]
    projected_grade: Option<String>,
}

/// Parse a single TOML file into a `PlanningSession`.
pub fn parse_session(path: &Path) -> Result<PlanningSession> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file: {}", path.display()))?;

    parse_session_str(&content, path)
}

/// Parse a TOML string into a `PlanningSession` (useful for testing).
pub fn parse_session_str(content: &str, source_path: &Path) -> Result<PlanningSession> {
    let parsed: TomlSessionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let baseline = match parsed.baseline {
        Some(raw) => {
            let completed_credits = u32::try_from(raw.completed_credits).map_err(|_| {
                GradeError::InvalidCredits {
                    course: "baseline".into(),
                    credits: raw.completed_credits,
                }
            })?;
            Baseline::new(completed_credits, raw.baseline_gpa)
                .with_context(|| format!("invalid baseline in {}", source_path.display()))?
        }
        None => Baseline::empty(),
    };

    let target = match parsed.target {
        Some(raw) => TargetOverrides {
            minimum_gpa: raw.minimum_gpa,
            required_credits: raw
                .required_credits
                .map(|credits| {
                    u32::try_from(credits)
                        .ok()
                        .filter(|&c| c > 0)
                        .ok_or_else(|| {
                            GradeError::InvalidRequirement(format!(
                                "required credits must be a positive integer, got {credits}"
                            ))
                        })
                })
                .transpose()?,
        },
        None => TargetOverrides::default(),
    };

    let courses = parsed
        .courses
        .into_iter()
        .map(|c| {
            let course_id = c.id.clone();
            convert_course(c).with_context(|| format!("invalid course '{course_id}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PlanningSession {
        id: parsed.session.id,
        name: parsed.session.name,
        description: parsed.session.description,
        baseline,
        target,
        courses,
    })
}

fn convert_course(c: TomlCourse) -> Result<CourseRecord, GradeError> {
    let credits = u32::try_from(c.credits)
        .ok()
        .filter(|&credits| credits > 0)
        .ok_or_else(|| GradeError::InvalidCredits {
            course: c.id.clone(),
            credits: c.credits,
        })?;

    let parse_grade = |raw: Option<String>| raw.map(|g| g.parse::<GradeToken>()).transpose();
    let current_grade = parse_grade(c.current_grade)?;
    let projected_grade = parse_grade(c.projected_grade)?;

    let name = c.name.unwrap_or_else(|| c.id.clone());
    Ok(CourseRecord {
        id: c.id,
        name,
        credits,
        current_grade,
        projected_grade,
    })
}

/// Load all session files from a directory (recursively).
pub fn load_session_directory(dir: &Path) -> Result<Vec<PlanningSession>> {
    let mut sessions = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sessions.extend(load_session_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_session(&path) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sessions)
}

/// A warning from session validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The course ID (if applicable).
    pub course_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a session for issues that parse cleanly but are probably mistakes.
pub fn validate_session(session: &PlanningSession) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if session.courses.is_empty() {
        warnings.push(ValidationWarning {
            course_id: None,
            message: "session has no courses; projections reduce to the baseline".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for course in &session.courses {
        if !seen_ids.insert(&course.id) {
            warnings.push(ValidationWarning {
                course_id: Some(course.id.clone()),
                message: format!("duplicate course ID: {}", course.id),
            });
        }
    }

    for course in &session.courses {
        if course.current_grade.is_none() && course.projected_grade.is_none() {
            warnings.push(ValidationWarning {
                course_id: Some(course.id.clone()),
                message: "course has no grade and will be excluded from projections".into(),
            });
        }
    }

    for course in &session.courses {
        if course.projected_grade.is_some() && course.projected_grade == course.current_grade {
            warnings.push(ValidationWarning {
                course_id: Some(course.id.clone()),
                message: "projected grade equals current grade".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[session]
id = "spring-plan"
name = "Spring planning"
description = "Final two semesters"

[baseline]
completed_credits = 60
baseline_gpa = 3.0

[target]
minimum_gpa = 3.0
required_credits = 120

[[courses]]
id = "cs301"
name = "Algorithms"
credits = 4
current_grade = "B"
projected_grade = "A"

[[courses]]
id = "ma210"
name = "Linear Algebra"
credits = 3
current_grade = "B-"
"#;

    #[test]
    fn parse_valid_toml() {
        let session = parse_session_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(session.id, "spring-plan");
        assert_eq!(session.name, "Spring planning");
        assert_eq!(session.baseline.completed_credits, 60);
        assert_eq!(session.target.required_credits, Some(120));
        assert_eq!(session.courses.len(), 2);
        assert_eq!(session.courses[0].projected_grade, Some(GradeToken::A));
        assert_eq!(session.courses[1].current_grade, Some(GradeToken::BMinus));
        assert!(validate_session(&session).is_empty());
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[session]
id = "minimal"
name = "Minimal"

[[courses]]
id = "hist"
credits = 3
"#;
        let session = parse_session_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(session.baseline, Baseline::empty());
        assert_eq!(session.target, TargetOverrides::default());
        assert_eq!(session.courses[0].name, "hist");
        assert!(session.courses[0].current_grade.is_none());
    }

    #[test]
    fn negative_credits_are_invalid_credits() {
        let toml = r#"
[session]
id = "bad"
name = "Bad"

[[courses]]
id = "x"
credits = -3
current_grade = "A"
"#;
        let err = parse_session_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        let grade_err = err.downcast_ref::<GradeError>().unwrap();
        assert_eq!(
            grade_err,
            &GradeError::InvalidCredits {
                course: "x".into(),
                credits: -3
            }
        );
    }

    #[test]
    fn unknown_grade_is_rejected() {
        let toml = r#"
[session]
id = "bad"
name = "Bad"

[[courses]]
id = "x"
credits = 3
projected_grade = "E"
"#;
        let err = parse_session_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("invalid grade token: 'E'"));
    }

    #[test]
    fn out_of_range_baseline_is_rejected() {
        let toml = r#"
[session]
id = "bad"
name = "Bad"

[baseline]
completed_credits = 30
baseline_gpa = 4.3
"#;
        assert!(parse_session_str(toml, &PathBuf::from("test.toml")).is_err());
    }

    #[test]
    fn validate_flags_suspicious_rows() {
        let toml = r#"
[session]
id = "dupes"
name = "Dupes"

[[courses]]
id = "same"
credits = 3
current_grade = "A"
projected_grade = "A"

[[courses]]
id = "same"
credits = 4
"#;
        let session = parse_session_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_session(&session);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("no grade")));
        assert!(warnings.iter().any(|w| w.message.contains("equals current")));
    }

    #[test]
    fn validate_flags_empty_session() {
        let session = parse_session_str(
            "[session]\nid = \"e\"\nname = \"Empty\"\n",
            &PathBuf::from("test.toml"),
        )
        .unwrap();
        let warnings = validate_session(&session);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].course_id.is_none());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_session_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_directory_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plan.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not toml at all [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sessions = load_session_directory(dir.path()).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, "spring-plan");
    }
}

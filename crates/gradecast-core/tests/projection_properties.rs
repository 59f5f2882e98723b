//! End-to-end properties of the projection pipeline.
//!
//! Exercises the public surface the way a calling layer would: build a
//! roster, project it, analyze it against a target.

use gradecast_core::scenario::Scenario;
use gradecast_core::{
    aggregate, analyze, plan, project, Baseline, CourseRecord, GradeError, GradeToken,
    GradedEntry, GraduationTarget, ProjectionOptions, Recommendation,
};

fn course(id: &str, credits: u32) -> CourseRecord {
    CourseRecord::new(id, id, credits).unwrap()
}

#[test]
fn grade_table_closure() {
    for token in GradeToken::ALL {
        let points = token.points();
        assert!((0.0..=4.0).contains(&points));
    }
    assert_eq!(GradeToken::APlus.points(), GradeToken::A.points());
}

#[test]
fn aggregator_weighting() {
    let gpa = aggregate(&[
        GradedEntry::new(3, GradeToken::A),
        GradedEntry::new(1, GradeToken::C),
    ])
    .unwrap();
    assert_eq!(gpa, 3.5);
}

#[test]
fn empty_and_zero_credit_safety() {
    assert_eq!(aggregate(&[]).unwrap(), 0.0);
    let err = aggregate(&[GradedEntry::new(0, GradeToken::A)]).unwrap_err();
    assert!(matches!(err, GradeError::InvalidCredits { .. }));
}

#[test]
fn ungraded_rows_are_filtered_before_aggregation() {
    let roster = vec![
        course("physics", 3).with_current(GradeToken::A),
        course("thesis", 10),
    ];
    let entries: Vec<GradedEntry> = roster
        .iter()
        .filter_map(|c| c.current_grade.map(|g| GradedEntry::new(c.credits, g)))
        .collect();
    assert_eq!(aggregate(&entries).unwrap(), 4.0);
}

#[test]
fn blended_baseline() {
    let baseline = Baseline::new(60, 3.0).unwrap();
    let courses = vec![course("cs", 4).with_projected(GradeToken::A)];

    let scenario = Scenario::evaluate(&baseline, &courses, &ProjectionOptions::default()).unwrap();
    assert!((scenario.projected_gpa - 3.0625).abs() < 1e-12);

    let projection = project(&baseline, &courses).unwrap();
    assert_eq!(projection.projected_gpa, 3.06);
}

#[test]
fn eligibility_is_conjunctive() {
    let verdict = analyze(3.5, 3.0, 100, 120).unwrap();
    assert!(!verdict.graduation_eligible);

    let verdict = analyze(2.9, 3.0, 120, 120).unwrap();
    assert!(!verdict.graduation_eligible);

    let verdict = analyze(3.5, 3.0, 120, 120).unwrap();
    assert!(verdict.graduation_eligible);
}

/// Current GPA covers only the in-session courses while projected GPA is
/// blended with the baseline, so the sign of delta tracks the hypothetical
/// grade only when there is no baseline. With one, the baseline can pull the
/// sign either way.
#[test]
fn delta_sign_follows_the_hypothetical() {
    let roster = |projected: GradeToken| {
        vec![
            course("a", 3)
                .with_current(GradeToken::B)
                .with_projected(projected),
            course("b", 4).with_current(GradeToken::AMinus),
        ]
    };
    let empty = Baseline::empty();

    let raised = project(&empty, &roster(GradeToken::A)).unwrap();
    assert!(raised.delta > 0.0);

    let lowered = project(&empty, &roster(GradeToken::D)).unwrap();
    assert!(lowered.delta < 0.0);

    let unchanged = project(&empty, &roster(GradeToken::B)).unwrap();
    assert_eq!(unchanged.delta, 0.0);

    // A weak history outweighs a raised grade: current 3.4, projected 2.19.
    let weak_history = Baseline::new(60, 2.0).unwrap();
    let raised_over_history = project(&weak_history, &roster(GradeToken::A)).unwrap();
    assert!(raised_over_history.delta < 0.0);
}

#[test]
fn impact_grows_with_credit_weight() {
    let baseline = Baseline::new(30, 3.1).unwrap();
    let courses = vec![
        course("seminar", 2)
            .with_current(GradeToken::B)
            .with_projected(GradeToken::A),
        course("lab", 3).with_current(GradeToken::C),
        course("studio", 6)
            .with_current(GradeToken::B)
            .with_projected(GradeToken::A),
    ];
    let scenario = Scenario::evaluate(&baseline, &courses, &ProjectionOptions::default()).unwrap();
    assert_eq!(scenario.impacts.len(), 2);
    assert!(scenario.impacts[1].impact.abs() > scenario.impacts[0].impact.abs());
}

#[test]
fn projection_is_idempotent() {
    let baseline = Baseline::new(47, 2.87).unwrap();
    let courses = vec![
        course("a", 3)
            .with_current(GradeToken::CPlus)
            .with_projected(GradeToken::BPlus),
        course("b", 4).with_projected(GradeToken::AMinus),
        course("c", 1).with_current(GradeToken::F),
    ];
    let target = GraduationTarget::new(2.5, 60).unwrap();
    let options = ProjectionOptions::default();

    let first = plan(&baseline, &courses, &target, &options).unwrap();
    let second = plan(&baseline, &courses, &target, &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.result.projected_gpa.to_bits(),
        second.result.projected_gpa.to_bits()
    );
}

#[test]
fn pipeline_ends_in_recommendation() {
    let baseline = Baseline::new(100, 3.4).unwrap();
    let courses = vec![
        course("capstone", 12)
            .with_current(GradeToken::BPlus)
            .with_projected(GradeToken::A),
        course("elective", 8).with_current(GradeToken::AMinus),
    ];
    let target = GraduationTarget::new(3.0, 120).unwrap();

    let outcome = plan(&baseline, &courses, &target, &ProjectionOptions::default()).unwrap();
    assert!(outcome.result.graduation_eligible);
    assert_eq!(outcome.result.credits_remaining, 0);
    assert_eq!(outcome.recommendation, Recommendation::OnTrack);
}

#[test]
fn invalid_tokens_propagate() {
    let err = "Q".parse::<GradeToken>().unwrap_err();
    assert_eq!(err, GradeError::InvalidGradeToken("Q".into()));
}

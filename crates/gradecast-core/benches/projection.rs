use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gradecast_core::gpa::weighted_average;
use gradecast_core::scenario::{ProjectionOptions, Scenario};
use gradecast_core::{Baseline, CourseRecord, GradeToken, GradedEntry};

fn make_roster(size: usize) -> Vec<CourseRecord> {
    (0..size)
        .map(|i| {
            let current = GradeToken::ALL[i % GradeToken::ALL.len()];
            let projected = GradeToken::ALL[(i + 3) % GradeToken::ALL.len()];
            let credits = 1 + (i % 5) as u32;
            let course = CourseRecord::new(format!("c{i}"), format!("Course {i}"), credits)
                .expect("positive credits")
                .with_current(current);
            if i % 2 == 0 {
                course.with_projected(projected)
            } else {
                course
            }
        })
        .collect()
}

fn bench_weighted_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_average");

    for size in [10usize, 50, 200] {
        let entries: Vec<GradedEntry> = make_roster(size)
            .iter()
            .map(|course| GradedEntry {
                credits: course.credits,
                grade: course.current_grade,
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| weighted_average(black_box(entries)))
        });
    }

    group.finish();
}

fn bench_scenario(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_evaluate");
    let baseline = Baseline::new(60, 3.1).expect("valid baseline");
    let options = ProjectionOptions::default();

    for size in [10usize, 50, 200] {
        let roster = make_roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| {
                Scenario::evaluate(black_box(&baseline), black_box(roster), black_box(&options))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_weighted_average, bench_scenario);
criterion_main!(benches);

use super::common::*;

use crate::submissions::domain::ExperienceGroup;
use crate::submissions::salary::{
    per_question_salaries, percentile, percentile_band, trimmed_average, SalaryComparison,
    SalaryError, DEFAULT_TRIM_RATIO,
};

#[test]
fn comparison_trims_ranks_and_bands() {
    let peers = vec![
        salary(3, 5000),
        salary(3, 3000),
        salary(3, 4500),
        salary(3, 3500),
        salary(3, 4000),
        salary(4, 9000),
    ];

    let comparison =
        SalaryComparison::compute(salary(3, 4200), &peers, DEFAULT_TRIM_RATIO).expect("peers");

    assert_eq!(comparison.total_count, 5);
    assert_eq!(comparison.average_salary, 4000);
    assert_eq!(comparison.my_rank, 3);
    assert_eq!(comparison.percentile, 60.0);
    assert_eq!(comparison.band, "중상위권");
    assert_eq!(comparison.experience_group, ExperienceGroup::Mid);
}

#[test]
fn top_earner_ranks_first() {
    let peers = vec![salary(1, 2800), salary(1, 3100)];

    let comparison =
        SalaryComparison::compute(salary(1, 3100), &peers, DEFAULT_TRIM_RATIO).expect("peers");

    assert_eq!(comparison.my_rank, 1);
    assert_eq!(comparison.percentile, 100.0);
    assert_eq!(comparison.band, "최상위권");
}

#[test]
fn comparison_requires_peers_with_same_experience() {
    let peers = vec![salary(2, 3000), salary(4, 4000)];

    assert_eq!(
        SalaryComparison::compute(salary(3, 3500), &peers, DEFAULT_TRIM_RATIO),
        Err(SalaryError::InsufficientData { years: 3 })
    );
}

#[test]
fn trimmed_average_drops_extremes() {
    assert_eq!(trimmed_average(&[], DEFAULT_TRIM_RATIO), 0);
    assert_eq!(trimmed_average(&[3100], DEFAULT_TRIM_RATIO), 3100);
    assert_eq!(trimmed_average(&[1, 2, 3, 100], DEFAULT_TRIM_RATIO), 3);
    assert_eq!(trimmed_average(&[1, 2, 3, 100], 0.0), 27);
}

#[test]
fn percentile_rounds_to_one_decimal() {
    assert_eq!(percentile(3, 2), 66.7);
    assert_eq!(percentile(4, 4), 25.0);
    assert_eq!(percentile(0, 1), 0.0);
}

#[test]
fn percentile_bands_follow_thresholds() {
    assert_eq!(percentile_band(90.0), "최상위권");
    assert_eq!(percentile_band(75.0), "상위권");
    assert_eq!(percentile_band(50.0), "중상위권");
    assert_eq!(percentile_band(25.0), "중위권");
    assert_eq!(percentile_band(24.9), "중하위권");
}

#[test]
fn per_question_matches_same_group_and_position() {
    let records = vec![
        record("res-1", "a", data_answers(), Some(salary(4, 4000))),
        record("res-2", "b", data_answers(), Some(salary(5, 5000))),
        record("res-3", "c", data_answers(), Some(salary(8, 9000))),
        record("res-4", "d", brand_answers(), Some(salary(3, 3000))),
    ];

    let breakdown =
        per_question_salaries(salary(3, 4200), &data_answers(), &records, DEFAULT_TRIM_RATIO);

    assert_eq!(breakdown.len(), 4);
    assert_eq!(breakdown[0].question_id.as_str(), "Q1");
    assert_eq!(breakdown[0].count, 2);
    assert_eq!(breakdown[0].average_salary, Some(4500));
    assert_eq!(breakdown[3].count, 2);

    let unmatched = per_question_salaries(
        salary(3, 4200),
        &brand_answers()[..1],
        &records[..2],
        DEFAULT_TRIM_RATIO,
    );
    assert_eq!(unmatched[0].count, 0);
    assert_eq!(unmatched[0].average_salary, None);
}

use super::*;
use abyssal_data::{IdentityError, RawRow};
use rstest::{fixture, rstest};

fn row<'a>(line: u64, pairs: &[(&'a str, &'a str)]) -> RawRow {
    RawRow::from_pairs(line, pairs.iter().copied())
}

#[fixture]
fn canonical() -> GridScorer {
    GridScorer::new(ScoreWeights::default()).expect("canonical weights are valid")
}

#[fixture]
fn worked_example() -> RawRow {
    row(
        2,
        &[
            ("row", "0"),
            ("col", "0"),
            ("resource_economic_value", "[10.0]"),
            ("resource_abundance", "[2.0]"),
            ("resource_purity", "[0.5]"),
            ("resource_extraction_difficulty", "[4.0, 6.0]"),
            ("hazard_severity", "['high', 'low']"),
        ],
    )
}

#[rstest]
fn worked_example_scores_minus_three(canonical: GridScorer, worked_example: RawRow) {
    let report = canonical
        .score_rows(&[worked_example])
        .expect("scoring should succeed");
    let cell = &report.ranked[0];
    assert_eq!(cell.metrics.total_value, 10.0);
    assert_eq!(cell.metrics.difficulty, 5.0);
    assert_eq!(cell.metrics.env_impact, 0.0);
    assert_eq!(cell.metrics.hazard_score, 4.0);
    assert_eq!(cell.score, -3.0);
}

#[rstest]
fn empty_collections_leave_only_coral_term(canonical: GridScorer) {
    let rows = [row(
        2,
        &[("row", "1"), ("col", "1"), ("coral_coral_cover_pct", "40")],
    )];
    let report = canonical.score_rows(&rows).expect("scoring should succeed");
    let metrics = report.ranked[0].metrics;
    assert_eq!(metrics.total_value, 0.0);
    assert_eq!(metrics.difficulty, 0.0);
    assert_eq!(metrics.hazard_score, 0.0);
    assert_eq!(metrics.env_impact, 4.0);
    assert_eq!(report.ranked[0].score, -8.0);
}

#[rstest]
fn ties_keep_input_order(canonical: GridScorer) {
    let rows: Vec<RawRow> = (0..5)
        .map(|col| {
            let col = col.to_string();
            RawRow::from_pairs(2, [("row", "0"), ("col", col.as_str())])
        })
        .collect();
    let report = canonical.score_rows(&rows).expect("scoring should succeed");
    let cols: Vec<u32> = report.ranked.iter().map(|c| c.cell.id.col).collect();
    assert_eq!(cols, [0, 1, 2, 3, 4]);
}

fn overflowing_row(line: u64, col: &'static str) -> RawRow {
    row(
        line,
        &[
            ("row", "5"),
            ("col", col),
            ("resource_economic_value", "[1e200]"),
            ("resource_abundance", "[1e200]"),
            ("resource_purity", "[1.0]"),
            ("resource_environmental_impact", "[1e308]"),
        ],
    )
}

#[rstest]
fn zero_weight_drops_overflowed_term() {
    let weights = ScoreWeights {
        value: 0.0,
        impact: 0.0,
        ..ScoreWeights::CANONICAL
    };
    let scorer = GridScorer::new(weights).expect("weights are finite");
    let report = scorer
        .score_rows(&[overflowing_row(2, "0")])
        .expect("skip policy");
    let cell = report.ranked.first().expect("one cell");
    assert!(cell.metrics.total_value.is_infinite());
    assert_eq!(cell.score, 0.0);
}

#[rstest]
fn nan_scores_rank_after_numbers(canonical: GridScorer, worked_example: RawRow) {
    let report = canonical
        .score_rows(&[overflowing_row(2, "1"), worked_example])
        .expect("skip policy");
    let scores: Vec<f64> = report.ranked.iter().map(|cell| cell.score).collect();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores.first().copied(), Some(-3.0));
    assert!(scores.last().is_some_and(|score| score.is_nan()));
}

#[rstest]
fn rank_orders_nan_last_and_keeps_ties() {
    let scored = |col, score| ScoredCell {
        cell: abyssal_core::CellRecord::new(abyssal_core::CellId::new(0, col)),
        metrics: SubMetrics::default(),
        score,
    };
    let ranked = rank(vec![
        scored(0, f64::NAN),
        scored(1, -5.0),
        scored(2, 1.0),
        scored(3, f64::NAN),
        scored(4, f64::NEG_INFINITY),
    ]);
    let cols: Vec<u32> = ranked.iter().map(|cell| cell.cell.id.col).collect();
    assert_eq!(cols, [2, 1, 4, 0, 3]);
}

#[rstest]
fn scoring_twice_is_identical(canonical: GridScorer, worked_example: RawRow) {
    let rows = vec![
        worked_example,
        row(3, &[("row", "0"), ("col", "1"), ("hazard_severity", "['extreme']")]),
    ];
    let first = canonical.score_rows(&rows).expect("first run");
    let second = canonical.score_rows(&rows).expect("second run");
    assert_eq!(first, second);
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
#[case(2.5)]
#[case(-3.0)]
fn score_is_linear_in_value_weight(worked_example: RawRow, #[case] value: f64) {
    let weights = ScoreWeights {
        value,
        ..ScoreWeights::default()
    };
    let scorer = GridScorer::new(weights).expect("weights are finite");
    let report = scorer.score_rows(&[worked_example]).expect("scoring");
    let cell = &report.ranked[0];
    let without_value = -5.0 - 2.0 * 4.0;
    assert_eq!(cell.score, value * 10.0 + without_value);
}

#[rstest]
fn skip_policy_reports_rejected_rows(canonical: GridScorer) {
    let rows = [
        row(2, &[("row", "0"), ("col", "0")]),
        row(3, &[("row", "x"), ("col", "1")]),
        row(4, &[("col", "2")]),
    ];
    let report = canonical.score_rows(&rows).expect("skip never fails");
    assert_eq!(report.ranked.len(), 1);
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.rejected[0].line(), 3);
    assert!(matches!(
        report.rejected[1],
        IdentityError::Missing { line: 4, .. }
    ));
}

#[rstest]
fn abort_policy_fails_on_first_bad_row(canonical: GridScorer) {
    let scorer = canonical.with_policy(IdentityPolicy::Abort);
    let rows = [
        row(2, &[("row", "0"), ("col", "0")]),
        row(3, &[("row", "0"), ("col", "-4")]),
        row(4, &[("row", "z"), ("col", "0")]),
    ];
    let err = scorer.score_rows(&rows).expect_err("abort should fail");
    match err {
        ScoreError::Identity(identity) => assert_eq!(identity.line(), 3),
        other => panic!("expected identity error, got {other:?}"),
    }
}

#[rstest]
fn non_finite_weights_are_rejected() {
    let weights = ScoreWeights {
        hazard: f64::INFINITY,
        ..ScoreWeights::default()
    };
    let err = GridScorer::new(weights).expect_err("infinite weight");
    assert!(matches!(
        err,
        ScoreError::InvalidWeights(WeightsError::NonFinite { field: "hazard" })
    ));
}

#[rstest]
fn top_n_truncates_without_reordering(canonical: GridScorer) {
    let rows: Vec<RawRow> = ["['low']", "['extreme']", "[]"]
        .iter()
        .enumerate()
        .map(|(col, severity)| {
            let col = col.to_string();
            RawRow::from_pairs(
                2,
                [("row", "0"), ("col", col.as_str()), ("hazard_severity", severity)],
            )
        })
        .collect();
    let report = canonical.score_rows(&rows).expect("scoring");
    let best = top_n(&report.ranked, 2);
    let cols: Vec<u32> = best.iter().map(|c| c.cell.id.col).collect();
    assert_eq!(cols, [2, 0]);
    assert_eq!(top_n(&report.ranked, 10).len(), 3);
}

#[rstest]
fn detailed_view_keeps_one_label_per_entry(canonical: GridScorer) {
    let rows = [row(
        2,
        &[
            ("row", "0"),
            ("col", "0"),
            ("hazard_type", "['vent', None]"),
            ("resource_type", "['cobalt']"),
            ("life_species", "['grenadier']"),
            ("pressure_atm", "410"),
        ],
    )];
    let report = canonical.score_rows(&rows).expect("scoring");
    let detail = report.ranked.first().expect("one cell").detail();
    assert_eq!(detail.hazards, [Some("vent"), None]);
    assert_eq!(detail.resources, [Some("cobalt")]);
    assert_eq!(detail.life, [Some("grenadier")]);
    assert_eq!(detail.pressure, 410.0);

    let json = serde_json::to_value(&detail).expect("detail serialises");
    assert_eq!(json["row"], 0);
    assert_eq!(json["biome"], "unknown");
    assert_eq!(json["hazards"], serde_json::json!(["vent", null]));
}

#[rstest]
fn summary_csv_writes_header_for_empty_results() {
    let mut out = Vec::new();
    write_summary_csv(&mut out, &[]).expect("write csv");
    let text = String::from_utf8(out).expect("utf-8");
    assert_eq!(text, format!("{}\n", SUMMARY_COLUMNS.join(",")));
}

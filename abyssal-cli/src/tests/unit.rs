//! Focused unit tests covering score CLI configuration.

use super::helpers::{Workspace, write_utf8};
use super::*;
use abyssal_scorer::{IdentityPolicy, ScoreWeights, WeightPreset};
use camino::Utf8PathBuf;
use rstest::rstest;

#[rstest]
fn converting_empty_args_applies_defaults() {
    let config = ScoreConfig::try_from(ScoreArgs::default()).expect("defaults should build");
    assert_eq!(config.dataset, Utf8PathBuf::from("merged.csv"));
    assert_eq!(config.top, 10);
    assert_eq!(config.weights, ScoreWeights::CANONICAL);
    assert_eq!(config.policy, IdentityPolicy::Skip);
    assert_eq!(config.delimiter, b',');
    assert_eq!(config.output, None);
    assert_eq!(config.json, None);
}

#[rstest]
fn weight_flags_override_the_preset() {
    let args = ScoreArgs {
        preset: Some(WeightPreset::Full),
        w_hazard: Some(0.5),
        w_value: Some(-1.0),
        ..ScoreArgs::default()
    };
    let config = ScoreConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.weights,
        ScoreWeights {
            value: -1.0,
            difficulty: 1.0,
            impact: 5.0,
            hazard: 0.5,
        }
    );
}

#[rstest]
#[case('\t', b'\t')]
#[case(';', b';')]
#[case('|', b'|')]
fn accepts_ascii_delimiters(#[case] delimiter: char, #[case] expected: u8) {
    let args = ScoreArgs {
        delimiter: Some(delimiter),
        ..ScoreArgs::default()
    };
    let config = ScoreConfig::try_from(args).expect("delimiter should be accepted");
    assert_eq!(config.delimiter, expected);
}

#[rstest]
#[case('"')]
#[case('\n')]
#[case('é')]
#[case('→')]
fn rejects_unusable_delimiters(#[case] delimiter: char) {
    let args = ScoreArgs {
        delimiter: Some(delimiter),
        ..ScoreArgs::default()
    };
    let err = ScoreConfig::try_from(args).expect_err("delimiter should be rejected");
    match err {
        CliError::InvalidArgument { field, env, value } => {
            assert_eq!(field, ARG_DELIMITER);
            assert_eq!(env, ENV_DELIMITER);
            assert_eq!(value, delimiter.to_string());
        }
        other => panic!("expected InvalidArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_dataset() {
    let workspace = Workspace::new();
    let config = ScoreConfig {
        dataset: workspace.root().join("absent.csv"),
        ..ScoreConfig::try_from(ScoreArgs::default()).expect("defaults")
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_DATASET),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new();
    let dataset = workspace.root().join("merged.csv");
    std::fs::create_dir(&dataset).expect("dataset directory");
    let config = ScoreConfig {
        dataset: dataset.clone(),
        ..ScoreConfig::try_from(ScoreArgs::default()).expect("defaults")
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_DATASET);
            assert_eq!(path, dataset);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_accepts_files() {
    let workspace = Workspace::new();
    let dataset = workspace.root().join("merged.csv");
    write_utf8(&dataset, b"row,col\n");
    let config = ScoreConfig {
        dataset,
        ..ScoreConfig::try_from(ScoreArgs::default()).expect("defaults")
    };
    config.validate_sources().expect("dataset file should validate");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "top": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "dataset": "from-file.csv",
            "preset": "full",
            "w_hazard": 3.0,
            "top": 3,
        }),
        None,
    );
    composer.push_environment(json!({
        "dataset": "from-env.csv",
        "on_invalid_identity": "abort",
    }));
    composer.push_cli(json!({
        "w_hazard": 7.0,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.dataset, Utf8PathBuf::from("from-env.csv"));
    assert_eq!(config.top, 3);
    assert_eq!(config.policy, IdentityPolicy::Abort);
    assert_eq!(config.weights.impact, 5.0);
    assert_eq!(config.weights.hazard, 7.0);
}

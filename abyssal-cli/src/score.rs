//! Score command implementation for the Abyssal CLI.

use std::io::Write;

use abyssal_data::{Dataset, DatasetOptions};
use abyssal_scorer::{
    GridScorer, IdentityPolicy, ScoreReport, ScoreWeights, WeightPreset,
    write_detailed_json_file, write_summary_csv_file,
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::write_top_table;
use crate::{
    ARG_DATASET, ARG_DELIMITER, ARG_JSON, ARG_ON_INVALID_IDENTITY, ARG_OUTPUT, ARG_PRESET,
    ARG_TOP, ARG_W_DIFFICULTY, ARG_W_HAZARD, ARG_W_IMPACT, ARG_W_VALUE, CliError, ENV_DELIMITER,
};

const DEFAULT_DATASET: &str = "merged.csv";
const DEFAULT_TOP: usize = 10;

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every cell of a merged seafloor dataset and print \
                 the best locations. Weights can come from a preset, CLI \
                 flags, configuration files, or environment variables.",
    about = "Score and rank grid cells"
)]
#[ortho_config(prefix = "ABYSSAL")]
pub(crate) struct ScoreArgs {
    /// Path to the merged dataset (defaults to `merged.csv`).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Number of top locations to print (defaults to 10).
    #[arg(long = ARG_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Base weight preset: `canonical` or `full`.
    #[arg(long = ARG_PRESET, value_name = "name")]
    #[serde(default)]
    pub(crate) preset: Option<WeightPreset>,
    /// Override the weight applied to resource value.
    #[arg(long = ARG_W_VALUE, value_name = "weight", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) w_value: Option<f64>,
    /// Override the weight applied to extraction difficulty.
    #[arg(long = ARG_W_DIFFICULTY, value_name = "weight", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) w_difficulty: Option<f64>,
    /// Override the weight applied to environmental impact.
    #[arg(long = ARG_W_IMPACT, value_name = "weight", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) w_impact: Option<f64>,
    /// Override the weight applied to hazards.
    #[arg(long = ARG_W_HAZARD, value_name = "weight", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) w_hazard: Option<f64>,
    /// Write every ranked cell to a summary CSV file.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Write every ranked cell to a detailed JSON file.
    #[arg(long = ARG_JSON, value_name = "path")]
    #[serde(default)]
    pub(crate) json: Option<Utf8PathBuf>,
    /// Handling of rows without a valid grid identity: `skip` or `abort`.
    #[arg(long = ARG_ON_INVALID_IDENTITY, value_name = "policy")]
    #[serde(default)]
    pub(crate) on_invalid_identity: Option<IdentityPolicy>,
    /// Field delimiter of the dataset (defaults to `,`).
    #[arg(long = ARG_DELIMITER, value_name = "char")]
    #[serde(default)]
    pub(crate) delimiter: Option<char>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    /// Dataset to score.
    pub(crate) dataset: Utf8PathBuf,
    /// Number of rows in the printed table.
    pub(crate) top: usize,
    /// Preset weights with any per-field overrides applied.
    pub(crate) weights: ScoreWeights,
    /// Identity policy for malformed rows.
    pub(crate) policy: IdentityPolicy,
    /// Dataset field delimiter.
    pub(crate) delimiter: u8,
    /// Optional summary CSV export.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Optional detailed JSON export.
    pub(crate) json: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.dataset, ARG_DATASET)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match abyssal_data::fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let base = args.preset.unwrap_or_default().weights();
        let weights = ScoreWeights {
            value: args.w_value.unwrap_or(base.value),
            difficulty: args.w_difficulty.unwrap_or(base.difficulty),
            impact: args.w_impact.unwrap_or(base.impact),
            hazard: args.w_hazard.unwrap_or(base.hazard),
        };
        let delimiter = args.delimiter.map_or(Ok(b','), delimiter_byte)?;

        Ok(Self {
            dataset: args
                .dataset
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET)),
            top: args.top.unwrap_or(DEFAULT_TOP),
            weights,
            policy: args.on_invalid_identity.unwrap_or_default(),
            delimiter,
            output: args.output,
            json: args.json,
        })
    }
}

/// Accept single-byte ASCII delimiters that cannot clash with quoting or
/// line breaks.
fn delimiter_byte(ch: char) -> Result<u8, CliError> {
    u8::try_from(ch)
        .ok()
        .filter(|&byte| byte.is_ascii() && !matches!(byte, b'"' | b'\n' | b'\r'))
        .ok_or_else(|| CliError::InvalidArgument {
            field: ARG_DELIMITER,
            env: ENV_DELIMITER,
            value: ch.to_string(),
        })
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let report = execute_score(&config)?;
    write_top_table(writer, &report.ranked, config.top).map_err(CliError::WriteReport)?;
    write_exports(&config, &report)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_score(config: &ScoreConfig) -> Result<ScoreReport, CliError> {
    let options = DatasetOptions {
        delimiter: config.delimiter,
    };
    let dataset = Dataset::load_with(&config.dataset, options)?;
    let scorer = GridScorer::new(config.weights)?.with_policy(config.policy);
    let report = scorer.score_dataset(&dataset)?;
    if !report.rejected.is_empty() {
        info!(
            "{} rows were skipped for invalid identity",
            report.rejected.len()
        );
    }
    Ok(report)
}

fn write_exports(config: &ScoreConfig, report: &ScoreReport) -> Result<(), CliError> {
    if let Some(path) = &config.output {
        write_summary_csv_file(path, &report.ranked)?;
    }
    if let Some(path) = &config.json {
        write_detailed_json_file(path, &report.ranked)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}

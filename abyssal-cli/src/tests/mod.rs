//! Shared test harness modules for the Abyssal CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::score::{ScoreConfig, config_from_layers_for_test, run_score_with};

mod helpers;
mod unit;

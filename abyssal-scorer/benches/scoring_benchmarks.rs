//! Criterion benchmarks for batch scoring.
//!
//! Measures parse, aggregate, compose and rank across grid sizes. Build with
//! `--features parallel` to benchmark the rayon fan-out.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package abyssal-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use abyssal_data::{Dataset, DatasetOptions};
use abyssal_scorer::{GridScorer, ScoreWeights};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Grid side lengths to benchmark; each grid has `side * side` cells.
const GRID_SIDES: &[u32] = &[10, 50, 100];

const HEADER: &str = "row,col,lat,lon,depth_m,pressure_atm,temperature_c,biome,\
coral_coral_cover_pct,resource_type,resource_abundance,resource_purity,\
resource_extraction_difficulty,resource_environmental_impact,resource_economic_value,\
hazard_type,hazard_severity,life_species,life_density,life_threat_level";

const SEVERITIES: [&str; 4] = ["'low'", "'medium'", "'high'", "'extreme'"];

/// Build a deterministic merged table with `side * side` rows.
fn synthetic_table(side: u32) -> String {
    let mut table = String::from(HEADER);
    table.push('\n');
    for row in 0..side {
        for col in 0..side {
            let severity = SEVERITIES
                .get(usize::try_from(row ^ col).unwrap_or(0) & 3)
                .copied()
                .unwrap_or("'low'");
            table.push_str(&format!(
                "{row},{col},-10.{row},140.{col},4000,400,2.0,abyssal plain,{col},\
                 \"['cobalt', 'nickel']\",\"[2.0, 1.0]\",\"[0.5, 0.9]\",\"[4.0, 6.0]\",\
                 \"[1.0, 0.5]\",\"[100.0, 40.0]\",\"['vent']\",\"[{severity}]\",\
                 \"['grenadier']\",[0.3],[1.0]\n"
            ));
        }
    }
    table
}

fn bench_score_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_dataset");
    let scorer = match GridScorer::new(ScoreWeights::default()) {
        Ok(scorer) => scorer,
        Err(err) => panic!("canonical weights are valid: {err}"),
    };

    for &side in GRID_SIDES {
        let table = synthetic_table(side);
        let dataset = match Dataset::from_reader(table.as_bytes(), DatasetOptions::default()) {
            Ok(dataset) => dataset,
            Err(err) => panic!("synthetic table should read: {err}"),
        };
        group.throughput(Throughput::Elements(u64::from(side * side)));
        group.bench_with_input(BenchmarkId::from_parameter(side), &dataset, |b, data| {
            b.iter(|| scorer.score_dataset(data));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_dataset);
criterion_main!(benches);

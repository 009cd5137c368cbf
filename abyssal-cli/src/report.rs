//! Fixed-width "Top N" table printed after scoring.

use std::io::{self, Write};

use abyssal_scorer::ScoredCell;

const RULE_WIDTH: usize = 85;

/// Write the ranked table for at most `top` cells of `ranked`.
pub(crate) fn write_top_table(
    writer: &mut dyn Write,
    ranked: &[ScoredCell],
    top: usize,
) -> io::Result<()> {
    if ranked.is_empty() {
        return writeln!(writer, "No scores calculated.");
    }
    writeln!(writer)?;
    writeln!(writer, "--- Top {top} Mining Locations ---")?;
    writeln!(
        writer,
        "{:<5} {:<12} {:<10} {:<10} {:<8} {:<8} {:<8} {:<10}",
        "Rank", "Loc(r,c)", "Score", "Value", "Diff", "Env", "Haz", "Biome"
    )?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
    for (rank, cell) in (1_usize..).zip(abyssal_scorer::top_n(ranked, top)) {
        let metrics = &cell.metrics;
        writeln!(
            writer,
            "{:<5} {:<12} {:<10.2} {:<10.2} {:<8.2} {:<8.2} {:<8.2} {:<10}",
            rank,
            cell.cell.id.to_string(),
            cell.score,
            metrics.total_value,
            metrics.difficulty,
            metrics.env_impact,
            metrics.hazard_score,
            cell.cell.biome,
        )?;
    }
    Ok(())
}

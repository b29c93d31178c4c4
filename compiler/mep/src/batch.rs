// Batch evaluation: one expression per line.
// Blank lines and lines starting with `#` are skipped.

use std::io::{self, BufRead, Write};

use mep_eval::VarTable;

use crate::analyze;

/// Counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluates every expression read from `input`, writing the input, the
/// rendered tree and the value (or the error) of each one to `out`.
pub fn run_batch<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    vars: &VarTable,
    strict: bool,
) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for line in input.lines() {
        let line = line?;
        let expr = line.trim();
        if expr.is_empty() || expr.starts_with('#') {
            continue;
        }

        summary.total += 1;
        let report = analyze(expr, vars, strict);
        writeln!(out, "------------------------")?;
        writeln!(out, "input = {expr}")?;
        if let Some(rendered) = &report.rendered {
            writeln!(out, "tree = {rendered}")?;
        }
        match (&report.value, &report.error) {
            (_, Some(error)) => {
                summary.failed += 1;
                writeln!(out, "{error}")?;
            }
            (Some(value), None) => writeln!(out, "value = {value}")?,
            (None, None) => {}
        }
    }

    log::info!(
        "batch finished: {} expressions, {} failed",
        summary.total,
        summary.failed
    );
    Ok(summary)
}

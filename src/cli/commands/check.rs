use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary, ScanTotals, helper::finish};
use crate::{core::ScanContext, rules::collect_issues};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let corpus = ctx.collect_corpus();
    let report = corpus.analyze();

    let issues = collect_issues(&corpus, &report);

    let summary = CheckSummary {
        format: cmd.format,
        totals: ScanTotals {
            total_files: corpus.total_files(),
            total_instances: corpus.total_instances(),
        },
        analysis: report.sorted(),
        diagnostics: corpus.diagnostics,
    };

    Ok(finish(CommandSummary::Check(summary), issues, true))
}

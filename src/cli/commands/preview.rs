use anyhow::{Ok, Result};

use super::super::args::PreviewCommand;
use super::{CommandResult, CommandSummary, PreviewSummary, ScanTotals, helper::finish};
use crate::{
    core::{ScanContext, prefix::unique_key_count},
    rules::collect_issues,
};

/// Group the scanned translations by prefix without writing anything.
///
/// Issues are still collected so the report can mention them, but they never
/// change the exit status.
pub fn preview(cmd: PreviewCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let corpus = ctx.collect_corpus();
    let report = corpus.analyze();

    let issues = collect_issues(&corpus, &report);
    let groups = corpus.group_by_prefix();

    let summary = PreviewSummary {
        totals: ScanTotals {
            total_files: corpus.total_files(),
            total_instances: corpus.total_instances(),
        },
        unique_count: unique_key_count(&groups),
        groups,
    };

    Ok(finish(CommandSummary::Preview(summary), issues, false))
}

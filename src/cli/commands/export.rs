use std::path::PathBuf;

use anyhow::{Context, Ok, Result};

use super::super::args::ExportCommand;
use super::{
    CommandResult, CommandSummary, DroppedValues, ExportSummary, ScanTotals, helper::finish,
};
use crate::{
    core::{
        ScanContext,
        analyze::AnalysisReport,
        data::key_prefix,
        prefix::{PrefixGroups, unique_key_count},
        sheet::write_sheets,
    },
    rules::collect_issues,
};

/// Export one translation sheet per key prefix.
///
/// Issues never stop the export unless `--strict` is given; in that case
/// nothing is written and the command fails.
pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let corpus = ctx.collect_corpus();
    let report = corpus.analyze();

    let issues = collect_issues(&corpus, &report);
    let groups = corpus.group_by_prefix();

    let output_dir = cmd
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.output_dir));
    let languages = cmd
        .languages
        .clone()
        .unwrap_or_else(|| ctx.config.target_languages.clone());

    let aborted = cmd.strict && !issues.is_empty();
    let files = if aborted {
        tracing::debug!("{} issue(s) found, strict export aborted", issues.len());
        Vec::new()
    } else {
        write_sheets(&groups, &languages, &output_dir).with_context(|| {
            format!(
                "Failed to write translation sheets to {}",
                output_dir.display()
            )
        })?
    };

    let summary = ExportSummary {
        totals: ScanTotals {
            total_files: corpus.total_files(),
            total_instances: corpus.total_instances(),
        },
        output_dir,
        files,
        unique_count: unique_key_count(&groups),
        dropped: dropped_values(&report, &groups),
        aborted,
    };

    Ok(finish(CommandSummary::Export(summary), issues, cmd.strict))
}

/// For every conflicting key, the value the sheet keeps and the ones it loses.
pub fn dropped_values(report: &AnalysisReport, groups: &PrefixGroups) -> Vec<DroppedValues> {
    let mut dropped: Vec<DroppedValues> = report
        .conflicts
        .iter()
        .filter_map(|(key, values)| {
            let kept = groups.get(key_prefix(key))?.get(key)?;
            let mut others: Vec<String> = values.iter().filter(|v| *v != kept).cloned().collect();
            others.sort();
            Some(DroppedValues {
                key: key.clone(),
                kept: kept.clone(),
                dropped: others,
            })
        })
        .collect();

    dropped.sort_by(|a, b| a.key.cmp(&b.key));
    dropped
}

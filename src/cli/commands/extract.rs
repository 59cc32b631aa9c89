use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary, NamespaceSummary};
use crate::{
    cli::exit_status::ExitStatus,
    core::{ExtractContext, WrittenFiles, extract as run_pipeline},
    writers::report::render_report,
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.args)?;
    let run = run_pipeline(&ctx.root_dir, &ctx.config)?;

    let (written, dry_run_report) = if ctx.dry_run {
        let written = WrittenFiles {
            catalogs: Vec::new(),
            report: ctx.report_path.clone(),
        };
        (written, Some(render_report(&run.records)))
    } else {
        let written = run.write(&ctx.root_dir, &ctx.config, &ctx.report_path)?;
        (written, None)
    };

    let namespaces = run
        .aggregation
        .namespaces
        .iter()
        .map(|ns| NamespaceSummary {
            name: ns.name.clone(),
            dir: ns.dir.clone(),
            key_count: ns.entries.len(),
        })
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            file_count: run.files.len(),
            record_count: run.records.len(),
            namespaces,
            languages: ctx.config.languages.clone(),
            source_language: ctx.config.source_language.clone(),
            collisions: run.aggregation.collisions,
            config_path: ctx.config_path.clone(),
            catalog_paths: written.catalogs,
            report_path: written.report,
            dry_run_report,
        }),
        status: ExitStatus::Success,
    })
}

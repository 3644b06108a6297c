//! `convert`: import a corpus file into MALLET's binary instance format

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::args::RunOptions;
use crate::pipeline::{run_invocation, ExitPolicy, ImportPaths, MalletInvocation};
use crate::report::RunSummary;
use crate::utils::{print_command, print_header, print_path, print_success, print_warning};

/// Run `mallet import-file` for `input`, writing `<base>.mallet`
///
/// # Arguments
/// * `input` - Corpus file to import
/// * `mallet` - MALLET executable to invoke
/// * `options` - Dry-run and strict exit-status handling
pub fn run_convert(input: &Path, mallet: &str, options: RunOptions) -> Result<RunSummary> {
    let paths = ImportPaths::from_input(input);
    let invocation = MalletInvocation::import_file(mallet, &paths);

    print_header("Importing corpus into MALLET format");
    print_path("Input", &paths.input);
    print_path("Output", &paths.output);
    print_command(&invocation.to_string());
    println!();

    if options.dry_run {
        info!(command = %invocation, "dry run; import not executed");
        return Ok(RunSummary::dry_run(invocation.to_string()));
    }

    let outcome = run_invocation(&invocation, ExitPolicy::from_strict(options.strict))
        .with_context(|| format!("Failed to import {}", input.display()))?;

    let summary = RunSummary::completed(invocation.to_string(), outcome)
        .with_output("Instances", &paths.output);
    summary.display();

    println!();
    if summary.succeeded() {
        print_success("Import complete");
    } else {
        print_warning("MALLET reported a failure; see its output above");
    }

    Ok(summary)
}

//! `train`: fit a topic model on an imported corpus

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::args::RunOptions;
use crate::pipeline::{
    ensure_output_dir, run_invocation, ExitPolicy, Hyperparameters, MalletInvocation, TrainPaths,
};
use crate::report::RunSummary;
use crate::utils::{
    print_command, print_header, print_info, print_path, print_success, print_warning,
};

/// Run `mallet train-topics` on `<base>.mallet`, writing into `<base>/`
///
/// The output directory is created (non-recursively) before MALLET starts,
/// except in dry-run mode where nothing on disk is touched.
pub fn run_train(
    input: &Path,
    mallet: &str,
    params: Hyperparameters,
    options: RunOptions,
) -> Result<RunSummary> {
    let paths = TrainPaths::from_input(input);
    let invocation = MalletInvocation::train_topics(mallet, &paths, &params);

    print_header("Training topic model");
    print_path("Input", &paths.input);
    print_path("Output", &paths.output_dir);
    println!(
        "   Topics: {}  Iterations: {}  Optimize: every {} after {}",
        params.num_topics, params.num_iterations, params.optimize_interval, params.optimize_burn_in
    );
    print_command(&invocation.to_string());
    println!();

    if options.dry_run {
        info!(command = %invocation, "dry run; training not executed");
        return Ok(RunSummary::dry_run(invocation.to_string()));
    }

    if ensure_output_dir(&paths.output_dir)? {
        print_info(&format!("Created {}", paths.output_dir.display()));
    }

    let outcome = run_invocation(&invocation, ExitPolicy::from_strict(options.strict))
        .with_context(|| format!("Failed to train on {}", paths.input.display()))?;

    let summary = paths
        .outputs()
        .into_iter()
        .fold(
            RunSummary::completed(invocation.to_string(), outcome),
            |summary, (label, path)| summary.with_output(label, path),
        );
    summary.display();

    println!();
    if summary.succeeded() {
        print_success("Training complete");
    } else {
        print_warning("MALLET reported a failure; see its output above");
    }

    Ok(summary)
}

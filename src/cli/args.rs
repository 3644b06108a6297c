//! Command-line argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::{Hyperparameters, DEFAULT_CORPUS_FILE, DEFAULT_MALLET};

/// Clusters - prepare corpora for MALLET and train topic models
#[derive(Parser, Debug)]
#[command(name = "clusters")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// MALLET executable to invoke
    #[arg(long, global = true, env = "MALLET_BIN", default_value = DEFAULT_MALLET)]
    pub mallet: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a corpus file into MALLET's binary format (<base>.mallet)
    Convert {
        /// Corpus file to import (e.g. data.csv produces data.mallet)
        input: PathBuf,

        #[command(flatten)]
        run: RunOptions,
    },

    /// Train a topic model on <base>.mallet, writing results into <base>/
    Train {
        /// Corpus file name the converter was run on (e.g. data.csv reads data.mallet)
        input: PathBuf,

        #[command(flatten)]
        params: HyperparameterArgs,

        #[command(flatten)]
        run: RunOptions,
    },

    /// Prefix every line of a file with "<n>\t\t", rewriting it in place
    NumberLines {
        /// File to rewrite
        #[arg(default_value = DEFAULT_CORPUS_FILE)]
        file: PathBuf,
    },
}

/// Options shared by every command that shells out to MALLET
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print the MALLET command line without running it
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Fail when MALLET exits with a non-zero status.
    /// By default the exit status is reported but not treated as an error.
    #[arg(long, default_value = "false")]
    pub strict: bool,
}

/// Hyperparameters for `train-topics`
#[derive(Args, Debug, Clone, Copy)]
pub struct HyperparameterArgs {
    /// Number of topics to fit
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
    pub num_topics: u32,

    /// Number of Gibbs sampling iterations
    #[arg(long, default_value = "2000", value_parser = clap::value_parser!(u32).range(1..))]
    pub num_iterations: u32,

    /// Iterations between hyperparameter optimization rounds
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub optimize_interval: u32,

    /// Iterations before hyperparameter optimization starts
    #[arg(long, default_value = "200", value_parser = clap::value_parser!(u32).range(1..))]
    pub optimize_burn_in: u32,
}

impl From<HyperparameterArgs> for Hyperparameters {
    fn from(args: HyperparameterArgs) -> Self {
        Self {
            num_topics: args.num_topics,
            num_iterations: args.num_iterations,
            optimize_interval: args.optimize_interval,
            optimize_burn_in: args.optimize_burn_in,
        }
    }
}

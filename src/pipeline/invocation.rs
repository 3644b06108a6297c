//! MALLET command-line composition
//!
//! Builds the argument vectors for `import-file` and `train-topics`. Nothing
//! here touches the filesystem or spawns a process, so the exact invocation
//! shape can be inspected (and printed for `--dry-run`) before anything runs.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use std::process::Command;

use super::naming::{ImportPaths, TrainPaths};

/// Executable used when neither `--mallet` nor `MALLET_BIN` is given
pub const DEFAULT_MALLET: &str = "mallet";

/// Training hyperparameters passed to `train-topics`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hyperparameters {
    pub num_topics: u32,
    pub num_iterations: u32,
    /// Iterations between hyperparameter optimization rounds
    pub optimize_interval: u32,
    /// Iterations before hyperparameter optimization starts
    pub optimize_burn_in: u32,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            num_topics: 5,
            num_iterations: 2000,
            optimize_interval: 10,
            optimize_burn_in: 200,
        }
    }
}

/// A fully composed MALLET command line
///
/// Arguments are kept as OS strings so non-UTF-8 paths reach MALLET byte for
/// byte; only the [`Display`](fmt::Display) rendering is lossy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalletInvocation {
    program: OsString,
    args: Vec<OsString>,
}

impl MalletInvocation {
    /// `import-file` invocation that serializes a corpus into `<base>.mallet`
    pub fn import_file(program: &str, paths: &ImportPaths) -> Self {
        let mut invocation = Self::new(program, "import-file");
        invocation
            .flag_value("--input", &paths.input)
            .flag_value("--output", &paths.output)
            .flag("--keep-sequence")
            .flag("--remove-stopwords");
        invocation
    }

    /// `train-topics` invocation writing state, topic keys, and doc topics
    /// into the derived output directory
    pub fn train_topics(program: &str, paths: &TrainPaths, params: &Hyperparameters) -> Self {
        let mut invocation = Self::new(program, "train-topics");
        invocation
            .flag_value("--input", &paths.input)
            .flag_value("--num-topics", params.num_topics)
            .flag_value("--num-iterations", params.num_iterations)
            .flag_value("--optimize-interval", params.optimize_interval)
            .flag_value("--optimize-burn-in", params.optimize_burn_in)
            .flag_value("--output-state", &paths.state)
            .flag_value("--output-topic-keys", &paths.topic_keys)
            .flag_value("--output-doc-topics", &paths.doc_topics);
        invocation
    }

    fn new(program: &str, subcommand: &str) -> Self {
        Self {
            program: OsString::from(program),
            args: vec![OsString::from(subcommand)],
        }
    }

    fn flag(&mut self, name: &str) -> &mut Self {
        self.args.push(OsString::from(name));
        self
    }

    fn flag_value(&mut self, name: &str, value: impl ArgValue) -> &mut Self {
        self.args.push(OsString::from(name));
        self.args.push(value.into_arg());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Arguments after the program name, starting with the MALLET subcommand
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Value following `flag`, if the flag is present
    pub fn value_of(&self, flag: &str) -> Option<&OsStr> {
        self.args
            .iter()
            .position(|arg| arg == flag)
            .and_then(|idx| self.args.get(idx + 1))
            .map(OsString::as_os_str)
    }

    /// Build a [`Command`] with inherited stdio, ready to spawn
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for MalletInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Anything that can appear as a flag value on the MALLET command line
trait ArgValue {
    fn into_arg(self) -> OsString;
}

impl ArgValue for u32 {
    fn into_arg(self) -> OsString {
        OsString::from(self.to_string())
    }
}

impl<P: AsRef<Path>> ArgValue for &P {
    fn into_arg(self) -> OsString {
        self.as_ref().as_os_str().to_os_string()
    }
}

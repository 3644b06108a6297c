//! Tests for MALLET command-line composition

use clusters::pipeline::{
    Hyperparameters, ImportPaths, MalletInvocation, TrainPaths, DEFAULT_MALLET,
};
use std::ffi::OsStr;
use std::path::Path;

fn import_for(input: &str) -> MalletInvocation {
    MalletInvocation::import_file(DEFAULT_MALLET, &ImportPaths::from_input(Path::new(input)))
}

fn import_for_path(input: &Path) -> MalletInvocation {
    MalletInvocation::import_file(DEFAULT_MALLET, &ImportPaths::from_input(input))
}

fn train_for(input: &str, params: &Hyperparameters) -> MalletInvocation {
    MalletInvocation::train_topics(DEFAULT_MALLET, &TrainPaths::from_input(Path::new(input)), params)
}

#[test]
fn test_import_invocation_renders_full_command() {
    let invocation = import_for("data.csv");

    assert_eq!(
        invocation.to_string(),
        "mallet import-file --input data.csv --output data.mallet --keep-sequence --remove-stopwords"
    );
}

#[test]
fn test_import_invocation_contains_output() {
    let rendered = import_for("data.csv").to_string();

    assert!(
        rendered.contains("--output data.mallet"),
        "Rendered command was: {}",
        rendered
    );
}

#[test]
fn test_train_invocation_renders_full_command() {
    let invocation = train_for("data.csv", &Hyperparameters::default());

    assert_eq!(
        invocation.to_string(),
        "mallet train-topics --input data.mallet \
         --num-topics 5 --num-iterations 2000 \
         --optimize-interval 10 --optimize-burn-in 200 \
         --output-state data/state.gz \
         --output-topic-keys data/keywords.tsv \
         --output-doc-topics data/composition.tsv"
    );
}

#[test]
fn test_train_invocation_contains_outputs() {
    let rendered = train_for("data.csv", &Hyperparameters::default()).to_string();

    for expected in [
        "--output-state data/state.gz",
        "--output-topic-keys data/keywords.tsv",
        "--output-doc-topics data/composition.tsv",
    ] {
        assert!(
            rendered.contains(expected),
            "Missing `{}` in: {}",
            expected,
            rendered
        );
    }
}

#[test]
fn test_train_invocation_uses_custom_hyperparameters() {
    let params = Hyperparameters {
        num_topics: 12,
        num_iterations: 300,
        optimize_interval: 20,
        optimize_burn_in: 40,
    };
    let invocation = train_for("data.csv", &params);

    assert_eq!(invocation.value_of("--num-topics"), Some(OsStr::new("12")));
    assert_eq!(invocation.value_of("--num-iterations"), Some(OsStr::new("300")));
    assert_eq!(invocation.value_of("--optimize-interval"), Some(OsStr::new("20")));
    assert_eq!(invocation.value_of("--optimize-burn-in"), Some(OsStr::new("40")));
}

#[test]
fn test_invocation_args_start_with_subcommand() {
    assert_eq!(import_for("data.csv").args()[0], "import-file");
    assert_eq!(
        train_for("data.csv", &Hyperparameters::default()).args()[0],
        "train-topics"
    );
}

#[test]
fn test_paths_with_spaces_stay_single_arguments() {
    let invocation = import_for("my corpus.csv");

    assert_eq!(invocation.value_of("--input"), Some(OsStr::new("my corpus.csv")));
    assert_eq!(invocation.value_of("--output"), Some(OsStr::new("my corpus.mallet")));
}

#[test]
fn test_custom_program_is_first_token() {
    let invocation = MalletInvocation::import_file(
        "/opt/mallet/bin/mallet",
        &ImportPaths::from_input(Path::new("data.csv")),
    );

    assert_eq!(invocation.program(), "/opt/mallet/bin/mallet");
    assert!(invocation.to_string().starts_with("/opt/mallet/bin/mallet import-file "));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_paths_reach_the_tool_unchanged() {
    use std::os::unix::ffi::OsStrExt;

    let input = OsStr::from_bytes(b"caf\xe9.csv");
    let invocation = import_for_path(Path::new(input));
    let command = invocation.to_command();
    let args: Vec<&OsStr> = command.get_args().collect();

    assert_eq!(args[2], input);
    assert_eq!(args[4], OsStr::from_bytes(b"caf\xe9.mallet"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_train_layout_keeps_bytes() {
    use std::os::unix::ffi::OsStrExt;

    let paths = TrainPaths::from_input(Path::new(OsStr::from_bytes(b"r\xe9sum\xe9.csv")));
    let invocation = MalletInvocation::train_topics(DEFAULT_MALLET, &paths, &Hyperparameters::default());

    assert_eq!(
        invocation.value_of("--input"),
        Some(OsStr::from_bytes(b"r\xe9sum\xe9.mallet"))
    );
    assert_eq!(
        invocation.value_of("--output-state"),
        Some(OsStr::from_bytes(b"r\xe9sum\xe9/state.gz"))
    );
    assert_eq!(paths.output_dir.as_os_str(), OsStr::from_bytes(b"r\xe9sum\xe9"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_rendering_is_lossy_only_for_display() {
    use std::os::unix::ffi::OsStrExt;

    let invocation = import_for_path(Path::new(OsStr::from_bytes(b"caf\xe9.csv")));

    assert!(invocation.to_string().contains("--input caf\u{FFFD}.csv"));
}

//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Executable that accepts any arguments and exits successfully
pub const SUCCEEDING_TOOL: &str = "true";

/// Executable that accepts any arguments and exits with status 1
pub const FAILING_TOOL: &str = "false";

/// Executable name that should not resolve on any test machine
pub const MISSING_TOOL: &str = "clusters-test-no-such-mallet-binary";

/// Write `contents` to `name` inside `temp_dir` and return its path
pub fn create_corpus(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Small three-document corpus in MALLET's `name<TAB>label<TAB>text` layout
pub fn sample_corpus() -> &'static str {
    "1\t\tthe cat sat on the mat\n2\t\tdogs chase cats\n3\t\ttopic models find themes"
}

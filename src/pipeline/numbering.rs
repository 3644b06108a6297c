//! Line numbering for MALLET's one-instance-per-line corpus layout
//!
//! MALLET's default `import-file` pattern reads `name<TAB>label<TAB>text`.
//! Prefixing every line with `"<n>\t\t"` turns a plain text dump into that
//! layout, with the line number as instance name and an empty label.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, instrument};

use super::error::{PipelineError, PipelineResult};

/// Corpus file rewritten when no path is given on the command line
pub const DEFAULT_CORPUS_FILE: &str = "HC_7_text.csv";

/// Prefix every line of `text` with its 1-based index and two tabs.
///
/// Lines are split on `\n` after normalizing `\r\n` and lone `\r`. A trailing
/// newline therefore yields one final, empty numbered line, and an empty
/// input yields `"1\t\t"`.
pub fn number_lines(text: &str) -> String {
    let normalized = normalize_newlines(text);
    normalized
        .split('\n')
        .enumerate()
        .map(|(idx, line)| format!("{}\t\t{}", idx + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

/// Number the lines of `path` in place and return how many lines were written.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn number_file(path: &Path) -> PipelineResult<usize> {
    let bytes = fs::read(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|err| PipelineError::Read {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, err),
    })?;

    let numbered = number_lines(&text);
    let line_count = numbered.split('\n').count();

    fs::write(path, numbered).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(line_count, "corpus rewritten");
    Ok(line_count)
}

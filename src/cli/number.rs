//! `number-lines`: rewrite a text file into MALLET's per-line instance layout

use std::path::Path;

use anyhow::Result;

use crate::pipeline::number_file;
use crate::utils::{create_spinner, finish_with_failure, finish_with_success, print_header, print_path};

/// Number the lines of `file` in place, returning the number of lines written
pub fn run_number_lines(file: &Path) -> Result<usize> {
    print_header("Numbering corpus lines");
    print_path("File", file);
    println!();

    let spinner = create_spinner("Rewriting file...");
    match number_file(file) {
        Ok(count) => {
            finish_with_success(&spinner, &format!("Numbered {} line(s)", count));
            Ok(count)
        }
        Err(err) => {
            finish_with_failure(&spinner, "Rewrite failed");
            Err(err.into())
        }
    }
}

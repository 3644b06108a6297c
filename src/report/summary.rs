//! Run summary for MALLET invocations

use std::path::{Path, PathBuf};
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::RunOutcome;

/// Summary of a single converter or trainer run
#[derive(Debug)]
pub struct RunSummary {
    pub command: String,
    pub outcome: Option<RunOutcome>,
    /// Expected output files, labelled for display
    pub outputs: Vec<(String, PathBuf)>,
}

impl RunSummary {
    /// Summary for an invocation that was rendered but never spawned
    pub fn dry_run(command: String) -> Self {
        Self {
            command,
            outcome: None,
            outputs: Vec::new(),
        }
    }

    pub fn completed(command: String, outcome: RunOutcome) -> Self {
        Self {
            command,
            outcome: Some(outcome),
            outputs: Vec::new(),
        }
    }

    pub fn with_output(mut self, label: &str, path: &Path) -> Self {
        self.outputs.push((label.to_string(), path.to_path_buf()));
        self
    }

    /// Whether the tool ran and reported success
    pub fn succeeded(&self) -> bool {
        self.outcome.map(|o| o.success()).unwrap_or(false)
    }

    /// Outputs that do not exist on disk after the run
    pub fn missing_outputs(&self) -> Vec<&Path> {
        self.outputs
            .iter()
            .filter(|(_, path)| !path.exists())
            .map(|(_, path)| path.as_path())
            .collect()
    }

    pub fn build_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Item").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        match &self.outcome {
            Some(outcome) => {
                let status_color = if outcome.success() {
                    Color::Green
                } else {
                    Color::Red
                };
                table.add_row(vec![
                    Cell::new("Exit status"),
                    Cell::new(outcome.status.to_string()).fg(status_color),
                ]);
                table.add_row(vec![
                    Cell::new("Elapsed"),
                    Cell::new(format_elapsed(outcome.elapsed)),
                ]);
            }
            None => {
                table.add_row(vec![
                    Cell::new("Exit status"),
                    Cell::new("not run (dry run)").fg(Color::Cyan),
                ]);
            }
        }

        for (label, path) in &self.outputs {
            let (marker, color) = if path.exists() {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Yellow)
            };
            table.add_row(vec![
                Cell::new(label),
                Cell::new(format!("{} {}", marker, path.display())).fg(color),
            ]);
        }

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.build_table().to_string().lines() {
            println!("    {}", line);
        }
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{:.2}s", secs)
    } else {
        let whole = elapsed.as_secs();
        format!("{}m {:02}s", whole / 60, whole % 60)
    }
}

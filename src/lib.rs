//! Clusters: MALLET corpus preparation library
//!
//! Derives MALLET file layouts from corpus file names, composes and runs
//! `import-file` / `train-topics` invocations, and rewrites plain text into
//! MALLET's one-instance-per-line format.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod utils;

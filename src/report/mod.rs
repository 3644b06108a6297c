//! Report module - summarizing external tool runs

pub mod summary;

pub use summary::*;

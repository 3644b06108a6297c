//! Pipeline module - path derivation, MALLET invocation, and corpus rewriting

pub mod error;
pub mod invocation;
pub mod naming;
pub mod numbering;
pub mod runner;
pub mod training;

pub use error::*;
pub use invocation::*;
pub use naming::*;
pub use numbering::*;
pub use runner::*;
pub use training::*;

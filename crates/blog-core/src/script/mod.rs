//! Operation scripts
//!
//! A script is a TOML or JSON list of operations. Running it against a
//! blog yields one outcome per step, ready for rendering.

mod model;
mod runner;

pub use model::{Operation, Script};
pub use runner::{apply, Outcome, ScriptRunner, StepReport};

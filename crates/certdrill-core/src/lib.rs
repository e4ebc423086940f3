//! certdrill-core: question banks, sampling and scoring.
//!
//! This crate holds the drill model and logic. All user interaction goes
//! through the [`console::Console`] trait, implemented by the CLI.

pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod sampler;
pub mod session;
pub mod topic;

pub use config::{load_config_from, DrillConfig};
pub use console::{Console, PlainStyler, ScriptedConsole, Styler, Tone};
pub use error::{SamplingError, SelectionError};
pub use model::{Answer, Question};
pub use report::{ReportWidths, Scorecard};
pub use session::{run_session, SessionOutcome};
pub use topic::Topic;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::RunConfig;

pub use adapters::diagnostics::{NullDiagnostics, TracingDiagnostics};
pub use adapters::storage::{LocalStorage, MemoryStorage};
pub use core::{
    engine::{highest_n_scores, TopScoresEngine},
    pipeline::ScorePipeline,
};
pub use domain::model::{Record, SelectionStrategy};
pub use utils::error::{ParseError, Result, ScoreError};

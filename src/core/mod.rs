pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod renderer;
pub mod selector;

pub use crate::domain::model::{Record, RecordSet, SelectionResult};
pub use crate::domain::ports::{ConfigProvider, Diagnostics, Pipeline, Storage};
pub use crate::utils::error::Result;

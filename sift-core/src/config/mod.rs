//! Configuration surface consumed by the engine and orchestrator.

mod batch_config;
mod classify_config;

pub use batch_config::BatchConfig;
pub use classify_config::ClassifyConfig;

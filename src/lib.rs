pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::console::StdoutSink;
pub use config::AppConfig;
pub use core::{etl::EtlEngine, pipeline::CatsPipeline};
pub use utils::error::{CatsError, Result};

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use crate::core::extractor::{extract_regions, extract_regions_from_file, RegionFilter};
pub use crate::core::{etl::EtlEngine, pipeline::SvgMapPipeline};
pub use domain::model::{Region, RunSummary};
pub use utils::error::{EtlError, Result};

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_INPUT_PATH: &str = "Map_of_Minnesota_counties_blank.svg";
pub const DEFAULT_OUTPUT_PATH: &str = "minnesota_counties.json";

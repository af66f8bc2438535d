pub mod etl;
pub mod extractor;
pub mod pipeline;

pub use crate::domain::model::{Region, RunSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::domain::model::{Region, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn exclude_prefixes(&self) -> &[String];
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Region>>;
    fn transform(&self, regions: Vec<Region>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}

use crate::core::extractor::{regions_from_bytes, RegionFilter};
use crate::core::{ConfigProvider, Pipeline, Region, Storage, TransformResult};
use crate::utils::error::Result;

/// SVG map → pretty JSON, reading and writing through `Storage`.
pub struct SvgMapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    filter: RegionFilter,
}

impl<S: Storage, C: ConfigProvider> SvgMapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let filter = RegionFilter::new(config.exclude_prefixes().iter().cloned());
        Self {
            storage,
            config,
            filter,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SvgMapPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Region>> {
        let input = self.config.input_path();
        tracing::debug!("Reading SVG from: {}", input);

        let bytes = self.storage.read_file(input)?;
        tracing::debug!("Read {} bytes", bytes.len());

        let regions = regions_from_bytes(input, bytes, &self.filter)?;
        tracing::debug!(
            "Kept {} path elements (excluded prefixes: {:?})",
            regions.len(),
            self.filter.exclude_prefixes()
        );
        Ok(regions)
    }

    fn transform(&self, regions: Vec<Region>) -> Result<TransformResult> {
        let json = serde_json::to_string_pretty(&regions)?;
        Ok(TransformResult { regions, json })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output = self.config.output_path();
        tracing::debug!("Writing {} bytes to {}", result.json.len(), output);

        self.storage.write_file(output, result.json.as_bytes())?;
        Ok(output.to_string())
    }
}

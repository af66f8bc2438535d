use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting SVG map extraction");

        let regions = self.pipeline.extract()?;
        tracing::info!("Extracted {} regions", regions.len());

        let transformed = self.pipeline.transform(regions)?;
        let region_count = transformed.regions.len();

        let output_path = self.pipeline.load(transformed)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunSummary {
            region_count,
            output_path,
        })
    }

    /// Extract only; nothing is written.
    pub fn dry_run(&self) -> Result<usize> {
        let regions = self.pipeline.extract()?;
        tracing::info!("Dry run: {} regions would be written", regions.len());
        Ok(regions.len())
    }
}

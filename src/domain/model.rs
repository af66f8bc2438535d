use serde::{Deserialize, Serialize};

/// One map region: the element id and its raw `d` path data.
///
/// `path` is copied verbatim and stays `None` (serialized as `null`) when the
/// source element has no `d` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub path: Option<String>,
}

impl Region {
    pub fn new(id: impl Into<String>, path: Option<&str>) -> Self {
        Self {
            id: id.into(),
            path: path.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub regions: Vec<Region>,
    pub json: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub region_count: usize,
    pub output_path: String,
}

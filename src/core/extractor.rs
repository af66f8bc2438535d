use crate::domain::model::Region;
use crate::utils::error::{EtlError, Result};
use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;
use std::sync::OnceLock;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Id prefixes the Minnesota county map uses for its border and fill.
pub const DEFAULT_EXCLUDE_PREFIXES: [&str; 2] = ["outline", "background"];

/// Separates data regions from cartographic decoration by id prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFilter {
    exclude_prefixes: Vec<String>,
}

impl RegionFilter {
    pub fn new<I, S>(exclude_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude_prefixes: exclude_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn exclude_prefixes(&self) -> &[String] {
        &self.exclude_prefixes
    }

    /// Missing and empty ids never qualify.
    pub fn accepts(&self, id: Option<&str>) -> bool {
        match id {
            Some(id) if !id.is_empty() => !self
                .exclude_prefixes
                .iter()
                .any(|prefix| id.starts_with(prefix.as_str())),
            _ => false,
        }
    }
}

impl Default for RegionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE_PREFIXES)
    }
}

fn is_svg_path(node: &Node<'_, '_>) -> bool {
    node.is_element()
        && node.tag_name().name() == "path"
        && node.tag_name().namespace() == Some(SVG_NAMESPACE)
}

/// Parses SVG text and returns the qualifying regions in document order.
pub fn extract_regions(
    svg: &str,
    filter: &RegionFilter,
) -> std::result::Result<Vec<Region>, roxmltree::Error> {
    let svg = svg.strip_prefix('\u{feff}').unwrap_or(svg);

    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = Document::parse_with_options(svg, options)?;

    let regions = doc
        .descendants()
        .filter(is_svg_path)
        .filter_map(|node| {
            let id = node.attribute("id");
            if !filter.accepts(id) {
                tracing::trace!("Skipping path element with id {:?}", id);
                return None;
            }
            id.map(|id| Region::new(id, node.attribute("d")))
        })
        .collect();

    Ok(regions)
}

/// Reads and parses the SVG at `path`.
pub fn extract_regions_from_file(
    path: impl AsRef<Path>,
    filter: &RegionFilter,
) -> Result<Vec<Region>> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|source| EtlError::InputRead {
        path: display.clone(),
        source,
    })?;
    regions_from_bytes(&display, bytes, filter)
}

fn declared_encoding_pattern() -> &'static regex::bytes::Regex {
    static PATTERN: OnceLock<regex::bytes::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        regex::bytes::Regex::new(r#"\A\s*<\?xml\s[^>]*?encoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
            .expect("static regex")
    })
}

/// Picks the encoding from the BOM, then the XML declaration, else UTF-8.
/// Unknown declaration labels fall back to UTF-8.
fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, bom_len);
    }

    let declared = declared_encoding_pattern()
        .captures(bytes)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_bytes()));

    (declared.unwrap_or(UTF_8), 0)
}

pub(crate) fn decode_svg(path: &str, bytes: &[u8]) -> Result<String> {
    let (encoding, bom_len) = detect_encoding(bytes);
    tracing::debug!("Decoding {} as {}", path, encoding.name());

    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        return Err(EtlError::InputEncoding {
            path: path.to_string(),
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

pub(crate) fn regions_from_bytes(
    path: &str,
    bytes: Vec<u8>,
    filter: &RegionFilter,
) -> Result<Vec<Region>> {
    let text = decode_svg(path, &bytes)?;

    extract_regions(&text, filter).map_err(|source| EtlError::XmlParse {
        path: path.to_string(),
        source,
    })
}

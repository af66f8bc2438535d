use crate::utils::error::{EtlError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Resolves through the filesystem where possible so `./a`, `a` and `dir/../a`
/// compare equal; a file that does not exist yet resolves via its parent.
fn comparable_path(path: &str) -> PathBuf {
    let path = Path::new(path);
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }

    if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        if let Ok(resolved) = fs::canonicalize(parent) {
            return resolved.join(name);
        }
    }

    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

pub fn validate_distinct_paths(field_name: &str, input: &str, output: &str) -> Result<()> {
    if comparable_path(input) == comparable_path(output) {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input SVG".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| EtlError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// An empty prefix would match every id and silently drop the whole map.
pub fn validate_prefixes(field_name: &str, prefixes: &[String]) -> Result<()> {
    for prefix in prefixes {
        if prefix.is_empty() {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: prefix.clone(),
                reason: "Prefix cannot be empty".to_string(),
            });
        }
    }
    Ok(())
}

//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::DataFile;

/// How a content file failed: absent entirely, or present but unusable.
/// Callers fall back to defaults for the former and treat the latter
/// as a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentErrorKind {
    Missing,
    Invalid,
}

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub kind: ContentErrorKind,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file containing a DataFile<T> wrapper, checking the
/// schema version against what this build expects.
pub fn load_data_file<T>(path: &Path, expected_version: u32) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| {
        let kind = if e.kind() == std::io::ErrorKind::NotFound {
            ContentErrorKind::Missing
        } else {
            ContentErrorKind::Invalid
        };
        ContentLoadError {
            file: file_name.clone(),
            kind,
            message: format!("IO error: {}", e),
        }
    })?;

    let wrapper: DataFile<T> = ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name.clone(),
            kind: ContentErrorKind::Invalid,
            message: format!("Parse error: {}", e),
        })?;

    if wrapper.schema_version != expected_version {
        return Err(ContentLoadError {
            file: file_name,
            kind: ContentErrorKind::Invalid,
            message: format!(
                "Schema version mismatch: expected {}, found {}",
                expected_version, wrapper.schema_version
            ),
        });
    }

    Ok(wrapper.data)
}

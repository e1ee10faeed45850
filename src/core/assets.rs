use crate::error::{FetchError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Base URL for direct downloads from the file host. The opaque file id is
/// appended as the `id` query parameter.
const DOWNLOAD_URL_BASE: &str = "https://drive.google.com/uc?id=";

pub const RECORDINGS_DEST: &str = "benchmark/app/src/main/assets/recordings";
pub const TESSDATA_DEST: &str = "benchmark/app/src/main/assets/tessdata";

const PART_1_ID: &str = "1gezseWIM5kDVfbsE6ySJp2CY1Qnb7tzO";
const PART_2_ID: &str = "19o8ccmWU6gSAjAttRJVgOrcT3rqqFX3D";
const PART_3_ID: &str = "1WURjbqzgGbfVf35hOTvduFcs6YWTmwtK";

/// One downloadable archive part: an opaque remote file id and the directory
/// its contents are extracted into.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub id: String,
    pub dest: PathBuf,
}

impl Asset {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(id: S, dest: P) -> Self {
        Asset {
            id: id.into(),
            dest: dest.into(),
        }
    }

    pub fn url(&self) -> String {
        format!("{DOWNLOAD_URL_BASE}{}", self.id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(rename = "asset")]
    pub assets: Vec<Asset>,
}

impl Manifest {
    /// The compiled-in asset table: two recordings archives and one
    /// tessdata archive.
    pub fn builtin() -> Self {
        Manifest {
            assets: vec![
                Asset::new(PART_1_ID, RECORDINGS_DEST),
                Asset::new(PART_2_ID, RECORDINGS_DEST),
                Asset::new(PART_3_ID, TESSDATA_DEST),
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load the manifest at `path`, or fall back to the built-in table when
    /// no path was given.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.assets.is_empty() {
            return Err(FetchError::manifest_error("manifest defines no assets"));
        }

        for (index, asset) in self.assets.iter().enumerate() {
            if asset.id.is_empty() {
                return Err(FetchError::manifest_error(format!(
                    "asset {} has an empty id",
                    index + 1
                )));
            }
            if asset.dest.as_os_str().is_empty() {
                return Err(FetchError::manifest_error(format!(
                    "asset {} has an empty destination",
                    index + 1
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_manifest_has_three_parts() {
        let manifest = Manifest::builtin();
        assert_eq!(manifest.assets.len(), 3);

        // Parts 1 and 2 share the recordings destination
        assert_eq!(manifest.assets[0].dest, manifest.assets[1].dest);
        assert_eq!(manifest.assets[0].dest, PathBuf::from(RECORDINGS_DEST));
        assert_eq!(manifest.assets[2].dest, PathBuf::from(TESSDATA_DEST));
    }

    #[test]
    fn test_url_construction() {
        let asset = Asset::new("abc123", "some/dir");
        assert_eq!(asset.url(), "https://drive.google.com/uc?id=abc123");
    }

    #[test]
    fn test_parse_manifest() {
        let content = r#"
[[asset]]
id = "file-one"
dest = "out/one"

[[asset]]
id = "file-two"
dest = "out/two"
"#;

        let manifest = Manifest::parse(content).unwrap();
        assert_eq!(manifest.assets.len(), 2);
        assert_eq!(manifest.assets[0].id, "file-one");
        assert_eq!(manifest.assets[1].dest, PathBuf::from("out/two"));
    }

    #[test]
    fn test_parse_rejects_empty_manifest() {
        let result = Manifest::parse("asset = []\n");
        assert!(matches!(result, Err(FetchError::Manifest { .. })));
    }

    #[test]
    fn test_parse_rejects_empty_id() {
        let content = r#"
[[asset]]
id = ""
dest = "out"
"#;
        let result = Manifest::parse(content);
        assert!(matches!(result, Err(FetchError::Manifest { .. })));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Manifest::load(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(FetchError::Io(_))));
    }
}

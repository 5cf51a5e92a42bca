use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use zoo_model::Animal;

use crate::StorageResult;

/// On-disk layout of the durable file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalDocument {
    pub animals: Vec<Animal>,
}

impl AnimalDocument {
    /// Read the document at `path`. A missing file reads as empty.
    pub fn load(path: &Path) -> StorageResult<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&json)?)
    }

    /// Overwrite `path` with `animals`, pretty-printed with two-space indent.
    ///
    /// Writes a sibling temp file first and renames it over the target, so a
    /// crash mid-write leaves the previous document intact.
    pub fn write(path: &Path, animals: &[Animal]) -> StorageResult<()> {
        #[derive(Serialize)]
        struct Borrowed<'a> {
            animals: &'a [Animal],
        }

        let json = serde_json::to_string_pretty(&Borrowed { animals })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

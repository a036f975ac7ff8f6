//! Persistent generation settings: parameters plus seed as a versioned JSON document.

use directories::ProjectDirs;
use procgen::GenerationParameters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub const FORMAT_VERSION: u32 = 1;
pub const DEFAULT_SEED: i32 = 1337;

/// Saved `mapgen` run configuration: the generation parameters and the seed they
/// were paired with, so a map can be regenerated exactly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParamsFile {
    pub format_version: u32,
    pub seed: i32,
    #[serde(default)]
    pub params: GenerationParameters,
}

impl Default for ParamsFile {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            seed: DEFAULT_SEED,
            params: GenerationParameters::default(),
        }
    }
}

impl ParamsFile {
    /// `params.json` in the per-user data directory, read when `--params` is absent.
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("params.json");
            path
        })
    }

    /// Writes the parameters and seed to a `.json.tmp` sibling, then renames it over `path`.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let state: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if state.format_version != FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported params format_version {}", state.format_version),
            ));
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> ParamsFile {
        ParamsFile {
            format_version: FORMAT_VERSION,
            seed: -42,
            params: GenerationParameters {
                width: 20,
                height: 15,
                room_attempts: 10,
                min_room_size: 3,
                max_room_size: 5,
                extra_corridors: 0,
            },
        }
    }

    #[test]
    fn params_file_atomic_write_and_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("params.json");
        let state = sample();

        state.write_atomic(&path).expect("write");
        let loaded = ParamsFile::load(&path).expect("load");
        assert_eq!(state, loaded);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn missing_params_block_uses_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{ "format_version": 1, "seed": 9 }"#).expect("write");

        let loaded = ParamsFile::load(&path).expect("load");
        assert_eq!(loaded.seed, 9);
        assert_eq!(loaded.params, GenerationParameters::default());
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("params.json");
        fs::write(&path, "{ not json").expect("write");

        let err = ParamsFile::load(&path).expect_err("malformed file should fail");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn unknown_format_version_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{ "format_version": 7, "seed": 1 }"#).expect("write");

        let err = ParamsFile::load(&path).expect_err("future format should fail");
        assert!(err.to_string().contains("format_version"));
    }

    #[test]
    fn missing_file_reports_not_found() {
        let dir = tempdir().expect("tempdir");
        let err = ParamsFile::load(&dir.path().join("absent.json")).expect_err("absent");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

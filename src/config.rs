use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use log::LevelFilter;

pub const CATALOG_FILE_NAME: &str = "vendors.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` means the built-in vendor table.
    pub catalog_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: LevelFilter::Warn,
        }
    }
}

impl AppConfig {
    /// Explicit path first, then the per-user data directory if the file exists there.
    pub fn resolve(explicit_catalog: Option<PathBuf>, log_level: LevelFilter) -> Self {
        let catalog_path = explicit_catalog.or_else(|| {
            default_catalog_path()
                .ok()
                .filter(|path| path.is_file())
        });
        Self {
            catalog_path,
            log_level,
        }
    }

    pub fn with_catalog_dir(dir: &Path, log_level: LevelFilter) -> Self {
        let candidate = dir.join(CATALOG_FILE_NAME);
        Self {
            catalog_path: candidate.is_file().then_some(candidate),
            log_level,
        }
    }
}

pub fn default_catalog_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "bikeadmin", "vendor-catalog")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join(CATALOG_FILE_NAME))
}

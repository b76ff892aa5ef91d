use std::path::PathBuf;

/// Resolved per-user directories of the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_config_root: PathBuf,
    pub app_data_root: PathBuf,
}

impl AppDirs {
    pub fn config_file(&self) -> PathBuf {
        self.app_config_root.join("config.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }
}

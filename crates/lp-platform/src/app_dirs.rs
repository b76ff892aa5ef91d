use std::path::PathBuf;

use lp_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "lspatch-manager";

fn resolved_app_dir_name() -> String {
    match std::env::var("LP_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_dir_override: Option<PathBuf>,
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DirsAppDirsAdapter {
    /// Creates a new DirsAppDirsAdapter with no base directory override.
    ///
    /// # Examples
    ///
    /// ```
    /// use lp_platform::app_dirs::DirsAppDirsAdapter;
    /// let _ = DirsAppDirsAdapter::new();
    /// ```
    pub fn new() -> Self {
        Self {
            base_dir_override: None,
        }
    }

    /// Creates an adapter that resolves both config and data roots under `base`.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_dir_override: Some(base),
        }
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::config_dir()
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_config_root: base_config.join(&app_dir_name),
            app_data_root: base_data.join(&app_dir_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static LP_PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_lp_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = LP_PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var("LP_PROFILE").ok();

        match value {
            Some(profile) => std::env::set_var("LP_PROFILE", profile),
            None => std::env::remove_var("LP_PROFILE"),
        }

        let result = f();

        match previous {
            Some(profile) => std::env::set_var("LP_PROFILE", profile),
            None => std::env::remove_var("LP_PROFILE"),
        }

        result
    }

    #[test]
    fn adapter_appends_app_dir_name() {
        with_lp_profile(None, || {
            let adapter = DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();
            assert_eq!(dirs.app_config_root, PathBuf::from("/tmp/lspatch-manager"));
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/lspatch-manager"));
        });
    }

    #[test]
    fn adapter_isolates_dirs_for_different_profiles() {
        let dirs_a = with_lp_profile(Some("a"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });
        let dirs_b = with_lp_profile(Some("b"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs_a.app_data_root, PathBuf::from("/tmp/lspatch-manager-a"));
        assert_eq!(dirs_b.app_data_root, PathBuf::from("/tmp/lspatch-manager-b"));
        assert_ne!(dirs_a.config_file(), dirs_b.config_file());
    }
}

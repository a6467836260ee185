// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory
pub fn get_app_config_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("com", "passforge", "passforge") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            log::warn!("Could not determine config directory, using working directory");
            None
        }
    }
}

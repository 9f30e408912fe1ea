use std::path::PathBuf;

/// Core configuration for opening the shortcut store.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("shortcuts.redb")
    }

    pub fn settings_path(&self) -> PathBuf {
        super::AppConfig::path(&self.base_path)
    }
}

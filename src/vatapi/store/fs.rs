use super::ConfigStore;
use crate::config::{ConfigKey, VatApiConfig};
use crate::error::{Result, VatApiError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File-backed profile. The file is read once on open and rewritten on every change.
pub struct FileConfigStore {
    dir: PathBuf,
    config: VatApiConfig,
}

impl FileConfigStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let config = VatApiConfig::load(&dir)?;
        Ok(Self { dir, config })
    }

    /// Opens the profile for overwriting. A file that does not parse is
    /// treated as empty so `set` and `clear` can replace it.
    pub fn open_for_write<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let config = match VatApiConfig::load(&dir) {
            Ok(config) => config,
            Err(VatApiError::Serialization(err)) => {
                warn!(dir = %dir.display(), error = %err, "replacing unreadable configuration");
                VatApiConfig::default()
            }
            Err(err) => return Err(err),
        };
        Ok(Self { dir, config })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: ConfigKey) -> String {
        self.config.get(key).to_string()
    }

    fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let mut updated = self.config.clone();
        updated.set(key, value);
        updated.save(&self.dir)?;
        self.config = updated;
        info!(key = %key, dir = %self.dir.display(), "configuration updated");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let cleared = VatApiConfig::default();
        cleared.save(&self.dir)?;
        self.config = cleared;
        info!(dir = %self.dir.display(), "configuration cleared");
        Ok(())
    }

    fn all(&self) -> VatApiConfig {
        self.config.clone()
    }
}

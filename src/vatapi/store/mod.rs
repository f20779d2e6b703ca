//! # Configuration Store
//!
//! The [`ConfigStore`] trait abstracts where the `vatapi-cli` profile lives, so
//! commands can be exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileConfigStore`]: Production store, a `config.json` file in the
//!   platform configuration directory.
//! - [`memory::InMemoryConfigStore`]: In-memory store for testing.
//!
//! The profile holds a single key, `apiKey`, defaulting to the empty string.
//! An empty key means the CLI is not configured.

use crate::config::{ConfigKey, VatApiConfig};
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait ConfigStore {
    /// Current value for `key`, or the default (empty string) if unset.
    fn get(&self, key: ConfigKey) -> String;

    /// Persist `value` under `key`.
    fn set(&mut self, key: ConfigKey, value: &str) -> Result<()>;

    /// Reset every key to its default.
    fn clear(&mut self) -> Result<()>;

    /// Snapshot of the whole profile.
    fn all(&self) -> VatApiConfig;

    fn is_configured(&self) -> bool {
        !self.get(ConfigKey::ApiKey).is_empty()
    }
}

use super::ConfigStore;
use crate::config::{ConfigKey, VatApiConfig};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    config: VatApiConfig,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(api_key: &str) -> Self {
        Self {
            config: VatApiConfig {
                api_key: api_key.to_string(),
            },
        }
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn get(&self, key: ConfigKey) -> String {
        self.config.get(key).to_string()
    }

    fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        self.config.set(key, value);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.config = VatApiConfig::default();
        Ok(())
    }

    fn all(&self) -> VatApiConfig {
        self.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_not_configured() {
        let store = InMemoryConfigStore::with_api_key("");
        assert!(!store.is_configured());
    }

    #[test]
    fn any_non_empty_key_is_configured() {
        for key in ["k", " ", "a-long-secret-value"] {
            let store = InMemoryConfigStore::with_api_key(key);
            assert!(store.is_configured(), "key {:?}", key);
        }
    }

    #[test]
    fn clear_always_unconfigures() {
        for key in ["", "k", "secret"] {
            let mut store = InMemoryConfigStore::with_api_key(key);
            store.clear().unwrap();
            assert!(!store.is_configured());
            assert_eq!(store.get(ConfigKey::ApiKey), "");
        }
    }

    #[test]
    fn set_then_get() {
        let mut store = InMemoryConfigStore::new();
        store.set(ConfigKey::ApiKey, "abc").unwrap();
        assert_eq!(store.get(ConfigKey::ApiKey), "abc");
        assert_eq!(store.all().api_key, "abc");
    }
}

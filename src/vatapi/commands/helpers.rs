use crate::error::{Result, VatApiError};
use crate::store::ConfigStore;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Refuses to go further unless an API key is stored.
pub fn require_configured<S: ConfigStore>(store: &S) -> Result<()> {
    if store.is_configured() {
        Ok(())
    } else {
        Err(VatApiError::NotConfigured)
    }
}

/// Reads a typed view out of a raw response for display. Anything that is not
/// an object (including `null`) projects to the type's defaults; the raw value
/// is left untouched for structured output.
pub fn project<T: DeserializeOwned + Default>(raw: &Value) -> T {
    if !raw.is_object() {
        return T::default();
    }
    T::deserialize(raw).unwrap_or_else(|err| {
        debug!(error = %err, "response does not match the expected shape");
        T::default()
    })
}

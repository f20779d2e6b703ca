use crate::commands::{CmdMessage, CmdResult, Payload};
use crate::config::ConfigKey;
use crate::error::{Result, VatApiError};
use crate::store::ConfigStore;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    Show,
    Set(ConfigKey, Option<String>),
    Clear,
}

pub fn run<S: ConfigStore>(store: &mut S, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::Show => Ok(CmdResult::default().with_payload(Payload::Config(store.all()))),
        ConfigAction::Set(key, value) => {
            let value = value.filter(|v| !v.is_empty()).ok_or_else(|| {
                VatApiError::Usage("No options provided. Use --api-key".to_string())
            })?;
            store.set(key, &value)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(match key {
                ConfigKey::ApiKey => "API key set",
            }));
            Ok(result)
        }
        ConfigAction::Clear => {
            store.clear()?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success("Configuration cleared"));
            Ok(result)
        }
    }
}

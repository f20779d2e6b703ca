//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every vatapi operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the configuration store and the service client
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, never exits and never decides how a result looks on
//! screen.
//!
//! ## Generic Over Store and Service
//!
//! `VatApi<S: ConfigStore, V: VatService>`:
//! - Production: `VatApi<FileConfigStore, HttpVatService>`
//! - Testing: `VatApi<InMemoryConfigStore, RecordingService>`

use crate::commands;
use crate::commands::config::ConfigAction;
use crate::config::ConfigKey;
use crate::error::Result;
use crate::service::{CalculationRequest, VatService};
use crate::store::ConfigStore;

pub use crate::commands::{CmdMessage, CmdResult, Payload};

pub struct VatApi<S: ConfigStore, V: VatService> {
    store: S,
    service: V,
}

impl<S: ConfigStore, V: VatService> VatApi<S, V> {
    pub fn new(store: S, service: V) -> Self {
        Self { store, service }
    }

    pub fn service(&self) -> &V {
        &self.service
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_configured()
    }

    pub fn set_api_key(&mut self, api_key: Option<String>) -> Result<CmdResult> {
        commands::config::run(&mut self.store, ConfigAction::Set(ConfigKey::ApiKey, api_key))
    }

    pub fn show_config(&mut self) -> Result<CmdResult> {
        commands::config::run(&mut self.store, ConfigAction::Show)
    }

    pub fn clear_config(&mut self) -> Result<CmdResult> {
        commands::config::run(&mut self.store, ConfigAction::Clear)
    }

    pub fn validate_vat_number(&self, vat_number: &str) -> Result<CmdResult> {
        commands::vat::validate(&self.store, &self.service, vat_number)
    }

    pub fn country_rates(&self, country_code: &str) -> Result<CmdResult> {
        commands::rates::country(&self.store, &self.service, country_code)
    }

    pub fn all_country_rates(&self) -> Result<CmdResult> {
        commands::rates::all(&self.store, &self.service)
    }

    pub fn rates_by_ip(&self, ip_address: Option<&str>) -> Result<CmdResult> {
        commands::ip::lookup(&self.store, &self.service, ip_address)
    }

    pub fn calculate_vat(&self, request: &CalculationRequest) -> Result<CmdResult> {
        commands::calculate::vat(&self.store, &self.service, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VatApiError;
    use crate::store::memory::InMemoryConfigStore;
    use crate::test_utils::RecordingService;
    use serde_json::json;

    fn api(key: &str) -> VatApi<InMemoryConfigStore, RecordingService> {
        VatApi::new(
            InMemoryConfigStore::with_api_key(key),
            RecordingService::responding(json!({})),
        )
    }

    #[test]
    fn dispatches_each_operation() {
        let api = api("k");
        api.validate_vat_number("GB1").unwrap();
        api.country_rates("DE").unwrap();
        api.all_country_rates().unwrap();
        api.rates_by_ip(Some("1.2.3.4")).unwrap();
        api.calculate_vat(&CalculationRequest {
            country_code: None,
            price: Some("10".into()),
            vat_rate: Some("21".into()),
        })
        .unwrap();

        assert_eq!(
            api.service().calls(),
            vec![
                "validate_vat_number(GB1)",
                "country_rates(DE)",
                "all_country_rates()",
                "rates_by_ip(1.2.3.4)",
                "calculate_vat(price=10&rate=21)",
            ]
        );
    }

    #[test]
    fn every_remote_operation_requires_configuration() {
        let api = api("");
        let request = CalculationRequest {
            price: Some("10".into()),
            ..Default::default()
        };
        let outcomes = [
            api.validate_vat_number("GB1"),
            api.country_rates("DE"),
            api.all_country_rates(),
            api.rates_by_ip(None),
            api.calculate_vat(&request),
        ];

        for outcome in outcomes {
            assert!(matches!(outcome, Err(VatApiError::NotConfigured)));
        }
        assert!(api.service().calls().is_empty());
    }

    #[test]
    fn config_commands_work_without_a_key() {
        let mut api = api("");
        api.show_config().unwrap();
        api.set_api_key(Some("new-key".into())).unwrap();
        assert!(api.is_configured());
        api.clear_config().unwrap();
        assert!(!api.is_configured());
        assert!(api.service().calls().is_empty());
    }
}

use super::helpers::{project, require_configured};
use crate::commands::{CmdResult, Payload};
use crate::error::Result;
use crate::service::VatService;
use crate::store::ConfigStore;

pub fn lookup<S: ConfigStore, V: VatService>(
    store: &S,
    service: &V,
    ip_address: Option<&str>,
) -> Result<CmdResult> {
    require_configured(store)?;
    let raw = service.rates_by_ip(ip_address)?;
    let result = project(&raw);

    Ok(CmdResult::default()
        .with_payload(Payload::IpLookup {
            ip_address: ip_address.map(str::to_string),
            result,
        })
        .with_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VatApiError;
    use crate::store::memory::InMemoryConfigStore;
    use crate::test_utils::RecordingService;
    use serde_json::json;

    #[test]
    fn lookup_without_address() {
        let store = InMemoryConfigStore::with_api_key("k");
        let service = RecordingService::responding(json!({"country_code": "NL"}));

        let result = lookup(&store, &service, None).unwrap();
        assert_eq!(service.calls(), vec!["rates_by_ip(-)"]);
        match result.payload {
            Some(Payload::IpLookup { ip_address, result }) => {
                assert_eq!(ip_address, None);
                assert_eq!(result.ip_or(ip_address.as_deref()), "auto-detected");
                assert_eq!(result.country_code_display(), "NL");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn lookup_with_address() {
        let store = InMemoryConfigStore::with_api_key("k");
        let service = RecordingService::responding(json!({}));

        lookup(&store, &service, Some("81.2.69.160")).unwrap();
        assert_eq!(service.calls(), vec!["rates_by_ip(81.2.69.160)"]);
    }

    #[test]
    fn unconfigured_makes_no_call() {
        let store = InMemoryConfigStore::new();
        let service = RecordingService::responding(json!({}));

        assert!(matches!(
            lookup(&store, &service, None),
            Err(VatApiError::NotConfigured)
        ));
        assert!(service.calls().is_empty());
    }
}

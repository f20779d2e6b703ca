use super::helpers::{project, require_configured};
use crate::commands::{CmdResult, Payload};
use crate::error::Result;
use crate::model::rate_rows;
use crate::service::VatService;
use crate::store::ConfigStore;

pub fn country<S: ConfigStore, V: VatService>(
    store: &S,
    service: &V,
    country_code: &str,
) -> Result<CmdResult> {
    require_configured(store)?;
    let raw = service.country_rates(country_code)?;
    let result = project(&raw);

    Ok(CmdResult::default()
        .with_payload(Payload::CountryRates {
            country_code: country_code.to_string(),
            result,
        })
        .with_raw(raw))
}

pub fn all<S: ConfigStore, V: VatService>(store: &S, service: &V) -> Result<CmdResult> {
    require_configured(store)?;
    let raw = service.all_country_rates()?;
    let rows = rate_rows(&raw);

    Ok(CmdResult::default()
        .with_payload(Payload::AllRates(rows))
        .with_raw(raw))
}

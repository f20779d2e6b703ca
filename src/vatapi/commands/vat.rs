use super::helpers::{project, require_configured};
use crate::commands::{CmdResult, Payload};
use crate::error::Result;
use crate::service::VatService;
use crate::store::ConfigStore;

pub fn validate<S: ConfigStore, V: VatService>(
    store: &S,
    service: &V,
    vat_number: &str,
) -> Result<CmdResult> {
    require_configured(store)?;
    let raw = service.validate_vat_number(vat_number)?;
    let result = project(&raw);

    Ok(CmdResult::default()
        .with_payload(Payload::Validation {
            vat_number: vat_number.to_string(),
            result,
        })
        .with_raw(raw))
}

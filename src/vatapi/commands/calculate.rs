use super::helpers::{project, require_configured};
use crate::commands::{CmdResult, Payload};
use crate::error::{Result, VatApiError};
use crate::service::{CalculationRequest, VatService};
use crate::store::ConfigStore;

pub fn vat<S: ConfigStore, V: VatService>(
    store: &S,
    service: &V,
    request: &CalculationRequest,
) -> Result<CmdResult> {
    require_configured(store)?;
    if !request.has_price() {
        return Err(VatApiError::Usage("--price is required".to_string()));
    }

    let raw = service.calculate_vat(request)?;
    let result = project(&raw);

    Ok(CmdResult::default()
        .with_payload(Payload::Calculation {
            price: request.price.clone().unwrap_or_default(),
            result,
        })
        .with_raw(raw))
}

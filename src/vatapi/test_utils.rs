//! Test doubles shared by unit tests and downstream integration tests.

use crate::error::{Result, VatApiError};
use crate::service::{CalculationRequest, VatService};
use serde_json::Value;
use std::cell::RefCell;

/// A [`VatService`] that answers every call with the same canned outcome and
/// records which operation was invoked with which arguments.
pub struct RecordingService {
    response: Value,
    failure: Option<fn() -> VatApiError>,
    calls: RefCell<Vec<String>>,
}

impl RecordingService {
    pub fn responding(response: Value) -> Self {
        Self {
            response,
            failure: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(failure: fn() -> VatApiError) -> Self {
        Self {
            response: Value::Null,
            failure: Some(failure),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn answer(&self, call: String) -> Result<Value> {
        self.calls.borrow_mut().push(call);
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(self.response.clone()),
        }
    }
}

impl VatService for RecordingService {
    fn validate_vat_number(&self, vat_number: &str) -> Result<Value> {
        self.answer(format!("validate_vat_number({})", vat_number))
    }

    fn country_rates(&self, country_code: &str) -> Result<Value> {
        self.answer(format!("country_rates({})", country_code))
    }

    fn all_country_rates(&self) -> Result<Value> {
        self.answer("all_country_rates()".to_string())
    }

    fn rates_by_ip(&self, ip_address: Option<&str>) -> Result<Value> {
        self.answer(format!("rates_by_ip({})", ip_address.unwrap_or("-")))
    }

    fn calculate_vat(&self, request: &CalculationRequest) -> Result<Value> {
        let params = request
            .query()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("&");
        self.answer(format!("calculate_vat({})", params))
    }
}

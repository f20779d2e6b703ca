//! # Service Layer
//!
//! [`VatService`] is the seam between command logic and the remote VAT API.
//! Every operation is a single GET returning the parsed JSON body; failures
//! are already normalized into [`VatApiError`](crate::error::VatApiError)
//! variants when they reach the caller.
//!
//! - [`http::HttpVatService`]: the production client.
//! - `test_utils::RecordingService`: a canned-response fake that records calls.

use crate::error::Result;
use serde_json::Value;

pub mod http;

pub const VAT_NUMBER_CHECK_PATH: &str = "/vat-number-check";
pub const COUNTRY_CODE_CHECK_PATH: &str = "/country-code-check";
pub const COUNTRY_RATES_PATH: &str = "/country-rates";
pub const IP_CHECK_PATH: &str = "/ip-check";
pub const VAT_CALCULATOR_PATH: &str = "/vat-calculator";

pub trait VatService {
    fn validate_vat_number(&self, vat_number: &str) -> Result<Value>;

    fn country_rates(&self, country_code: &str) -> Result<Value>;

    fn all_country_rates(&self) -> Result<Value>;

    /// `None` lets the server use the caller's address.
    fn rates_by_ip(&self, ip_address: Option<&str>) -> Result<Value>;

    fn calculate_vat(&self, request: &CalculationRequest) -> Result<Value>;
}

/// Inputs forwarded to the VAT calculator. The server does the arithmetic;
/// values are passed through as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationRequest {
    pub country_code: Option<String>,
    pub price: Option<String>,
    pub vat_rate: Option<String>,
}

impl CalculationRequest {
    /// Query pairs for the supplied, non-empty values only.
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        [
            ("code", &self.country_code),
            ("price", &self.price),
            ("rate", &self.vat_rate),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (name, v))
        })
        .collect()
    }

    pub fn has_price(&self) -> bool {
        self.price.as_deref().is_some_and(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_missing_and_empty_values() {
        let request = CalculationRequest {
            country_code: Some("GB".into()),
            price: Some("100".into()),
            vat_rate: Some(String::new()),
        };
        assert_eq!(request.query(), vec![("code", "GB"), ("price", "100")]);

        assert!(CalculationRequest::default().query().is_empty());
    }

    #[test]
    fn query_keeps_values_verbatim() {
        let request = CalculationRequest {
            country_code: None,
            price: Some("12,50".into()),
            vat_rate: Some("abc".into()),
        };
        assert_eq!(request.query(), vec![("price", "12,50"), ("rate", "abc")]);
    }

    #[test]
    fn has_price_requires_non_empty_value() {
        let mut request = CalculationRequest::default();
        assert!(!request.has_price());
        request.price = Some(String::new());
        assert!(!request.has_price());
        request.price = Some("0".into());
        assert!(request.has_price());
    }
}

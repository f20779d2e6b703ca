use super::{
    CalculationRequest, VatService, COUNTRY_CODE_CHECK_PATH, COUNTRY_RATES_PATH, IP_CHECK_PATH,
    VAT_CALCULATOR_PATH, VAT_NUMBER_CHECK_PATH,
};
use crate::config::VatApiConfig;
use crate::error::{Result, VatApiError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

const API_KEY_HEADER: &str = "apikey";
const JSON_MIME: &str = "application/json";

/// Blocking client for the VAT API.
///
/// The key is sent as-is, even when empty: refusing unauthenticated calls is
/// the command layer's job, and the server rejects bad keys with a 401.
pub struct HttpVatService {
    base_url: String,
    api_key: String,
}

impl HttpVatService {
    pub fn new(base_url: impl Into<String>, config: &VatApiConfig) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn client(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(&self.api_key)?);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));

        Ok(Client::builder().default_headers(headers).build()?)
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let client = self.client()?;
        let url = format!("{}{}", self.base_url, path);
        debug!(path, ?query, "sending request");

        let response = client
            .get(&url)
            .query(query)
            .send()
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(transport_error)?;
        debug!(path, status, bytes = body.len(), "received response");

        if !(200..300).contains(&status) {
            return Err(status_error(status, &body));
        }
        parse_body(&body)
    }
}

impl VatService for HttpVatService {
    fn validate_vat_number(&self, vat_number: &str) -> Result<Value> {
        self.get(VAT_NUMBER_CHECK_PATH, &[("vatid", vat_number)])
    }

    fn country_rates(&self, country_code: &str) -> Result<Value> {
        self.get(COUNTRY_CODE_CHECK_PATH, &[("code", country_code)])
    }

    fn all_country_rates(&self) -> Result<Value> {
        self.get(COUNTRY_RATES_PATH, &[])
    }

    fn rates_by_ip(&self, ip_address: Option<&str>) -> Result<Value> {
        match ip_address.filter(|ip| !ip.is_empty()) {
            Some(ip) => self.get(IP_CHECK_PATH, &[("address", ip)]),
            None => self.get(IP_CHECK_PATH, &[]),
        }
    }

    fn calculate_vat(&self, request: &CalculationRequest) -> Result<Value> {
        self.get(VAT_CALCULATOR_PATH, &request.query())
    }
}

/// Maps a non-2xx response to its error kind. The fixed statuses win over the body.
pub fn status_error(status: u16, body: &str) -> VatApiError {
    match status {
        401 => VatApiError::Authentication,
        403 => VatApiError::Authorization,
        404 => VatApiError::NotFound,
        429 => VatApiError::RateLimit,
        _ => VatApiError::Api {
            status,
            message: error_message(body),
        },
    }
}

/// Body `message`, else body `error`, else the whole body.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => message_field(&value, "message")
            .or_else(|| message_field(&value, "error"))
            .unwrap_or_else(|| value.to_string()),
        Err(_) => body.to_string(),
    }
}

fn message_field(value: &Value, field: &str) -> Option<String> {
    match value.get(field)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Failures before a request leaves the process propagate unchanged; anything
/// that went out without a usable response is a connectivity problem.
fn transport_error(err: reqwest::Error) -> VatApiError {
    if err.is_builder() {
        return VatApiError::Http(err);
    }
    if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
        debug!(error = %err, "no response from service");
        return VatApiError::Connectivity;
    }
    VatApiError::Http(err)
}

fn parse_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| VatApiError::UnexpectedResponse(e.to_string()))
}

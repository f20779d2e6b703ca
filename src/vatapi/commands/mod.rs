use crate::config::VatApiConfig;
use crate::model::{CountryRatesResponse, IpLookup, VatCalculation, VatValidation};
use serde_json::Value;

pub mod calculate;
pub mod config;
pub mod helpers;
pub mod ip;
pub mod rates;
pub mod vat;

/// A confirmation line printed after a command succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// What a command produced, together with the inputs the display fallbacks need.
#[derive(Debug, Clone)]
pub enum Payload {
    Validation {
        vat_number: String,
        result: VatValidation,
    },
    CountryRates {
        country_code: String,
        result: CountryRatesResponse,
    },
    /// `None` when the response did not carry a list of countries.
    AllRates(Option<Vec<Value>>),
    IpLookup {
        ip_address: Option<String>,
        result: IpLookup,
    },
    Calculation {
        price: String,
        result: VatCalculation,
    },
    Config(VatApiConfig),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Response body exactly as received, for structured output.
    pub raw: Option<Value>,
    pub payload: Option<Payload>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_raw(mut self, raw: Value) -> Self {
        self.raw = Some(raw);
        self
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }
}

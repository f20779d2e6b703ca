//! Typed projections of the VAT API responses.
//!
//! The service returns loosely shaped JSON: most fields may be missing, null or
//! an empty string, and numbers sometimes arrive as strings. Every field is
//! therefore optional here, and a field whose value has an unexpected shape
//! reads as absent instead of failing the whole projection. The fallback
//! chains used for display live on the types themselves so their order is
//! explicit.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

pub const NOT_AVAILABLE: &str = "N/A";

/// A numeric value as sent by the service, either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Figure {
    Number(Number),
    Text(String),
}

impl Figure {
    fn is_blank(&self) -> bool {
        matches!(self, Figure::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Number(n) => f.write_str(&format_number(n)),
            Figure::Text(s) => f.write_str(s),
        }
    }
}

/// Formats a JSON number without a trailing `.0` for integral floats.
pub fn format_number(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}

/// Plain-text rendering of an arbitrary JSON value for table cells.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => format_number(n),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| display_value(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

/// False for null, `false`, zero and empty strings.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads an optional field, mapping a value of the wrong shape to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn present_figure(value: &Option<Figure>) -> Option<&Figure> {
    value.as_ref().filter(|f| !f.is_blank())
}

fn percent(figure: &Figure) -> String {
    format!("{}%", figure)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VatValidation {
    /// Any JSON value; validity follows its truthiness.
    #[serde(default)]
    pub valid: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company_addr: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country_code: Option<String>,
}

impl VatValidation {
    pub fn is_valid(&self) -> bool {
        self.valid.as_ref().is_some_and(is_truthy)
    }

    pub fn company(&self) -> Option<&str> {
        present(&self.company_name)
    }

    pub fn address(&self) -> Option<&str> {
        present(&self.company_addr)
    }

    pub fn country(&self) -> Option<&str> {
        present(&self.country_code)
    }
}

/// Reduced rates, normally a list but occasionally a single value.
///
/// List entries are kept as raw values; a `null` entry renders empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RateSet {
    Many(Vec<Value>),
    One(Figure),
}

impl fmt::Display for RateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateSet::Many(rates) => {
                let joined = rates
                    .iter()
                    .map(|r| display_value(Some(r)))
                    .collect::<Vec<_>>()
                    .join(", ");
                f.write_str(&joined)
            }
            RateSet::One(rate) => write!(f, "{}", rate),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryRate {
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub standard_rate: Option<Figure>,
    #[serde(default, deserialize_with = "lenient")]
    pub reduced_rates: Option<RateSet>,
    #[serde(default, deserialize_with = "lenient")]
    pub super_reduced_rate: Option<Figure>,
    #[serde(default, deserialize_with = "lenient")]
    pub parking_rate: Option<Figure>,
}

impl CountryRate {
    pub fn name_or(&self, fallback: &str) -> String {
        present(&self.name).unwrap_or(fallback).to_string()
    }

    pub fn standard_rate(&self) -> Option<&Figure> {
        present_figure(&self.standard_rate)
    }

    pub fn standard_rate_display(&self) -> String {
        self.standard_rate()
            .map(percent)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn reduced_rates_display(&self) -> Option<String> {
        match self.reduced_rates.as_ref()? {
            RateSet::One(rate) if rate.is_blank() => None,
            rates => Some(format!("{}%", rates)),
        }
    }

    pub fn super_reduced_display(&self) -> Option<String> {
        present_figure(&self.super_reduced_rate).map(percent)
    }

    pub fn parking_rate_display(&self) -> Option<String> {
        present_figure(&self.parking_rate).map(percent)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryRatesResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<CountryRate>,
}

/// The `country` field of an IP lookup: a rate record or a bare country name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IpCountry {
    Detail(CountryRate),
    Name(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IpLookup {
    #[serde(default, deserialize_with = "lenient")]
    pub ip: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<IpCountry>,
    #[serde(default, deserialize_with = "lenient")]
    pub country_code: Option<String>,
}

impl IpLookup {
    /// Response IP, else the requested IP, else `auto-detected`.
    pub fn ip_or(&self, requested: Option<&str>) -> String {
        present(&self.ip)
            .or(requested.filter(|ip| !ip.is_empty()))
            .unwrap_or("auto-detected")
            .to_string()
    }

    /// `country.name`, else a plain-string `country`, else `N/A`.
    pub fn country_name(&self) -> String {
        let name = match &self.country {
            Some(IpCountry::Detail(detail)) => present(&detail.name),
            Some(IpCountry::Name(name)) => Some(name.as_str()).filter(|n| !n.is_empty()),
            None => None,
        };
        name.unwrap_or(NOT_AVAILABLE).to_string()
    }

    pub fn country_code_display(&self) -> String {
        present(&self.country_code)
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    }

    pub fn standard_rate(&self) -> Option<&Figure> {
        match &self.country {
            Some(IpCountry::Detail(detail)) => detail.standard_rate(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VatCalculation {
    #[serde(default, deserialize_with = "lenient")]
    pub price_excl_vat: Option<Figure>,
    #[serde(default, deserialize_with = "lenient")]
    pub vat: Option<Figure>,
    #[serde(default, deserialize_with = "lenient")]
    pub price_incl_vat: Option<Figure>,
    #[serde(default, deserialize_with = "lenient")]
    pub vat_rate: Option<Figure>,
}

impl VatCalculation {
    pub fn price_excl_vat_or(&self, requested: &str) -> String {
        present_figure(&self.price_excl_vat)
            .map(|f| f.to_string())
            .unwrap_or_else(|| requested.to_string())
    }

    pub fn vat_display(&self) -> String {
        present_figure(&self.vat)
            .map(|f| f.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn price_incl_vat_display(&self) -> String {
        present_figure(&self.price_incl_vat)
            .map(|f| f.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn vat_rate_display(&self) -> String {
        present_figure(&self.vat_rate)
            .map(percent)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// Extracts the country records from an all-rates response.
///
/// Looks at `countries`, then `rates`; a response with neither yields an empty
/// list. Returns `None` when the chosen field is not a sequence.
pub fn rate_rows(raw: &Value) -> Option<Vec<Value>> {
    let field = ["countries", "rates"]
        .iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| is_truthy(value));

    match field {
        None => Some(Vec::new()),
        Some(Value::Array(rows)) => Some(rows.clone()),
        Some(_) => None,
    }
}

//! # Rendering Module
//!
//! Turns command results into lines of styled spans. Nothing here touches the
//! terminal: layout (widths, truncation, field order, fallbacks) is computed
//! on plain text and `print.rs` applies colors when writing.
//!
//! Three shapes are produced:
//! - **Tables** for list-shaped data (`rates all`)
//! - **Reports** of labeled lines for single records
//! - **JSON** passthrough of the raw response

use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vatapi::config::VatApiConfig;
use vatapi::model::{
    display_value, is_truthy, CountryRatesResponse, IpLookup, VatCalculation, VatValidation,
    NOT_AVAILABLE,
};

pub const MAX_COLUMN_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";
const LABEL_GAP: &str = "  ";
const RULE: char = '─';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Title,
    Accent,
    Good,
    Bad,
    Warn,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

pub type Line = Vec<Span>;

/// The text of a line without any styling.
#[cfg(test)]
pub fn line_text(line: &[Span]) -> String {
    line.iter().map(|span| span.text.as_str()).collect()
}

pub type CellFormat = fn(Option<&Value>) -> String;

/// One table column: the record field it reads, its header and an optional
/// formatter (defaults to [`display_value`]).
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub format: Option<CellFormat>,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: None,
        }
    }

    pub const fn formatted(key: &'static str, label: &'static str, format: CellFormat) -> Self {
        Self {
            key,
            label,
            format: Some(format),
        }
    }

    fn cell(&self, row: &Value) -> String {
        let value = row.get(self.key);
        match self.format {
            Some(format) => format(value),
            None => display_value(value),
        }
    }
}

fn format_reduced_rates(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(rates)) => rates
            .iter()
            .map(|rate| display_value(Some(rate)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) if is_truthy(other) => display_value(Some(other)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub const RATE_COLUMNS: [Column; 4] = [
    Column::new("code", "Code"),
    Column::new("name", "Country"),
    Column::new("standard_rate", "Standard %"),
    Column::formatted("reduced_rates", "Reduced %", format_reduced_rates),
];

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// Display width of each column, capped at [`MAX_COLUMN_WIDTH`].
pub fn column_widths(rows: &[Value], columns: &[Column]) -> Vec<usize> {
    columns
        .iter()
        .map(|column| {
            rows.iter()
                .map(|row| column.cell(row).width())
                .fold(column.label.width(), usize::max)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

pub fn render_table(rows: &[Value], columns: &[Column]) -> Vec<Line> {
    if rows.is_empty() {
        return vec![vec![Span::new("No results found.", Tone::Warn)]];
    }

    let widths = column_widths(rows, columns);

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad_to_width(column.label, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let rule: String = std::iter::repeat(RULE).take(header.width()).collect();

    let mut lines = vec![
        vec![Span::new(header, Tone::Heading)],
        vec![Span::new(rule, Tone::Muted)],
    ];

    for row in rows {
        let text = columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| {
                pad_to_width(&truncate_to_width(&column.cell(row), *width), *width)
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        lines.push(vec![Span::plain(text)]);
    }

    lines.push(Vec::new());
    lines.push(vec![Span::new(
        format!("{} result(s)", rows.len()),
        Tone::Muted,
    )]);
    lines
}

/// Labeled lines under a title. Labels are padded to a common width.
fn report(title: String, entries: Vec<(&str, Span)>) -> Vec<Line> {
    let label_width = entries
        .iter()
        .map(|(label, _)| label.width() + 1)
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        Vec::new(),
        vec![Span::new(title, Tone::Title)],
        Vec::new(),
    ];
    for (label, value) in entries {
        let label = pad_to_width(&format!("{}:", label), label_width);
        lines.push(vec![Span::plain(format!("{}{}", label, LABEL_GAP)), value]);
    }
    lines.push(Vec::new());
    lines
}

pub fn render_validation(vat_number: &str, result: &VatValidation) -> Vec<Line> {
    let mut entries = vec![
        ("VAT Number", Span::new(vat_number, Tone::Accent)),
        (
            "Valid",
            if result.is_valid() {
                Span::new("Yes", Tone::Good)
            } else {
                Span::new("No", Tone::Bad)
            },
        ),
    ];
    if let Some(company) = result.company() {
        entries.push(("Company", Span::new(company, Tone::Title)));
    }
    if let Some(address) = result.address() {
        entries.push(("Address", Span::plain(address)));
    }
    if let Some(country) = result.country() {
        entries.push(("Country", Span::plain(country)));
    }
    report("VAT Number Validation".to_string(), entries)
}

pub fn render_country_rates(country_code: &str, result: &CountryRatesResponse) -> Vec<Line> {
    let mut entries = Vec::new();
    if let Some(country) = &result.country {
        entries.push(("Country", Span::plain(country.name_or(country_code))));
        entries.push((
            "Standard Rate",
            Span::new(country.standard_rate_display(), Tone::Good),
        ));
        if let Some(reduced) = country.reduced_rates_display() {
            entries.push(("Reduced Rates", Span::plain(reduced)));
        }
        if let Some(super_reduced) = country.super_reduced_display() {
            entries.push(("Super Reduced", Span::plain(super_reduced)));
        }
        if let Some(parking) = country.parking_rate_display() {
            entries.push(("Parking Rate", Span::plain(parking)));
        }
    }
    report(
        format!("VAT Rates for {}", country_code.to_uppercase()),
        entries,
    )
}

pub fn render_ip_lookup(ip_address: Option<&str>, result: &IpLookup) -> Vec<Line> {
    let mut entries = vec![
        ("IP Address", Span::plain(result.ip_or(ip_address))),
        ("Country", Span::plain(result.country_name())),
        ("Country Code", Span::plain(result.country_code_display())),
    ];
    if let Some(rate) = result.standard_rate() {
        entries.push(("Standard Rate", Span::new(format!("{}%", rate), Tone::Good)));
    }
    report("VAT Rates by IP".to_string(), entries)
}

pub fn render_calculation(price: &str, result: &VatCalculation) -> Vec<Line> {
    let entries = vec![
        ("Price (ex VAT)", Span::plain(result.price_excl_vat_or(price))),
        ("VAT Amount", Span::new(result.vat_display(), Tone::Warn)),
        (
            "Price (inc VAT)",
            Span::new(result.price_incl_vat_display(), Tone::Good),
        ),
        ("VAT Rate", Span::plain(result.vat_rate_display())),
    ];
    report("VAT Calculation".to_string(), entries)
}

pub fn render_config(config: &VatApiConfig) -> Vec<Line> {
    let api_key = match config.masked_api_key() {
        Some(masked) => Span::new(masked, Tone::Good),
        None => Span::new("not set", Tone::Bad),
    };
    report(
        "VAT API CLI Configuration".to_string(),
        vec![("API Key", api_key)],
    )
}

/// Pretty JSON with two-space indentation.
pub fn render_json(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line_text(line)).collect()
    }

    fn parse<T: serde::de::DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_table_prints_notice_only() {
        let lines = render_table(&[], &RATE_COLUMNS);
        assert_eq!(texts(&lines), vec!["No results found."]);
    }

    #[test]
    fn table_has_one_row_per_record_and_a_count() {
        let rows = vec![
            json!({"code": "DE", "name": "Germany", "standard_rate": 19, "reduced_rates": [7]}),
            json!({"code": "FR", "name": "France", "standard_rate": 20, "reduced_rates": [5.5, 10]}),
            json!({"code": "DK", "name": "Denmark", "standard_rate": 25}),
        ];
        let lines = texts(&render_table(&rows, &RATE_COLUMNS));

        // header, rule, 3 rows, blank, count
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Code  Country  Standard %  Reduced %");
        assert_eq!(lines[1], "─".repeat(lines[0].width()));
        assert_eq!(lines[2], "DE    Germany  19          7        ");
        assert_eq!(lines[3], "FR    France   20          5.5, 10  ");
        assert_eq!(lines[4], "DK    Denmark  25          N/A      ");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "3 result(s)");
    }

    #[test]
    fn column_width_is_capped() {
        let long_name = "X".repeat(75);
        let rows = vec![json!({"code": "XX", "name": long_name})];
        let widths = column_widths(&rows, &RATE_COLUMNS);
        assert_eq!(widths, vec![4, 40, 10, 9]);

        let lines = texts(&render_table(&rows, &RATE_COLUMNS));
        assert!(lines[2].contains(&"X".repeat(40)));
        assert!(!lines[2].contains(&"X".repeat(41)));
    }

    #[test]
    fn reduced_rates_formatter() {
        assert_eq!(format_reduced_rates(Some(&json!([5, 7]))), "5, 7");
        assert_eq!(format_reduced_rates(Some(&json!("9"))), "9");
        assert_eq!(format_reduced_rates(Some(&Value::Null)), "N/A");
        assert_eq!(format_reduced_rates(None), "N/A");
    }

    #[test]
    fn validation_report_omits_absent_fields() {
        let result: VatValidation = parse(json!({"valid": false}));
        let lines = texts(&render_validation("DE999", &result));
        assert_eq!(
            lines,
            vec![
                "",
                "VAT Number Validation",
                "",
                "VAT Number:  DE999",
                "Valid:       No",
                "",
            ]
        );
    }

    #[test]
    fn validation_report_field_order() {
        let result: VatValidation = parse(json!({
            "valid": true,
            "company_name": "ACME LTD",
            "company_addr": "1 High St",
            "country_code": "GB"
        }));
        let lines = texts(&render_validation("GB123456789", &result));
        let labels: Vec<&str> = lines[3..8]
            .iter()
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(labels, vec!["VAT Number", "Valid", "Company", "Address", "Country"]);
        assert!(lines[4].ends_with("Yes"));
    }

    #[test]
    fn country_report_for_minimal_record() {
        let result: CountryRatesResponse = parse(json!({
            "country": {"name": "United Kingdom", "standard_rate": 20}
        }));
        let lines = texts(&render_country_rates("gb", &result));
        assert_eq!(lines[1], "VAT Rates for GB");
        assert!(lines.iter().any(|l| l.contains("United Kingdom")));
        assert!(lines.iter().any(|l| l.contains("20%")));
        assert!(!lines.iter().any(|l| l.contains("Reduced")));
        assert!(!lines.iter().any(|l| l.contains("Super")));
        assert!(!lines.iter().any(|l| l.contains("Parking")));
    }

    #[test]
    fn country_report_full_record() {
        let result: CountryRatesResponse = parse(json!({
            "country": {
                "standard_rate": 21,
                "reduced_rates": [9, 10],
                "super_reduced_rate": 4,
                "parking_rate": 13.5
            }
        }));
        let lines = texts(&render_country_rates("ie", &result));
        assert_eq!(lines[3], "Country:        ie");
        assert_eq!(lines[4], "Standard Rate:  21%");
        assert_eq!(lines[5], "Reduced Rates:  9, 10%");
        assert_eq!(lines[6], "Super Reduced:  4%");
        assert_eq!(lines[7], "Parking Rate:   13.5%");
    }

    #[test]
    fn country_report_without_record_prints_title_only() {
        let lines = texts(&render_country_rates("xx", &CountryRatesResponse::default()));
        assert_eq!(lines, vec!["", "VAT Rates for XX", "", ""]);
    }

    #[test]
    fn ip_report_fallbacks() {
        let lines = texts(&render_ip_lookup(None, &IpLookup::default()));
        assert_eq!(lines[3], "IP Address:    auto-detected");
        assert_eq!(lines[4], "Country:       N/A");
        assert_eq!(lines[5], "Country Code:  N/A");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn ip_report_with_rate() {
        let result: IpLookup = parse(json!({
            "country": {"name": "Germany", "standard_rate": 19},
            "country_code": "DE"
        }));
        let lines = texts(&render_ip_lookup(Some("5.6.7.8"), &result));
        assert_eq!(lines[3], "IP Address:     5.6.7.8");
        assert_eq!(lines[6], "Standard Rate:  19%");
    }

    #[test]
    fn calculation_report_fallbacks() {
        let lines = texts(&render_calculation("100", &VatCalculation::default()));
        assert_eq!(
            &lines[3..7],
            &[
                "Price (ex VAT):   100",
                "VAT Amount:       N/A",
                "Price (inc VAT):  N/A",
                "VAT Rate:         N/A",
            ]
        );
    }

    #[test]
    fn config_report_masks_key() {
        let config = VatApiConfig {
            api_key: "abcdefgh1234".into(),
        };
        let lines = texts(&render_config(&config));
        assert_eq!(lines[3], "API Key:  ********1234");

        let lines = texts(&render_config(&VatApiConfig::default()));
        assert_eq!(lines[3], "API Key:  not set");
    }

    #[test]
    fn json_uses_two_space_indent() {
        assert_eq!(
            render_json(&json!({"valid": true})).unwrap(),
            "{\n  \"valid\": true\n}"
        );
    }
}

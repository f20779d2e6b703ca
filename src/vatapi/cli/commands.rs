//! # CLI Layer
//!
//! The CLI is the only place that knows about terminal I/O. It:
//!
//! 1. Parses arguments via clap
//! 2. Builds the `AppContext` (store, service, API) from the persisted profile
//! 3. Calls the matching `VatApi` method, wrapped in the progress indicator
//!    when it may reach the network
//! 4. Prints the result as JSON, a report or a table
//!
//! Errors are returned to `main`, which prints them and sets the exit code.

use super::logging;
use super::print::{print_lines, print_messages};
use super::progress::with_progress;
use super::render::{
    render_calculation, render_config, render_country_rates, render_ip_lookup, render_json,
    render_table, render_validation, RATE_COLUMNS,
};
use super::setup::{
    CalculateCommands, Cli, Commands, ConfigCommands, IpCommands, RatesCommands, VatCommands,
};
use clap::{CommandFactory, Parser};
use vatapi::api::{CmdResult, Payload, VatApi};
use vatapi::config;
use vatapi::error::Result;
use vatapi::service::http::HttpVatService;
use vatapi::service::CalculationRequest;
use vatapi::store::fs::FileConfigStore;
use vatapi::store::ConfigStore;

struct AppContext {
    api: VatApi<FileConfigStore, HttpVatService>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let rewrites_profile = matches!(
        command,
        Commands::Config {
            command: ConfigCommands::Set { .. } | ConfigCommands::Clear
        }
    );
    let mut ctx = init_context(rewrites_profile)?;

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Set { api_key } => handle_config_set(&mut ctx, api_key),
            ConfigCommands::Show => handle_config_show(&mut ctx),
            ConfigCommands::Clear => handle_config_clear(&mut ctx),
        },
        Commands::Vat { command } => match command {
            VatCommands::Validate { vat_number, json } => {
                handle_validate(&ctx, &vat_number, json)
            }
        },
        Commands::Rates { command } => match command {
            RatesCommands::Country { country_code, json } => {
                handle_country_rates(&ctx, &country_code, json)
            }
            RatesCommands::All { json } => handle_all_rates(&ctx, json),
        },
        Commands::Ip { command } => match command {
            IpCommands::Lookup { ip_address, json } => {
                handle_ip_lookup(&ctx, ip_address.as_deref(), json)
            }
        },
        Commands::Calculate { command } => match command {
            CalculateCommands::Vat {
                country,
                price,
                rate,
                json,
            } => {
                let request = CalculationRequest {
                    country_code: country,
                    price,
                    vat_rate: rate,
                };
                handle_calculate(&ctx, &request, json)
            }
        },
    }
}

/// Loads the profile once and hands its snapshot to the service client.
/// Commands that rewrite the profile tolerate one that does not parse.
fn init_context(rewrites_profile: bool) -> Result<AppContext> {
    let dir = config::config_dir()?;
    let store = if rewrites_profile {
        FileConfigStore::open_for_write(dir)?
    } else {
        FileConfigStore::open(dir)?
    };
    let service = HttpVatService::new(config::base_url(), &store.all());

    Ok(AppContext {
        api: VatApi::new(store, service),
    })
}

fn handle_config_set(ctx: &mut AppContext, api_key: Option<String>) -> Result<()> {
    let result = ctx.api.set_api_key(api_key)?;
    emit(&result, false)
}

fn handle_config_show(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.show_config()?;
    emit(&result, false)
}

fn handle_config_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_config()?;
    emit(&result, false)
}

fn handle_validate(ctx: &AppContext, vat_number: &str, json: bool) -> Result<()> {
    let result = with_progress(&format!("Validating VAT number {}...", vat_number), || {
        ctx.api.validate_vat_number(vat_number)
    })?;
    emit(&result, json)
}

fn handle_country_rates(ctx: &AppContext, country_code: &str, json: bool) -> Result<()> {
    let result = with_progress(&format!("Fetching rates for {}...", country_code), || {
        ctx.api.country_rates(country_code)
    })?;
    emit(&result, json)
}

fn handle_all_rates(ctx: &AppContext, json: bool) -> Result<()> {
    let result = with_progress("Fetching all country rates...", || {
        ctx.api.all_country_rates()
    })?;
    emit(&result, json)
}

fn handle_ip_lookup(ctx: &AppContext, ip_address: Option<&str>, json: bool) -> Result<()> {
    let result = with_progress("Looking up VAT rates by IP...", || {
        ctx.api.rates_by_ip(ip_address)
    })?;
    emit(&result, json)
}

fn handle_calculate(ctx: &AppContext, request: &CalculationRequest, json: bool) -> Result<()> {
    let result = with_progress("Calculating VAT...", || ctx.api.calculate_vat(request))?;
    emit(&result, json)
}

/// Writes a command result: raw JSON when asked for (or when the response has
/// no displayable shape), otherwise the rendered report or table.
fn emit(result: &CmdResult, json: bool) -> Result<()> {
    if json {
        if let Some(raw) = &result.raw {
            println!("{}", render_json(raw)?);
            return Ok(());
        }
    }

    match &result.payload {
        Some(Payload::Validation { vat_number, result }) => {
            print_lines(&render_validation(vat_number, result))
        }
        Some(Payload::CountryRates {
            country_code,
            result,
        }) => print_lines(&render_country_rates(country_code, result)),
        Some(Payload::AllRates(Some(rows))) => print_lines(&render_table(rows, &RATE_COLUMNS)),
        Some(Payload::AllRates(None)) => {
            if let Some(raw) = &result.raw {
                println!("{}", render_json(raw)?);
            }
        }
        Some(Payload::IpLookup { ip_address, result }) => {
            print_lines(&render_ip_lookup(ip_address.as_deref(), result))
        }
        Some(Payload::Calculation { price, result }) => {
            print_lines(&render_calculation(price, result))
        }
        Some(Payload::Config(config)) => print_lines(&render_config(config)),
        None => {}
    }

    print_messages(&result.messages);
    Ok(())
}

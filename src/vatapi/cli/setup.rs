use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vatapi", bin_name = "vatapi", version)]
#[command(about = "VAT API CLI - European VAT validation from your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// VAT number operations
    Vat {
        #[command(subcommand)]
        command: VatCommands,
    },

    /// VAT rate operations
    Rates {
        #[command(subcommand)]
        command: RatesCommands,
    },

    /// IP-based VAT lookup
    Ip {
        #[command(subcommand)]
        command: IpCommands,
    },

    /// Calculate VAT amounts
    Calculate {
        #[command(subcommand)]
        command: CalculateCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set configuration values
    Set {
        /// VAT API key
        #[arg(long = "api-key", value_name = "KEY")]
        api_key: Option<String>,
    },

    /// Show current configuration
    Show,

    /// Remove all stored configuration
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum VatCommands {
    /// Validate a VAT number (e.g. GB123456789)
    Validate {
        #[arg(value_name = "VAT_NUMBER")]
        vat_number: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RatesCommands {
    /// Get VAT rates for a country (e.g. GB, DE, FR)
    Country {
        #[arg(value_name = "COUNTRY_CODE")]
        country_code: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get VAT rates for all EU countries
    All {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum IpCommands {
    /// Get VAT rates based on IP address (defaults to your IP)
    Lookup {
        #[arg(value_name = "IP_ADDRESS")]
        ip_address: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CalculateCommands {
    /// Calculate VAT for a price
    Vat {
        /// Country code (e.g. GB, DE)
        #[arg(long = "country", value_name = "CODE")]
        country: Option<String>,

        /// Price amount
        #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
        price: Option<String>,

        /// VAT rate (overrides country default)
        #[arg(long, value_name = "RATE")]
        rate: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

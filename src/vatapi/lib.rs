//! # vatapi Architecture
//!
//! vatapi is a command-line client for the VAT API (VAT number validation,
//! country rates, IP-based rates and VAT calculation). The library holds every
//! piece of behavior; the binary only parses arguments and draws output.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables/reports/JSON            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store and service        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Configuration precondition, input checks                 │
//! │  - Projects raw responses into typed models                 │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                         │
//!                    ▼                         ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Service Layer (service/)    │ │  Store Layer (store/)      │
//! │  - VatService trait          │ │  - ConfigStore trait       │
//! │  - HTTP client, error        │ │  - FileConfigStore,        │
//! │    normalization             │ │    InMemoryConfigStore     │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never writes to
//! stdout/stderr or calls `std::process::exit`. Errors travel as
//! [`error::VatApiError`] up to `main`, which prints one failure line and
//! exits with status 1.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each command
//! - [`service`]: Remote VAT API client
//! - [`store`]: Configuration persistence
//! - [`model`]: Typed response projections and display fallbacks
//! - [`config`]: Configuration profile and environment overrides
//! - [`error`]: Error taxonomy

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

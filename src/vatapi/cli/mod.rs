mod commands;
mod logging;
pub mod print;
mod progress;
pub mod render;
mod setup;

pub use commands::run;

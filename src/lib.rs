//! # layoutsmith
//!
//! Command-line front end for the [`modscale`] and [`recipes`] crates: a TOML
//! project file, logging setup and the subcommands behind the
//! `layoutsmith` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod log_init;

pub use config::ProjectConfig;
pub use error::{AppError, Result};
pub use log_init::init_logger;

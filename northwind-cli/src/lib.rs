#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod cli;
pub use cli::{Cli, Command, Table};

pub mod commands;

mod config;
pub use config::AppConfig;

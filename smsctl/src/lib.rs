#![warn(missing_docs)]
//! `smsctl` wires the SQLite registry and the location action validator into
//! a command line tool.
//!
//! Registry records (configurations, devices, their measured quantities and
//! mount actions) are created directly. Location actions are only written
//! after the validator has accepted them; rejected requests are reported as
//! JSON:API error documents.

mod cli;
pub use cli::{
    Cli, Commands, ConfigurationCommand, DeviceCommand, KindArg, LocationCommand, MountArgs,
    MountCommand, PropertyCommand,
};

mod commands;
pub use commands::{Outcome, execute};

mod config;
pub use config::AppConfig;

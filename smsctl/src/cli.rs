//! Command-line interface definition and parsing.
//!
//! This module defines the command-line arguments accepted by the application
//! and provides parsing functionality using the clap crate.

use clap::{Args, Parser, Subcommand, ValueEnum};
use sms_core::models::LocationKind;
use sms_sqlite::types::{ConfigurationId, DeviceId, LocationActionId};
use std::path::PathBuf;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Command-line arguments for the registry tool.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// The operation to perform.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// This method parses the command-line arguments according to the defined
    /// structure, including validation and help text generation.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// The top-level commands, one per registry resource.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configurations
    #[command(subcommand)]
    Configuration(ConfigurationCommand),

    /// Manage devices
    #[command(subcommand)]
    Device(DeviceCommand),

    /// Manage the measured quantities of devices
    #[command(subcommand)]
    Property(PropertyCommand),

    /// Manage device mount actions
    #[command(subcommand)]
    Mount(MountCommand),

    /// Validate and manage location actions
    #[command(subcommand)]
    Location(LocationCommand),
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigurationCommand {
    /// Register a new configuration
    Create {
        /// A human readable label
        #[arg(long)]
        label: String,
    },
}

/// Device subcommands
#[derive(Subcommand, Debug)]
pub enum DeviceCommand {
    /// Register a new device
    Create {
        /// The short name of the device
        #[arg(long)]
        short_name: String,
    },
    /// Archive a device, so it can no longer be referenced by new location actions
    Archive {
        /// The device id
        id: DeviceId,
    },
    /// Restore an archived device
    Unarchive {
        /// The device id
        id: DeviceId,
    },
}

/// Device property subcommands
#[derive(Subcommand, Debug)]
pub enum PropertyCommand {
    /// Register a measured quantity for a device
    Create {
        /// The device measuring the quantity
        #[arg(long)]
        device: DeviceId,
        /// The name of the quantity
        #[arg(long)]
        name: String,
        /// The unit the quantity is measured in
        #[arg(long)]
        unit: Option<String>,
    },
}

/// Mount action subcommands
#[derive(Subcommand, Debug)]
pub enum MountCommand {
    /// Record that a device was mounted on a configuration
    Create(MountArgs),
}

/// The fields of a new mount action
#[derive(Args, Debug)]
pub struct MountArgs {
    /// The configuration the device is mounted on
    #[arg(long)]
    pub configuration: ConfigurationId,
    /// The mounted device
    #[arg(long)]
    pub device: DeviceId,
    /// When the device was mounted (RFC 3339)
    #[arg(long, value_parser = parse_timestamp)]
    pub begin: OffsetDateTime,
    /// When the device was unmounted (RFC 3339), if it has been
    #[arg(long, value_parser = parse_timestamp)]
    pub end: Option<OffsetDateTime>,
    /// Offset along the x axis, in metres
    #[arg(long, default_value_t = 0.0)]
    pub offset_x: f64,
    /// Offset along the y axis, in metres
    #[arg(long, default_value_t = 0.0)]
    pub offset_y: f64,
    /// Offset along the z axis, in metres
    #[arg(long, default_value_t = 0.0)]
    pub offset_z: f64,
}

/// Location action subcommands.
///
/// Payloads are JSON:API resource objects (or documents wrapping one in
/// `data`), read from a file or from stdin when the path is `-`.
#[derive(Subcommand, Debug)]
pub enum LocationCommand {
    /// Validate a new location action and store it
    Create {
        /// The kind of location action
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Path to the JSON payload
        payload: PathBuf,
    },
    /// Validate changes to a location action and store them
    Update {
        /// The kind of location action
        #[arg(long, value_enum)]
        kind: KindArg,
        /// The location action id
        #[arg(long)]
        id: LocationActionId,
        /// Path to the JSON payload
        payload: PathBuf,
    },
    /// Validate a payload without storing anything
    Check {
        /// The kind of location action
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Check the payload as an update of this location action
        #[arg(long)]
        id: Option<LocationActionId>,
        /// Path to the JSON payload
        payload: PathBuf,
    },
    /// Delete a location action
    Delete {
        /// The kind of location action
        #[arg(long, value_enum)]
        kind: KindArg,
        /// The location action id
        id: LocationActionId,
    },
}

/// The kind of location action, as given on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    /// Fixed coordinates
    Static,
    /// Coordinates measured by device properties
    Dynamic,
}

impl From<KindArg> for LocationKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Static => LocationKind::Static,
            KindArg::Dynamic => LocationKind::Dynamic,
        }
    }
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(value, &Rfc3339)
}
